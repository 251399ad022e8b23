//! Mapping from a member record to the cells of one table row.

use std::fmt;

use chrono::NaiveDate;

use crate::member::{MemberId, MemberRecord, PersonRef};

/// Shown in place of any absent value.
pub const PLACEHOLDER: &str = "-";

/// Number of columns in the member table.
pub const COLUMN_COUNT: usize = 12;

/// Display format for dates in the table.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Member table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastName,
    Gender,
    Father,
    Mother,
    PaternalName,
    DateOfBirth,
    Yichus,
    BarMitzvahParasha,
    LastAliyaDate,
    Spouse,
    NumOfChildren,
}

impl Column {
    /// All columns in header order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::FirstName,
        Column::LastName,
        Column::Gender,
        Column::Father,
        Column::Mother,
        Column::PaternalName,
        Column::DateOfBirth,
        Column::Yichus,
        Column::BarMitzvahParasha,
        Column::LastAliyaDate,
        Column::Spouse,
        Column::NumOfChildren,
    ];

    /// Localized header title.
    pub fn title(self) -> &'static str {
        match self {
            Column::FirstName => "שם פרטי",
            Column::LastName => "שם משפחה",
            Column::Gender => "מין",
            Column::Father => "שם אב",
            Column::Mother => "שם אם",
            Column::PaternalName => "שם עליה לתורה",
            Column::DateOfBirth => "תאריך לידה",
            Column::Yichus => "יחוס",
            Column::BarMitzvahParasha => "פרשת בר מצווה",
            Column::LastAliyaDate => "תאריך עלייה אחרונה",
            Column::Spouse => "שם אישה/בעל",
            Column::NumOfChildren => "מספר ילדים",
        }
    }

    /// The relation shown in this column, if it is a relational column.
    pub fn relation(self) -> Option<Relation> {
        match self {
            Column::Father => Some(Relation::Father),
            Column::Mother => Some(Relation::Mother),
            Column::Spouse => Some(Relation::Spouse),
            _ => None,
        }
    }
}

/// Which family link a relational cell points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Father,
    Mother,
    Spouse,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Relation::Father => "father",
            Relation::Mother => "mother",
            Relation::Spouse => "spouse",
        };
        f.write_str(label)
    }
}

/// A click on a relational cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonClick {
    pub relation: Relation,
    pub person_id: MemberId,
}

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Clickable name of a related person
    Link {
        relation: Relation,
        person: PersonRef,
    },
    Placeholder,
}

impl Cell {
    /// Text the cell displays.
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Link { person, .. } => &person.name,
            Cell::Placeholder => PLACEHOLDER,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Cell::Placeholder)
    }

    /// Click payload for link cells.
    pub fn click(&self) -> Option<PersonClick> {
        match self {
            Cell::Link { relation, person } => Some(PersonClick {
                relation: *relation,
                person_id: person.id,
            }),
            _ => None,
        }
    }
}

/// Map a record to its row cells, in the same order as [`Column::ALL`].
pub fn member_cells(member: &MemberRecord) -> [Cell; COLUMN_COUNT] {
    Column::ALL.map(|column| cell_for(member, column))
}

/// The cell a record shows in one column.
pub fn cell_for(member: &MemberRecord, column: Column) -> Cell {
    match column {
        Column::FirstName => text_cell(member.first_name.as_deref()),
        Column::LastName => text_cell(member.last_name.as_deref()),
        Column::Gender => text_cell(member.gender.as_deref()),
        Column::Father => link_cell(Relation::Father, member.father.as_ref()),
        Column::Mother => link_cell(Relation::Mother, member.mother.as_ref()),
        Column::PaternalName => text_cell(member.paternal_name.as_deref()),
        Column::DateOfBirth => date_cell(member.date_of_birth),
        Column::Yichus => text_cell(member.yichus.as_deref()),
        Column::BarMitzvahParasha => text_cell(member.bar_mitzvah_parasha.as_deref()),
        Column::LastAliyaDate => date_cell(member.last_aliya_date),
        Column::Spouse => link_cell(Relation::Spouse, member.spouse.as_ref()),
        Column::NumOfChildren => member
            .num_of_children
            .map(|count| Cell::Text(count.to_string()))
            .unwrap_or(Cell::Placeholder),
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Cell::Text(text.to_string()),
        _ => Cell::Placeholder,
    }
}

fn date_cell(value: Option<NaiveDate>) -> Cell {
    value
        .map(|date| Cell::Text(date.format(DATE_FORMAT).to_string()))
        .unwrap_or(Cell::Placeholder)
}

fn link_cell(relation: Relation, person: Option<&PersonRef>) -> Cell {
    match person {
        // A link with no visible name could never be clicked
        Some(person) if !person.name.trim().is_empty() => Cell::Link {
            relation,
            person: person.clone(),
        },
        _ => Cell::Placeholder,
    }
}
