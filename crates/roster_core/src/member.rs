//! Roster member records as served by the members endpoint.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a person, unique within one synagogue.
pub type MemberId = u64;

/// Identifier of a synagogue.
pub type SynagogueId = u64;

/// Snapshot link to another person: id plus display name.
///
/// These are denormalized by the backend and never re-resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: MemberId,
    pub name: String,
}

impl PersonRef {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One person in a synagogue roster.
///
/// Every field except `id` may be missing, `null` or unusable on the wire;
/// an unusable value is dropped (and logged) instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Stable identifier, unique per fetch result
    pub id: MemberId,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Name used when called up to the Torah ("son of ...")
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub paternal_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Lineage designation (Kohen, Levi, Israel)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub yichus: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bar_mitzvah_parasha: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_aliya_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub num_of_children: Option<u32>,
    #[serde(
        rename = "father_json",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub father: Option<PersonRef>,
    #[serde(
        rename = "mother_json",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub mother: Option<PersonRef>,
    #[serde(
        rename = "wife_json",
        alias = "spouse_json",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub spouse: Option<PersonRef>,
}

impl MemberRecord {
    /// Create a record with only an identifier; every other field is absent.
    pub fn new(id: MemberId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Full name for log lines and link targets, falling back to the id.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            format!("#{}", self.id)
        } else {
            parts.join(" ")
        }
    }
}

/// Wire value of an optional field: either the expected type or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Usable(T),
    Unusable(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Usable(value)) => Ok(Some(value)),
        Some(Lenient::Unusable(_)) => {
            log::warn!(
                "Ignoring unusable {} value in member record",
                std::any::type_name::<T>()
            );
            Ok(None)
        }
        None => Ok(None),
    }
}

/// One entry of the synagogue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynagogueSummary {
    pub id: SynagogueId,
    pub name: String,
}
