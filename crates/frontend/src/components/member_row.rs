//! Member table row component.

use roster_core::{Cell, MemberRecord, PersonClick, member_cells};
use yew::prelude::*;

/// Properties for MemberRow component.
#[derive(Properties, PartialEq)]
pub struct MemberRowProps {
    pub member: MemberRecord,
    /// Fired when a father/mother/spouse name is clicked
    pub on_person_click: Callback<PersonClick>,
}

/// One table row per member, cells in header order.
#[function_component(MemberRow)]
pub fn member_row(props: &MemberRowProps) -> Html {
    let cells = member_cells(&props.member);

    html! {
        <tr class="member-row">
            { for cells.iter().map(|cell| render_cell(cell, &props.on_person_click)) }
        </tr>
    }
}

fn render_cell(cell: &Cell, on_person_click: &Callback<PersonClick>) -> Html {
    if let Some(click) = cell.click() {
        let onclick = on_person_click.reform(move |_: MouseEvent| click);
        return html! {
            <td>
                <a class="person-link" role="button" onclick={onclick}>{ cell.text() }</a>
            </td>
        };
    }

    html! {
        <td class={classes!(cell.is_placeholder().then_some("placeholder"))}>
            { cell.text() }
        </td>
    }
}
