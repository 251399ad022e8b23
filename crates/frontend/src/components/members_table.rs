//! Member table component.
//!
//! Renders purely from the [`LoadState`] it is given; fetching is the
//! owning page's job.

use roster_core::{Column, LoadState, LoadStatus, PersonClick};
use yew::prelude::*;

use crate::components::{Loading, MemberRow};

/// Properties for MembersTable component.
#[derive(Properties, PartialEq)]
pub struct MembersTableProps {
    pub state: LoadState,
    pub on_person_click: Callback<PersonClick>,
}

/// Member table: spinner while loading, header plus one row per member after.
#[function_component(MembersTable)]
pub fn members_table(props: &MembersTableProps) -> Html {
    let LoadState::Loaded { members, status } = &props.state else {
        return html! { <Loading /> };
    };

    html! {
        <div class="card">
            if let LoadStatus::Failed(reason) = status {
                <p class="load-status failed" title={reason.clone()}>
                    {"לא ניתן היה לטעון את רשימת המתפללים"}
                </p>
            }
            <table class="members-table">
                <thead>
                    <tr>
                        { for Column::ALL.iter().map(|column| html! { <th>{ column.title() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for members.iter().map(|member| html! {
                        <MemberRow
                            key={member.id.to_string()}
                            member={member.clone()}
                            on_person_click={props.on_person_click.clone()}
                        />
                    })}
                </tbody>
            </table>
        </div>
    }
}
