//! Member list page component.

use roster_core::{PersonClick, SynagogueId};
use yew::prelude::*;

use crate::api::HttpClient;
use crate::components::MembersTable;
use crate::hooks::use_member_list;

/// Properties for MembersPage.
#[derive(Properties, PartialEq, Default)]
pub struct MembersPageProps {
    /// Scope the list to one synagogue; unscoped when absent
    #[prop_or_default]
    pub synagogue_id: Option<SynagogueId>,
    /// Overrides the default click handling on father/mother/spouse names
    #[prop_or_default]
    pub on_person_click: Option<Callback<PersonClick>>,
}

/// Member list page: fetches once per mount, then hands the state to the table.
#[function_component(MembersPage)]
pub fn members_page(props: &MembersPageProps) -> Html {
    let state = use_member_list(HttpClient::from_build_config(), props.synagogue_id);

    let on_person_click = props.on_person_click.clone().unwrap_or_else(|| {
        Callback::from(|click: PersonClick| {
            log::info!("click on {} {}", click.relation, click.person_id);
        })
    });

    let title = match props.synagogue_id {
        Some(id) => format!("מתפללי בית הכנסת #{id}"),
        None => "מתפללים".to_string(),
    };

    html! {
        <div>
            <h1>{ title }</h1>
            <MembersTable state={state} on_person_click={on_person_click} />
        </div>
    }
}
