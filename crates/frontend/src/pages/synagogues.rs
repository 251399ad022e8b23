//! Synagogue list ("find a minyan") page component.

use roster_core::{Liveness, SynagogueSummary};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpClient;
use crate::app::Route;
use crate::components::Loading;

/// Synagogue list page.
#[function_component(SynagoguesPage)]
pub fn synagogues_page() -> Html {
    let synagogues = use_state(Vec::<SynagogueSummary>::new);
    let loading = use_state(|| true);
    let liveness = use_memo((), |_| Liveness::new());

    {
        let synagogues = synagogues.clone();
        let loading = loading.clone();
        let liveness = liveness.clone();

        use_effect_with((), move |_| {
            let ticket = liveness.mount();

            wasm_bindgen_futures::spawn_local(async move {
                let result = HttpClient::from_build_config().fetch_synagogues().await;
                if !ticket.is_live() {
                    return;
                }
                match result {
                    Ok(data) => synagogues.set(data),
                    Err(e) => log::error!("Failed to fetch synagogues: {e}"),
                }
                loading.set(false);
            });

            move || liveness.unmount()
        });
    }

    html! {
        <div>
            <h1>{"מצא מניין"}</h1>

            if *loading {
                <Loading />
            } else if synagogues.is_empty() {
                <div class="card">
                    <p>{"לא נמצאו בתי כנסת"}</p>
                </div>
            } else {
                <ul class="synagogue-list">
                    { for synagogues.iter().map(|synagogue| html! {
                        <li key={synagogue.id.to_string()} class="card">
                            <Link<Route> to={Route::SynagogueMembers { id: synagogue.id }}>
                                { &synagogue.name }
                            </Link<Route>>
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}
