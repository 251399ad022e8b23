//! Custom hooks.

use roster_core::{LoadState, Liveness, MemberSource, SynagogueId, load_members};
use yew::prelude::*;

/// Member list for the current mount.
///
/// One fetch is started per mount (and per change of `synagogue_id`);
/// re-renders in between reuse the running request. `source` is only used
/// by the render that starts the fetch.
#[hook]
pub fn use_member_list<S>(source: S, synagogue_id: Option<SynagogueId>) -> LoadState
where
    S: MemberSource + 'static,
{
    let state = use_state(LoadState::default);
    let liveness = use_memo((), |_| Liveness::new());

    {
        let state = state.clone();
        let liveness = liveness.clone();

        use_effect_with(synagogue_id, move |synagogue_id| {
            let synagogue_id = *synagogue_id;
            let ticket = liveness.mount();

            if !state.is_loading() {
                state.set(LoadState::Loading);
            }

            wasm_bindgen_futures::spawn_local(async move {
                if let Some(loaded) = load_members(&source, synagogue_id, &ticket).await {
                    state.set(loaded);
                }
            });

            move || liveness.unmount()
        });
    }

    (*state).clone()
}
