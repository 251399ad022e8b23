//! Loading spinner component.

use yew::prelude::*;

/// Indeterminate progress indicator.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading" role="progressbar" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
