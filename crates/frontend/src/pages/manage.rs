//! Manage landing page, shown once logged in.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(ManagePage)]
pub fn manage_page() -> Html {
    html! {
        <div>
            <h1>{"ניהול בית הכנסת"}</h1>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"פעולות"}</h2>
                </div>
                <div class="actions">
                    <Link<Route> to={Route::About} classes="btn btn-primary">
                        {"רשימת מתפללים"}
                    </Link<Route>>
                    <Link<Route> to={Route::FindPrayer} classes="btn btn-secondary">
                        {"בתי כנסת"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
