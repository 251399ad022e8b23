//! Top navigation bar.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{NavSection, Route};

/// Properties for NavBar component.
#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub logged_in: bool,
    pub on_logout: Callback<()>,
}

/// Navigation bar. The highlighted entry follows the current route.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let section = use_route::<Route>().and_then(|route| route.section());

    let item = |target: Route, entry: NavSection, label: &'static str| {
        let active = section == Some(entry);
        html! {
            <li>
                <Link<Route> to={target} classes={classes!("nav-item", active.then_some("active"))}>
                    { label }
                </Link<Route>>
            </li>
        }
    };

    html! {
        <nav class="nav-bar">
            <ul class="nav-links">
                { item(Route::Manage, NavSection::Manage, "נהל בית כנסת") }
                { item(Route::FindPrayer, NavSection::FindPrayer, "מצא מניין") }
                { item(Route::About, NavSection::About, "אודות") }
            </ul>
            if props.logged_in {
                <button class="btn btn-secondary" onclick={props.on_logout.reform(|_: MouseEvent| ())}>
                    {"התנתק"}
                </button>
            }
        </nav>
    }
}
