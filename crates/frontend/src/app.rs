//! Main application component with routing.

use roster_core::{SessionToken, SynagogueId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpClient;
use crate::components::NavBar;
use crate::pages::{LoginPage, ManagePage, MembersPage, RegisterPage, SynagoguesPage};

/// Application routes.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/manage")]
    Manage,
    #[at("/manage/login")]
    Login,
    #[at("/manage/register")]
    Register,
    #[at("/findPrayer")]
    FindPrayer,
    #[at("/about")]
    About,
    #[at("/synagogue/:id")]
    SynagogueMembers { id: SynagogueId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Top-level nav bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Manage,
    FindPrayer,
    About,
}

impl Route {
    /// Nav bar entry to highlight while this route is shown.
    pub fn section(&self) -> Option<NavSection> {
        match self {
            Route::Home | Route::Manage | Route::Login | Route::Register => {
                Some(NavSection::Manage)
            }
            Route::FindPrayer | Route::SynagogueMembers { .. } => Some(NavSection::FindPrayer),
            Route::About => Some(NavSection::About),
            Route::NotFound => None,
        }
    }
}

/// Login state owned by the app shell.
struct Session {
    logged_in: bool,
    on_token: Callback<String>,
}

/// Route switch function.
fn switch(route: Route, session: &Session) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Manage} /> },
        Route::Manage if !session.logged_in => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Manage => html! { <ManagePage /> },
        Route::Login => html! { <LoginPage on_token={session.on_token.clone()} /> },
        Route::Register => html! { <RegisterPage /> },
        Route::FindPrayer => html! { <SynagoguesPage /> },
        Route::About => html! { <MembersPage /> },
        Route::SynagogueMembers { id } => html! { <MembersPage synagogue_id={id} /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - הדף לא נמצא"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let token = use_state(|| None::<String>);

    let on_token = {
        let token = token.clone();
        Callback::from(move |value: String| {
            log::info!("Session token received");
            token.set(Some(value));
        })
    };

    let on_logout = {
        let token = token.clone();
        Callback::from(move |_: ()| {
            if let Some(value) = (*token).clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    let session = SessionToken { token: value };
                    if let Err(e) = HttpClient::from_build_config().logout(&session).await {
                        log::warn!("Logout request failed: {e}");
                    }
                });
            }
            log::info!("Logged out");
            token.set(None);
        })
    };

    let session = Session {
        logged_in: token.is_some(),
        on_token,
    };
    let render = Callback::from(move |route: Route| switch(route, &session));

    html! {
        <BrowserRouter>
            <div class="app-container" dir="rtl" lang="he">
                <NavBar logged_in={token.is_some()} on_logout={on_logout} />
                <main class="main-content">
                    <Switch<Route> render={render} />
                </main>
            </div>
        </BrowserRouter>
    }
}
