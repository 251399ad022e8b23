//! Login page component.

use roster_core::Credentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpClient;
use crate::app::Route;

/// Properties for LoginPage.
#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Receives the session token after a successful login
    pub on_token: Callback<String>,
}

/// Login form. Posts the credentials and hands the token upward.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let credentials = use_state(Credentials::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    let on_username = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credentials.set(Credentials {
                username: input.value(),
                ..(*credentials).clone()
            });
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credentials.set(Credentials {
                password: input.value(),
                ..(*credentials).clone()
            });
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_token = props.on_token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = (*credentials).clone();
            if let Err(invalid) = credentials.validate() {
                error.set(Some(invalid.to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);

            let error = error.clone();
            let submitting = submitting.clone();
            let on_token = on_token.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match HttpClient::from_build_config().login(&credentials).await {
                    Ok(response) => {
                        on_token.emit(response.token);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Manage);
                        }
                    }
                    Err(e) => {
                        log::error!("Login failed: {e}");
                        error.set(Some(e.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="card login-card">
            <form class="login-form" onsubmit={on_submit}>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Username"
                    value={credentials.username.clone()}
                    oninput={on_username}
                />
                <input
                    type="password"
                    class="form-input"
                    placeholder="Password"
                    value={credentials.password.clone()}
                    oninput={on_password}
                />

                if let Some(message) = (*error).clone() {
                    <p class="form-error">{ message }</p>
                }

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {"Log in"}
                </button>
                <span class="register-hint">
                    {"Or "}
                    <Link<Route> to={Route::Register}>{"register now!"}</Link<Route>>
                </span>
            </form>
        </div>
    }
}
