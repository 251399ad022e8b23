//! Registration wizard page component.

use roster_core::{RegistrationDraft, RegistrationStep, RegistrationWizard};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Steps;

/// Build an input handler writing one draft field.
fn on_field(
    draft: &UseStateHandle<RegistrationDraft>,
    apply: fn(&mut RegistrationDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

/// Registration wizard page.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let wizard = use_state(RegistrationWizard::new);
    let draft = use_state(RegistrationDraft::default);

    let step = wizard.current();
    let step_complete = draft.is_step_complete(step);

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.set(wizard.next()))
    };

    let on_prev = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.set(wizard.prev()))
    };

    let on_done = {
        let wizard = wizard.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!(
                "Registration completed for {} ({})",
                draft.username,
                draft.synagogue_name
            );
            wizard.set(wizard.finish());
        })
    };

    let on_terms = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(RegistrationDraft {
                accepted_terms: input.checked(),
                ..(*draft).clone()
            });
        })
    };

    let content = match step {
        RegistrationStep::Credentials => html! {
            <div class="form-fields">
                <input type="text" class="form-input" placeholder="Username"
                    value={draft.username.clone()}
                    oninput={on_field(&draft, |d, v| d.username = v)} />
                <input type="email" class="form-input" placeholder="Email"
                    value={draft.email.clone()}
                    oninput={on_field(&draft, |d, v| d.email = v)} />
                <input type="password" class="form-input" placeholder="Password"
                    value={draft.password.clone()}
                    oninput={on_field(&draft, |d, v| d.password = v)} />
            </div>
        },
        RegistrationStep::SynagogueDetails => html! {
            <div class="form-fields">
                <input type="text" class="form-input" placeholder="שם בית הכנסת"
                    value={draft.synagogue_name.clone()}
                    oninput={on_field(&draft, |d, v| d.synagogue_name = v)} />
                <input type="text" class="form-input" placeholder="כתובת"
                    value={draft.synagogue_address.clone()}
                    oninput={on_field(&draft, |d, v| d.synagogue_address = v)} />
            </div>
        },
        RegistrationStep::Terms => html! {
            <label class="terms">
                <input type="checkbox" checked={draft.accepted_terms} onchange={on_terms} />
                {" אני מאשר/ת את תנאי השימוש"}
            </label>
        },
        RegistrationStep::Finish => html! {
            <div class="summary">
                <p>{ format!("משתמש: {}", draft.username) }</p>
                <p>{ format!("בית כנסת: {}", draft.synagogue_name) }</p>
            </div>
        },
    };

    let titles: Vec<AttrValue> = RegistrationStep::ALL
        .iter()
        .map(|step| AttrValue::from(step.title()))
        .collect();

    html! {
        <div class="card">
            <Steps titles={titles} current={wizard.index()} />

            <div class="steps-content">{ content }</div>

            if wizard.is_completed() {
                <p class="form-success">{"Processing complete!"}</p>
            }

            <div class="steps-action">
                if wizard.has_next() {
                    <button class="btn btn-primary" disabled={!step_complete} onclick={on_next}>
                        {"Next"}
                    </button>
                }
                if wizard.is_last() && !wizard.is_completed() {
                    <button class="btn btn-primary" onclick={on_done}>
                        {"Done"}
                    </button>
                }
                if wizard.has_prev() {
                    <button class="btn btn-secondary" onclick={on_prev}>
                        {"Previous"}
                    </button>
                }
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_first_step_offers_next_only() {
        let html = ServerRenderer::<RegisterPage>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("פרטי התחברות"));
        assert!(html.contains("Next"));
        assert!(!html.contains("Previous"));
        assert!(!html.contains("Done"));
    }
}
