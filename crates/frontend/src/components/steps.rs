//! Step progress indicator.

use yew::prelude::*;

/// Properties for Steps component.
#[derive(Properties, PartialEq)]
pub struct StepsProps {
    pub titles: Vec<AttrValue>,
    /// Zero-based index of the active step
    pub current: usize,
}

#[function_component(Steps)]
pub fn steps(props: &StepsProps) -> Html {
    html! {
        <ol class="steps">
            { for props.titles.iter().enumerate().map(|(index, title)| {
                let state = match index.cmp(&props.current) {
                    std::cmp::Ordering::Less => "done",
                    std::cmp::Ordering::Equal => "active",
                    std::cmp::Ordering::Greater => "pending",
                };
                html! {
                    <li key={title.to_string()} class={classes!("step", state)}>
                        <span class="step-number">{ (index + 1).to_string() }</span>
                        <span class="step-title">{ title.clone() }</span>
                    </li>
                }
            })}
        </ol>
    }
}
