use leptos::prelude::*;
use swipedeck_core::Action;

use crate::session::DeckContext;

/// Bottom buttons; same effect as the matching swipe.
#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = expect_context::<DeckContext>();

    let button = move |action: Action, class: &'static str, icon: &'static str, label: &'static str| {
        view! {
            <button
                class=format!("btn action-btn {}", class)
                type="button"
                aria-label=label
                title=label
                on:click=move |_| ctx.dispatch(action)
            >
                {icon}
            </button>
        }
    };

    view! {
        <nav class="action-bar" aria-label="Card actions">
            {button(Action::Reject, "action-btn--nope", "\u{2715}", "Nope")}
            {button(Action::SuperLike, "action-btn--super", "\u{2605}", "Super like")}
            {button(Action::Like, "action-btn--like", "\u{2665}", "Like")}
        </nav>
    }
}
