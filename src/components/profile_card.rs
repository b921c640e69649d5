use leptos::prelude::*;
use swipedeck_core::{ExitSignal, Profile};

use crate::session::DeckContext;

#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let ctx = expect_context::<DeckContext>();
    let id = profile.id.clone();

    let is_top = {
        let id = id.clone();
        move || ctx.front_id.get().as_ref() == Some(&id)
    };

    let class = {
        let id = id.clone();
        let is_top = is_top.clone();
        move || {
            let mut class = String::from("card");
            if is_top() && ctx.drag.get().is_some() {
                class.push_str(" card--dragging");
            }
            if let Some(exit) = ctx.exit.get().filter(|e| e.profile_id == id) {
                class.push(' ');
                class.push_str(exit.action.exit_direction().css_class());
            }
            class
        }
    };

    // Live drag offset; cleared on release so the exit class alone drives
    // the exit transition.
    let style = move || {
        ctx.drag
            .get()
            .filter(|_| is_top())
            .map(|t| format!("transform: {}", t.css()))
            .unwrap_or_default()
    };

    let on_transition_end = move |_: leptos::ev::TransitionEvent| {
        if let Some(exit) = ctx.exit.get_untracked().filter(|e| e.profile_id == id) {
            ctx.finish_exit(exit.ticket, ExitSignal::TransitionEnd);
        }
    };

    let photo = profile.primary_image().unwrap_or_default().to_string();
    let alt = format!("{} \u{2014} profile photo", profile.name);
    let summary = profile.summary();

    view! {
        <article class=class style=style on:transitionend=on_transition_end>
            <img class="card__media" src=photo alt=alt draggable="false" />
            <div class="card__body">
                <div class="title-row">
                    <h2 class="card__title">{profile.name}</h2>
                    <span class="card__age">{profile.age}</span>
                </div>
                <div class="card__meta">{summary}</div>
                <div class="card__chips">
                    {profile
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="chip">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}
