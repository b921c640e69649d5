//! The stacked cards and the pointer handling that drags, swipes and
//! double-taps the top one.

use leptos::ev::PointerEvent;
use leptos::html::Div;
use leptos::prelude::*;
use swipedeck_core::GestureOutcome;

use crate::components::profile_card::ProfileCard;
use crate::session::DeckContext;

#[component]
pub fn CardDeck() -> impl IntoView {
    let ctx = expect_context::<DeckContext>();
    let deck_ref = NodeRef::<Div>::new();

    let on_pointer_down = move |ev: PointerEvent| {
        let pointer_id = ev.pointer_id();
        let started = ctx
            .session
            .try_update(|s| {
                s.pointer_down(
                    pointer_id,
                    f64::from(ev.client_x()),
                    f64::from(ev.client_y()),
                    js_sys::Date::now(),
                )
            })
            .unwrap_or(false);

        if started {
            if let Some(deck) = deck_ref.get() {
                let _ = deck.set_pointer_capture(pointer_id);
            }
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        // Hovering mice send moves too; only touch the session mid-drag.
        if !ctx.session.with_untracked(|s| s.gestures().is_dragging()) {
            return;
        }
        ctx.session.update(|s| {
            s.pointer_move(
                ev.pointer_id(),
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            );
        });
    };

    let on_pointer_end = move |ev: PointerEvent| {
        let pointer_id = ev.pointer_id();
        let outcome = ctx
            .session
            .try_update(|s| s.pointer_up(pointer_id, js_sys::Date::now()))
            .unwrap_or(GestureOutcome::Ignored);

        if outcome == GestureOutcome::Ignored {
            return;
        }
        if let Some(deck) = deck_ref.get() {
            let _ = deck.release_pointer_capture(pointer_id);
        }
        if let GestureOutcome::Dispatched(_, Some(ticket)) = outcome {
            ctx.arm_exit_timeout(ticket);
        }
    };

    view! {
        <section
            class="deck-region"
            aria-label="Profiles"
        >
            <style>{include_str!("card_deck.css")}</style>
            <div
                class="deck"
                node_ref=deck_ref
                aria-busy=move || ctx.dealing.get().then_some("true")
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointercancel=on_pointer_end
            >
                <For
                    each=move || ctx.cards.get()
                    key=|profile| profile.id.clone()
                    children=|profile| view! { <ProfileCard profile=profile /> }
                />
            </div>
            <Show when=move || ctx.cards.with(|cards| cards.is_empty())>
                <p class="deck-empty">"No more profiles. Shuffle to deal a new deck."</p>
            </Show>
        </section>
    }
}
