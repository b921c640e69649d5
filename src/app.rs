use leptos::prelude::*;
use swipedeck_core::DeckConfig;

use crate::components::action_bar::ActionBar;
use crate::components::card_deck::CardDeck;
use crate::components::gallery_overlay::GalleryOverlay;
use crate::session::DeckContext;

#[component]
pub fn App(config: DeckConfig) -> impl IntoView {
    let ctx = DeckContext::new(config);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <style>{include_str!("app.css")}</style>
            <header class="app-header">
                <h1 class="app-title">"SwipeDeck"</h1>
                <button
                    class="btn btn-shuffle"
                    type="button"
                    aria-label="Shuffle deck"
                    on:click=move |_| ctx.shuffle()
                >
                    "Shuffle"
                </button>
            </header>
            <main class="content">
                <CardDeck />
                <ActionBar />
            </main>
            <GalleryOverlay />
        </div>
    }
}
