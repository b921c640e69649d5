//! Full-screen photo viewer for the front profile, opened by double-tap.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::html::Div;
use leptos::prelude::*;
use swipedeck_core::GalleryState;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::session::DeckContext;

#[component]
pub fn GalleryOverlay() -> impl IntoView {
    let ctx = expect_context::<DeckContext>();
    let overlay_ref = NodeRef::<Div>::new();
    let track_ref = NodeRef::<Div>::new();

    // Reads only the open flag, so moving between photos does not re-run the
    // open-time Effect below.
    let is_open = move || ctx.gallery_open.get();

    // Split so scrolling (which only moves the active dot) never rebuilds
    // the image strip.
    let photos = Memo::new(move |_| {
        ctx.gallery.with(|g| {
            (
                g.name().unwrap_or_default().to_string(),
                g.images().to_vec(),
            )
        })
    });
    let dots = Memo::new(move |_| ctx.gallery.with(|g| g.dot_states()));

    // Opening grabs focus so Escape works, and starts from the first photo.
    Effect::new(move |_| {
        if !is_open() {
            return;
        }
        if let Some(track) = track_ref.get() {
            track.set_scroll_left(0);
        }
        if let Some(overlay) = overlay_ref.get() {
            if let Err(e) = overlay.focus() {
                tracing::warn!("Could not focus gallery overlay: {:?}", e);
            }
        }
    });

    let on_background_click = move |ev: MouseEvent| {
        let (Some(target), Some(overlay)) = (ev.target(), overlay_ref.get()) else {
            return;
        };
        if JsValue::from(target) == JsValue::from(overlay) {
            ctx.close_gallery();
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_gallery();
        }
    };

    let on_scroll = move |_: leptos::ev::Event| {
        let Some(track) = track_ref.get() else {
            return;
        };
        let scroll_left = f64::from(track.scroll_left());
        let width = f64::from(track.client_width());
        ctx.session.update(|s| {
            s.gallery_scrolled(scroll_left, width);
        });
    };

    let scroll_to = move |index: usize| {
        let Some(track) = track_ref.get() else {
            return;
        };
        let opts = ScrollToOptions::new();
        opts.set_left(GalleryState::scroll_target(
            index,
            f64::from(track.client_width()),
        ));
        opts.set_behavior(ScrollBehavior::Smooth);
        track.scroll_to_with_scroll_to_options(&opts);
    };

    view! {
        <div
            class="gallery-overlay"
            node_ref=overlay_ref
            hidden=move || !is_open()
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            aria-label="Photo gallery"
            on:click=on_background_click
            on:keydown=on_keydown
        >
            <style>{include_str!("gallery_overlay.css")}</style>
            <button
                class="gallery__close"
                type="button"
                aria-label="Close gallery"
                on:click=move |_| ctx.close_gallery()
            >
                "\u{2715}"
            </button>

            <div class="gallery__track" node_ref=track_ref on:scroll=on_scroll>
                {move || {
                    let (name, images) = photos.get();
                    images
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            let alt = format!("{} \u{2014} photo {}", name, i + 1);
                            view! { <img class="gallery__image" src=src alt=alt draggable="false" /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="gallery__dots">
                {move || {
                    dots.get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, active)| {
                            let class = if active {
                                "gallery__dot gallery__dot--active"
                            } else {
                                "gallery__dot"
                            };
                            view! {
                                <button
                                    class=class
                                    type="button"
                                    aria-label=format!("Photo {}", i + 1)
                                    on:click=move |_| scroll_to(i)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
