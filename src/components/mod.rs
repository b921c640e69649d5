pub mod action_bar;
pub mod card_deck;
pub mod gallery_overlay;
pub mod profile_card;
