pub mod action;
pub mod config;
pub mod deck;
mod error;
pub mod gallery;
pub mod gesture;
pub mod profile;
pub mod session;

pub use action::{Action, ExitDirection};
pub use config::DeckConfig;
pub use deck::Deck;
pub use error::DeckError;
pub use gallery::GalleryState;
pub use gesture::{classify, DragTransform, Gesture};
pub use profile::{Profile, ProfileId};
pub use session::{ExitSignal, ExitTicket, GestureOutcome, PendingExit, SwipeSession};
