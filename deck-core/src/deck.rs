use std::collections::VecDeque;

use crate::profile::Profile;

/// Ordered stack of profiles; the front is the top, interactive card.
///
/// Nothing is ever appended mid-session: the deck is replaced wholesale on
/// reset and otherwise only shrinks from the front.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    profiles: VecDeque<Profile>,
}

impl Deck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: profiles.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn front(&self) -> Option<&Profile> {
        self.profiles.front()
    }

    /// Front-to-back iteration, i.e. display order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub(crate) fn pop_front(&mut self) -> Option<Profile> {
        self.profiles.pop_front()
    }
}
