use serde::{Deserialize, Serialize};

/// A decision on the front card. Buttons and swipes produce the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[serde(rename = "nope")]
    Reject,
    Like,
    #[serde(rename = "superlike")]
    SuperLike,
}

impl Action {
    pub fn exit_direction(self) -> ExitDirection {
        match self {
            Action::Reject => ExitDirection::Left,
            Action::Like => ExitDirection::Right,
            Action::SuperLike => ExitDirection::Up,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Reject => "nope",
            Action::Like => "like",
            Action::SuperLike => "superlike",
        }
    }
}

/// Which way a dismissed card leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDirection {
    Left,
    Right,
    Up,
}

impl ExitDirection {
    /// CSS class that starts the exit transition.
    pub fn css_class(self) -> &'static str {
        match self {
            ExitDirection::Left => "card--exit-left",
            ExitDirection::Right => "card--exit-right",
            ExitDirection::Up => "card--exit-up",
        }
    }
}
