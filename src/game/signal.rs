//! Transition signals emitted by screens

use serde::{Deserialize, Serialize};

/// Which secret epilogue to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecretVariant {
    /// Secret item found in a normal run
    One,
    /// Secret item found in a lunker run
    Two,
}

impl SecretVariant {
    pub fn number(self) -> u8 {
        match self {
            SecretVariant::One => 1,
            SecretVariant::Two => 2,
        }
    }
}

/// Request from the current screen to switch to another one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Signal {
    #[default]
    None,
    Title,
    Opening,
    Game,
    Ending,
    Secret(SecretVariant),
}

impl Signal {
    #[inline]
    pub fn is_none(self) -> bool {
        self == Signal::None
    }
}
