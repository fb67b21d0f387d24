use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// One of the two texts of a parallel corpus.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    /// Prefix of the token ids minted on this side.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Source => "s",
            Side::Target => "t",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}
