#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Side;

/// A pair of values, one for each [`Side`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceTarget<T> {
    pub source: T,
    pub target: T,
}

impl<T> SourceTarget<T> {
    pub fn new(source: T, target: T) -> Self { Self { source, target } }

    pub fn get_side(&self, side: Side) -> &T {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    /// Applies `f` to both values, source first.
    pub fn map_sides<U>(self, mut f: impl FnMut(T, Side) -> U) -> SourceTarget<U> {
        let source = f(self.source, Side::Source);
        let target = f(self.target, Side::Target);
        SourceTarget { source, target }
    }
}
