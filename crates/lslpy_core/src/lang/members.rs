//! Composite member names.
//!
//! The runtime's `Vector` and `Quaternion` are plain tuples, so `v.y` is always addressed positionally.
//! The offsets are fixed: `x = 0`, `y = 1`, `z = 2`, `s = 3`.

use std::fmt;

use super::types::LslType;

/// A named component of a vector or quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Member {
    X,
    Y,
    Z,
    S,
}

impl Member {
    /// Tuple index of the component.
    pub fn offset(self) -> usize {
        match self {
            Member::X => 0,
            Member::Y => 1,
            Member::Z => 2,
            Member::S => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Member::X => "x",
            Member::Y => "y",
            Member::Z => "z",
            Member::S => "s",
        }
    }

    /// Whether a value of type `ty` has this component.
    pub fn applies_to(self, ty: LslType) -> bool {
        ty.component_count().is_some_and(|count| self.offset() < count)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
