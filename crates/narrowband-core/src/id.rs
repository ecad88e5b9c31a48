//! Strongly-typed identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Signed layer index within the narrow band.
///
/// `LayerId(0)` is the zero level set. Negative layers lie on the interior
/// side of the front, positive layers on the exterior side. A layer's
/// magnitude is its distance, in nodes, from the zero layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub i32);

impl LayerId {
    /// The zero level set.
    pub const ZERO: Self = Self(0);

    /// Discretize a level-set value to the layer it belongs to.
    ///
    /// Layer `k` covers the half-open interval `[k - 0.5, k + 0.5)`, so the
    /// zero layer holds values in `[-0.5, 0.5)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use narrowband_core::LayerId;
    ///
    /// assert_eq!(LayerId::of_value(0.0), LayerId::ZERO);
    /// assert_eq!(LayerId::of_value(-0.5), LayerId::ZERO);
    /// assert_eq!(LayerId::of_value(0.5), LayerId(1));
    /// assert_eq!(LayerId::of_value(-1.7), LayerId(-2));
    /// ```
    pub fn of_value(value: f64) -> Self {
        // `as` saturates for magnitudes beyond i32.
        Self((value + 0.5).floor() as i32)
    }

    /// Distance of this layer from the zero layer.
    pub fn distance(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Whether this is the zero layer.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether this layer lies on the interior (negative) side.
    pub fn is_interior(self) -> bool {
        self.0 < 0
    }

    /// The adjacent layer one step closer to the zero layer.
    ///
    /// The zero layer is its own closer layer.
    pub fn toward_zero(self) -> Self {
        Self(self.0 - self.0.signum())
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for LayerId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// A coordinate on the grid.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for grids up to four
/// dimensions, which covers 2D images and 3D volumes.
pub type Coord = SmallVec<[i32; 4]>;
