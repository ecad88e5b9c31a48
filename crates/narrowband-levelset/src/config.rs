//! Level-set and update configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use narrowband_space::EdgeBehavior;

// ── ZeroLayerSide ─────────────────────────────────────────────────

/// Which side of a mask boundary becomes the zero layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZeroLayerSide {
    /// Foreground pixels with at least one background face neighbour.
    #[default]
    Foreground,
    /// Background pixels with at least one foreground face neighbour.
    Background,
}

// ── LevelSetConfig ────────────────────────────────────────────────

/// Shape of the narrow band and the lattice it lives on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSetConfig {
    /// Number of layers kept on each side of the zero layer. Default: 2.
    pub half_width: u32,
    /// Side of the mask boundary that forms the zero layer.
    pub zero_layer_side: ZeroLayerSide,
    /// Lattice edge handling. Default: [`EdgeBehavior::Absorb`].
    pub edge: EdgeBehavior,
}

impl LevelSetConfig {
    /// Default band half-width.
    pub const DEFAULT_HALF_WIDTH: u32 = 2;
    /// Largest accepted band half-width.
    pub const MAX_HALF_WIDTH: u32 = 4096;

    /// Config with the given half-width and defaults elsewhere.
    pub fn with_half_width(half_width: u32) -> Self {
        Self {
            half_width,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_width == 0 {
            return Err(ConfigError::HalfWidthZero);
        }
        if self.half_width > Self::MAX_HALF_WIDTH {
            return Err(ConfigError::HalfWidthTooLarge {
                value: self.half_width,
                max: Self::MAX_HALF_WIDTH,
            });
        }
        Ok(())
    }

    /// Magnitude of the background value, `half_width + 1`.
    pub fn background_value(&self) -> f64 {
        f64::from(self.half_width) + 1.0
    }
}

impl Default for LevelSetConfig {
    fn default() -> Self {
        Self {
            half_width: Self::DEFAULT_HALF_WIDTH,
            zero_layer_side: ZeroLayerSide::default(),
            edge: EdgeBehavior::default(),
        }
    }
}

// ── UpdateConfig ──────────────────────────────────────────────────

/// How an update scalar combines with a zero-layer node's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdatePolicy {
    /// The update replaces the value.
    Replace,
    /// The update, scaled by the time step, is added to the value.
    #[default]
    Additive,
}

/// Configuration for [`UpdateEngine`](crate::UpdateEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateConfig {
    /// Combination policy. Default: [`UpdatePolicy::Additive`].
    pub policy: UpdatePolicy,
    /// Scale applied to additive updates. Default: 1.0.
    pub time_step: f64,
}

impl UpdateConfig {
    /// Default additive time step.
    pub const DEFAULT_TIME_STEP: f64 = 1.0;

    /// Replace-policy config.
    pub fn replace() -> Self {
        Self {
            policy: UpdatePolicy::Replace,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::InvalidTimeStep {
                value: self.time_step,
            });
        }
        Ok(())
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            policy: UpdatePolicy::default(),
            time_step: Self::DEFAULT_TIME_STEP,
        }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during configuration validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `half_width` is zero; the band needs at least one layer per side.
    HalfWidthZero,
    /// `half_width` exceeds [`LevelSetConfig::MAX_HALF_WIDTH`].
    HalfWidthTooLarge {
        /// The configured half-width.
        value: u32,
        /// The maximum accepted.
        max: u32,
    },
    /// `time_step` is not a positive finite number.
    InvalidTimeStep {
        /// The configured time step.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfWidthZero => write!(f, "band half-width must be at least 1"),
            Self::HalfWidthTooLarge { value, max } => {
                write!(f, "band half-width {value} exceeds maximum {max}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "time step must be positive and finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
