//! Tree shape parameters and the root seed derived from surface size.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;

/// Deepest tree accepted by [`TreeParams::validate`] (2^21 - 1 branches).
pub const MAX_SUPPORTED_DEPTH: u32 = 20;

/// Milliseconds between revealed depth levels.
pub const DEFAULT_INTERVAL_MS: u64 = 77;

/// Trunk length as a fraction of the shorter surface side.
pub const DEFAULT_TRUNK_RATIO: f64 = 0.2;

/// Trunk stroke width in surface units.
pub const DEFAULT_TRUNK_WIDTH: f64 = 10.0;

/// Heading of the trunk: straight up the screen.
const TRUNK_ANGLE: f64 = -90.0;

/// Invalid tree parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("max depth {0} exceeds the supported maximum of {max}", max = MAX_SUPPORTED_DEPTH)]
    DepthTooLarge(u32),
    #[error("{name} must be in (0, 1), got {value}")]
    ScaleOutOfRange { name: &'static str, value: f64 },
    #[error("angle offset must be finite, got {0}")]
    BadAngle(f64),
}

/// Shape of the symmetric binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    /// Deepest branch level; the trunk is depth 0.
    pub max_depth: u32,
    /// Degrees each child turns away from its parent's heading.
    pub angle_offset: f64,
    /// Child length relative to its parent.
    pub length_scale: f64,
    /// Child stroke width relative to its parent.
    pub width_scale: f64,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 12,
            angle_offset: 25.0,
            length_scale: 0.8,
            width_scale: 0.7,
        }
    }
}

impl TreeParams {
    /// Check that the parameters describe a finite, shrinking tree.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ParamError::DepthTooLarge(self.max_depth));
        }
        if !self.angle_offset.is_finite() {
            return Err(ParamError::BadAngle(self.angle_offset));
        }
        for (name, value) in [
            ("length_scale", self.length_scale),
            ("width_scale", self.width_scale),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ParamError::ScaleOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Number of branches in a full tree: 2^(max_depth + 1) - 1.
    ///
    /// Saturates at `usize::MAX - 1` for depths that cannot be grown.
    pub fn branch_count(&self) -> usize {
        2usize.saturating_pow(self.max_depth.saturating_add(1)) - 1
    }
}

/// Where and how the trunk is planted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    pub origin: Point,
    /// Heading in degrees.
    pub angle: f64,
    pub length: f64,
    pub width: f64,
}

impl Seed {
    /// Trunk centred on the bottom edge of a `width` x `height` surface.
    pub fn for_surface(width: f64, height: f64) -> Self {
        Self::scaled(width, height, DEFAULT_TRUNK_RATIO, DEFAULT_TRUNK_WIDTH)
    }

    /// Like [`Seed::for_surface`] with a custom trunk length ratio and width.
    pub fn scaled(width: f64, height: f64, trunk_ratio: f64, trunk_width: f64) -> Self {
        Self {
            origin: Point::new(width / 2.0, height),
            angle: TRUNK_ANGLE,
            length: width.min(height) * trunk_ratio,
            width: trunk_width,
        }
    }
}
