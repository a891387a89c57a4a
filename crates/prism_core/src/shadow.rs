//! Box-shadow primitive. Elevation levels upstream compose several of these
//! into a stack.

use crate::Color;
use serde::{Deserialize, Serialize};

/// A single box-shadow layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// A zero-offset, zero-blur spread layer. Used to blend a border color
    /// into a shadow stack where a real border would alter layout.
    pub const fn ring(spread: f32, color: Color) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread,
            color,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_never_offsets_or_blurs() {
        let ring = Shadow::ring(3.0, Color::BLACK);
        assert_eq!((ring.offset_x, ring.offset_y, ring.blur), (0.0, 0.0, 0.0));
        assert_eq!(ring.spread, 3.0);
    }

    #[test]
    fn serde_round_trip() {
        let shadow = Shadow::new(0.0, 2.0, 8.0, -1.0, Color::BLACK.with_alpha(0.1));
        let json = serde_json::to_string(&shadow).unwrap();
        assert_eq!(serde_json::from_str::<Shadow>(&json).unwrap(), shadow);
    }
}
