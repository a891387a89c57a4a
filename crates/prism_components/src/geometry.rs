//! Per-size visual geometry shared by the component size enums.

use prism_theme::TextStyle;

/// The dimensional half of a component style: everything that depends on
/// the chosen size variant but not on theme or interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlGeometry {
    pub height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub gap: f32,
    pub radius: f32,
    pub icon_size: f32,
    pub text: TextStyle,
}
