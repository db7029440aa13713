//! Small value types shared across the scene model.
//!
//! All scene coordinates are integers in the unscaled display pixel space;
//! scaling to device pixels only happens at the projection boundary
//! ([`crate::SceneElement::scaled_rect`]).

/// A point in unscaled display coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Coord {
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels.
    pub y: i32,
}

impl Coord {
    /// Build a coordinate pair.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

/// Straight-alpha RGBA8 pixel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// 24-bit RGB color carried by text elements for display tinting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb24 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// ESPHome display text alignment anchors.
///
/// Values mirror the `TextAlign` bitflag table of the ESPHome display
/// component (vertical anchor in the low bits, horizontal in the high bits).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TextAlign {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BaselineLeft,
    BaselineCenter,
    BaselineRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAlign {
    /// Raw bitflag value as defined by the ESPHome display component.
    pub fn bits(self) -> u8 {
        const TOP: u8 = 0x00;
        const CENTER_V: u8 = 0x01;
        const BASELINE: u8 = 0x02;
        const BOTTOM: u8 = 0x04;
        const LEFT: u8 = 0x00;
        const CENTER_H: u8 = 0x08;
        const RIGHT: u8 = 0x10;
        match self {
            Self::TopLeft => TOP | LEFT,
            Self::TopCenter => TOP | CENTER_H,
            Self::TopRight => TOP | RIGHT,
            Self::CenterLeft => CENTER_V | LEFT,
            Self::Center => CENTER_V | CENTER_H,
            Self::CenterRight => CENTER_V | RIGHT,
            Self::BaselineLeft => BASELINE | LEFT,
            Self::BaselineCenter => BASELINE | CENTER_H,
            Self::BaselineRight => BASELINE | RIGHT,
            Self::BottomLeft => BOTTOM | LEFT,
            Self::BottomCenter => BOTTOM | CENTER_H,
            Self::BottomRight => BOTTOM | RIGHT,
        }
    }

    /// Identifier used in generated lambda code, e.g. `TextAlign::TOP_LEFT`.
    pub fn cpp_name(self) -> &'static str {
        match self {
            Self::TopLeft => "TOP_LEFT",
            Self::TopCenter => "TOP_CENTER",
            Self::TopRight => "TOP_RIGHT",
            Self::CenterLeft => "CENTER_LEFT",
            Self::Center => "CENTER",
            Self::CenterRight => "CENTER_RIGHT",
            Self::BaselineLeft => "BASELINE_LEFT",
            Self::BaselineCenter => "BASELINE_CENTER",
            Self::BaselineRight => "BASELINE_RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::BottomCenter => "BOTTOM_CENTER",
            Self::BottomRight => "BOTTOM_RIGHT",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
