//! Drawing modes shared by every primitive.

use core::fmt;

/// How a primitive combines with the existing image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum DrawMode {
    /// Set pixels.
    Fill = 1,
    /// Set pixels, with a 1px cleared border.
    Outline = 2,
    /// Clear pixels.
    BgFill = 3,
    /// Clear pixels, with a 1px set border.
    BgOutline = 4,
    /// Toggle pixels.
    Xor = 5,
}

impl DrawMode {
    pub const ALL: [DrawMode; 5] = [
        DrawMode::Fill,
        DrawMode::Outline,
        DrawMode::BgFill,
        DrawMode::BgOutline,
        DrawMode::Xor,
    ];

    /// `true` when the body of a span sets pixels.
    pub const fn sets_pixels(self) -> bool {
        matches!(self, DrawMode::Fill | DrawMode::Outline)
    }

    /// `true` for the two modes that add an inverted 1px border.
    pub const fn has_border(self) -> bool {
        matches!(self, DrawMode::Outline | DrawMode::BgOutline)
    }

    /// Plain mode used for the body of a shape drawn in `self`.
    pub const fn body_mode(self) -> DrawMode {
        match self {
            DrawMode::Outline => DrawMode::Fill,
            DrawMode::BgOutline => DrawMode::BgFill,
            other => other,
        }
    }

    /// Plain mode that draws the border of an outline mode.
    ///
    /// Non-outline modes map to themselves.
    pub const fn border_mode(self) -> DrawMode {
        match self {
            DrawMode::Outline => DrawMode::BgFill,
            DrawMode::BgOutline => DrawMode::Fill,
            other => other,
        }
    }
}

/// Integer tag outside `1..=5`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidMode(pub u8);

impl fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid draw mode tag {}", self.0)
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawMode::Fill),
            2 => Ok(DrawMode::Outline),
            3 => Ok(DrawMode::BgFill),
            4 => Ok(DrawMode::BgOutline),
            5 => Ok(DrawMode::Xor),
            other => Err(InvalidMode(other)),
        }
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> Self {
        mode as u8
    }
}
