//! Visual style of a line badge

use serde::{Deserialize, Serialize};

use crate::value_objects::Color;

/// Badge outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Full circle, used for bus and tram numbers in many networks
    Circle,
    /// Sharp rectangle
    Rect,
    /// Rectangle with rounded corners
    #[default]
    Rounded,
    /// No outline, text only
    Plain,
}

/// Immutable line style, looked up by label and never computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineStyle {
    /// Badge outline
    pub shape: Shape,
    /// Fill color
    pub background: Color,
    /// Text color
    pub foreground: Color,
    /// Optional border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
}

impl LineStyle {
    /// Rounded badge with the given colors
    #[must_use]
    pub const fn new(background: Color, foreground: Color) -> Self {
        Self {
            shape: Shape::Rounded,
            background,
            foreground,
            border: None,
        }
    }


    /// Rounded badge from RGB literals, the common case in style tables
    #[must_use]
    pub const fn rgb(background: u32, foreground: u32) -> Self {
        Self::new(Color::rgb(background), Color::rgb(foreground))
    }

    /// Same style with a border
    #[must_use]
    pub const fn with_border(mut self, border: Color) -> Self {
        self.border = Some(border);
        self
    }

    /// Same style with another shape
    #[must_use]
    pub const fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}
