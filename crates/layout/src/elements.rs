//! Output element types bridging layout and rendering.
//!
//! The layout engine records these per page; render backends consume
//! them without knowing anything about grids or charts.

use yarnpress_types::{Color, Rect, color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn body(font_size: f32) -> Self {
        Self {
            font_size,
            bold: false,
            color: color::BLACK,
            align: TextAlign::Left,
        }
    }

    pub fn heading(font_size: f32) -> Self {
        Self {
            bold: true,
            ..Self::body(font_size)
        }
    }

    pub fn colored(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }

    pub fn right_aligned(self) -> Self {
        Self {
            align: TextAlign::Right,
            ..self
        }
    }

    /// Baseline-to-baseline advance for this size.
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.4
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn hairline() -> Self {
        Self {
            color: Color::gray(140),
            width: 0.4,
        }
    }

    pub fn outline() -> Self {
        Self {
            color: color::BLACK,
            width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rect(RectElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
