//! The drawing seam between the layout engine and any output backend.
//!
//! Renderer components only ever see this narrow interface, so every
//! layout decision is observable from recorded elements without a
//! real document backend.

use crate::elements::{LayoutElement, PositionedElement, RectElement, TextElement, TextStyle};
use yarnpress_types::{Rect, Size};

pub trait Surface {
    /// Start a new page; subsequent drawing lands on it.
    fn begin_page(&mut self);

    fn page_size(&self) -> Size;

    fn draw_rect(&mut self, bounds: Rect, rect: RectElement);

    /// Draw a line of text. `bounds.width` is the box the backend
    /// aligns within; `bounds.height` is the line height.
    fn draw_text(&mut self, bounds: Rect, content: &str, style: TextStyle);

    fn page_count(&self) -> usize;
}

/// The standard `Surface`: records positioned elements page by page.
#[derive(Debug)]
pub struct PageRecorder {
    size: Size,
    pages: Vec<Vec<PositionedElement>>,
}

impl PageRecorder {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: Vec::new(),
        }
    }

    pub fn pages(&self) -> &[Vec<PositionedElement>] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Vec<PositionedElement>> {
        self.pages
    }

    fn current_page(&mut self) -> &mut Vec<PositionedElement> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        self.pages.last_mut().unwrap()
    }

    fn push(&mut self, bounds: Rect, element: LayoutElement) {
        self.current_page().push(PositionedElement {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            element,
        });
    }
}

impl Surface for PageRecorder {
    fn begin_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn page_size(&self) -> Size {
        self.size
    }

    fn draw_rect(&mut self, bounds: Rect, rect: RectElement) {
        self.push(bounds, LayoutElement::Rect(rect));
    }

    fn draw_text(&mut self, bounds: Rect, content: &str, style: TextStyle) {
        self.push(
            bounds,
            LayoutElement::Text(TextElement {
                content: content.to_string(),
                style,
            }),
        );
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
