use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use yarnpress_layout::{LayoutElement, PositionedElement, TextAlign, TextStyle};
use yarnpress_render_core::{DocumentRenderer, RenderError};
use yarnpress_types::Color;

/// An in-memory PDF renderer using the `lopdf` library. It builds the
/// document's object graph and then writes it to the output stream.
pub struct PdfDocumentRenderer {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    resources_id: ObjectId,
    page_width: f32,
    page_height: f32,
}

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Average glyph advance for the built-in Helvetica faces, as a
/// fraction of the font size. Good enough for centering short labels.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;

impl Default for PdfDocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocumentRenderer {
    /// Number of pages rendered so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            pages_id,
            page_ids: Vec::new(),
            resources_id,
            page_width: 0.0,
            page_height: 0.0,
        }
    }
}

impl DocumentRenderer for PdfDocumentRenderer {
    fn begin_document(&mut self, page_width: f32, page_height: f32) -> Result<(), RenderError> {
        self.page_width = page_width;
        self.page_height = page_height;

        let regular_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });

        // One shared resources dictionary for the whole document.
        let resources_dict = dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        };
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources_dict));

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);
        Ok(())
    }

    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError> {
        let mut page = PageContent::new(self.page_height);
        for element in elements {
            page.draw_element(element);
        }
        let content = page.finish();

        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = self.document.add_object(Stream::new(dictionary! {}, encoded));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page_width.into(),
                self.page_height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("rendered page {} ({} elements)", self.page_ids.len(), elements.len());
        Ok(())
    }

    fn finalize(mut self: Box<Self>, mut writer: &mut dyn std::io::Write) -> Result<(), RenderError> {
        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id)
        {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i32);
        }
        self.document
            .save_to(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(())
    }
}

/// Builds one page's content stream. PDF's origin is the bottom-left
/// corner, so all recorded top-left coordinates are flipped here.
struct PageContent {
    page_height: f32,
    content: Content,
}

impl PageContent {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, color: Color) {
        self.op(
            "rg",
            vec![
                (color.r as f32 / 255.0).into(),
                (color.g as f32 / 255.0).into(),
                (color.b as f32 / 255.0).into(),
            ],
        );
    }

    fn stroke_color(&mut self, color: Color) {
        self.op(
            "RG",
            vec![
                (color.r as f32 / 255.0).into(),
                (color.g as f32 / 255.0).into(),
                (color.b as f32 / 255.0).into(),
            ],
        );
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Rect(rect) => {
                let y = self.page_height - el.y - el.height;
                if let Some(fill) = rect.fill {
                    self.fill_color(fill);
                    self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
                    self.op("f", vec![]);
                }
                if let Some(stroke) = rect.stroke {
                    self.stroke_color(stroke.color);
                    self.op("w", vec![stroke.width.into()]);
                    self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
                    self.op("S", vec![]);
                }
            }
            LayoutElement::Text(text) => {
                self.draw_text(el, &text.content, text.style);
            }
        }
    }

    fn draw_text(&mut self, el: &PositionedElement, content: &str, style: TextStyle) {
        if content.is_empty() {
            return;
        }
        let estimated_width = content.chars().count() as f32 * style.font_size * GLYPH_WIDTH_FACTOR;
        let x = match style.align {
            TextAlign::Left => el.x,
            TextAlign::Center => el.x + (el.width - estimated_width) / 2.0,
            TextAlign::Right => el.x + el.width - estimated_width,
        };
        // Baseline sits near the bottom of the line box.
        let baseline = self.page_height - el.y - el.height + (el.height - style.font_size) / 2.0;

        let font = if style.bold { BOLD_FONT } else { REGULAR_FONT };
        self.op("BT", vec![]);
        self.op("Tf", vec![font.into(), style.font_size.into()]);
        self.fill_color(style.color);
        self.op("Td", vec![x.into(), baseline.into()]);
        self.op("Tj", vec![Object::string_literal(content)]);
        self.op("ET", vec![]);
    }
}
