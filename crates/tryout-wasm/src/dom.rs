//! DOM implementations of the editor's field and surface traits.

use tryout_editor::render::{ERROR_CLASS, FILENAME_CLASS, FILE_CLASS, FILE_CONTENT_CLASS};
use tryout_editor::{Block, CodeField, InlineStyle, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement};

use crate::error::{HostError, HostResult};

pub fn document() -> HostResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(HostError::NoDocument)
}

/// First element matching `selector`, if any.
pub fn find(document: &Document, selector: &str) -> HostResult<Option<Element>> {
    document.query_selector(selector).map_err(HostError::js)
}

/// First element matching `selector`, cast to `T`.
pub fn require<T: JsCast>(document: &Document, selector: &str) -> HostResult<T> {
    find(document, selector)?
        .ok_or_else(|| HostError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| HostError::WrongElementKind(selector.to_string()))
}

// ─────────────────────────────────────────────────────────────
// Code field
// ─────────────────────────────────────────────────────────────

/// A `<textarea>` as a [`CodeField`].
pub struct TextAreaField(pub HtmlTextAreaElement);

impl CodeField for TextAreaField {
    fn text(&self) -> String {
        self.0.value()
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_value(text);
    }

    fn caret(&self) -> usize {
        self.0.selection_start().ok().flatten().unwrap_or(0) as usize
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        if let Err(e) = self.0.set_selection_range(start as u32, end as u32) {
            tracing::warn!(error = %crate::error::js_error_message(&e), "could not move caret");
        }
    }

    fn reset_height(&mut self) {
        self.style_height("auto");
    }

    fn scroll_height(&self) -> i32 {
        self.0.scroll_height()
    }

    fn set_height(&mut self, px: i32) {
        self.style_height(&format!("{px}px"));
    }
}

impl TextAreaField {
    fn style_height(&self, value: &str) {
        if let Err(e) = self.0.style().set_property("height", value) {
            tracing::warn!(error = %crate::error::js_error_message(&e), "could not resize code field");
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Output surface
// ─────────────────────────────────────────────────────────────

/// The output container as a [`Surface`].
pub struct DomSurface {
    document: Document,
    root: Element,
}

impl DomSurface {
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    fn element(&self, tag: &str, class: Option<&str>) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self.document.create_element(tag)?.unchecked_into();
        if let Some(class) = class {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn build(&self, block: &Block) -> Result<HtmlElement, JsValue> {
        match block {
            Block::File { label, content } => {
                let file = self.element("div", Some(FILE_CLASS))?;

                let name = self.element("div", Some(FILENAME_CLASS))?;
                name.set_inner_text(label);
                file.append_child(&name)?;

                let body = self.element("div", Some(FILE_CONTENT_CLASS))?;
                body.set_inner_text(content);
                file.append_child(&body)?;

                Ok(file)
            }
            Block::Error { runs } => {
                let error = self.element("div", Some(ERROR_CLASS))?;
                for run in runs {
                    let span = self.element("span", None)?;
                    span.set_inner_text(&run.text);

                    let style = InlineStyle::for_run(run);
                    if let Some(color) = style.color {
                        span.style().set_property("color", color)?;
                    }
                    if let Some(decoration) = style.text_decoration {
                        span.style().set_property("text-decoration", decoration)?;
                    }
                    error.append_child(&span)?;
                }
                Ok(error)
            }
        }
    }
}

impl Surface for DomSurface {
    fn clear(&mut self) {
        while let Some(child) = self.root.first_child() {
            if self.root.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn append(&mut self, block: &Block) {
        let built = self
            .build(block)
            .and_then(|el| self.root.append_child(&el).map(drop));
        if let Err(e) = built {
            tracing::error!(error = %crate::error::js_error_message(&e), "could not render block");
        }
    }
}
