//! Browser tests for the DOM field and surface.
//!
//! Run with `wasm-pack test --headless --firefox crates/tryout-wasm`.

#![cfg(target_arch = "wasm32")]

use tryout_editor::{render, CodeField, Surface};
use tryout_types::{Diagnostic, FileSet, Output, StyledRun};
use tryout_wasm::dom::{self, DomSurface, TextAreaField};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn surface() -> DomSurface {
    let document = dom::document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    DomSurface::new(document, root)
}

fn children(el: &Element) -> Vec<Element> {
    let list = el.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

#[wasm_bindgen_test]
fn test_renders_file_blocks() {
    let mut surface = surface();
    let files: FileSet = [("main", "say hi\nsay bye")].into_iter().collect();
    render(&mut surface, &Output::Files(files));

    let blocks = children(surface.root());
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].class_name(), "file");

    let parts = children(&blocks[0]);
    assert_eq!(parts[0].class_name(), "filename");
    assert_eq!(parts[0].text_content().as_deref(), Some("main.mcfunction"));
    assert_eq!(parts[1].class_name(), "file-content");
    assert_eq!(
        parts[1].unchecked_ref::<HtmlElement>().inner_text(),
        "say hi\nsay bye"
    );
}

#[wasm_bindgen_test]
fn test_renders_styled_spans() {
    let mut surface = surface();
    let diag = Diagnostic::new(vec![
        StyledRun::new("bad", true, true),
        StyledRun::plain(" token"),
    ]);
    render(&mut surface, &Output::Diagnostic(diag));

    let blocks = children(surface.root());
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].class_name(), "error");

    let spans = children(&blocks[0]);
    assert_eq!(spans.len(), 2);
    let styled = spans[0].unchecked_ref::<HtmlElement>().style();
    assert_eq!(styled.get_property_value("color").unwrap(), "red");
    assert_eq!(
        styled.get_property_value("text-decoration").unwrap(),
        "underline"
    );
    let plain = spans[1].unchecked_ref::<HtmlElement>().style();
    assert_eq!(plain.get_property_value("color").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_clear_removes_every_child() {
    let mut surface = surface();
    let files: FileSet = [("a", "1"), ("b", "2")].into_iter().collect();
    render(&mut surface, &Output::Files(files));
    assert_eq!(children(surface.root()).len(), 2);

    surface.clear();
    assert!(surface.root().first_child().is_none());
}

#[wasm_bindgen_test]
fn test_text_area_caret_round_trip() {
    let document = dom::document().unwrap();
    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .unwrap()
        .unchecked_into();
    document.body().unwrap().append_child(&area).unwrap();

    let mut field = TextAreaField(area);
    field.set_text("say hi");
    field.set_selection(3, 3);
    assert_eq!(field.caret(), 3);

    tryout_editor::insert_at_caret(&mut field, "    ");
    assert_eq!(field.text(), "say     hi");
    assert_eq!(field.caret(), 7);
}

#[wasm_bindgen_test]
fn test_text_area_auto_grow_sets_height() {
    let document = dom::document().unwrap();
    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .unwrap()
        .unchecked_into();
    document.body().unwrap().append_child(&area).unwrap();

    let mut field = TextAreaField(area.clone());
    field.set_text("a\nb\nc");
    tryout_editor::auto_grow(&mut field);
    let height = area.style().get_property_value("height").unwrap();
    assert!(height.ends_with("px"), "height was {height:?}");
    assert_ne!(height, "0px");
}
