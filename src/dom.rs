use crate::constants::{GLYPH_CLASS, GLYPH_SELECTOR, ROOT_SELECTOR};
use crate::core::Viewport;
use crate::error::EffectError;
use unicode_segmentation::UnicodeSegmentation;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn media_query(query: &str) -> Option<web::MediaQueryList> {
    web::window().and_then(|w| w.match_media(query).ok().flatten())
}

#[inline]
pub fn media_matches(query: &str) -> bool {
    media_query(query).map(|m| m.matches()).unwrap_or(false)
}

#[inline]
pub fn page_hidden() -> bool {
    window_document().map(|d| d.hidden()).unwrap_or(false)
}

pub fn effect_roots(document: &web::Document) -> Vec<web::Element> {
    let mut roots = Vec::new();
    if let Ok(list) = document.query_selector_all(ROOT_SELECTOR) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                roots.push(el);
            }
        }
    }
    roots
}

/// Split every root that has no glyph spans yet, then collect all glyphs in
/// document order. Roots that fail to split are skipped.
pub fn ensure_glyphs(document: &web::Document, roots: &[web::Element]) -> Vec<web::HtmlElement> {
    for root in roots {
        if matches!(root.query_selector(GLYPH_SELECTOR), Ok(Some(_))) {
            continue;
        }
        if let Err(e) = split_chars(document, root) {
            log::debug!("[split] skipping root: {}", e);
        }
    }
    let mut glyphs = Vec::new();
    for root in roots {
        let Ok(list) = root.query_selector_all(GLYPH_SELECTOR) else {
            continue;
        };
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
                glyphs.push(el);
            }
        }
    }
    glyphs
}

/// Wrap each non-whitespace grapheme under `root` in `<span class="char">`,
/// keeping whitespace runs as plain text and nested markup in place.
pub fn split_chars(document: &web::Document, root: &web::Element) -> Result<usize, EffectError> {
    let mut texts = Vec::new();
    collect_text_nodes(root, &mut texts);
    let mut count = 0;
    for text in &texts {
        count += split_text_node(document, text)?;
    }
    Ok(count)
}

fn collect_text_nodes(node: &web::Node, out: &mut Vec<web::Text>) {
    let children = node.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else {
            continue;
        };
        match child.node_type() {
            web::Node::TEXT_NODE => {
                if let Ok(text) = child.dyn_into::<web::Text>() {
                    out.push(text);
                }
            }
            web::Node::ELEMENT_NODE => collect_text_nodes(&child, out),
            _ => {}
        }
    }
}

fn split_text_node(document: &web::Document, text: &web::Text) -> Result<usize, EffectError> {
    let content = text.data();
    if content.trim().is_empty() {
        return Ok(0);
    }
    let parent = text
        .parent_node()
        .ok_or_else(|| EffectError::Dom("text node has no parent".into()))?;
    let anchor: &web::Node = text.as_ref();
    let mut whitespace = String::new();
    let mut count = 0;
    // one glyph per grapheme so combining marks and emoji sequences stay whole
    for grapheme in content.graphemes(true) {
        if grapheme.chars().all(char::is_whitespace) {
            whitespace.push_str(grapheme);
            continue;
        }
        if !whitespace.is_empty() {
            let gap = document.create_text_node(&whitespace);
            parent.insert_before(&gap, Some(anchor))?;
            whitespace.clear();
        }
        let span = document.create_element("span")?;
        span.set_class_name(GLYPH_CLASS);
        span.set_text_content(Some(grapheme));
        parent.insert_before(&span, Some(anchor))?;
        count += 1;
    }
    if !whitespace.is_empty() {
        let gap = document.create_text_node(&whitespace);
        parent.insert_before(&gap, Some(anchor))?;
    }
    parent.remove_child(anchor)?;
    Ok(count)
}
