// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Section extraction from page markup
//!
//! Splits fetched markup into ordered text sections for relevance scoring.
//! Three strategies are tried in order, first non-empty result wins:
//! 1. Semantic content blocks (article/section/main and content divs)
//! 2. Paragraph grouping with length and heading break rules
//! 3. Fixed-size chunking of the whole document text

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::utils::text::{char_len, chunk_by_chars, normalize_whitespace};

/// Tags whose subtrees never contribute text
const NOISE_TAGS: &[&str] = &["script", "style", "meta", "noscript", "iframe"];

/// Heading tags that close a paragraph group
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Minimum characters for a semantic block to count as a section
const MIN_BLOCK_CHARS: usize = 100;

/// Paragraphs at or below this length are ignored
const MIN_PARAGRAPH_CHARS: usize = 20;

/// A paragraph group closes once it grows past this length
const MAX_GROUP_CHARS: usize = 2000;

/// Documents longer than this fall back to fixed chunks
const CHUNK_THRESHOLD_CHARS: usize = 5000;

/// Size of each fallback chunk
const CHUNK_SIZE_CHARS: usize = 3000;

/// Extract ordered text sections from raw markup
///
/// Never fails: the worst case is a single chunked section, or an empty
/// vector when the document has no text at all.
pub fn extract_sections(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);

    let sections = semantic_block_sections(&document);
    if !sections.is_empty() {
        debug!("Extracted {} semantic block sections", sections.len());
        return sections;
    }

    let sections = paragraph_group_sections(&document);
    if !sections.is_empty() {
        debug!("Extracted {} paragraph group sections", sections.len());
        return sections;
    }

    let sections = chunked_sections(&document);
    debug!("Extracted {} chunked sections", sections.len());
    sections
}

/// Whole-document text with noise tags skipped, whitespace-normalized
///
/// Used when relevance scoring is disabled and the page is summarized
/// as one flat body of text.
pub fn page_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    element_text(document.root_element())
}

/// Strategy 1: structural content blocks, in document order
fn semantic_block_sections(document: &Html) -> Vec<String> {
    let mut sections = Vec::new();

    if let Ok(selector) = Selector::parse("article, section, main, div.content, div.main") {
        for element in document.select(&selector) {
            let text = element_text(element);
            if char_len(&text) > MIN_BLOCK_CHARS {
                sections.push(text);
            }
        }
    }

    sections
}

/// Strategy 2: group consecutive paragraphs into sections
///
/// A group closes when it grows past the size limit, or when a paragraph
/// ends a sentence and its next sibling element is a heading.
fn paragraph_group_sections(document: &Html) -> Vec<String> {
    let selector = match Selector::parse("p") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut sections = Vec::new();
    let mut group: Vec<String> = Vec::new();
    let mut group_chars = 0usize;

    for paragraph in document.select(&selector) {
        let text = element_text(paragraph);
        if char_len(&text) <= MIN_PARAGRAPH_CHARS {
            continue;
        }

        group_chars += 1 + char_len(&text);
        let ends_sentence = text.ends_with('.');
        group.push(text);

        if group_chars > MAX_GROUP_CHARS || (ends_sentence && followed_by_heading(paragraph)) {
            sections.push(group.join(" "));
            group.clear();
            group_chars = 0;
        }
    }

    if !group.is_empty() {
        sections.push(group.join(" "));
    }

    sections
}

/// Strategy 3: whole-document text, chunked when long
fn chunked_sections(document: &Html) -> Vec<String> {
    let text = element_text(document.root_element());
    if text.is_empty() {
        return Vec::new();
    }
    if char_len(&text) <= CHUNK_THRESHOLD_CHARS {
        return vec![text];
    }
    chunk_by_chars(&text, CHUNK_SIZE_CHARS)
}

/// An element's text with noise subtrees skipped, whitespace-normalized
fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    normalize_whitespace(&out)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if !NOISE_TAGS.contains(&el.value().name()) {
                collect_text(el, out);
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
            out.push(' ');
        }
    }
}

/// True when the element's next sibling element is a heading
fn followed_by_heading(element: ElementRef<'_>) -> bool {
    let mut sibling = element.next_sibling();
    while let Some(node) = sibling {
        if let Some(el) = ElementRef::wrap(node) {
            return HEADING_TAGS.contains(&el.value().name());
        }
        sibling = node.next_sibling();
    }
    false
}
