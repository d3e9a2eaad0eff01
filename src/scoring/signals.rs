//! Per-page signal extraction
//!
//! Small predicates and counters over a parsed `scraper::Html` document. The
//! category scorers aggregate these across the page set.

use crate::scoring::rubric;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};

static QUESTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(rubric::QUESTION_PATTERN).expect("Invalid question pattern"));

static AUTHOR_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(rubric::AUTHOR_MARKER_PATTERN).expect("Invalid author marker pattern")
});

static AUTHOR_META_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(rubric::AUTHOR_META_PATTERN).expect("Invalid author meta pattern"));

static DATE_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(rubric::DATE_MARKER_PATTERN).expect("Invalid date marker pattern"));

/// Counts elements matching a CSS selector; an invalid selector counts nothing
pub fn count_matching(document: &Html, css: &str) -> usize {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).count(),
        Err(_) => 0,
    }
}

/// Returns true if at least one element matches the selector
pub fn has_matching(document: &Html, css: &str) -> bool {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).next().is_some(),
        Err(_) => false,
    }
}

/// Elements whose text content is never rendered as page copy
const NON_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Concatenated text of the visible text nodes in the document
///
/// Text nodes are joined without separators, so `Hello<b>world</b>` yields
/// `Helloworld`. Text inside `<script>`, `<style>` and `<template>` is skipped.
pub fn document_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |element| NON_TEXT_ELEMENTS.contains(&element.name()))
            })
        })
        .map(|(_, text)| &**text)
        .collect()
}

/// Lower-cased document text, used by the phrase and pattern signals
pub fn lowercase_text(document: &Html) -> String {
    document_text(document).to_lowercase()
}

/// Number of whitespace-separated words in the document text
pub fn word_count(document: &Html) -> usize {
    document_text(document).split_whitespace().count()
}

/// Number of `h1`-`h6` elements
pub fn heading_count(document: &Html) -> usize {
    count_matching(document, "h1, h2, h3, h4, h5, h6")
}

/// Number of `h1`-`h3` elements
pub fn outline_heading_count(document: &Html) -> usize {
    count_matching(document, "h1, h2, h3")
}

/// Number of `<p>` elements
pub fn paragraph_count(document: &Html) -> usize {
    count_matching(document, "p")
}

/// Returns true if the page declares a viewport meta tag
pub fn has_viewport(document: &Html) -> bool {
    has_matching(document, r#"meta[name="viewport"]"#)
}

/// Content attribute of the first viewport meta tag
///
/// `None` when the page has no viewport tag, an empty string when the tag has
/// no `content` attribute.
pub fn viewport_content(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="viewport"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.value().attr("content").unwrap_or("").to_string())
}

/// Returns true if the page carries JSON-LD or microdata
pub fn has_structured_data(document: &Html) -> bool {
    has_matching(document, r#"script[type="application/ld+json"]"#)
        || has_matching(document, "[itemtype]")
}

/// Number of HTML5 sectioning elements
pub fn semantic_element_count(document: &Html) -> usize {
    count_matching(document, rubric::SEMANTIC_ELEMENTS)
}

/// Trimmed text of the first `<title>` element
pub fn title_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Returns true if the page has a descriptive title and a meta description
pub fn has_optimized_meta(document: &Html) -> bool {
    let descriptive_title = title_text(document)
        .map_or(false, |title| title.chars().count() > rubric::MIN_TITLE_CHARS);

    descriptive_title && has_matching(document, r#"meta[name="description"]"#)
}

/// Returns true if the lower-cased text contains a question
pub fn has_question(lower_text: &str) -> bool {
    QUESTION_REGEX.is_match(lower_text)
}

/// Returns true if the lower-cased text uses a conversational phrase
pub fn has_conversational_tone(lower_text: &str) -> bool {
    rubric::CONVERSATIONAL_PHRASES
        .iter()
        .any(|phrase| lower_text.contains(phrase))
}

/// Returns true if the lower-cased text mentions a trust signal
pub fn has_credibility_signal(lower_text: &str) -> bool {
    rubric::CREDIBILITY_PHRASES
        .iter()
        .any(|phrase| lower_text.contains(phrase))
}

/// Returns true if the page attributes its content to an author
///
/// Matches a class or id containing author/byline/writer, or a meta tag whose
/// name contains "author" (case-insensitive).
pub fn has_author_marker(document: &Html) -> bool {
    if let Ok(selector) = Selector::parse("[class], [id]") {
        let marked = document.select(&selector).any(|element| {
            let value = element.value();
            value
                .attr("class")
                .map_or(false, |class| AUTHOR_MARKER_REGEX.is_match(class))
                || value
                    .attr("id")
                    .map_or(false, |id| AUTHOR_MARKER_REGEX.is_match(id))
        });
        if marked {
            return true;
        }
    }

    match Selector::parse("meta[name]") {
        Ok(selector) => document.select(&selector).any(|element| {
            element
                .value()
                .attr("name")
                .map_or(false, |name| AUTHOR_META_REGEX.is_match(name))
        }),
        Err(_) => false,
    }
}

/// Returns true if the page shows a date
///
/// Matches a class containing date/time/published, or any `<time>` element.
pub fn has_date_marker(document: &Html) -> bool {
    if has_matching(document, "time") {
        return true;
    }

    match Selector::parse("[class]") {
        Ok(selector) => document.select(&selector).any(|element| {
            element
                .value()
                .attr("class")
                .map_or(false, |class| DATE_MARKER_REGEX.is_match(class))
        }),
        Err(_) => false,
    }
}
