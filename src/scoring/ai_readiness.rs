//! AI Readiness scorer
//!
//! Looks for content an answer engine can quote directly: explicit
//! questions, second-person conversational copy and a clear heading outline.

use super::{rubric, signals, Category, CategoryResult};
use crate::page::PageSet;

/// Scores AI Readiness (max 30)
pub fn score_ai_readiness(pages: &PageSet) -> CategoryResult {
    let mut question_pages = 0usize;
    let mut conversational_pages = 0usize;

    // Lower-case each page's text once for both text signals
    for page in pages {
        let lower = signals::lowercase_text(&page.document);
        if signals::has_question(&lower) {
            question_pages += 1;
        }
        if signals::has_conversational_tone(&lower) {
            conversational_pages += 1;
        }
    }

    let total = pages.len() as f64;
    let clarity_ratio = pages.proportion(|page| {
        signals::outline_heading_count(&page.document) >= rubric::MIN_CONTEXT_HEADINGS
    });

    CategoryResult::from_details(
        Category::AiReadiness,
        [
            (
                "question_answering",
                rubric::QUESTION_ANSWERING.points(question_pages as f64 / total),
            ),
            (
                "conversational_content",
                rubric::CONVERSATIONAL_CONTENT.points(conversational_pages as f64 / total),
            ),
            ("contextual_clarity", rubric::CONTEXTUAL_CLARITY.points(clarity_ratio)),
        ],
    )
}
