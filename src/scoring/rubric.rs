//! Declarative scoring rubric
//!
//! Every threshold, point value and phrase list the scorers use lives here, so
//! the rubric can be reviewed and tested as a table and swapped without
//! touching the scoring control flow. Bump `RUBRIC_VERSION` whenever a value
//! changes; it is stamped into every report.

/// Version stamped into reports produced with this rubric
pub const RUBRIC_VERSION: &str = "2025.1";

/// How a measured value is compared against a band threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `value >= threshold`
    AtLeast,
    /// `value > threshold`
    GreaterThan,
    /// `value < threshold`
    LessThan,
}

impl Comparison {
    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
        }
    }
}

/// One rung of a ladder: reaching `threshold` earns `points`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub threshold: f64,
    pub points: u32,
}

impl Band {
    pub const fn new(threshold: f64, points: u32) -> Self {
        Self { threshold, points }
    }
}

/// An ordered set of bands evaluated first-match-wins
///
/// Bands are listed from best to worst; the first band whose comparison holds
/// decides the points. When none holds, `fallback` is awarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    pub comparison: Comparison,
    pub bands: &'static [Band],
    pub fallback: u32,
}

impl Ladder {
    pub const fn new(comparison: Comparison, bands: &'static [Band], fallback: u32) -> Self {
        Self {
            comparison,
            bands,
            fallback,
        }
    }

    /// Maps a measured value to points
    pub fn points(&self, value: f64) -> u32 {
        self.bands
            .iter()
            .find(|band| self.comparison.holds(value, band.threshold))
            .map_or(self.fallback, |band| band.points)
    }

    /// The best achievable points on this ladder
    pub fn max_points(&self) -> u32 {
        self.bands
            .iter()
            .map(|band| band.points)
            .max()
            .unwrap_or(0)
            .max(self.fallback)
    }
}

/// Awards `points` when `present` holds
pub fn flag_points(present: bool, points: u32) -> u32 {
    if present {
        points
    } else {
        0
    }
}

// ===== Content Quality (max 80) =====

/// Average words per page
pub const CONTENT_DEPTH: Ladder = Ladder::new(
    Comparison::AtLeast,
    &[Band::new(1000.0, 25), Band::new(500.0, 20), Band::new(300.0, 15)],
    10,
);

/// Average `h1`-`h6` headings per page
pub const SEMANTIC_RICHNESS: Ladder = Ladder::new(
    Comparison::AtLeast,
    &[Band::new(5.0, 20), Band::new(3.0, 15)],
    10,
);

/// Average paragraphs per page
pub const READABILITY: Ladder = Ladder::new(Comparison::AtLeast, &[Band::new(5.0, 15)], 10);

// ===== Technical Performance (max 50) =====

/// Start URL served over HTTPS
pub const SSL_SECURITY_POINTS: u32 = 10;

/// Proportion of pages with clean URLs
pub const CLEAN_URLS: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.8, 10), Band::new(0.5, 7)],
    3,
);

/// Proportion of pages with a viewport meta tag
pub const MOBILE_FRIENDLY: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.8, 15), Band::new(0.5, 10)],
    5,
);

/// Average response time in seconds over timed pages
pub const PAGE_SPEED: Ladder = Ladder::new(
    Comparison::LessThan,
    &[Band::new(1.0, 15), Band::new(2.0, 10)],
    5,
);

// ===== Semantic Structure (max 35) =====

/// Proportion of pages with JSON-LD or microdata
pub const STRUCTURED_DATA: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.5, 15), Band::new(0.0, 10)],
    0,
);

/// Proportion of pages with enough HTML5 sectioning elements
pub const SEMANTIC_HTML: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.7, 10), Band::new(0.3, 7)],
    3,
);

/// Proportion of pages with a descriptive title and a meta description
pub const META_OPTIMIZATION: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.8, 10), Band::new(0.5, 7)],
    3,
);

/// Sectioning elements counted by the semantic HTML signal
pub const SEMANTIC_ELEMENTS: &str = "article, section, nav, header, footer, aside, main";

/// Sectioning elements a page needs to count as semantic
pub const MIN_SEMANTIC_ELEMENTS: usize = 3;

/// Titles must be longer than this many characters
pub const MIN_TITLE_CHARS: usize = 10;

// ===== AI Readiness (max 30) =====

/// Proportion of pages phrased as questions
pub const QUESTION_ANSWERING: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.3, 10), Band::new(0.0, 7)],
    0,
);

/// Proportion of pages written in a conversational tone
pub const CONVERSATIONAL_CONTENT: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.5, 10), Band::new(0.2, 7)],
    0,
);

/// Proportion of pages with a clear `h1`-`h3` outline
pub const CONTEXTUAL_CLARITY: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.7, 10), Band::new(0.4, 7)],
    0,
);

/// Question word followed, on the same line, by a question mark
pub const QUESTION_PATTERN: &str = r"\b(what|how|why|when|where|who)\b.*\?";

/// Phrases that mark conversational copy (matched on lower-cased text)
pub const CONVERSATIONAL_PHRASES: &[&str] = &[
    "you can",
    "let's",
    "here's how",
    "follow these steps",
    "you'll find",
];

/// `h1`-`h3` headings a page needs to count as clearly structured
pub const MIN_CONTEXT_HEADINGS: usize = 3;

// ===== E-E-A-T (max 20) =====

/// Proportion of pages naming an author
pub const AUTHOR_INFO: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.5, 7), Band::new(0.0, 4)],
    0,
);

/// Proportion of pages carrying trust phrases
pub const CREDIBILITY_SIGNALS: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.3, 8), Band::new(0.0, 5)],
    0,
);

/// Proportion of pages showing a publication date
pub const CONTENT_FRESHNESS: Ladder = Ladder::new(
    Comparison::GreaterThan,
    &[Band::new(0.5, 5), Band::new(0.0, 3)],
    0,
);

/// Class or id values that mark author information
pub const AUTHOR_MARKER_PATTERN: &str = r"(?i)author|byline|writer";

/// Meta names that carry author information
pub const AUTHOR_META_PATTERN: &str = r"(?i)author";

/// Class values that mark dates
pub const DATE_MARKER_PATTERN: &str = r"(?i)date|time|published";

/// Trust phrases (matched on lower-cased text)
pub const CREDIBILITY_PHRASES: &[&str] = &[
    "about us",
    "contact",
    "privacy policy",
    "terms",
    "certification",
    "accredited",
];

// ===== Mobile & AI Optimization (max 15) =====

/// Start URL declares a device-width viewport
pub const RESPONSIVE_DESIGN_POINTS: u32 = 10;

/// Viewport content that marks a responsive layout
pub const RESPONSIVE_VIEWPORT_MARKER: &str = "width=device-width";

/// Probe response time in seconds
pub const CORE_WEB_VITALS: Ladder = Ladder::new(Comparison::LessThan, &[Band::new(2.0, 5)], 0);
