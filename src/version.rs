// Version information for the Fabstir Summarizer Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-content-scoring-2026-08-25";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 0;

/// Minor version number
pub const VERSION_MINOR: u32 = 1;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2026-08-25";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "webpage-summarization",
    "section-extraction",
    "relevance-scoring",
    "prioritized-budgeting",
    "conversation-memory",
    "grounded-answers",
    "gemini-completion",
    "rest-api",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir Summarizer Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
