//! Prompt templates for number generation.

use serde::{Deserialize, Serialize};

/// System prompt sent with every request.
pub const SYSTEM_PROMPT: &str =
    "You are a precise number generator. Always respond with only the requested number.";

/// Phrasing used to ask the model for a number.
///
/// The phrasing measurably shifts the sampled distribution, so the style is
/// part of the campaign definition and is recorded in the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Plain instruction to generate a random number.
    #[default]
    Direct,
    /// Asks the model to role-play a random number generator.
    Creative,
    /// Formal phrasing with explicit interval notation.
    Precise,
}

impl PromptStyle {
    /// Renders the user prompt for a range.
    pub fn render(&self, min: f64, max: f64) -> String {
        match self {
            PromptStyle::Direct => format!(
                "Generate a random number between {} and {}. \
                 Return only the number, no explanation.",
                min, max
            ),
            PromptStyle::Creative => format!(
                "Imagine you're a random number generator. \
                 Pick any number between {} and {}. Just return the number.",
                min, max
            ),
            PromptStyle::Precise => format!(
                "Please provide exactly one number that falls within the range [{}, {}]. \
                 Return only the numeric value.",
                min, max
            ),
        }
    }

    /// All styles, for CLI listings.
    pub fn all() -> [PromptStyle; 3] {
        [PromptStyle::Direct, PromptStyle::Creative, PromptStyle::Precise]
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(PromptStyle::Direct),
            "creative" => Ok(PromptStyle::Creative),
            "precise" => Ok(PromptStyle::Precise),
            _ => Err(format!(
                "Unknown prompt style: {}. Supported: direct, creative, precise",
                s
            )),
        }
    }
}

impl std::fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptStyle::Direct => write!(f, "direct"),
            PromptStyle::Creative => write!(f, "creative"),
            PromptStyle::Precise => write!(f, "precise"),
        }
    }
}
