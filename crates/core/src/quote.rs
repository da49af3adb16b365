//! Inspirational quotes shown on the home screen.

use serde::{Deserialize, Serialize};
use crate::id::QuoteId;

/// A quote with an optional author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier
    pub id: QuoteId,

    /// Quote body
    pub text: String,

    /// Who said it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Quote {
    /// Create a new quote.
    pub fn new(text: impl Into<String>, author: Option<String>) -> Self {
        Self {
            id: QuoteId::new(),
            text: text.into(),
            author,
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.text)?;
        if let Some(author) = &self.author {
            write!(f, " - {}", author)?;
        }
        Ok(())
    }
}
