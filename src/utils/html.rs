//! Narrative-text extraction from HTML pages

use scraper::{ElementRef, Html, Selector};

use crate::errors::BotError;

/// Block-level elements whose text is treated as page content.
pub const NARRATIVE_SELECTOR: &str = "p, h1, h2, article";

/// Extract the text of every narrative element, in document order, joined
/// with newlines.
///
/// Each element contributes its descendant text nodes, trimmed and joined
/// with single spaces. A document without matching elements yields an empty
/// string.
///
/// # Errors
///
/// Returns `BotError::ParseError` only if the element selector itself is
/// rejected by the parser.
pub fn extract_narrative_text(html: &str) -> Result<String, BotError> {
    let selector = Selector::parse(NARRATIVE_SELECTOR)
        .map_err(|e| BotError::ParseError(format!("Invalid selector: {e}")))?;
    let document = Html::parse_document(html);

    let blocks: Vec<String> = document.select(&selector).map(stripped_text).collect();
    Ok(blocks.join("\n"))
}

// Inline children are space-separated so `<p>Hello <b>world</b></p>` reads
// "Hello world" rather than "Helloworld".
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
