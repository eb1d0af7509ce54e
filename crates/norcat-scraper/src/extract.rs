//! Description extraction from product detail pages.

use scraper::{ElementRef, Html, Selector};

use norcat_core::ExtractionStrategy;
use norcat_text::normalize;

use crate::error::ScraperError;

const CONTENT_SELECTOR: &str = "div.reset_style.js-reset_style.js-adapMobile";

/// Extracts the normalized product description from a detail page.
///
/// Strategy order, first match wins:
/// - [`ExtractionStrategy::FirstParagraph`]: text of the content container's
///   first paragraph only.
/// - [`ExtractionStrategy::LeadDivs`]: the first three direct child `div`s,
///   non-empty texts joined with single spaces; a result containing the
///   literal substring `Product` is discarded. If nothing survives, fall
///   back to the first three paragraph descendants.
///
/// An empty return value means the product carries no usable description
/// and is skipped upstream.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] when the content container is
/// absent.
pub(crate) fn extract_description(
    html: &str,
    strategy: ExtractionStrategy,
    page_url: &str,
) -> Result<String, ScraperError> {
    let document = Html::parse_document(html);
    let content_selector = Selector::parse(CONTENT_SELECTOR).expect("valid content selector");
    let paragraph_selector = Selector::parse("p").expect("valid paragraph selector");

    let container = document
        .select(&content_selector)
        .next()
        .ok_or_else(|| ScraperError::MissingElement {
            selector: CONTENT_SELECTOR.to_string(),
            url: page_url.to_string(),
        })?;

    let text = match strategy {
        ExtractionStrategy::FirstParagraph => container
            .select(&paragraph_selector)
            .next()
            .map(|paragraph| normalize(&element_text(paragraph)))
            .unwrap_or_default(),
        ExtractionStrategy::LeadDivs => {
            let lead_divs = container
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|child| child.value().name() == "div")
                .take(3);
            let mut summary = normalize(&join_texts(lead_divs));
            if summary.contains("Product") {
                summary = String::new();
            }
            if summary.is_empty() {
                let paragraphs = container.select(&paragraph_selector).take(3);
                summary = normalize(&join_texts(paragraphs));
            }
            summary
        }
    };

    Ok(text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Joins the non-empty text contents of `elements` with single spaces.
fn join_texts<'a>(elements: impl Iterator<Item = ElementRef<'a>>) -> String {
    elements
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
