//! Page-structure parsing for the catalog's root and listing pages.
//!
//! All DOM work happens in synchronous helpers so parsed documents never
//! cross an await point.

use scraper::{Html, Selector};

use crate::error::ScraperError;

const MENU_SELECTOR: &str = "div.menu";
const MENU_ENTRY_SELECTOR: &str = "li.mainlevel";
const GRID_SELECTOR: &str = "div.e_box.e_box-000.p_products";
const PRODUCT_BOX_SELECTOR: &str = "div.e_box.e_ProductBox-001.p_Product";

/// Finds the catalog link `href` in the root page's navigation menu.
///
/// The products link is positionally identified as the second top-level menu
/// entry. Returns `Ok(None)` when fewer than two entries exist — the crawl
/// is a silent no-op in that case, not an error.
///
/// # Errors
///
/// - [`ScraperError::MissingElement`] — no menu container, or the second
///   entry has no anchor.
/// - [`ScraperError::MissingCatalogHref`] — the anchor has no (or an empty)
///   `href`.
pub(crate) fn parse_products_href(
    html: &str,
    page_url: &str,
) -> Result<Option<String>, ScraperError> {
    let document = Html::parse_document(html);
    let menu_selector = Selector::parse(MENU_SELECTOR).expect("valid menu selector");
    let entry_selector = Selector::parse(MENU_ENTRY_SELECTOR).expect("valid menu entry selector");
    let anchor_selector = Selector::parse("a").expect("valid anchor selector");

    let menu = document
        .select(&menu_selector)
        .next()
        .ok_or_else(|| ScraperError::MissingElement {
            selector: MENU_SELECTOR.to_string(),
            url: page_url.to_string(),
        })?;

    let entries: Vec<_> = menu.select(&entry_selector).collect();
    if entries.len() < 2 {
        tracing::info!(url = page_url, entries = entries.len(), "menu has fewer than two entries");
        return Ok(None);
    }

    let link = entries[1]
        .select(&anchor_selector)
        .next()
        .ok_or_else(|| ScraperError::MissingElement {
            selector: "li.mainlevel a".to_string(),
            url: page_url.to_string(),
        })?;

    match link.value().attr("href") {
        Some(href) if !href.is_empty() => Ok(Some(href.to_string())),
        _ => Err(ScraperError::MissingCatalogHref),
    }
}

/// Enumerates product `data-url` values from the listing page's grid.
///
/// Boxes without a heading are skipped silently; a heading without a
/// `data-url` attribute is a structural error.
///
/// # Errors
///
/// - [`ScraperError::MissingElement`] — no product grid container.
/// - [`ScraperError::MissingProductUrl`] — a heading lacks `data-url`.
pub(crate) fn parse_product_data_urls(
    html: &str,
    page_url: &str,
) -> Result<Vec<String>, ScraperError> {
    let document = Html::parse_document(html);
    let grid_selector = Selector::parse(GRID_SELECTOR).expect("valid grid selector");
    let box_selector = Selector::parse(PRODUCT_BOX_SELECTOR).expect("valid product box selector");
    let heading_selector = Selector::parse("h3").expect("valid heading selector");

    let grid = document
        .select(&grid_selector)
        .next()
        .ok_or_else(|| ScraperError::MissingElement {
            selector: GRID_SELECTOR.to_string(),
            url: page_url.to_string(),
        })?;

    let mut data_urls = Vec::new();
    for product_box in grid.select(&box_selector) {
        let Some(heading) = product_box.select(&heading_selector).next() else {
            tracing::debug!(url = page_url, "product box has no heading; skipping");
            continue;
        };
        let data_url =
            heading
                .value()
                .attr("data-url")
                .ok_or_else(|| ScraperError::MissingProductUrl {
                    url: page_url.to_string(),
                })?;
        data_urls.push(data_url.to_string());
    }

    Ok(data_urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://example.com/";

    fn menu_html(entries: &str) -> String {
        format!("<html><body><div class=\"menu\"><ul>{entries}</ul></div></body></html>")
    }

    #[test]
    fn products_href_is_the_second_menu_entry() {
        let html = menu_html(
            "<li class=\"mainlevel\"><a href=\"/\">Home</a></li>\
             <li class=\"mainlevel\"><a href=\"/product/\">Products</a></li>\
             <li class=\"mainlevel\"><a href=\"/about/\">About</a></li>",
        );
        let href = parse_products_href(&html, PAGE_URL).unwrap();
        assert_eq!(href.as_deref(), Some("/product/"));
    }

    #[test]
    fn fewer_than_two_entries_is_a_no_op() {
        let html = menu_html("<li class=\"mainlevel\"><a href=\"/\">Home</a></li>");
        let href = parse_products_href(&html, PAGE_URL).unwrap();
        assert!(href.is_none());
    }

    #[test]
    fn missing_menu_container_is_an_error() {
        let err = parse_products_href("<html><body></body></html>", PAGE_URL).unwrap_err();
        assert!(
            matches!(err, ScraperError::MissingElement { ref selector, .. } if selector == "div.menu"),
            "expected MissingElement for div.menu, got: {err:?}"
        );
    }

    #[test]
    fn missing_href_is_a_controlled_error() {
        let html = menu_html(
            "<li class=\"mainlevel\"><a href=\"/\">Home</a></li>\
             <li class=\"mainlevel\"><a>Products</a></li>",
        );
        let err = parse_products_href(&html, PAGE_URL).unwrap_err();
        assert!(matches!(err, ScraperError::MissingCatalogHref));
    }

    #[test]
    fn empty_href_is_a_controlled_error() {
        let html = menu_html(
            "<li class=\"mainlevel\"><a href=\"/\">Home</a></li>\
             <li class=\"mainlevel\"><a href=\"\">Products</a></li>",
        );
        let err = parse_products_href(&html, PAGE_URL).unwrap_err();
        assert!(matches!(err, ScraperError::MissingCatalogHref));
    }

    fn grid_html(boxes: &str) -> String {
        format!(
            "<html><body><div class=\"e_box e_box-000 p_products\">{boxes}</div></body></html>"
        )
    }

    fn product_box(heading: &str) -> String {
        format!("<div class=\"e_box e_ProductBox-001 p_Product\">{heading}</div>")
    }

    #[test]
    fn data_urls_are_enumerated_in_grid_order() {
        let boxes = [
            product_box("<h3 data-url=\"/product/1.html\">One</h3>"),
            product_box("<h3 data-url=\"/product/2.html\">Two</h3>"),
        ]
        .concat();
        let urls = parse_product_data_urls(&grid_html(&boxes), PAGE_URL).unwrap();
        assert_eq!(urls, vec!["/product/1.html", "/product/2.html"]);
    }

    #[test]
    fn box_without_heading_is_skipped() {
        let boxes = [
            product_box("<span>no heading</span>"),
            product_box("<h3 data-url=\"/product/2.html\">Two</h3>"),
        ]
        .concat();
        let urls = parse_product_data_urls(&grid_html(&boxes), PAGE_URL).unwrap();
        assert_eq!(urls, vec!["/product/2.html"]);
    }

    #[test]
    fn heading_without_data_url_is_an_error() {
        let boxes = product_box("<h3>Nameless</h3>");
        let err = parse_product_data_urls(&grid_html(&boxes), PAGE_URL).unwrap_err();
        assert!(matches!(err, ScraperError::MissingProductUrl { .. }));
    }

    #[test]
    fn missing_grid_container_is_an_error() {
        let err =
            parse_product_data_urls("<html><body></body></html>", PAGE_URL).unwrap_err();
        assert!(matches!(err, ScraperError::MissingElement { .. }));
    }

    #[test]
    fn empty_grid_yields_no_urls() {
        let urls = parse_product_data_urls(&grid_html(""), PAGE_URL).unwrap();
        assert!(urls.is_empty());
    }
}
