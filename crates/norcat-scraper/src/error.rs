use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("expected element \"{selector}\" not found at {url}")]
    MissingElement { selector: String, url: String },

    #[error("product heading at {url} has no data-url attribute")]
    MissingProductUrl { url: String },

    #[error("catalog menu entry has no href")]
    MissingCatalogHref,

    #[error("cannot resolve \"{href}\" against \"{base}\": {reason}")]
    InvalidUrl {
        href: String,
        base: String,
        reason: String,
    },
}
