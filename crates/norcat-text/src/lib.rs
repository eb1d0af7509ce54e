pub mod categories;
pub mod keywords;
pub mod normalize;
pub mod sentences;
pub mod sentiment;
pub mod summarize;
mod tokens;

pub use categories::tag_categories;
pub use keywords::extract_keywords;
pub use normalize::normalize;
pub use sentiment::score;
pub use summarize::summarize;
