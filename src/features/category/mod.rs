pub mod classifier;

pub use classifier::{CATEGORY_KEYWORDS, Category, classify};
