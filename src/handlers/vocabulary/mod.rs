pub mod categories;
pub mod entry;

pub use categories::{list_categories, list_kategori};
pub use entry::get_vocabulary;
