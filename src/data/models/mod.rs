pub mod error_models;
pub mod search_models;
pub mod vocabulary_models;

pub use error_models::{AppError, IngestError};
pub use search_models::{
    CategoriesResponse, KategoriResponse, SearchCriteria, SearchParams, SearchResult,
};
pub use vocabulary_models::{NewVocabularyEntry, VocabularyEntry};
