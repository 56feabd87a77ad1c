pub mod vocabulary;

pub use vocabulary::VocabularyRepository;
