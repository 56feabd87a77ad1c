pub mod search;
pub mod vocabulary;
