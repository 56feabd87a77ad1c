pub mod category;
pub mod errors;
pub mod ingest;
pub mod placeholder;
pub mod search;
pub mod text;
