pub mod seeder;
pub mod workbook;

pub use seeder::{SeedOutcome, ensure_seeded, merge_batches, seed_from_workbook};
pub use workbook::{RawRecord, SheetBatch, read_workbook};
