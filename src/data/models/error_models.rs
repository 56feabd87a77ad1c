use diesel::result::Error as DieselError;
use thiserror::Error;

// Errors surfaced by the HTTP API
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    InvalidParameter(String),
    #[error("Database error")]
    DatabaseError(DieselError),
    #[error("Connection pool error")]
    PoolError(r2d2::Error),
    #[error("Image rendering error")]
    RenderError(image::ImageError),
    #[error("Background task failed: {0}")]
    TaskError(String),
}

// Errors raised while loading the workbook into an empty store
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to open workbook {path}: {source}")]
    Workbook {
        path: String,
        #[source]
        source: calamine::Error,
    },
    #[error("Sheet '{0}' not found in workbook")]
    MissingSheet(String),
    #[error("Failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("Sheet '{0}' has no header row")]
    EmptySheet(String),
    #[error("Sheet '{sheet}' is missing column '{column}'")]
    MissingColumn { sheet: String, column: &'static str },
    #[error("Sheet '{sheet}' row {row} has no TYPE value")]
    MissingHeadword { sheet: String, row: usize },
    #[error("Sheet '{sheet}' row {row} has no NO value")]
    MissingSequence { sheet: String, row: usize },
    #[error("Sequence number {0} is out of range")]
    SequenceOutOfRange(i64),
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),
}
