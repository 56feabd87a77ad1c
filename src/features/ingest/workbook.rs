use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::data::models::IngestError;

pub const COLUMN_NO: &str = "NO";
pub const COLUMN_TYPE: &str = "TYPE";
pub const COLUMN_FREQUENCY: &str = "FREQUENCY";
pub const COLUMN_POS: &str = "POS";
pub const COLUMN_TRANSLATION: &str = "TERJEMAHAN";
pub const COLUMN_DEFINITION: &str = "DEFINISI";
pub const COLUMN_COLLOCATIONS: &str = "KOLOKASI";
pub const COLUMN_EXAMPLE: &str = "CONTOH KALIMAT";
pub const COLUMN_IMAGE: &str = "GAMBAR";

/// One spreadsheet row before merging. `headword` is checked when reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub row: usize,
    pub sequence_number: Option<i64>,
    pub headword: String,
    pub frequency: Option<f64>,
    pub part_of_speech: Option<String>,
    pub translation: Option<String>,
    pub definition: Option<String>,
    pub collocations: Option<String>,
    pub example_sentence: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetBatch {
    pub sheet: String,
    pub records: Vec<RawRecord>,
}

struct ColumnIndex {
    no: usize,
    headword: usize,
    frequency: usize,
    part_of_speech: usize,
    translation: usize,
    definition: usize,
    collocations: usize,
    example_sentence: usize,
    image: usize,
}

impl ColumnIndex {
    fn from_header(sheet: &str, header: &[Data]) -> Result<Self, IngestError> {
        let labels: Vec<Option<String>> = header
            .iter()
            .map(|cell| cell_text(cell).map(|label| label.trim().to_uppercase()))
            .collect();
        let find = |column: &'static str| {
            labels
                .iter()
                .position(|label| label.as_deref() == Some(column))
                .ok_or_else(|| IngestError::MissingColumn {
                    sheet: sheet.to_string(),
                    column,
                })
        };

        Ok(ColumnIndex {
            no: find(COLUMN_NO)?,
            headword: find(COLUMN_TYPE)?,
            frequency: find(COLUMN_FREQUENCY)?,
            part_of_speech: find(COLUMN_POS)?,
            translation: find(COLUMN_TRANSLATION)?,
            definition: find(COLUMN_DEFINITION)?,
            collocations: find(COLUMN_COLLOCATIONS)?,
            example_sentence: find(COLUMN_EXAMPLE)?,
            image: find(COLUMN_IMAGE)?,
        })
    }
}

/// Reads the named sheets, in order, from an `.xlsx`/`.xls`/`.ods` workbook.
pub fn read_workbook(path: &Path, sheets: &[String]) -> Result<Vec<SheetBatch>, IngestError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.display().to_string(),
        source,
    })?;
    let available = workbook.sheet_names();

    let mut batches = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        if !available.iter().any(|name| name == sheet) {
            return Err(IngestError::MissingSheet(sheet.clone()));
        }
        let range = workbook
            .worksheet_range(sheet)
            .map_err(|source| IngestError::Sheet {
                sheet: sheet.clone(),
                source,
            })?;
        batches.push(SheetBatch {
            sheet: sheet.clone(),
            records: read_sheet(sheet, &range)?,
        });
    }

    Ok(batches)
}

/// The first row is the header. Blank rows are skipped; a row without a
/// `TYPE` value fails the whole sheet.
pub fn read_sheet(sheet: &str, range: &Range<Data>) -> Result<Vec<RawRecord>, IngestError> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| IngestError::EmptySheet(sheet.to_string()))?;
    let columns = ColumnIndex::from_header(sheet, header)?;
    let first_row = range.start().map_or(0, |(row, _)| row as usize) + 1;

    let mut records = Vec::new();
    for (offset, cells) in rows.enumerate() {
        if cells.iter().all(|cell| cell_text(cell).is_none()) {
            continue;
        }
        // 1-based spreadsheet row, header included
        let row = first_row + offset + 1;
        let cell = |index: usize| cells.get(index).unwrap_or(&Data::Empty);

        let headword =
            cell_text(cell(columns.headword)).ok_or_else(|| IngestError::MissingHeadword {
                sheet: sheet.to_string(),
                row,
            })?;

        records.push(RawRecord {
            row,
            sequence_number: cell_number(cell(columns.no)).map(|n| n.trunc() as i64),
            headword,
            frequency: cell_number(cell(columns.frequency)),
            part_of_speech: cell_text(cell(columns.part_of_speech)),
            translation: cell_text(cell(columns.translation)),
            definition: cell_text(cell(columns.definition)),
            collocations: cell_text(cell(columns.collocations)),
            example_sentence: cell_text(cell(columns.example_sentence)),
            image: cell_text(cell(columns.image)),
        });
    }

    Ok(records)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) if text.is_empty() => None,
        Data::String(text) => Some(text.clone()),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            Some(format!("{}", *value as i64))
        }
        other => Some(other.to_string()),
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(value) => Some(*value as f64),
        Data::Float(value) if value.is_finite() => Some(*value),
        Data::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
