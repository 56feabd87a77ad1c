use std::path::Path;

use diesel::SqliteConnection;

use super::workbook::{SheetBatch, read_workbook};
use crate::data::models::{IngestError, NewVocabularyEntry};
use crate::data::repositories::VocabularyRepository;
use crate::features::category::classify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadySeeded { existing: i64 },
    Inserted { count: usize },
}

/// Flattens the ordered sheet batches into insertable rows.
///
/// The first batch keeps its `NO` values. Every later batch is shifted by the
/// largest number merged so far and must have `NO` on every row, so numbers
/// stay unique across sheets. Each row is classified here, once.
pub fn merge_batches(batches: Vec<SheetBatch>) -> Result<Vec<NewVocabularyEntry>, IngestError> {
    let mut merged = Vec::with_capacity(batches.iter().map(|b| b.records.len()).sum());
    let mut offset: i64 = 0;

    for (index, batch) in batches.into_iter().enumerate() {
        let mut batch_max = offset;

        for record in batch.records {
            let sequence_number = match record.sequence_number {
                Some(no) if index == 0 => Some(no),
                Some(no) => Some(no + offset),
                None if index == 0 => None,
                None => {
                    return Err(IngestError::MissingSequence {
                        sheet: batch.sheet,
                        row: record.row,
                    });
                }
            };
            if let Some(no) = sequence_number {
                batch_max = batch_max.max(no);
            }

            let sequence_number = sequence_number
                .map(|no| i32::try_from(no).map_err(|_| IngestError::SequenceOutOfRange(no)))
                .transpose()?;
            let category = classify(record.translation.as_deref()).map(|c| c.as_str().to_string());

            merged.push(NewVocabularyEntry {
                sequence_number,
                headword: record.headword,
                frequency: record.frequency,
                part_of_speech: record.part_of_speech,
                translation: record.translation,
                definition: record.definition,
                collocations: record.collocations,
                example_sentence: record.example_sentence,
                image: record.image,
                category,
            });
        }

        offset = batch_max;
    }

    Ok(merged)
}

/// Inserts the batches only if the store is empty.
pub fn ensure_seeded(
    conn: &mut SqliteConnection,
    batches: Vec<SheetBatch>,
) -> Result<SeedOutcome, IngestError> {
    let existing = VocabularyRepository::count(conn)?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let entries = merge_batches(batches)?;
    let count = VocabularyRepository::insert_all(conn, &entries)?;
    Ok(SeedOutcome::Inserted { count })
}

/// Startup seeding: the workbook is only opened when the store is empty.
pub fn seed_from_workbook(
    conn: &mut SqliteConnection,
    path: &Path,
    sheets: &[String],
) -> Result<SeedOutcome, IngestError> {
    let existing = VocabularyRepository::count(conn)?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let batches = read_workbook(path, sheets)?;
    for batch in &batches {
        log::info!("Loaded {} from {}", batch.records.len(), batch.sheet);
    }
    ensure_seeded(conn, batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ingest::RawRecord;
    use diesel::Connection;

    fn record(row: usize, no: Option<i64>, headword: &str, translation: Option<&str>) -> RawRecord {
        RawRecord {
            row,
            sequence_number: no,
            headword: headword.to_string(),
            translation: translation.map(str::to_string),
            ..Default::default()
        }
    }

    fn batch(sheet: &str, records: Vec<RawRecord>) -> SheetBatch {
        SheetBatch {
            sheet: sheet.to_string(),
            records,
        }
    }

    fn numbered(sheet: &str, count: i64) -> SheetBatch {
        batch(
            sheet,
            (1..=count)
                .map(|no| record(no as usize + 1, Some(no), &format!("{}-{}", sheet, no), None))
                .collect(),
        )
    }

    #[test]
    fn second_batch_is_offset_by_first_batch_max() {
        let merged = merge_batches(vec![numbered("EPS 1", 500), numbered("EPS 2", 300)]).unwrap();
        assert_eq!(merged.len(), 800);

        let second: Vec<i32> = merged[500..].iter().filter_map(|e| e.sequence_number).collect();
        assert_eq!(second.first(), Some(&501));
        assert_eq!(second.last(), Some(&800));

        let mut all: Vec<i32> = merged.iter().filter_map(|e| e.sequence_number).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
    }

    #[test]
    fn offset_uses_max_not_last() {
        let first = batch(
            "EPS 1",
            vec![record(2, Some(40), "a", None), record(3, Some(7), "b", None)],
        );
        let second = batch("EPS 2", vec![record(2, Some(1), "c", None)]);
        let merged = merge_batches(vec![first, second]).unwrap();
        assert_eq!(merged[2].sequence_number, Some(41));
    }

    #[test]
    fn first_batch_may_lack_numbers_but_later_batches_may_not() {
        let first = batch("EPS 1", vec![record(2, None, "a", None), record(3, Some(2), "b", None)]);
        let merged = merge_batches(vec![first.clone()]).unwrap();
        assert_eq!(merged[0].sequence_number, None);

        let second = batch("EPS 2", vec![record(5, None, "c", None)]);
        let err = merge_batches(vec![first, second]).unwrap_err();
        assert!(matches!(err, IngestError::MissingSequence { row: 5, .. }));
    }

    #[test]
    fn rows_are_classified_once_at_merge() {
        let merged = merge_batches(vec![batch(
            "EPS 1",
            vec![
                record(2, Some(1), "밥", Some("1. nasi")),
                record(3, Some(2), "예쁘다", Some("cantik")),
            ],
        )])
        .unwrap();
        assert_eq!(merged[0].category.as_deref(), Some("makanan"));
        assert_eq!(merged[1].category, None);
    }

    #[test]
    fn seeding_runs_only_on_an_empty_store() {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        VocabularyRepository::ensure_schema(&mut conn).unwrap();

        let batches = vec![numbered("EPS 1", 3), numbered("EPS 2", 2)];
        let outcome = ensure_seeded(&mut conn, batches).unwrap();
        assert_eq!(outcome, SeedOutcome::Inserted { count: 5 });

        let again = ensure_seeded(&mut conn, vec![numbered("EPS 1", 3)]).unwrap();
        assert_eq!(again, SeedOutcome::AlreadySeeded { existing: 5 });
        assert_eq!(VocabularyRepository::count(&mut conn).unwrap(), 5);
    }

    #[test]
    fn failed_merge_leaves_store_empty() {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        VocabularyRepository::ensure_schema(&mut conn).unwrap();

        let second = batch("EPS 2", vec![record(2, None, "x", None)]);
        assert!(ensure_seeded(&mut conn, vec![numbered("EPS 1", 2), second]).is_err());
        assert_eq!(VocabularyRepository::count(&mut conn).unwrap(), 0);
    }
}
