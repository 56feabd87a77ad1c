use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::Serialize;

use crate::schema::vocabulary;

/// One lexical item as stored and served.
///
/// JSON keys keep the column names the front-end already reads
/// (`type`, `pos`, `terjemahan`, ...).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = vocabulary)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VocabularyEntry {
    pub id: i32,
    #[serde(rename = "no")]
    pub sequence_number: Option<i32>,
    #[serde(rename = "type")]
    pub headword: String,
    pub frequency: Option<f64>,
    #[serde(rename = "pos")]
    pub part_of_speech: Option<String>,
    #[serde(rename = "terjemahan")]
    pub translation: Option<String>,
    #[serde(rename = "definisi")]
    pub definition: Option<String>,
    #[serde(rename = "kolokasi")]
    pub collocations: Option<String>,
    #[serde(rename = "contoh_kalimat")]
    pub example_sentence: Option<String>,
    #[serde(rename = "gambar")]
    pub image: Option<String>,
    #[serde(rename = "kategori")]
    pub category: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl VocabularyEntry {
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Insertable)]
#[diesel(table_name = vocabulary)]
pub struct NewVocabularyEntry {
    pub sequence_number: Option<i32>,
    pub headword: String,
    pub frequency: Option<f64>,
    pub part_of_speech: Option<String>,
    pub translation: Option<String>,
    pub definition: Option<String>,
    pub collocations: Option<String>,
    pub example_sentence: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}
