use image::ImageError;

use super::renderer::{DEFAULT_LABEL, PlaceholderRenderer};
use crate::data::models::VocabularyEntry;
use crate::features::text::normalize;

/// First word of the cleaned translation, or the headword when there is none.
pub fn display_gloss(entry: &VocabularyEntry) -> String {
    normalize(entry.translation.as_deref())
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| entry.headword.clone())
}

/// Fills in a rendered placeholder when the entry has no image of its own.
/// Nothing is written back to the store.
pub fn supply_image(
    mut entry: VocabularyEntry,
    renderer: &PlaceholderRenderer,
) -> Result<VocabularyEntry, ImageError> {
    if entry.has_image() {
        return Ok(entry);
    }

    let gloss = display_gloss(&entry);
    let label = entry.part_of_speech.as_deref().unwrap_or(DEFAULT_LABEL);
    entry.image = Some(renderer.render(&entry.headword, &gloss, label)?);
    Ok(entry)
}
