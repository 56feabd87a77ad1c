use diesel::SqliteConnection;

use crate::data::models::{SearchCriteria, SearchResult, VocabularyEntry};
use crate::data::repositories::VocabularyRepository;
use crate::features::text::normalize;

/// Linear-scan search over the whole vocabulary.
///
/// Every request reloads the candidates and re-normalizes translations. There
/// is no index, which keeps results in storage order; this is only viable
/// because the corpus stays in the low thousands.
pub struct SearchEngine;

impl SearchEngine {
    pub fn run(
        conn: &mut SqliteConnection,
        criteria: &SearchCriteria,
    ) -> Result<SearchResult, diesel::result::Error> {
        let candidates = VocabularyRepository::load_filtered(
            conn,
            criteria.part_of_speech.as_deref(),
            criteria.category.as_deref(),
        )?;
        Ok(SearchEngine::search_entries(candidates, criteria))
    }

    pub fn search_entries(
        entries: Vec<VocabularyEntry>,
        criteria: &SearchCriteria,
    ) -> SearchResult {
        let matched = SearchEngine::filter_entries(entries, criteria.query.as_deref());
        let total = matched.len();

        SearchResult {
            results: SearchEngine::paginate(matched, criteria.page, criteria.per_page),
            total,
            page: criteria.page,
            per_page: criteria.per_page,
        }
    }

    pub fn filter_entries(
        entries: Vec<VocabularyEntry>,
        query: Option<&str>,
    ) -> Vec<VocabularyEntry> {
        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        if needle.is_empty() {
            return entries;
        }

        entries
            .into_iter()
            .filter(|entry| SearchEngine::matches(entry, &needle))
            .collect()
    }

    /// `needle` must already be lowercased.
    pub fn matches(entry: &VocabularyEntry, needle: &str) -> bool {
        if entry.headword.to_lowercase().contains(needle) {
            return true;
        }

        normalize(entry.translation.as_deref())
            .to_lowercase()
            .contains(needle)
    }

    pub fn paginate<T>(items: Vec<T>, page: i64, per_page: i64) -> Vec<T> {
        let skip = page.saturating_sub(1).saturating_mul(per_page);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(per_page).unwrap_or(0);

        items.into_iter().skip(skip).take(take).collect()
    }
}
