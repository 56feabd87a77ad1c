use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::models::{AppError, VocabularyEntry};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Raw query string of `/api/search`.
///
/// Everything arrives as text so malformed numbers can be reported with a
/// descriptive message instead of the extractor's generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub kategori: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub include_images: Option<String>,
}

impl SearchParams {
    pub fn criteria(&self) -> Result<SearchCriteria, AppError> {
        let criteria = SearchCriteria {
            part_of_speech: non_blank(self.category.as_deref()),
            category: non_blank(self.kategori.as_deref()),
            query: non_blank(self.q.as_deref()).map(|q| q.to_lowercase()),
            page: parse_number("page", self.page.as_deref(), DEFAULT_PAGE)?,
            per_page: parse_number("per_page", self.per_page.as_deref(), DEFAULT_PER_PAGE)?,
        };
        criteria.validate()?;
        Ok(criteria)
    }

    /// Only a literal `true` (any case) enables images; absence means true.
    pub fn include_images(&self) -> bool {
        self.include_images
            .as_deref()
            .map_or(true, |value| value.trim().eq_ignore_ascii_case("true"))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_number(name: &str, value: Option<&str>, default: i64) -> Result<i64, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            AppError::InvalidParameter(format!(
                "{} must be a positive integer, got '{}'",
                name, raw
            ))
        }),
    }
}

/// Validated search request. `query` is already trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SearchCriteria {
    pub part_of_speech: Option<String>,
    pub category: Option<String>,
    pub query: Option<String>,
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: i64,
    #[validate(range(min = 1, message = "per_page must be a positive integer"))]
    pub per_page: i64,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            part_of_speech: None,
            category: None,
            query: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub results: Vec<VocabularyEntry>,
    pub total: usize,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct KategoriResponse {
    pub kategori: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, per_page: Option<&str>) -> SearchParams {
        SearchParams {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_apply_when_absent() {
        let criteria = SearchParams::default().criteria().unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn blank_filters_are_ignored_and_query_is_lowercased() {
        let params = SearchParams {
            q: Some("  NASI ".into()),
            category: Some("   ".into()),
            kategori: Some("makanan".into()),
            ..Default::default()
        };
        let criteria = params.criteria().unwrap();
        assert_eq!(criteria.query.as_deref(), Some("nasi"));
        assert_eq!(criteria.part_of_speech, None);
        assert_eq!(criteria.category.as_deref(), Some("makanan"));
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        let err = params(Some("abc"), None).criteria().unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter(ref msg) if msg.contains("page")));
    }

    #[test]
    fn zero_and_negative_values_are_rejected() {
        assert!(matches!(
            params(Some("0"), None).criteria(),
            Err(AppError::InvalidParameter(_))
        ));
        assert!(matches!(
            params(None, Some("-5")).criteria(),
            Err(AppError::InvalidParameter(_))
        ));
    }

    #[test]
    fn include_images_defaults_to_true() {
        assert!(SearchParams::default().include_images());
        let mut params = SearchParams::default();
        params.include_images = Some("TRUE".into());
        assert!(params.include_images());
        params.include_images = Some("yes".into());
        assert!(!params.include_images());
        params.include_images = Some("false".into());
        assert!(!params.include_images());
    }
}
