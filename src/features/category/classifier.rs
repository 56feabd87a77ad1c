use std::fmt;

use crate::features::text::normalize;

/// Semantic topic of a gloss. Stored by its Indonesian name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Vehicle,
    Occupation,
    Place,
    Activity,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "makanan",
            Category::Vehicle => "kendaraan",
            Category::Occupation => "pekerjaan",
            Category::Place => "tempat",
            Category::Activity => "aktivitas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Order matters: the first category with any matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "kimchi", "sup", "sop", "makanan", "makan", "rebusan", "samgyetang", "ayam", "nasi",
            "bakso", "sate", "rendang", "gudeg",
        ],
    ),
    (
        Category::Vehicle,
        &[
            "kereta", "sepeda", "motor", "bus", "pesawat", "mobil", "truk", "kapal", "helikopter",
            "bemo", "angkot",
        ],
    ),
    (
        Category::Occupation,
        &[
            "pekerjaan", "kerja", "pekerja", "buruh", "karyawan", "pegawai", "tenaga kerja",
            "dokter", "guru", "dosen",
        ],
    ),
    (
        Category::Place,
        &[
            "tempat", "lokasi", "gedung", "rumah", "sekolah", "kantor", "pasar", "stasiun",
            "bandara", "gudang", "perumahan",
        ],
    ),
    (
        Category::Activity,
        &[
            "aktivitas", "olahraga", "belajar", "kerja", "libur", "istirahat", "permainan",
            "bermain",
        ],
    ),
];

/// Tags a raw gloss with the first category whose keyword occurs in it.
pub fn classify(raw: Option<&str>) -> Option<Category> {
    let text = normalize(Some(raw?)).to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nasi_is_food() {
        assert_eq!(classify(Some("1. nasi putih")), Some(Category::Food));
    }

    #[test]
    fn kereta_is_vehicle() {
        assert_eq!(classify(Some("kereta")), Some(Category::Vehicle));
    }

    #[test]
    fn no_keyword_is_none() {
        assert_eq!(classify(Some("cantik, indah")), None);
        assert_eq!(classify(Some("")), None);
        assert_eq!(classify(None), None);
    }

    #[test]
    fn first_declared_category_wins() {
        // both a food and a vehicle keyword; food is declared first
        assert_eq!(classify(Some("makan di kereta")), Some(Category::Food));
        // "kerja" belongs to occupation and activity; occupation is declared first
        assert_eq!(classify(Some("kerja")), Some(Category::Occupation));
    }

    #[test]
    fn matching_ignores_case_and_urls() {
        assert_eq!(classify(Some("RUMAH SAKIT")), Some(Category::Place));
        assert_eq!(classify(Some("https://example.com/bus\nindah")), None);
    }

    #[test]
    fn keyword_table_shape() {
        assert_eq!(CATEGORY_KEYWORDS.len(), 5);
        for (category, keywords) in CATEGORY_KEYWORDS {
            assert!((6..=13).contains(&keywords.len()), "{} has {}", category, keywords.len());
            assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        }
    }
}
