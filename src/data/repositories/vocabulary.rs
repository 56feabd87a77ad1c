use crate::data::models::{NewVocabularyEntry, VocabularyEntry};
use crate::schema::vocabulary;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;

const CREATE_VOCABULARY_TABLE: &str = "CREATE TABLE IF NOT EXISTS vocabulary (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    no INTEGER, type TEXT NOT NULL, frequency REAL, pos TEXT,
    terjemahan TEXT, definisi TEXT, kolokasi TEXT, contoh_kalimat TEXT,
    gambar TEXT, kategori TEXT, created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(QueryableByName)]
struct ColumnInfo {
    #[diesel(sql_type = Text)]
    name: String,
}

pub struct VocabularyRepository;

impl VocabularyRepository {
    /// Creates the table and adds `kategori` to databases created before it existed.
    pub fn ensure_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
        sql_query(CREATE_VOCABULARY_TABLE).execute(conn)?;

        let columns = sql_query("SELECT name FROM pragma_table_info('vocabulary')")
            .load::<ColumnInfo>(conn)?;
        if !columns.iter().any(|column| column.name == "kategori") {
            log::info!("Adding missing kategori column to vocabulary table");
            sql_query("ALTER TABLE vocabulary ADD COLUMN kategori TEXT").execute(conn)?;
        }

        Ok(())
    }

    pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
        vocabulary::table.count().get_result(conn)
    }

    /// Loads every entry in insertion order, narrowed by exact `pos` and
    /// `kategori` matches when given.
    pub fn load_filtered(
        conn: &mut SqliteConnection,
        part_of_speech: Option<&str>,
        category: Option<&str>,
    ) -> QueryResult<Vec<VocabularyEntry>> {
        let mut query = vocabulary::table
            .select(VocabularyEntry::as_select())
            .order(vocabulary::id.asc())
            .into_boxed();

        if let Some(pos) = part_of_speech {
            query = query.filter(vocabulary::part_of_speech.eq(pos));
        }
        if let Some(kategori) = category {
            query = query.filter(vocabulary::category.eq(kategori));
        }

        query.load(conn)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        id: i32,
    ) -> QueryResult<Option<VocabularyEntry>> {
        vocabulary::table
            .find(id)
            .select(VocabularyEntry::as_select())
            .first(conn)
            .optional()
    }

    pub fn distinct_parts_of_speech(conn: &mut SqliteConnection) -> QueryResult<Vec<String>> {
        vocabulary::table
            .select(vocabulary::part_of_speech)
            .filter(vocabulary::part_of_speech.is_not_null())
            .distinct()
            .order(vocabulary::part_of_speech.asc())
            .load::<Option<String>>(conn)
            .map(|rows| rows.into_iter().flatten().collect())
    }

    pub fn distinct_categories(conn: &mut SqliteConnection) -> QueryResult<Vec<String>> {
        vocabulary::table
            .select(vocabulary::category)
            .filter(vocabulary::category.is_not_null())
            .distinct()
            .order(vocabulary::category.asc())
            .load::<Option<String>>(conn)
            .map(|rows| rows.into_iter().flatten().collect())
    }

    /// Inserts all entries in one transaction; nothing is kept if any row fails.
    pub fn insert_all(
        conn: &mut SqliteConnection,
        entries: &[NewVocabularyEntry],
    ) -> QueryResult<usize> {
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut inserted = 0;
            for entry in entries {
                inserted += diesel::insert_into(vocabulary::table)
                    .values(entry)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }
}
