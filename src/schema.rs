// Column names follow the original spreadsheet-derived database layout.

diesel::table! {
    vocabulary (id) {
        id -> Integer,
        #[sql_name = "no"]
        sequence_number -> Nullable<Integer>,
        #[sql_name = "type"]
        headword -> Text,
        frequency -> Nullable<Double>,
        #[sql_name = "pos"]
        part_of_speech -> Nullable<Text>,
        #[sql_name = "terjemahan"]
        translation -> Nullable<Text>,
        #[sql_name = "definisi"]
        definition -> Nullable<Text>,
        #[sql_name = "kolokasi"]
        collocations -> Nullable<Text>,
        #[sql_name = "contoh_kalimat"]
        example_sentence -> Nullable<Text>,
        #[sql_name = "gambar"]
        image -> Nullable<Text>,
        #[sql_name = "kategori"]
        category -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
    }
}
