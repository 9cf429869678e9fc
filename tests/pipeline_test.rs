#[cfg(test)]
mod tests {

    use std::{fs::File, io::Read};

    use catalog_insights::{
        count_by, load_and_prepare, load_and_prepare_path, word_frequencies, ContentType,
        DatasetCache, Field, PipelineError, RowError,
    };

    const SAMPLE: &str = "./tests/resources/catalog_sample.csv";

    const SCENARIO: &str = "\
type,title,director,cast,country,date_added,listed_in
Movie,A B,D1,C1,US,2020-01-01,Drama
Movie,A B,D1,C1,US,2020-01-01,Drama
TVShow,X Y,,C2,UK,2019-05-05,\"Comedy, Drama\"
";

    #[test]
    fn prepares_scenario_rows() {
        let prepared = load_and_prepare(SCENARIO.as_bytes()).unwrap();
        let titles = prepared.dataset.titles();

        assert_eq!(titles.len(), 1);
        assert!(prepared.errors.is_empty());

        let movie = &titles[0];
        assert_eq!(movie.content_type, ContentType::Movie);
        assert_eq!(movie.year_added, 2020);
        assert_eq!(movie.month_added, 1);
        assert_eq!(movie.genres, vec!["Drama"]);

        let countries = count_by(&prepared.dataset, Field::Country);
        assert_eq!(countries.entries(), &[("US".to_string(), 1)]);

        let words = word_frequencies(["A B"]);
        assert_eq!(
            words.entries(),
            &[("a".to_string(), 1), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn prepares_sample_catalog() {
        let prepared = load_and_prepare_path(SAMPLE).unwrap();
        let ids: Vec<&str> = prepared
            .dataset
            .iter()
            .map(|t| t.id.as_deref().unwrap_or_default())
            .collect();

        assert_eq!(ids, vec!["s1", "s2", "s4", "s8", "s9", "s10"]);
        assert_eq!(prepared.dataset.year_range(), Some((2019, 2021)));
    }

    #[test]
    fn collects_row_level_errors_in_order() {
        let prepared = load_and_prepare_path(SAMPLE).unwrap();
        let lines: Vec<u64> = prepared.errors.iter().map(|e| e.line()).collect();

        assert_eq!(lines, vec![8, 9, 7]);
        assert!(matches!(prepared.errors[0], RowError::RowParse { .. }));
        assert!(matches!(prepared.errors[1], RowError::RowParse { .. }));
        assert_eq!(
            prepared.errors[2],
            RowError::DateParse {
                line: 7,
                value: "not a date".to_string()
            }
        );
    }

    #[test]
    fn keeps_titles_without_genres() {
        let prepared = load_and_prepare_path(SAMPLE).unwrap();
        let baking_show = prepared
            .dataset
            .iter()
            .find(|t| t.title == "The Great British Baking Show")
            .unwrap();

        assert!(baking_show.genres.is_empty());
        assert_eq!(baking_show.content_type, ContentType::TvShow);
    }

    #[test]
    fn every_title_with_listed_genres_has_genres() {
        let prepared = load_and_prepare_path(SAMPLE).unwrap();

        for title in prepared.dataset.iter() {
            if !title.listed_in.is_empty() {
                assert!(!title.genres.is_empty(), "{} has no genres", title.title);
            }
        }
    }

    #[test]
    fn whitespace_only_genre_list_keeps_one_blank_genre() {
        let rows = "\
type,title,director,cast,country,date_added,listed_in
Movie,Blank Genres,D1,C1,US,2020-01-01,\"   \"
Movie,No Genres,D2,C2,US,2020-01-01,
";
        let prepared = load_and_prepare(rows.as_bytes()).unwrap();
        let titles = prepared.dataset.titles();

        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].listed_in, "   ");
        assert_eq!(titles[0].genres, vec![""]);
        assert!(titles[1].genres.is_empty());

        for title in titles {
            if !title.listed_in.is_empty() {
                assert!(!title.genres.is_empty(), "{} has no genres", title.title);
            }
        }
    }

    #[test]
    fn dates_written_differently_do_not_leave_equal_titles() {
        let rows = "\
type,title,director,cast,country,date_added,listed_in
Movie,A B,D1,C1,US,2020-01-01,Drama
Movie,A B,D1,C1,US, 2020-01-01,Drama
Movie,A B,D1,C1,US,\"January 1, 2020\",Drama
Movie,A B,D1,C1,US,2020-01-02,Drama
";
        let prepared = load_and_prepare(rows.as_bytes()).unwrap();
        let titles = prepared.dataset.titles();

        assert_eq!(titles.len(), 2);
        assert!(prepared.errors.is_empty());
        for (i, first) in titles.iter().enumerate() {
            for second in &titles[i + 1..] {
                assert_ne!(first, second);
            }
        }
        assert_eq!(titles[0].date_added.to_string(), "2020-01-01");
        assert_eq!(titles[1].date_added.to_string(), "2020-01-02");
    }

    #[test]
    fn fails_on_missing_columns() {
        let error = load_and_prepare_path("./tests/resources/missing_columns.csv").unwrap_err();

        match &error {
            PipelineError::MissingColumns { missing } => {
                assert_eq!(missing, &vec!["cast", "country", "listed_in"])
            }
            other => panic!("Unexpected error: {:?}", other),
        }
        assert_eq!(
            error.to_string(),
            "Missing columns in dataset: cast, country, listed_in"
        );
    }

    #[test]
    fn fails_on_empty_source() {
        let error = load_and_prepare("".as_bytes()).unwrap_err();

        assert!(matches!(error, PipelineError::MissingColumns { missing } if missing.len() == 7));
    }

    #[test]
    fn fails_on_missing_file() {
        let error = load_and_prepare_path("./tests/resources/does_not_exist.csv").unwrap_err();

        assert!(matches!(error, PipelineError::Io(_)));
    }

    #[test]
    fn preparing_twice_is_idempotent() {
        let content = get_file_content(SAMPLE);

        let first = load_and_prepare(content.as_bytes()).unwrap();
        let second = load_and_prepare(content.as_bytes()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn cache_reuses_dataset_until_content_changes() {
        let mut cache = DatasetCache::new();
        assert_eq!(cache.cached_key(), None);

        let first_len = cache.get_or_prepare(SCENARIO.as_bytes()).unwrap().dataset.len();
        let first_key = cache.cached_key().map(str::to_string);
        assert_eq!(first_len, 1);

        cache.get_or_prepare(SCENARIO.as_bytes()).unwrap();
        assert_eq!(cache.cached_key().map(str::to_string), first_key);

        let content = get_file_content(SAMPLE);
        let second_len = cache.get_or_prepare(content.as_bytes()).unwrap().dataset.len();
        assert_eq!(second_len, 6);
        assert_ne!(cache.cached_key().map(str::to_string), first_key);

        cache.clear();
        assert_eq!(cache.cached_key(), None);
    }

    #[test]
    fn cache_keeps_previous_entry_on_failure() {
        let mut cache = DatasetCache::new();
        cache.get_or_prepare(SCENARIO.as_bytes()).unwrap();
        let key = cache.cached_key().map(str::to_string);

        assert!(cache.get_or_prepare(b"title\nonly").is_err());
        assert_eq!(cache.cached_key().map(str::to_string), key);
    }

    fn get_file_content(file_path: &str) -> String {
        let mut file = match File::open(file_path) {
            Ok(file) => file,
            Err(e) => panic!("Error opening catalog file: {}", e),
        };

        let mut content = String::new();
        if let Err(e) = file.read_to_string(&mut content) {
            eprintln!("Error reading the file: {}", e);
            panic!("Failed to read file");
        }

        content
    }
}
