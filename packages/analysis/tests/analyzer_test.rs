//! Frequency analysis behavior

use cipherlab_analysis::{analyze, AnalysisConfig, Sampling, Symbol};
use proptest::prelude::*;

fn letters(table: &cipherlab_analysis::FrequencyTable) -> Vec<(char, usize)> {
    table
        .iter()
        .filter_map(|(symbol, count)| match symbol {
            Symbol::Letter(c) => Some((c, count)),
            Symbol::NonAlphabetic => None,
        })
        .collect()
}

#[test]
fn test_hello_world_default_config() {
    let table = analyze("Hello World", &AnalysisConfig::default());

    assert_eq!(
        letters(&table),
        vec![
            ('D', 1),
            ('E', 1),
            ('H', 1),
            ('L', 3),
            ('O', 2),
            ('R', 1),
            ('W', 1)
        ]
    );
    assert_eq!(table.get(Symbol::NonAlphabetic), 0);
    assert_eq!(table.get(Symbol::Letter('Z')), 0);
    assert_eq!(table.total(), 10);
}

#[test]
fn test_every_kth_sampling() {
    let config = AnalysisConfig::default().with_sampling(Sampling::every_kth(2, 0));
    let table = analyze("ABCDEF", &config);
    assert_eq!(letters(&table), vec![('A', 1), ('C', 1), ('E', 1)]);

    let config = AnalysisConfig::default().with_sampling(Sampling::every_kth(2, 1));
    let table = analyze("ABCDEF", &config);
    assert_eq!(letters(&table), vec![('B', 1), ('D', 1), ('F', 1)]);

    let config = AnalysisConfig::default().with_sampling(Sampling::every_kth(2, 10));
    assert!(analyze("ABCDEF", &config).is_empty());
}

#[test]
fn test_clamped_sampling_behaves_like_all() {
    let clamped = AnalysisConfig::default().with_sampling(Sampling::every_kth(0, -5));
    assert_eq!(
        analyze("Attack at dawn", &clamped),
        analyze("Attack at dawn", &AnalysisConfig::default())
    );
}

#[test]
fn test_sampling_counts_characters_not_bytes() {
    // 'é' is two bytes but one position
    let config = AnalysisConfig::default().with_sampling(Sampling::every_kth(2, 0));
    let table = analyze("éAB", &config);
    assert_eq!(letters(&table), vec![('B', 1)]);
}

#[test]
fn test_case_sensitive_with_sentinel() {
    let config = AnalysisConfig::default()
        .with_case_sensitive(true)
        .with_ignore_non_alphabetic(false);
    let table = analyze("aA!", &config);

    let buckets: Vec<_> = table.iter().collect();
    assert_eq!(
        buckets,
        vec![
            (Symbol::Letter('A'), 1),
            (Symbol::Letter('a'), 1),
            (Symbol::NonAlphabetic, 1)
        ]
    );
}

#[test]
fn test_non_ascii_letters_are_non_alphabetic() {
    let config = AnalysisConfig::default().with_ignore_non_alphabetic(false);
    let table = analyze("Größe", &config);
    assert_eq!(table.get(Symbol::NonAlphabetic), 2);
    assert_eq!(table.get(Symbol::Letter('G')), 1);
}

#[test]
fn test_nothing_to_count_is_empty() {
    assert!(analyze("12345 !?", &AnalysisConfig::default()).is_empty());
    assert!(analyze("", &AnalysisConfig::default()).is_empty());
    assert!(analyze("", &AnalysisConfig::default()).chart_rows().is_empty());
}

#[test]
fn test_by_count_ordering() {
    let table = analyze("Hello World", &AnalysisConfig::default());
    let ranked = table.by_count();
    assert_eq!(ranked[0], (Symbol::Letter('L'), 3));
    assert_eq!(ranked[1], (Symbol::Letter('O'), 2));
    // ties in alphabetical order
    assert_eq!(ranked[2], (Symbol::Letter('D'), 1));
    assert_eq!(ranked.last(), Some(&(Symbol::Letter('W'), 1)));
}

#[test]
fn test_chart_rows() {
    let config = AnalysisConfig::default().with_ignore_non_alphabetic(false);
    let rows = analyze("AAB ", &config).chart_rows();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "A");
    assert_eq!(rows[0].count, 2);
    assert!((rows[0].percentage - 50.0).abs() < f64::EPSILON);
    assert_eq!(rows[2].label, "Non-Alpha");
    assert!((rows[2].percentage - 25.0).abs() < f64::EPSILON);

    let json = serde_json::to_value(&rows[1]).expect("serialize");
    assert_eq!(json["label"], "B");
    assert_eq!(json["count"], 1);
}

#[test]
fn test_index_of_coincidence() {
    let config = AnalysisConfig::default();

    let ioc = analyze("AAAA", &config).index_of_coincidence().expect("ioc");
    assert!((ioc - 1.0).abs() < 1e-12);

    let ioc = analyze("AABB", &config).index_of_coincidence().expect("ioc");
    assert!((ioc - 1.0 / 3.0).abs() < 1e-12);

    assert_eq!(analyze("A!", &config).index_of_coincidence(), None);
}

#[test]
fn test_config_serde_defaults() {
    let config: AnalysisConfig = serde_json::from_str("{}").expect("empty object");
    assert_eq!(config, AnalysisConfig::default());

    let config: AnalysisConfig =
        serde_json::from_str(r#"{"sampling":{"every_kth":{"k":3,"offset":1}}}"#)
            .expect("sampling");
    assert_eq!(config.sampling, Sampling::every_kth(3, 1));
}

#[test]
fn test_config_json_clamps_bad_sampling() {
    let config: AnalysisConfig =
        serde_json::from_str(r#"{"sampling":{"every_kth":{"k":0,"offset":-4}}}"#)
            .expect("out-of-range values are clamped, not rejected");
    assert_eq!(config.sampling, Sampling::every_kth(1, 0));
    assert_eq!(
        analyze("ABC", &config),
        analyze("ABC", &AnalysisConfig::default())
    );

    let config: AnalysisConfig =
        serde_json::from_str(r#"{"sampling":{"every_kth":{"k":-2,"offset":1}}}"#)
            .expect("negative k is clamped");
    assert_eq!(config.sampling, Sampling::every_kth(1, 1));

    let round_trip: AnalysisConfig =
        serde_json::from_str(&serde_json::to_string(&config).expect("serialize"))
            .expect("deserialize");
    assert_eq!(round_trip, config);

    let config: AnalysisConfig =
        serde_json::from_str(r#"{"sampling":"all"}"#).expect("unit variant");
    assert_eq!(config.sampling, Sampling::All);
}

proptest! {
    #[test]
    fn prop_counts_every_char_when_nothing_is_ignored(text in ".{0,64}") {
        let config = AnalysisConfig::default().with_ignore_non_alphabetic(false);
        let table = analyze(&text, &config);
        prop_assert_eq!(table.total(), text.chars().count());
        prop_assert!(table.iter().all(|(_, count)| count > 0));
    }

    #[test]
    fn prop_case_insensitive_keys_are_uppercase(text in "[a-zA-Z0-9 ]{0,64}") {
        let table = analyze(&text, &AnalysisConfig::default());
        prop_assert!(table.iter().all(|(symbol, _)| matches!(symbol, Symbol::Letter(c) if c.is_ascii_uppercase())));
        prop_assert_eq!(table.total(), text.chars().filter(char::is_ascii_alphabetic).count());
    }

    #[test]
    fn prop_columns_partition_the_text(text in "[A-Z]{0,64}", k in 1i64..6) {
        let whole = analyze(&text, &AnalysisConfig::default()).total();
        let columns: usize = (0..k)
            .map(|offset| {
                let config = AnalysisConfig::default().with_sampling(Sampling::every_kth(k, offset));
                analyze(&text, &config).total()
            })
            .sum();
        prop_assert_eq!(columns, whole);
    }
}
