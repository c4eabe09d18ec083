//! Library API integration tests
use std::fs;
use std::path::PathBuf;

use lexometer_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn texts_dir() -> PathBuf {
    PathBuf::from(get_fixture_path("texts"))
}

#[test]
fn test_extract_fixture_article() {
    let html = fetch_file(get_fixture_path("article.html")).unwrap();
    let doc = Document::parse(&html).unwrap();
    let article = extract_article(&doc, &ExtractConfig::default()).expect("should extract");

    assert_eq!(article.title, "Rising IT Cities and Their Impact on the Economy");
    assert_eq!(article.body.lines().count(), 4);
    assert!(article.body.starts_with("Technology hubs"));
    assert!(!article.body.to_lowercase().contains("contact"));
    assert!(!article.body.contains("Summarized:"));
    assert!(!article.body.contains("Please"));
}

#[test]
fn test_extract_without_body_container() {
    let html = fetch_file(get_fixture_path("no_content.html")).unwrap();
    let doc = Document::parse(&html).unwrap();

    assert!(matches!(
        extract_article(&doc, &ExtractConfig::default()),
        Err(LexometerError::ContentNotFound(_))
    ));
}

#[test]
fn test_custom_selectors() {
    let html = r#"<article><h2>Custom</h2><section class="body"><p>One.</p><p>Two.</p></section></article>"#;
    let doc = Document::parse(html).unwrap();
    let config = ExtractConfig {
        title_selector: "h2".to_string(),
        body_selector: "section.body".to_string(),
        ..Default::default()
    };

    let article = extract_article(&doc, &config).unwrap();
    assert_eq!(article.to_text(), "Custom\n\nOne.\nTwo.");
}

#[test]
fn test_extracted_file_round_trips_into_analysis() {
    let html = fetch_file(get_fixture_path("article.html")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    extract_to_file(&html, "bctech9001", dir.path(), &ExtractConfig::default()).unwrap();

    let report = analyze_directory(dir.path(), &AnalyzeConfig::default(), &Lexicon::builtin()).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].file_name, "bctech9001.txt");
    assert!(report.records[0].metrics.word_count > 20);
}

#[test]
fn test_analyze_fixture_directory() {
    let report = analyze_directory(&texts_dir(), &AnalyzeConfig::default(), &Lexicon::builtin()).unwrap();

    let names: Vec<_> = report.records.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(names, vec!["bctech2011.txt", "bctech2012.txt"]);
    assert_eq!(report.empty.len(), 1);
    assert_eq!(report.skipped.len(), 1);

    for record in &report.records {
        let m = &record.metrics;
        assert!((-1.0..=1.0).contains(&m.polarity_score));
        assert!(m.subjectivity_score >= 0.0);
        assert!(m.complex_word_count <= m.word_count);
        assert!(m.fog_index >= 0.0);
        assert!(m.syllable_per_word >= 1.0);
    }
}

#[test]
fn test_remote_work_sentiment() {
    let text = fs::read_to_string(texts_dir().join("bctech2012.txt")).unwrap();
    let metrics = analyze_text(&text, &Lexicon::builtin()).unwrap();

    // modern, enjoy, flexible, better, support, excellent, win, talent vs crisis, worry, weak, slow
    assert_eq!(metrics.positive_score, 8);
    assert_eq!(metrics.negative_score, 4);
    assert!(metrics.polarity_score > 0.0);
}

#[test]
fn test_csv_row_count_matches_analyzed_files() {
    let report = analyze_directory(&texts_dir(), &AnalyzeConfig::default(), &Lexicon::builtin()).unwrap();
    let mut out = Vec::new();
    write_records(&report.records, OutputFormat::Csv, &mut out).unwrap();

    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), report.records.len() + 1);
    assert!(lines[0].starts_with("File Name,"));
    assert!(lines[1].starts_with("bctech2011.txt,"));
}

#[test]
fn test_prefix_selects_other_files() {
    let config = AnalyzeConfig::builder().prefix("notes").build();
    let report = analyze_directory(&texts_dir(), &config, &Lexicon::builtin()).unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].file_name, "notes.txt");
}

#[test]
fn test_read_fixture_records() {
    let records = read_records(&PathBuf::from(get_fixture_path("urls.csv"))).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url_id, "bctech2011");
    assert_eq!(records[1].url, "ftp://example.com/article");
}

#[tokio::test]
async fn test_scrape_records_continues_past_failures() {
    let records = read_records(&PathBuf::from(get_fixture_path("urls.csv"))).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ScrapeConfig::builder().output_dir(dir.path()).timeout(5).build();

    let report = scrape_records(&records, &config).await;

    assert_eq!(report.attempted(), 2);
    assert!(report.saved.is_empty());
    assert!(report.failures.iter().all(|f| matches!(f.error, LexometerError::InvalidUrl(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
