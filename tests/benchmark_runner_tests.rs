use sort_bench::benchmark::{
    Algorithm, BenchmarkConfig, BenchmarkRunner, Distribution, ResultTable, SimpleVerifier,
    build_markdown, results_to_csv, write_report,
};
use tempfile::TempDir;

#[test]
fn test_insertion_sort_skipped_above_threshold() {
    let config = BenchmarkConfig {
        sizes: vec![2000, 12000],
        repeats: 1,
        distributions: vec![Distribution::Sorted],
        seed: Some(3),
        ..BenchmarkConfig::default()
    };
    let runner = BenchmarkRunner::new(config).unwrap();
    let records = runner.run_benchmarks().unwrap();
    assert_eq!(records.len(), 6);

    let insertion = |size| {
        records
            .iter()
            .find(|r| r.size == size && r.algorithm == Algorithm::InsertionSort)
            .unwrap()
            .time
    };
    assert!(insertion(12000).is_none());
    assert!(insertion(2000).is_some());

    // Other algorithms are never skipped
    assert!(records
        .iter()
        .filter(|r| r.algorithm != Algorithm::InsertionSort)
        .all(|r| r.time.is_some()));
}

#[test]
fn test_end_to_end_single_cell() {
    let config = BenchmarkConfig {
        sizes: vec![500],
        repeats: 1,
        distributions: vec![Distribution::Sorted],
        ..BenchmarkConfig::default()
    };
    let runner = BenchmarkRunner::new(config).unwrap();
    let records = runner.run_benchmarks().unwrap();

    assert_eq!(records.len(), 3);
    for record in &records {
        let t = record.time.expect("no cell should be skipped at n=500");
        assert!(t >= 0.0);
    }

    let table = ResultTable::from_records(&records);
    let md = build_markdown(&table, runner.config());

    let data_rows: Vec<&str> = md
        .lines()
        .filter(|l| l.starts_with("| sorted |"))
        .collect();
    assert_eq!(data_rows.len(), 1);
    let cells: Vec<&str> = data_rows[0]
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect();
    assert_eq!(cells.len(), 4);
    assert!(cells[1..].iter().all(|c| c.parse::<f64>().is_ok()));

    let fastest: Vec<&str> = md.lines().filter(|l| l.starts_with("**Fastest:**")).collect();
    assert_eq!(fastest.len(), 1);
    let named = Algorithm::ALL
        .iter()
        .filter(|a| fastest[0].contains(a.name()))
        .count();
    assert_eq!(named, 1);
}

#[test]
fn test_seeded_runs_generate_same_matrix() {
    let config = BenchmarkConfig {
        sizes: vec![50, 100],
        repeats: 1,
        seed: Some(1234),
        verify: true,
        ..BenchmarkConfig::default()
    };
    let mut runner = BenchmarkRunner::new(config).unwrap();
    runner.set_verifier(Box::new(SimpleVerifier::new_quiet()));
    let first = runner.run_benchmarks().unwrap();
    let second = runner.run_benchmarks().unwrap();

    let keys = |records: &[sort_bench::ResultRecord]| {
        records
            .iter()
            .map(|r| (r.dataset, r.size, r.algorithm, r.time.is_some()))
            .collect::<Vec<_>>()
    };
    assert_eq!(keys(&first), keys(&second));
}

#[test]
fn test_report_and_csv_written_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.md");
    let csv_path = temp_dir.path().join("report.csv");

    let config = BenchmarkConfig {
        sizes: vec![100],
        repeats: 1,
        distributions: vec![Distribution::Random, Distribution::Reverse],
        seed: Some(8),
        report_path: report_path.clone(),
        ..BenchmarkConfig::default()
    };
    let runner = BenchmarkRunner::new(config).unwrap();
    let records = runner.run_benchmarks().unwrap();
    let table = ResultTable::from_records(&records);
    let md = build_markdown(&table, runner.config());

    write_report(&report_path, &md).unwrap();
    assert_eq!(std::fs::read_to_string(&report_path).unwrap(), md);

    // Overwrites rather than appends
    write_report(&report_path, "short").unwrap();
    assert_eq!(std::fs::read_to_string(&report_path).unwrap(), "short");

    write_report(&csv_path, &results_to_csv(&records)).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), records.len() + 1);
}

#[test]
fn test_write_report_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.md");
    let err = write_report(&path, "# report").unwrap_err();
    assert!(matches!(err, sort_bench::BenchError::Io { .. }));
}

#[test]
fn test_duplicate_matrix_entries_rejected() {
    let config = BenchmarkConfig {
        sizes: vec![100, 100],
        distributions: vec![Distribution::Sorted, Distribution::Sorted],
        repeats: 1,
        ..BenchmarkConfig::default()
    };
    assert!(matches!(
        BenchmarkRunner::new(config),
        Err(sort_bench::BenchError::InvalidConfig(_))
    ));

    let config = BenchmarkConfig {
        sizes: vec![2000, 500],
        repeats: 1,
        ..BenchmarkConfig::default()
    };
    assert!(BenchmarkRunner::new(config).is_err());
}

#[test]
fn test_one_record_per_triple() {
    let config = BenchmarkConfig {
        sizes: vec![20, 60],
        repeats: 1,
        seed: Some(21),
        ..BenchmarkConfig::default()
    };
    let records = BenchmarkRunner::new(config).unwrap().run_benchmarks().unwrap();
    let mut keys: Vec<_> = records
        .iter()
        .map(|r| (r.dataset.name(), r.size, r.algorithm.name()))
        .collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
    assert_eq!(total, 4 * 2 * 3);
}
