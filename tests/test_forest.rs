mod common;

use arborist::forest::{assemble_forest, parse_data_folder, parse_forest_summary, read_data_folder};
use arborist::parser::ParsingErrorType;
use common::{THREE_NODE_DUMP, dump_from_depths};
use std::fs;
use tracing_subscriber::EnvFilter;

const TWO_TREE_SUMMARY: &str = "[1.0,0.25;\n0.25,1.0]\n\n0.12\n0.15\n\n0.08\n";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// --- TESTS FOREST SUMMARY ---
#[test]
fn test_parse_summary() {
    let summary = parse_forest_summary(TWO_TREE_SUMMARY).unwrap();
    assert_eq!(summary.correlation_matrix.shape(), (2, 2));
    assert_eq!(summary.correlation_matrix[(1, 0)], 0.25);
    assert_eq!(summary.oob_errors, vec![0.12, 0.15]);
    assert_eq!(summary.error, 0.08);
}

#[test]
fn test_summary_with_extra_blank_lines() {
    let summary = parse_forest_summary("\n\n[1]\n\n\n0.3\n\n\n0.3\n\n").unwrap();
    assert_eq!(summary.oob_errors, vec![0.3]);
}

#[test]
fn test_summary_bad_token_is_format() {
    let err = parse_forest_summary("[1.0,abc;\n0.25,1.0]\n\n0.1\n0.1\n\n0.1\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::Format(_)));
}

#[test]
fn test_summary_non_square_matrix_is_format() {
    let err = parse_forest_summary("[1.0,0.5]\n\n0.1\n\n0.1\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::Format(_)));
}

#[test]
fn test_summary_missing_block_is_format() {
    let err = parse_forest_summary("[1]\n\n0.1\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::Format(_)));
}

#[test]
fn test_summary_multi_line_error_is_format() {
    let err = parse_forest_summary("[1]\n\n0.1\n\n0.1\n0.2\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::Format(_)));
}

// --- TESTS FOREST ASSEMBLY ---
#[test]
fn test_assemble_forest() {
    init_tracing();
    let trees = [THREE_NODE_DUMP.to_string(), dump_from_depths(&[0, 1, 1], 80)];
    let forest = assemble_forest(TWO_TREE_SUMMARY, &trees).unwrap();

    assert_eq!(forest.num_trees(), 2);
    assert_eq!(forest.error(), 0.08);
    assert_eq!(forest.total_samples(), 100);
    assert_eq!(forest.correlation(0, 1), Some(0.25));
    assert_eq!(forest.correlation(2, 0), None);

    // Trees keep their order and receive their out-of-bag error
    assert_eq!(forest.trees()[0].root().samples(), 100);
    assert_eq!(forest.trees()[1].root().samples(), 80);
    assert_eq!(forest.trees()[0].oob_error(), Some(0.12));
    assert_eq!(forest.trees()[1].oob_error(), Some(0.15));
}

#[test]
fn test_empty_forest() {
    let no_trees: [&str; 0] = [];
    let err = assemble_forest(TWO_TREE_SUMMARY, &no_trees).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::EmptyForest);

    // Checked before the summary is parsed
    let err = assemble_forest("not a summary", &no_trees).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::EmptyForest);
}

#[test]
fn test_oob_count_mismatch_is_format() {
    let trees = [THREE_NODE_DUMP; 3];
    let err = assemble_forest(TWO_TREE_SUMMARY, &trees).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::Format(_)));
}

#[test]
fn test_matrix_size_mismatch_is_accepted() {
    init_tracing();
    let forest = assemble_forest("[1]\n\n0.1\n0.2\n\n0.1\n", &[THREE_NODE_DUMP; 2]).unwrap();
    assert_eq!(forest.num_trees(), 2);
    assert_eq!(forest.correlation_matrix().shape(), (1, 1));
}

#[test]
fn test_first_failing_tree_is_reported() {
    let trees = [
        THREE_NODE_DUMP.to_string(),
        dump_from_depths(&[0, 2], 10),
        dump_from_depths(&[0, 1, 1, 1], 10),
    ];
    let err = assemble_forest("[1]\n\n0.1\n0.1\n0.1\n\n0.1\n", &trees).unwrap_err();
    match err.kind() {
        ParsingErrorType::Structural(msg) => assert!(msg.starts_with("tree 1")),
        other => panic!("expected Structural, got {other:?}"),
    }
}

// --- TESTS DATA FOLDER ---
#[test]
fn test_parse_data_folder() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("forest.txt"),
        "[1,0,0;\n0,1,0;\n0,0,1]\n\n0.1\n0.2\n0.3\n\n0.05\n",
    )
    .unwrap();
    // Numeric order: 2 before 10
    fs::write(dir.path().join("tree_0.txt"), dump_from_depths(&[0, 1, 1], 30)).unwrap();
    fs::write(dir.path().join("tree_10.txt"), dump_from_depths(&[0, 1, 1], 50)).unwrap();
    fs::write(dir.path().join("tree_2.txt"), dump_from_depths(&[0, 1, 1], 40)).unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();

    let folder = read_data_folder(dir.path()).unwrap();
    assert_eq!(folder.trees.len(), 3);

    let forest = parse_data_folder(dir.path()).unwrap();
    let roots: Vec<u64> = forest.trees().iter().map(|t| t.root().samples()).collect();
    assert_eq!(roots, vec![30, 40, 50]);
    assert_eq!(forest.trees()[2].oob_error(), Some(0.3));
    assert_eq!(forest.total_samples(), 30);
}

#[test]
fn test_data_folder_without_summary_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tree_0.txt"), THREE_NODE_DUMP).unwrap();
    let err = parse_data_folder(dir.path()).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

#[test]
fn test_data_folder_without_trees_is_empty_forest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("forest.txt"), "[1]\n\n0.1\n\n0.1\n").unwrap();
    let err = parse_data_folder(dir.path()).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::EmptyForest);
}
