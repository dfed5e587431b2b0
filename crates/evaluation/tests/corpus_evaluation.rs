//! End-to-end evaluation over a corpus written to disk.

use normeval_corpus::{resolve, UtteranceSource};
use normeval_evaluation::{evaluate, EvalError, Evaluator, FnNormalizer};
use std::fs;
use std::path::PathBuf;

const DATA: &str = "PLAIN\tFujitsu\t<self>\n\
PLAIN\tPrimergy\t<self>\n\
LETTERS\tRX\tr x\n\
CARDINAL\t2540\ttwo thousand five hundred forty\n\
PUNCT\t.\tsil\n\
<eos>\t<eos>\n\
PUNCT\t\"\tsil\n\
PLAIN\tHello\t<self>\n\
PUNCT\t\"\tsil\n\
PLAIN\tagain\t<self>\n\
<eos>\t<eos>\n\
PLAIN\tVisit\t<self>\n\
ELECTRONIC\twww.ab.org\tw_letter w_letter w_letter dot a_letter b_letter dot o_letter r_letter g_letter\n\
<eos>\t<eos>\n";

fn data_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("normeval_e2e_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("output-00099-of-00100"), DATA).unwrap();
    dir
}

fn normalize(text: &str) -> String {
    match text {
        "Fujitsu Primergy RX 2540." => "fujitsu primergy RX two five four o".to_string(),
        "\"Hello\" again" => "hello again".to_string(),
        "Visit www.ab.org" => "visit WWW dot AB dot ORG".to_string(),
        other => other.to_string(),
    }
}

#[test]
fn test_evaluate_canonical_window() {
    let dir = data_dir("canonical");
    let corpus = resolve("google_en", &dir, "test", None).unwrap();

    let report = evaluate(corpus, &mut FnNormalizer(normalize), false).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.mismatches, 1);
    assert!((report.accuracy - 2.0 / 3.0).abs() < 1e-12);

    let mismatch = &report.mismatch_log[0];
    assert_eq!(mismatch.original, "Fujitsu Primergy RX 2540.");
    assert_eq!(mismatch.expected, "fujitsu primergy RX two thousand five hundred forty");
    assert_eq!(report.per_class["ELECTRONIC"].mismatches, 0);
    assert_eq!(report.per_class["CARDINAL"].mismatches, 1);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_class_subset_evaluation() {
    let dir = data_dir("class");
    let corpus = resolve("google_en", &dir, "ELECTRONIC", Some(10)).unwrap();

    let report = Evaluator::default()
        .run(corpus, &mut FnNormalizer(normalize))
        .unwrap();
    assert_eq!(report.total, 1);
    assert_eq!(report.mismatches, 0);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_restart_gives_same_pairs() {
    let dir = data_dir("restart");
    let mut corpus = resolve("google_en", &dir, "all", None).unwrap();

    let first: Vec<_> = corpus.by_ref().map(|p| p.unwrap()).collect();
    corpus.reset();
    let second: Vec<_> = corpus.by_ref().map(|p| p.unwrap()).collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(first[1].unnormalized, "\"Hello\" again");
    assert_eq!(first[2].normalized, "visit WWW dot AB dot ORG");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_malformed_corpus_aborts_evaluation() {
    let dir = data_dir("malformed");
    fs::write(
        dir.join("output-00099-of-00100"),
        format!("{}LETTERS\tRX\n<eos>\t<eos>\n", DATA),
    )
    .unwrap();

    let corpus = resolve("google_en", &dir, "test", None).unwrap();
    let err = evaluate(corpus, &mut FnNormalizer(normalize), false).unwrap_err();
    assert!(matches!(err, EvalError::MalformedLine { .. }));

    fs::remove_dir_all(dir).ok();
}
