use linecalc::calculator::Engine;
use linecalc::cli;
use std::io::Cursor;

/// Helper function to read in an entire test data file
fn read_test_file(filename: &str) -> String {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push(format!("tests/testdata/{}", filename));

    std::fs::read_to_string(p).expect("failed to read test file")
}

#[test]
fn test_session() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = read_test_file("session.in");
    let want = read_test_file("session.out");

    let mut engine = Engine::default();
    let mut output = Vec::new();
    let summary = cli::run(&mut engine, Cursor::new(input), &mut output, false)?;

    // Every input line, blank or not, produces exactly one output line
    let output = String::from_utf8(output)?;
    assert_eq!(output, want);
    assert_eq!(output.lines().count(), 13);
    assert_eq!(summary.evaluated, 13);
    assert_eq!(summary.failed, 5);

    Ok(())
}
