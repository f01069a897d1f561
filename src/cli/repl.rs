use crate::calculator::Engine;
use std::io::{self, BufRead, Write};
use tracing::info;

pub const PROMPT: &str = "> ";

#[derive(Debug, Default, PartialEq)]
/// Counts of the lines evaluated during a session
pub struct Summary {
    pub evaluated: usize,
    pub failed: usize,
}

/// Evaluates one expression and writes its result, or the reason it could
/// not be evaluated
pub fn report<W: Write>(
    engine: &mut Engine,
    expression: &str,
    output: &mut W,
    summary: &mut Summary,
) -> io::Result<()> {
    summary.evaluated += 1;

    match engine.evaluate(expression) {
        Ok(v) => writeln!(output, "Result = {v}"),
        Err(e) => {
            summary.failed += 1;
            info!(expression, error = %e, "evaluation failed");
            writeln!(output, "Error: {e}")
        }
    }
}

/// Reads expressions from input one line at a time until end of input,
/// writing one result or error line for each
pub fn run<R: BufRead, W: Write>(
    engine: &mut Engine,
    mut input: R,
    output: &mut W,
    prompt: bool,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut line = String::new();

    loop {
        if prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        report(engine, line.trim_end_matches(&['\n', '\r'][..]), output, &mut summary)?;
    }

    Ok(summary)
}

/// Evaluates each of the given expressions in turn
pub fn evaluate_expressions<W: Write>(
    engine: &mut Engine,
    expressions: &[String],
    output: &mut W,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for expression in expressions {
        report(engine, expression, output, &mut summary)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(input: &str, prompt: bool) -> (String, Summary) {
        let mut engine = Engine::default();
        let mut output = Vec::new();
        let summary = run(&mut engine, Cursor::new(input), &mut output, prompt)
            .expect("failed to run");

        (
            String::from_utf8(output).expect("output not utf-8"),
            summary,
        )
    }

    #[test]
    fn test_run() {
        let (output, summary) = run_to_string("2 + 3 * 4\n\n10 - 3 - 2\n1 / 0\n", false);

        assert_eq!(
            output,
            "Result = 14\n\
             Error: expected a number at column 1\n\
             Result = 5\n\
             Result = inf\n"
        );
        assert_eq!(
            summary,
            Summary {
                evaluated: 4,
                failed: 1
            }
        );
    }

    #[test]
    fn test_run_continues_after_error() {
        let (output, summary) = run_to_string("3 * 4 ^ 2\nfish\n1 + 1", false);

        assert_eq!(
            output,
            "Error: unknown operator '^' at column 7\n\
             Error: expected a number at column 1\n\
             Result = 2\n"
        );
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_run_reports_blank_lines() {
        let (output, summary) = run_to_string("1 + 1\n\n   \n2\n", false);

        assert_eq!(
            output,
            "Result = 2\n\
             Error: expected a number at column 1\n\
             Error: expected a number at column 4\n\
             Result = 2\n"
        );
        assert_eq!(summary.evaluated, 4);
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_run_with_prompt() {
        let (output, _) = run_to_string("0.5 * 3\n", true);

        assert_eq!(output, "> Result = 1.5\n> ");
    }

    #[test]
    fn test_evaluate_expressions() -> io::Result<()> {
        let mut engine = Engine::default();
        let mut output = Vec::new();
        let expressions = vec![String::from("8 / 4 / 2"), String::from("")];
        let summary = evaluate_expressions(&mut engine, &expressions, &mut output)?;

        assert_eq!(
            String::from_utf8_lossy(&output),
            "Result = 1\nError: expected a number at column 1\n"
        );
        assert_eq!(summary.failed, 1);

        Ok(())
    }
}
