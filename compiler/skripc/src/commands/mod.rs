//! Driver subcommands.

pub mod cli;
pub mod eval;
pub mod run;

use skrip_eval::{eval_program, ControlAction, Env, Value};
use skrip_lexer::Lexer;
use skrip_parse::parse;

/// Outcome of pushing one source string through the pipeline.
pub enum Executed {
    /// Evaluation finished with this value.
    Value(Value),
    /// Parsing failed; errors were already reported to stderr.
    ParseErrors,
    /// Evaluation failed; the error was already reported.
    RuntimeError,
}

/// Lex, parse and evaluate `source` against `env`.
///
/// Parse errors print one per line to stderr and suppress evaluation.
/// Runtime errors print with the `[Error]` prefix. Neither is fatal to
/// the driver.
pub fn execute(source: &str, env: &Env) -> Executed {
    let (program, errors) = parse(Lexer::new(source));

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        return Executed::ParseErrors;
    }

    match eval_program(&program, env) {
        Ok(value) => Executed::Value(value),
        Err(ControlAction::Failure(error)) => {
            println!("{error}");
            Executed::RuntimeError
        }
        // `eval_program` resolves return/break/continue itself.
        Err(_) => Executed::Value(Value::Nil),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Executed};
    use skrip_eval::{Env, Value};

    #[test]
    fn execute_returns_the_final_value() {
        let Executed::Value(value) = execute("1 + 2", &Env::new()) else {
            panic!("expected a value");
        };
        assert_eq!(value, Value::Int(3));
    }

    #[test]
    fn parse_errors_suppress_evaluation() {
        assert!(matches!(
            execute("let = 5", &Env::new()),
            Executed::ParseErrors
        ));
    }

    #[test]
    fn runtime_errors_are_reported_not_fatal() {
        assert!(matches!(
            execute("missing", &Env::new()),
            Executed::RuntimeError
        ));
    }

    #[test]
    fn the_environment_persists_across_inputs() {
        let env = Env::new();
        execute("let a = 1", &env);
        let Executed::Value(value) = execute("a + 1", &env) else {
            panic!("expected a value");
        };
        assert_eq!(value, Value::Int(2));
    }
}
