//! `skripc cli`: the interactive console.
//!
//! Input accumulates while `{`/`}` braces are unbalanced, so blocks can
//! span lines; the prompt switches to `.. ` until the depth returns to
//! zero. One environment persists across inputs. `exit` (or end of
//! input) leaves the console.

use std::io::{BufRead, Write};

use skrip_eval::{Env, Value};

use super::{execute, Executed};

const PROMPT: &str = ">> ";
const CONTINUATION_PROMPT: &str = ".. ";

pub fn run_console() {
    let stdin = std::io::stdin();
    let env = Env::new();

    let mut buffer = String::new();
    let mut depth: i64 = 0;

    show_prompt(PROMPT);
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        if depth == 0 && line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        depth += brace_depth_delta(&line);
        buffer.push_str(&line);
        buffer.push('\n');

        if depth > 0 {
            show_prompt(CONTINUATION_PROMPT);
            continue;
        }

        let source = std::mem::take(&mut buffer);
        depth = 0;

        if !source.trim().is_empty() {
            report(execute(&source, &env));
        }
        show_prompt(PROMPT);
    }
}

fn report(executed: Executed) {
    match executed {
        Executed::Value(Value::Nil) => println!(),
        Executed::Value(value) => println!("{value}"),
        // Already reported by `execute`.
        Executed::ParseErrors | Executed::RuntimeError => {}
    }
}

fn show_prompt(prompt: &str) {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
}

/// Net brace depth change of one input line.
fn brace_depth_delta(line: &str) -> i64 {
    let mut delta = 0;
    for ch in line.chars() {
        match ch {
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::brace_depth_delta;

    #[test]
    fn brace_depth_counts_both_directions() {
        assert_eq!(brace_depth_delta("for {"), 1);
        assert_eq!(brace_depth_delta("}"), -1);
        assert_eq!(brace_depth_delta("if (a) { b } else {"), 1);
        assert_eq!(brace_depth_delta("let h = {\"a\": 1}"), 0);
    }
}
