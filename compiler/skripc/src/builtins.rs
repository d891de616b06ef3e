//! Host built-ins: `print` and `println`.

use std::io::Write;

use skrip_eval::{register_builtin, Env, EvalResult, Value};

/// Register every driver-provided built-in. Called once at startup.
pub fn register_all() {
    register_builtin("print", print);
    register_builtin("println", println);
}

/// `print(a, b, ...)` writes the inspect of each argument, no separator,
/// no trailing newline.
fn print(_env: &Env, arguments: &[Value]) -> EvalResult {
    let mut stdout = std::io::stdout().lock();
    for argument in arguments {
        let _ = write!(stdout, "{argument}");
    }
    let _ = stdout.flush();
    Ok(Value::Nil)
}

/// `println(a, b, ...)` space-separates the inspects and appends a
/// newline.
fn println(_env: &Env, arguments: &[Value]) -> EvalResult {
    let rendered: Vec<String> = arguments.iter().map(Value::inspect).collect();
    println!("{}", rendered.join(" "));
    Ok(Value::Nil)
}
