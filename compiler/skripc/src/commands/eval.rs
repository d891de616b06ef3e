//! `skripc eval <code>`: execute an inline snippet.

use skrip_eval::Env;

use super::execute;

pub fn eval_code(code: &str) {
    let code = code.trim();
    if code.is_empty() {
        eprintln!("Please enter the code to eval");
        std::process::exit(1);
    }

    execute(code, &Env::new());
}
