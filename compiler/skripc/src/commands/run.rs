//! `skripc run <file>`: execute a script file.

use skrip_eval::Env;

use super::execute;

pub fn run_file(path: &str) {
    if path.trim().is_empty() {
        eprintln!("Please enter the script file path");
        std::process::exit(1);
    }

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Cannot open the script file: {error}");
            std::process::exit(1);
        }
    };

    // The final value is discarded; scripts talk through print/println.
    execute(&source, &Env::new());
}
