//! Skrip CLI.
//!
//! Thin wrapper over the engine crates: `run` executes a script file,
//! `eval` an inline snippet, `cli` starts the interactive console.
//! Parse and runtime errors are reported but leave the exit code at 0;
//! only driver-level failures (missing file, empty input) are fatal.

mod builtins;
mod commands;
mod tracing_setup;

fn main() {
    tracing_setup::init();
    builtins::register_all();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: skripc run <file.skrip>");
                std::process::exit(1);
            }
            commands::run::run_file(&args[2]);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: skripc eval <code>");
                std::process::exit(1);
            }
            commands::eval::eval_code(&args[2]);
        }
        "cli" => {
            commands::cli::run_console();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        unknown => {
            eprintln!("Unknown command: {unknown}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Skrip language driver");
    println!();
    println!("Usage: skripc <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  run <file.skrip>   Run the provided script file");
    println!("  eval <code>        Eval the provided inline code");
    println!("  cli                Start console mode");
    println!("  help               Show this help");
}
