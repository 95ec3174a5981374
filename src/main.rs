use std::{env, fs::read_to_string, process::ExitCode};

use tern::{
    display_error, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse,
    type_checker::type_checker::check,
};

fn main() -> ExitCode {
    let files: Vec<String> = env::args().skip(1).collect();

    if files.is_empty() {
        eprintln!("usage: tern <file>...");
        return ExitCode::FAILURE;
    }

    let mut failed = false;

    // Each file is checked on its own; one failure never aborts the rest.
    for file_path in &files {
        let source = match read_to_string(file_path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("{}: {}", file_path, error);
                failed = true;
                continue;
            }
        };

        match run(&source, file_path) {
            Ok(()) => println!("{}: program is well-typed", file_path),
            Err(error) => {
                display_error(&error, &source);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(source: &str, file_path: &str) -> Result<(), Error> {
    let tokens = tokenize(source.to_string(), Some(String::from(file_path)))?;
    let program = parse(tokens)?;
    check(&program)
}
