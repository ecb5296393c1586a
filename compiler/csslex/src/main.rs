//! `csslex` command-line interface.

use std::io::{self, Write};
use std::process::ExitCode;

use csslex::commands::{check_source, lex_source, read_input, LexOptions};
use csslex::CliError;
use tracing::debug_span;

fn main() -> ExitCode {
    csslex::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args[1], &args[2..]) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: &str, rest: &[String]) -> Result<ExitCode, CliError> {
    match command {
        "lex" => {
            let mut options = LexOptions::default();
            let mut path = None;
            for arg in rest {
                match arg.as_str() {
                    "--no-trivia" => options.skip_trivia = true,
                    flag if flag.starts_with("--") => {
                        return Err(CliError::Usage(format!("unknown option '{flag}' for lex")));
                    }
                    p if path.is_none() => path = Some(p),
                    extra => {
                        return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
                    }
                }
            }
            let path = path.ok_or_else(|| {
                CliError::Usage("Usage: csslex lex [--no-trivia] <file.css|->".to_owned())
            })?;

            let _span = debug_span!("lex", path).entered();
            let source = read_input(path)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            lex_source(&source, options, &mut out)?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        "check" => {
            let [path] = rest else {
                return Err(CliError::Usage("Usage: csslex check <file.css|->".to_owned()));
            };

            let _span = debug_span!("check", path = path.as_str()).entered();
            let source = read_input(path)?;
            let report = check_source(&source);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report.write_to(path, &mut out)?;
            out.flush()?;
            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        "version" | "--version" | "-v" => {
            println!("csslex {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Ok(ExitCode::from(2))
        }
    }
}

fn print_usage() {
    println!("csslex - lossless CSS tokenizer");
    println!();
    println!("Usage: csslex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.css|->     Print one line per token (offset, kind, text)");
    println!("  check <file.css|->   Report bad strings and unmatched characters");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-trivia          Omit whitespace tokens");
    println!();
    println!("Exit status: 0 clean, 1 soft failures found by check, 2 usage or I/O error.");
    println!("Set RUST_LOG (e.g. RUST_LOG=csslex=debug) to enable logging.");
}
