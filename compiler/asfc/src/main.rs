//! `asf`: check autoscale formulas from the command line.

use std::io;

use asfc::commands::{braces_to, check_file, display_name, explain_to, lex_to, parse_to, read_input};
use asfc::{init_tracing, CliError, Options, Outcome, EXIT_USAGE};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return;
    };

    match run(command, &args[2..]) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(error, CliError::UnknownCommand(_)) {
                eprintln!();
                print_usage();
            }
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn run(command: &str, rest: &[String]) -> Result<Outcome, CliError> {
    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Outcome::Clean)
        }
        "version" | "--version" | "-V" => {
            println!("asf {}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Clean)
        }
        "explain" | "--explain" => {
            let code = rest.first().ok_or(CliError::MissingArgument {
                usage: "asf explain <code>",
            })?;
            explain_to(code, io::stdout().lock())
        }
        "check" | "lex" | "parse" | "braces" => {
            let (options, positional) = Options::parse(rest)?;
            let Some(path) = positional.first().copied() else {
                return Err(CliError::MissingArgument {
                    usage: "asf <check|lex|parse|braces> <file|-> [options]",
                });
            };
            tracing::debug!(command, path = display_name(path), "running");
            if command == "check" {
                return check_file(path, &options);
            }
            let source = read_input(path)?;
            let out = io::stdout().lock();
            match command {
                "lex" => lex_to(&source, &options, out),
                "parse" => parse_to(&source, &options, out),
                _ => braces_to(&source, &options, out),
            }
        }
        _ => Err(CliError::UnknownCommand(command.to_string())),
    }
}

fn print_usage() {
    println!("asf: autoscale formula checker");
    println!();
    println!("Usage: asf <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file|->      Report all diagnostics (exit 1 if any errors)");
    println!("  lex <file|->        Print the token list");
    println!("  parse <file|->      Print parsed assignments and syntax errors");
    println!("  braces <file|->     Print matched parenthesis offsets");
    println!("  explain <code>      Describe a diagnostic code");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --format=<fmt>      Output format: text (default), json");
    println!("  --color=<when>      Color: auto (default), always, never");
    println!("  --error-limit=<n>   Stop reporting after n errors (0 = unlimited)");
    println!("  --braces=<how>      Brace matching: auto (default), syntax, tokens");
    println!();
    println!("Environment:");
    println!("  ASF_LOG             Log filter, e.g. `asf_parse=trace` (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  asf check scale.asf");
    println!("  echo 'a = rand(1)' | asf check - --format=json");
    println!("  asf explain unknown-method-name");
}
