//! mini token dumper
//!
//! Scans a source string and prints every token it contains.

use minic::commands::{lex_source, read_file};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let source = match args[1].as_str() {
        "--help" | "-h" => {
            print_usage();
            return;
        }
        "--file" | "-f" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: mini --file <path>");
                std::process::exit(1);
            };
            match read_file(path) {
                Ok(content) => content,
                Err(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
            }
        }
        _ => args[1].clone(),
    };

    minic::init_tracing();

    let stdout = std::io::stdout();
    if let Err(e) = lex_source(&source, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("mini token dumper");
    eprintln!();
    eprintln!("Usage: mini <source>");
    eprintln!("       mini --file <path>");
    eprintln!();
    eprintln!("Prints each token as <kind, lexeme>. Illegal characters are");
    eprintln!("reported on stderr and skipped. Set RUST_LOG to adjust logging.");
}
