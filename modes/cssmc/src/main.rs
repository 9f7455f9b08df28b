//! `cssm`: tokenize, reindent and complete CSS, SCSS, LESS and GSS files.

use cssmc::commands::{hint_file, indent_file, print_words, tokens_file};
use cssmc::{init_tracing, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "tokens" | "indent" | "hint" | "words" => {
            let (options, positional) = match Options::parse(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            };

            match (command.as_str(), positional.as_slice()) {
                ("tokens", [path]) => tokens_file(path, &options),
                ("indent", [path]) => indent_file(path, &options),
                ("hint", [path, position]) => hint_file(path, position, &options),
                ("words", []) => print_words(&options),
                ("tokens", _) => usage_error("cssm tokens <file> [--dialect=<name>] [--inline] [--json]"),
                ("indent", _) => usage_error(
                    "cssm indent <file> [--dialect=<name>] [--indent-unit=<n>] [--tab-size=<n>]",
                ),
                ("hint", _) => usage_error("cssm hint <file> <line>:<ch> [--dialect=<name>] [--json]"),
                _ => usage_error("cssm words [--dialect=<name>]"),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cssm {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn usage_error(usage: &str) -> ! {
    eprintln!("Usage: {usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("cssm: CSS-family editor modes");
    println!();
    println!("Usage: cssm <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file>              Print every token with its style");
    println!("  indent <file>              Print the file reindented");
    println!("  hint <file> <line>:<ch>    Print completions at a cursor (zero-based)");
    println!("  words                      Print the plain completion word list");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("Options:");
    println!("  --dialect=<name>     css, scss, less, gss or a MIME type (default: from extension)");
    println!("  --inline             Tokenize as a style attribute body");
    println!("  --indent-unit=<n>    Columns per nesting level (default: 2)");
    println!("  --tab-size=<n>       Columns per tab (default: 4)");
    println!("  --json               Machine-readable output (tokens, hint)");
    println!();
    println!("Examples:");
    println!("  cssm tokens style.scss");
    println!("  cssm tokens theme.css --dialect=less --json");
    println!("  cssm indent main.css --indent-unit=4");
    println!("  cssm hint main.css 3:7");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=cssm_mode=trace) to trace the parser.");
}
