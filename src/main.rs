use std::fs;

use brolang::execute;
use clap::Parser;

/// brolang is a tree-walking interpreter for a small scripting language with
/// Hinglish keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a script file instead of inline source.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let result = execute(&source);
    print!("{}", result.output);

    if let Some(error) = result.error {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
