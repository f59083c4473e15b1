// spelt: interactive spell checker over a plain word list.
//
// Loads a dictionary (one word per line), tokenizes an input text,
// flags words missing from the dictionary, and asks the operator to
// pick a replacement for each from ranked suggestions. Separators are
// preserved byte-for-byte in the output file.
//
// Usage:
//   spelt [OPTIONS] <wordlist> <input> <output>
//
// Options:
//   -y, --accept-first        Take the top suggestion without prompting
//   -k, --keep-all            Never substitute; copy flagged words through
//   -m, --match-case          Re-case suggestions to the flagged word
//   -n, --max-suggestions N   Suggestions per word (default 3)
//   -t, --threshold X         Minimum similarity in [0, 1] (default 0.65)
//   -h, --help                Print help

use std::io;
use std::process;

use spelt::dictionary::Dictionary;
use spelt::pipeline::{correct_text, read_input, write_output};
use spelt::resolver::{AcceptFirst, ConsoleResolver, KeepOriginal};
use spelt_cli::{CliOptions, ResolveMode, USAGE};

fn print_help() {
    println!("spelt: interactive spell checker over a plain word list.");
    println!();
    println!("{USAGE}");
    println!();
    println!("Checks <input> against <wordlist> (one word per line) and");
    println!("writes the corrected text to <output>. Flagged words are");
    println!("resolved interactively unless a mode flag says otherwise.");
    println!();
    println!("Options:");
    println!("  -y, --accept-first        Take the top suggestion without prompting");
    println!("  -k, --keep-all            Never substitute; copy flagged words through");
    println!("  -m, --match-case          Re-case suggestions to the flagged word");
    println!("  -n, --max-suggestions N   Suggestions per word (default 3)");
    println!("  -t, --threshold X         Minimum similarity in [0, 1] (default 0.65)");
    println!("  -h, --help                Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if spelt_cli::wants_help(&args) {
        print_help();
        return;
    }

    let opts = match spelt_cli::parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    // Missing dictionary or input degrade to empty rather than
    // aborting, so a run always reaches the output stage; the warnings
    // make the degradation visible.
    let dictionary = match Dictionary::load(&opts.wordlist) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("warning: {e}");
            eprintln!("warning: continuing with an empty word list; every word will be flagged");
            Dictionary::default()
        }
    };

    let text = match read_input(&opts.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("warning: {e}");
            eprintln!("warning: continuing with empty input");
            String::new()
        }
    };

    let corrected = run_correction(&opts, &dictionary, &text);

    if let Err(e) = write_output(&opts.output, &corrected) {
        spelt_cli::fatal(&e.to_string());
    }

    println!(
        "Corrected text written to '{}' successfully.",
        opts.output.display()
    );
}

fn run_correction(opts: &CliOptions, dictionary: &Dictionary, text: &str) -> String {
    match opts.mode {
        ResolveMode::Interactive => {
            let mut resolver = ConsoleResolver::new(io::stdin().lock(), io::stdout());
            correct_text(text, dictionary, &opts.config, &mut resolver)
        }
        ResolveMode::AcceptFirst => {
            correct_text(text, dictionary, &opts.config, &mut AcceptFirst)
        }
        ResolveMode::KeepOriginal => {
            correct_text(text, dictionary, &opts.config, &mut KeepOriginal)
        }
    }
}
