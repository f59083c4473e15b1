// spelt-cli: shared utilities for the spelt binary.

use std::path::PathBuf;
use std::process;

use spelt::suggest::SuggestConfig;

/// How flagged words get resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Prompt on the console for every flagged word (the default).
    Interactive,
    /// Take the top suggestion without prompting.
    AcceptFirst,
    /// Never substitute; the output equals the input.
    KeepOriginal,
}

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub wordlist: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ResolveMode,
    pub config: SuggestConfig,
}

/// One-line usage string, shown on argument errors.
pub const USAGE: &str = "Usage: spelt [OPTIONS] <wordlist> <input> <output>";

/// Parse command-line arguments (without the program name).
///
/// Exactly three positional arguments are required; anything else is an
/// error. Flags may appear anywhere.
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut positional = Vec::new();
    let mut mode = ResolveMode::Interactive;
    let mut config = SuggestConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-y" | "--accept-first" => mode = ResolveMode::AcceptFirst,
            "-k" | "--keep-all" => mode = ResolveMode::KeepOriginal,
            "-m" | "--match-case" => config.match_case = true,
            "-n" | "--max-suggestions" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                config.max_suggestions = value
                    .parse()
                    .map_err(|_| format!("invalid suggestion count: '{value}'"))?;
            }
            "-t" | "--threshold" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                let threshold: f64 = value
                    .parse()
                    .map_err(|_| format!("invalid threshold: '{value}'"))?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(format!("threshold must be between 0 and 1, got {value}"));
                }
                config.threshold = threshold;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}"));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    if positional.len() != 3 {
        return Err(format!(
            "expected 3 arguments (wordlist, input, output), got {}",
            positional.len()
        ));
    }

    let mut positional = positional.into_iter();
    Ok(CliOptions {
        wordlist: positional.next().unwrap(),
        input: positional.next().unwrap(),
        output: positional.next().unwrap(),
        mode,
        config,
    })
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_three_positionals() {
        let opts = parse_args(&args(&["words.txt", "in.txt", "out.txt"])).unwrap();
        assert_eq!(opts.wordlist, PathBuf::from("words.txt"));
        assert_eq!(opts.input, PathBuf::from("in.txt"));
        assert_eq!(opts.output, PathBuf::from("out.txt"));
        assert_eq!(opts.mode, ResolveMode::Interactive);
        assert_eq!(opts.config.max_suggestions, 3);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(parse_args(&args(&["a", "b"])).is_err());
        assert!(parse_args(&args(&["a", "b", "c", "d"])).is_err());
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn parses_flags_anywhere() {
        let opts = parse_args(&args(&[
            "-y", "words.txt", "--match-case", "in.txt", "out.txt",
        ]))
        .unwrap();
        assert_eq!(opts.mode, ResolveMode::AcceptFirst);
        assert!(opts.config.match_case);
    }

    #[test]
    fn parses_valued_flags() {
        let opts = parse_args(&args(&[
            "-n", "5", "-t", "0.8", "words.txt", "in.txt", "out.txt",
        ]))
        .unwrap();
        assert_eq!(opts.config.max_suggestions, 5);
        assert_eq!(opts.config.threshold, 0.8);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args(&args(&["-t", "2.0", "a", "b", "c"])).is_err());
        assert!(parse_args(&args(&["-t", "x", "a", "b", "c"])).is_err());
        assert!(parse_args(&args(&["-n", "many", "a", "b", "c"])).is_err());
        assert!(parse_args(&args(&["-n"])).is_err());
        assert!(parse_args(&args(&["--frobnicate", "a", "b", "c"])).is_err());
    }
}
