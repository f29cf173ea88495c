// crates/split_blocks/src/cli.rs

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

/// Long options that may also be spelled with a single dash (`-func=bar`, `-phase escape`).
const SINGLE_DASH_LONGS: [&str; 6] = ["func", "identifier", "phase", "input", "output", "verbose"];

/// Rewrites single-dash long options to their `--` form so clap accepts the
/// `-name=value` / `-name value` style. Short options (`-i`, `-o`, `-v`) and
/// everything after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut options_done = false;
    for arg in args {
        let arg: OsString = arg.into();
        if !options_done {
            if arg.to_str() == Some("--") {
                options_done = true;
            } else if let Some(long) = arg.to_str().and_then(double_dash_form) {
                normalized.push(OsString::from(long));
                continue;
            }
        }
        normalized.push(arg);
    }
    normalized
}

fn double_dash_form(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONGS
        .contains(&name)
        .then(|| format!("-{}", arg))
}

pub fn build_command() -> Command {
    Command::new("split_blocks")
        .version("0.1.0")
        .about("Selects before/after marker blocks from compiler phase dumps")
        .arg(
            Arg::new("func")
                .long("func")
                .visible_alias("identifier")
                .value_name("NAME")
                .num_args(1)
                .help("Function (marker identifier) to select; empty selects any"),
        )
        .arg(
            Arg::new("phase")
                .long("phase")
                .value_name("PHASE")
                .num_args(1)
                .help("Phase to select; empty selects any"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("PATH")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Input file (defaults to stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Output file, truncated if it exists (defaults to stdout)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_name("LEVEL")
                .num_args(1)
                .value_parser(value_parser!(u8))
                .default_value("0")
                .help("Verbose trace output level (1 = progress, 2 = markers, 3 = every line)"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        let mut argv = vec!["split_blocks"];
        argv.extend_from_slice(args);
        build_command()
            .try_get_matches_from(normalize_args(argv))
            .map(|m| AppConfig::from_matches(&m))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.filter(), block_selector::Filter::any());
    }

    #[test]
    fn test_all_options() {
        let config = parse(&[
            "--func", "bar", "--phase", "escape", "-i", "in.txt", "-o", "out.txt", "-v", "2",
        ])
        .unwrap();
        assert_eq!(config.identifier, "bar");
        assert_eq!(config.phase, "escape");
        assert_eq!(config.input, Some(PathBuf::from("in.txt")));
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.filter(), block_selector::Filter::new("escape", "bar"));
    }

    #[test]
    fn test_identifier_alias() {
        let config = parse(&["--identifier=(*T).M"]).unwrap();
        assert_eq!(config.identifier, "(*T).M");
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        let err = parse(&["stray"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bad_verbosity_is_rejected() {
        assert!(parse(&["-v", "loud"]).is_err());
    }

    #[test]
    fn test_normalize_args() {
        let normalized =
            normalize_args(["split_blocks", "-func=bar", "-phase", "escape", "-i=x", "-v"]);
        let expected: Vec<OsString> =
            ["split_blocks", "--func=bar", "--phase", "escape", "-i=x", "-v"]
                .iter()
                .map(OsString::from)
                .collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn test_normalize_stops_at_double_dash() {
        let normalized = normalize_args(["split_blocks", "--", "-func=bar"]);
        assert_eq!(normalized[2], OsString::from("-func=bar"));
    }

    #[test]
    fn test_go_flag_style() {
        let config = parse(&[
            "-func=bar", "-phase=escape", "-i=dump.txt", "-o", "out.txt", "-v=2",
        ])
        .unwrap();
        assert_eq!(config.identifier, "bar");
        assert_eq!(config.phase, "escape");
        assert_eq!(config.input, Some(PathBuf::from("dump.txt")));
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(config.verbosity, 2);

        let config = parse(&["-func", "(*T).M", "-verbose", "3", "-input=a.txt"]).unwrap();
        assert_eq!(config.identifier, "(*T).M");
        assert_eq!(config.verbosity, 3);
        assert_eq!(config.input, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn test_unlisted_single_dash_word_is_still_rejected() {
        assert!(parse(&["-funky=bar"]).is_err());
    }
}
