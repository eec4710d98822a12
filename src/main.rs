mod alfred;
mod case;
mod output;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::case::registry::Conversion;

#[derive(Parser, Debug)]
#[command(
    name = "codercase",
    version,
    about = "Convert text between identifier naming conventions"
)]
struct Cli {
    /// Text to convert
    #[arg(required_unless_present = "list", allow_hyphen_values = true)]
    text: Option<String>,

    /// Apply a single conversion (function name such as `to_camel_case`, or
    /// an identifier such as `camelcase`) and print only its result
    conversion: Option<String>,

    /// Directory prefix for icon paths in the feedback JSON
    #[arg(long, default_value = "icons")]
    icon_dir: String,

    /// List the known conversion names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if cli.list {
        return output::write_conversion_names(out);
    }

    // clap enforces TEXT whenever --list is absent
    let text = cli.text.unwrap_or_default();

    match cli.conversion {
        Some(name) => {
            let conversion: Conversion = name.parse()?;
            tracing::debug!("Applying {} to {:?}", conversion, text);
            output::write_converted(out, &conversion.apply(&text))
        }
        None => {
            let feedback = alfred::feedback::build(&text, &cli.icon_dir);
            tracing::debug!("Built {} feedback items for {:?}", feedback.items.len(), text);
            output::write_feedback(out, &feedback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut buf = Vec::new();
        run(cli, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_single_conversion() {
        let out = run_args(&["codercase", "hello_world", "to_camel_case"]).unwrap();
        assert_eq!(out, "helloWorld");
    }

    #[test]
    fn test_single_conversion_by_uid() {
        let out = run_args(&["codercase", "HelloWorld", "dashcase"]).unwrap();
        assert_eq!(out, "hello-world");
    }

    #[test]
    fn test_unknown_conversion() {
        let err = run_args(&["codercase", "hello", "to_nothing"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown conversion 'to_nothing'");
    }

    #[test]
    fn test_feedback_mode() {
        let out = run_args(&["codercase", "--icon-dir", "img", "fooBar"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["items"].as_array().unwrap().len(), 10);
        assert_eq!(parsed["items"][1]["arg"], "FooBar");
        assert_eq!(parsed["items"][1]["icon"]["path"], "img/pascal.png");
    }

    #[test]
    fn test_missing_text_is_usage_error() {
        let err = Cli::try_parse_from(["codercase"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_list_without_text() {
        let out = run_args(&["codercase", "--list"]).unwrap();
        assert!(out.starts_with("to_snake_case\tsnakecase\n"));
    }
}
