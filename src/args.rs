use clap::Parser;
use std::path::PathBuf;

use crate::export::Format;

/// Turns a copied course curriculum into a list of clips with durations.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Options {
    /// Curriculum export to read (stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write the clip list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print clip count and total running time to stderr
    #[arg(short, long)]
    pub summary: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "curriculum=warn",
            1 => "curriculum=info",
            2 => "curriculum=debug",
            _ => "curriculum=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::try_parse_from(["curriculum"]).unwrap();
        assert!(opts.input.is_none());
        assert_eq!(opts.format, Format::Text);
        assert!(!opts.summary);
        assert_eq!(opts.log_filter(), "curriculum=warn");
    }

    #[test]
    fn all_flags() {
        let opts = Options::try_parse_from([
            "curriculum",
            "-f",
            "csv",
            "-o",
            "out.csv",
            "-s",
            "-vv",
            "list.txt",
        ])
        .unwrap();
        assert_eq!(opts.input, Some(PathBuf::from("list.txt")));
        assert_eq!(opts.format, Format::Csv);
        assert_eq!(opts.output, Some(PathBuf::from("out.csv")));
        assert!(opts.summary);
        assert_eq!(opts.log_filter(), "curriculum=debug");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Options::try_parse_from(["curriculum", "--format", "xml"]).is_err());
    }
}
