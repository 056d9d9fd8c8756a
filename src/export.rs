use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use crate::clip::ClipEntry;
use crate::duration::format_seconds;

const CSV_HEADER: &str = "name,shortName,originalDuration,adjustedDuration";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `name<TAB>duration`, one clip per line
    #[default]
    Text,
    Csv,
    Json,
}

pub fn write_clips<W: Write>(out: &mut W, clips: &[ClipEntry], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for clip in clips {
                let duration = format_seconds(u64::from(clip.original_duration()));
                writeln!(out, "{}\t{}", clip.name(), duration)?;
            }
        }
        Format::Csv => {
            writeln!(out, "{}", CSV_HEADER)?;
            for clip in clips {
                writeln!(
                    out,
                    "{},{},{},{}",
                    csv_field(clip.name()),
                    csv_field(clip.short_name()),
                    clip.original_duration(),
                    clip.adjusted_duration()
                )?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, clips).wrap_err("failed to encode clips")?;
            writeln!(out)?;
        }
    }
    out.flush().wrap_err("failed to flush output")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub total_seconds: u64,
}

impl Summary {
    pub fn of(clips: &[ClipEntry]) -> Self {
        Self {
            count: clips.len(),
            total_seconds: clips.iter().map(|clip| u64::from(clip.original_duration())).sum(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} clips, total {}", self.count, format_seconds(self.total_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn render(clips: &[ClipEntry], format: Format) -> String {
        let mut buf = Vec::new();
        write_clips(&mut buf, clips, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lines() {
        let clips = parse("72\nIntro 3:05\nLong one\n1:00:00");
        assert_eq!(render(&clips, Format::Text), "72 Intro\t3:05\n72 Long one\t1:00:00\n");
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        let clips = parse("Hello, \"world\"\n2:00\nPlain 0:30");
        assert_eq!(
            render(&clips, Format::Csv),
            "name,shortName,originalDuration,adjustedDuration\n\
             \"Hello, \"\"world\"\"\",\"Hello, \"\"world\"\"\",120,0\n\
             Plain,Plain,30,0\n"
        );
    }

    #[test]
    fn json_array() {
        let clips = parse("CH01-01. 제목\n19:49");
        let value: serde_json::Value = serde_json::from_str(&render(&clips, Format::Json)).unwrap();
        assert_eq!(value[0]["name"], "Ch01 - CH01-01. 제목");
        assert_eq!(value[0]["originalDuration"], 1189);
        assert_eq!(value[0]["adjustedDuration"], 0);
    }

    #[test]
    fn empty_list() {
        assert_eq!(render(&[], Format::Text), "");
        assert_eq!(render(&[], Format::Json), "[]\n");
    }

    #[test]
    fn summary_totals() {
        let clips = parse("A 19:49\nB 3:00\nC 1:00:00");
        let summary = Summary::of(&clips);
        assert_eq!(summary, Summary { count: 3, total_seconds: 1189 + 180 + 3600 });
        assert_eq!(summary.to_string(), "3 clips, total 1:22:49");
    }

    #[test]
    fn summary_under_an_hour_matches_text_export() {
        let clips = parse("A 2:05\nB 1:00");
        assert_eq!(Summary::of(&clips).to_string(), "2 clips, total 3:05");
    }
}
