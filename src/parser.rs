use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::clip::{ClipEntry, Hierarchy};
use crate::duration;

static PROGRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+/[0-9]+$").unwrap());
static COURSE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^part\s*([0-9]+)").unwrap());
static CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ch(?:apter)?\s*([0-9]+)(?:[.\s]+.*)?$").unwrap());
static SUB_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ch([0-9]+)-([0-9]+)[.\s]*(.*)$").unwrap());

/// Submission status, quiz and assignment rows of the classroom sidebar.
pub const MARKER_KEYWORDS: [&str; 4] = ["미제출", "퀴즈", "과제", "제출"];

/// What a single line was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Progress,
    Marker,
    PendingDuration,
    CourseNumber,
    Part,
    Chapter,
    SubChapter,
    InlineDuration,
    Title,
}

/// One row of the classification table. `apply` returns `false` when the
/// line does not match, leaving the context untouched.
pub struct Rule {
    pub kind: LineKind,
    apply: fn(&mut ParseContext, &str) -> bool,
}

/// Evaluated top to bottom for every line; the first match wins.
pub static RULES: &[Rule] = &[
    Rule { kind: LineKind::Blank, apply: skip_blank },
    Rule { kind: LineKind::Progress, apply: skip_progress },
    Rule { kind: LineKind::Marker, apply: skip_marker },
    Rule { kind: LineKind::PendingDuration, apply: close_pending },
    Rule { kind: LineKind::CourseNumber, apply: set_course_number },
    Rule { kind: LineKind::Part, apply: enter_part },
    Rule { kind: LineKind::Chapter, apply: enter_chapter },
    Rule { kind: LineKind::SubChapter, apply: open_sub_chapter },
    Rule { kind: LineKind::InlineDuration, apply: emit_inline },
    Rule { kind: LineKind::Title, apply: hold_title },
];

/// Running state of one `parse` call.
#[derive(Debug, Default)]
pub(crate) struct ParseContext {
    hierarchy: Hierarchy,
    pending_title: Option<String>,
    clips: Vec<ClipEntry>,
}

impl ParseContext {
    fn feed(&mut self, raw: &str) -> LineKind {
        let line = raw.trim();
        let kind = RULES
            .iter()
            .find(|rule| (rule.apply)(self, line))
            .map_or(LineKind::Title, |rule| rule.kind);
        trace!(?kind, line, "classified line");
        kind
    }

    fn emit(&mut self, title: &str, seconds: u32) {
        let clip = ClipEntry::new(&self.hierarchy, title, seconds);
        debug!(
            name = clip.name(),
            duration = %duration::format_seconds(u64::from(seconds)),
            "clip"
        );
        self.clips.push(clip);
    }

    fn clear_pending(&mut self) {
        if let Some(dropped) = self.pending_title.take() {
            debug!(title = %dropped, "title never received a duration, dropped");
        }
    }

    fn set_pending(&mut self, title: String) {
        self.clear_pending();
        self.pending_title = Some(title);
    }

    fn finish(mut self) -> Vec<ClipEntry> {
        self.clear_pending();
        self.clips
    }
}

/// Parses a curriculum export into its clips, in source order.
pub fn parse(text: &str) -> Vec<ClipEntry> {
    let mut ctx = ParseContext::default();
    for line in text.lines() {
        ctx.feed(line);
    }
    let clips = ctx.finish();
    debug!(count = clips.len(), "parsed curriculum");
    clips
}

fn chapter_code(number: &str) -> String {
    format!("Ch{:0>2}", number)
}

fn is_title_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':')
}

fn skip_blank(_: &mut ParseContext, line: &str) -> bool {
    line.is_empty()
}

fn skip_progress(_: &mut ParseContext, line: &str) -> bool {
    PROGRESS.is_match(line)
}

fn skip_marker(_: &mut ParseContext, line: &str) -> bool {
    MARKER_KEYWORDS.iter().any(|keyword| line.starts_with(keyword))
}

fn close_pending(ctx: &mut ParseContext, line: &str) -> bool {
    let Some(seconds) = duration::parse_token(line) else {
        return false;
    };
    let Some(title) = ctx.pending_title.take() else {
        return false;
    };
    ctx.emit(&title, seconds);
    true
}

fn set_course_number(ctx: &mut ParseContext, line: &str) -> bool {
    if !COURSE_NUMBER.is_match(line) {
        return false;
    }
    ctx.hierarchy.course_number = line.to_string();
    ctx.clear_pending();
    true
}

fn enter_part(ctx: &mut ParseContext, line: &str) -> bool {
    let Some(caps) = PART.captures(line) else {
        return false;
    };
    if duration::contains_token(line) {
        return false;
    }
    let number = caps[1].trim_start_matches('0');
    ctx.hierarchy.part = format!("Part {}", if number.is_empty() { "0" } else { number });
    ctx.clear_pending();
    true
}

fn enter_chapter(ctx: &mut ParseContext, line: &str) -> bool {
    let Some(caps) = CHAPTER.captures(line) else {
        return false;
    };
    if duration::contains_token(line) {
        return false;
    }
    ctx.hierarchy.chapter = chapter_code(&caps[1]);
    ctx.clear_pending();
    true
}

fn open_sub_chapter(ctx: &mut ParseContext, line: &str) -> bool {
    let Some(caps) = SUB_CHAPTER.captures(line) else {
        return false;
    };
    if duration::contains_token(line) {
        return false;
    }
    ctx.hierarchy.chapter = chapter_code(&caps[1]);
    let label = format!("CH{}-{}", &caps[1], &caps[2]);
    let title = match &caps[3] {
        "" => label,
        rest => format!("{}. {}", label, rest),
    };
    ctx.set_pending(title);
    true
}

fn emit_inline(ctx: &mut ParseContext, line: &str) -> bool {
    let Some(token) = duration::find_token(line) else {
        return false;
    };
    let residue = format!("{}{}", &line[..token.range.start], &line[token.range.end..]);
    let title = residue.trim().trim_end_matches(is_title_separator).trim();
    if !title.is_empty() {
        if let Some(caps) = SUB_CHAPTER.captures(title) {
            ctx.hierarchy.chapter = chapter_code(&caps[1]);
        }
        ctx.emit(title, token.seconds);
    }
    ctx.clear_pending();
    true
}

fn hold_title(ctx: &mut ParseContext, line: &str) -> bool {
    ctx.set_pending(line.to_string());
    true
}
