use serde::Serialize;

/// Where the parser currently is in the course outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    pub course_number: String,
    pub part: String,
    pub chapter: String,
}

impl Hierarchy {
    /// `[course ][part - ][chapter - ]title`, skipping empty levels.
    pub fn qualify(&self, title: &str) -> String {
        let mut name = String::new();
        if !self.course_number.is_empty() {
            name.push_str(&self.course_number);
            name.push(' ');
        }
        if !self.part.is_empty() {
            name.push_str(&self.part);
            name.push_str(" - ");
        }
        if !self.chapter.is_empty() {
            name.push_str(&self.chapter);
            name.push_str(" - ");
        }
        name.push_str(title);
        name
    }
}

/// One playable clip of the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipEntry {
    name: String,
    short_name: String,
    original_duration: u32,
    adjusted_duration: u32,
}

impl ClipEntry {
    pub fn new(hierarchy: &Hierarchy, title: &str, seconds: u32) -> Self {
        Self {
            name: hierarchy.qualify(title),
            short_name: title.to_string(),
            original_duration: seconds,
            adjusted_duration: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Length in seconds as written in the curriculum.
    pub fn original_duration(&self) -> u32 {
        self.original_duration
    }

    /// Left at 0; filled in by whatever consumes the list.
    pub fn adjusted_duration(&self) -> u32 {
        self.adjusted_duration
    }
}
