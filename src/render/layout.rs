//! Page layout for a file summary.
//!
//! A single top-down pass: a cursor starts below the top margin, drops by
//! a fixed step per row, and a new page starts once it falls under the
//! bottom margin. No wrapping; long lines are cut.

use serde::Serialize;

/// US Letter width in points.
pub const PAGE_WIDTH: i64 = 612;
/// US Letter height in points.
pub const PAGE_HEIGHT: i64 = 792;
/// Left, top and bottom margin.
pub const MARGIN: i64 = 40;
/// Cursor position at the top of every page.
pub const TOP: i64 = PAGE_HEIGHT - MARGIN;

const TITLE_SIZE: i64 = 14;
const TEXT_SIZE: i64 = 12;
const HEADER_STEP: i64 = 20;
const SECTION_GAP: i64 = 30;
const LINE_HEIGHT: i64 = 15;

const CONTENTS_LABEL: &str = "File contents:";

/// Standard font a run is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used in content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    /// PostScript name of the standard Type 1 font.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }
}

/// One positioned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub font: Font,
    pub size: i64,
    pub x: i64,
    pub y: i64,
    pub text: String,
}

/// Runs drawn on one page, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

/// What the body of a summary ended up holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyKind {
    /// The file decoded as text; one row per source line.
    Text { lines: usize },
    /// The file could not be read as text.
    Placeholder,
}

/// Header fields shown on page one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryHeader {
    /// Base name of the source file.
    pub file_name: String,
    /// Repository identifier (display only).
    pub repository: String,
    /// Source path as it appeared in the push.
    pub source_path: String,
}

/// A laid-out summary, ready to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub pages: Vec<Page>,
    pub body: BodyKind,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every run in reading order.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|p| p.runs.iter())
    }
}

/// Tracks the vertical position and the page being filled.
struct Cursor {
    pages: Vec<Page>,
    y: i64,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: TOP,
        }
    }

    fn draw(&mut self, font: Font, size: i64, text: impl Into<String>) {
        let run = TextRun {
            font,
            size,
            x: MARGIN,
            y: self.y,
            text: text.into(),
        };
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }

    fn advance(&mut self, step: i64) {
        self.y -= step;
    }

    /// Start a new page if the cursor went past the bottom margin.
    fn ensure_room(&mut self) {
        if self.y < MARGIN {
            self.pages.push(Page::default());
            self.y = TOP;
        }
    }
}

/// Lay out a summary page sequence.
///
/// `content` is `None` when the source could not be read as UTF-8 text;
/// the body is then a single placeholder row.
pub fn layout_summary(
    header: &SummaryHeader,
    content: Option<&str>,
    max_line_chars: usize,
) -> Layout {
    let mut cursor = Cursor::new();

    cursor.draw(Font::Bold, TITLE_SIZE, format!("File uploaded: {}", header.file_name));
    cursor.advance(HEADER_STEP);
    cursor.draw(Font::Regular, TEXT_SIZE, format!("Repository: {}", header.repository));
    cursor.advance(HEADER_STEP);
    cursor.draw(Font::Regular, TEXT_SIZE, format!("File path: {}", header.source_path));
    cursor.advance(SECTION_GAP);

    let body = match content {
        Some(text) => {
            cursor.draw(Font::Regular, TEXT_SIZE, CONTENTS_LABEL);
            cursor.advance(HEADER_STEP);
            let lines = split_lines(text);
            for line in &lines {
                cursor.ensure_room();
                cursor.draw(Font::Regular, TEXT_SIZE, clip_line(line, max_line_chars));
                cursor.advance(LINE_HEIGHT);
            }
            BodyKind::Text { lines: lines.len() }
        }
        None => {
            cursor.draw(Font::Regular, TEXT_SIZE, crate::constants::BINARY_PLACEHOLDER);
            BodyKind::Placeholder
        }
    };

    Layout {
        pages: cursor.pages,
        body,
    }
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.lines().map(str::to_string).collect()
}

/// Strip surrounding whitespace and keep at most `max` characters.
pub fn clip_line(line: &str, max: usize) -> String {
    line.trim().chars().take(max).collect()
}
