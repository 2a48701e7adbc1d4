//! Block and identifier types for the page tree

use serde::Deserialize;

/// Identifies a section by its position in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub(crate) usize);

/// Identifies a block by its section and its position within that section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId {
    pub(crate) section: usize,
    pub(crate) block: usize,
}

/// Mutable presentation state for a block
///
/// These are the style props the behaviors toggle at runtime. They start at
/// their resting values and are never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleProps {
    /// Card hover transform analog: raised and highlighted
    pub lifted: bool,
    /// Process-step hover analog: alternate background fill
    pub alt_background: bool,
    /// Parallax translate analog: shifted down this many rows
    pub offset_rows: u16,
    /// Parallax opacity analog: 0 = opaque, 100 = fully faded
    pub fade: u8,
}

/// A leaf of the page tree: some lines of text with classes attached
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Rows this block occupies on the page; defaults to its line count
    #[serde(default)]
    pub height: u16,
    #[serde(skip)]
    pub style: StyleProps,
}

impl Block {
    pub fn new(classes: &[&str], lines: &[&str]) -> Self {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            height: lines.len() as u16,
            lines,
            style: StyleProps::default(),
        }
    }

    /// A blank spacer of the given height
    pub fn spacer(height: u16) -> Self {
        Self {
            classes: Vec::new(),
            lines: Vec::new(),
            height,
            style: StyleProps::default(),
        }
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Idempotent: adding a class the block already has is a no-op
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// The block's display text (first line, or empty)
    pub fn text(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn set_text(&mut self, text: String) {
        if self.lines.is_empty() {
            self.lines.push(text);
        } else {
            self.lines[0] = text;
        }
    }

    /// Height to use after applying the line-count default
    pub(crate) fn effective_height(&self) -> u16 {
        if self.height > 0 {
            self.height
        } else {
            self.lines.len() as u16
        }
    }
}
