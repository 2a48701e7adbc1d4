//! The page document: sections, blocks, row extents, and selector lookup

use serde::Deserialize;

use super::block::{Block, BlockId, SectionId};

/// Row span of a section or block within the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowExtent {
    pub top: u16,
    pub height: u16,
}

impl RowExtent {
    /// Bottom row (exclusive)
    pub fn bottom(self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains_row(self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// A container grouping blocks; the unit that one-shot visibility gates
/// (like the stats `counted` marker) attach to
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub classes: Vec<String>,
    /// Anchor name for smooth-scroll navigation (`#products` analog)
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(classes: &[&str], anchor: Option<&str>, blocks: Vec<Block>) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            anchor: anchor.map(|a| a.to_string()),
            blocks,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

/// The page: sections in document order with computed row extents
#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<Section>,
    /// Top row of each section, parallel to `sections`
    section_tops: Vec<u16>,
    total_rows: u16,
}

impl Page {
    pub fn new(sections: Vec<Section>) -> Self {
        let mut page = Self {
            sections,
            section_tops: Vec::new(),
            total_rows: 0,
        };
        page.relayout();
        page
    }

    /// Recompute row extents from block heights
    fn relayout(&mut self) {
        self.section_tops.clear();
        let mut row: u16 = 0;
        for section in &self.sections {
            self.section_tops.push(row);
            for block in &section.blocks {
                row = row.saturating_add(block.effective_height());
            }
        }
        self.total_rows = row;
    }

    pub fn total_rows(&self) -> u16 {
        self.total_rows
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &Section)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (SectionId(i), s))
    }

    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.sections.iter().enumerate().flat_map(|(si, s)| {
            s.blocks.iter().enumerate().map(move |(bi, b)| {
                (
                    BlockId {
                        section: si,
                        block: bi,
                    },
                    b,
                )
            })
        })
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut Section {
        &mut self.sections[id.0]
    }

    pub fn block(&self, id: BlockId) -> &Block {
        &self.sections[id.section].blocks[id.block]
    }

    pub fn block_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.sections[id.section].blocks[id.block]
    }

    /// Row extent of a section (top row through its last block)
    pub fn section_extent(&self, id: SectionId) -> RowExtent {
        let top = self.section_tops[id.0];
        let height = self.sections[id.0]
            .blocks
            .iter()
            .map(|b| b.effective_height() as u32)
            .sum::<u32>()
            .min(u16::MAX as u32) as u16;
        RowExtent { top, height }
    }

    /// Row extent of a single block
    pub fn block_extent(&self, id: BlockId) -> RowExtent {
        let mut top = self.section_tops[id.section];
        for block in &self.sections[id.section].blocks[..id.block] {
            top = top.saturating_add(block.effective_height());
        }
        RowExtent {
            top,
            height: self.block(id).effective_height(),
        }
    }

    /// All sections carrying the given `.class` selector
    pub fn select_sections(&self, selector: &str) -> Vec<SectionId> {
        let Some(class) = selector.strip_prefix('.') else {
            return Vec::new();
        };
        self.sections()
            .filter(|(_, s)| s.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// All blocks carrying the given `.class` selector, across all sections
    pub fn select_blocks(&self, selector: &str) -> Vec<BlockId> {
        let Some(class) = selector.strip_prefix('.') else {
            return Vec::new();
        };
        self.blocks()
            .filter(|(_, b)| b.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// Blocks matching `.class` scoped to one section
    pub fn select_within(&self, container: SectionId, selector: &str) -> Vec<BlockId> {
        let Some(class) = selector.strip_prefix('.') else {
            return Vec::new();
        };
        self.sections[container.0]
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.has_class(class))
            .map(|(bi, _)| BlockId {
                section: container.0,
                block: bi,
            })
            .collect()
    }

    /// First section with the given anchor name
    pub fn anchor_target(&self, anchor: &str) -> Option<SectionId> {
        self.sections()
            .find(|(_, s)| s.anchor.as_deref() == Some(anchor))
            .map(|(id, _)| id)
    }

    /// The block (if any) occupying the given page row; blocks never overlap
    pub fn block_at_row(&self, row: u16) -> Option<BlockId> {
        self.blocks()
            .map(|(id, _)| id)
            .find(|&id| self.block_extent(id).contains_row(row))
    }
}
