//! Layout configuration options for mls
//!
//! This module defines the `[layout]` table of the meta-ls.toml configuration file.

use crate::core::{Lister, MIN_ENTRY_WIDTH};
use crate::utils::clamp_min_entry_width;

use serde::Deserialize;

/// Layout options as written in the config file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Layout {
    min_entry_width: usize,
    columns: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            min_entry_width: MIN_ENTRY_WIDTH,
            columns: true,
        }
    }
}

/// Layout options after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternalLayout {
    min_entry_width: usize,
    columns: bool,
}

impl Default for InternalLayout {
    fn default() -> Self {
        InternalLayout::from(Layout::default())
    }
}

impl From<Layout> for InternalLayout {
    fn from(l: Layout) -> Self {
        Self {
            min_entry_width: clamp_min_entry_width(l.min_entry_width),
            columns: l.columns,
        }
    }
}

impl InternalLayout {
    #[inline]
    pub fn min_entry_width(&self) -> usize {
        self.min_entry_width
    }

    /// False forces one entry per line even on a terminal.
    #[inline]
    pub fn columns(&self) -> bool {
        self.columns
    }

    pub fn lister(&self, width: Option<usize>) -> Lister {
        Lister::new(width).with_min_entry_width(self.min_entry_width)
    }
}
