//! Core logic for mls.
//!
//! - [layout]: the column search and grid rendering (see [compute_layout], [LayoutPlan]).
//! - [listing]: the `ls` command itself, from targets to output lines (see [list], [Lister]).
//! - [node]: tree nodes and the [Resolve] seam used to look targets up.
//! - [tree]: [DirTree], a resolver reading the tree from a host directory.
//! - [terminal]: display width detection.

pub mod layout;
pub mod listing;
pub mod node;
pub mod terminal;
pub mod tree;

pub use layout::{COLUMN_GAP, LayoutPlan, MIN_ENTRY_WIDTH, compute_layout, compute_layout_with};
pub use listing::{CURRENT_DIR, Lister, list};
pub use node::{Node, Resolve, ResolvedEntry};
pub use terminal::{display_width, effective_width};
pub use tree::DirTree;
