//! Miscellaneous utility functions for mls.
//!
//! - [cli]: command-line parsing and help text.
//! - [helpers]: home directory lookup, config value clamping, width parsing and
//!   broken pipe handling.

pub mod cli;
pub mod helpers;

pub use helpers::{
    MAX_ENTRY_WIDTH_LIMIT, MIN_ENTRY_WIDTH_FLOOR, clamp_min_entry_width, get_home,
    ignore_broken_pipe, parse_width,
};
