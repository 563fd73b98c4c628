//! Library crate for meta-ls.
//!
//! The shipped application is the `mls` binary (`src/main.rs`).
//!
//! The `ls` engine lives in [core]: [core::list] resolves targets through a [core::Resolve]
//! implementation and writes a column grid laid out by [core::compute_layout].

pub mod config;
pub mod core;
pub mod utils;
