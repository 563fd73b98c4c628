//! Configuration for mls, read from `meta-ls.toml`.
//!
//! - [load]: locating, parsing and generating the config file ([Config], [RawConfig]).
//! - [general]: how the on-disk tree exposes children ([General]).
//! - [layout]: column layout settings ([Layout]).

pub mod general;
pub mod layout;
pub mod load;

pub use general::General;
pub use layout::{InternalLayout, Layout};
pub use load::{Config, ConfigError, RawConfig};
