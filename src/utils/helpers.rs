//! Helpers for mls.
//!
//! Defines the accepted range for `layout.min_entry_width` and a few small utilities shared by
//! the config loader and the command line.

use std::io;
use std::path::PathBuf;

/// Smallest `min_entry_width` accepted from the config.
pub const MIN_ENTRY_WIDTH_FLOOR: usize = 1;
/// Largest `min_entry_width` accepted from the config.
pub const MAX_ENTRY_WIDTH_LIMIT: usize = 64;

/// Home directory of the current user, if known.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Safely clamp the configured minimum entry width.
///
/// Out of range values are pulled into [MIN_ENTRY_WIDTH_FLOOR]..=[MAX_ENTRY_WIDTH_LIMIT]
/// with a warning.
pub fn clamp_min_entry_width(value: usize) -> usize {
    let clamped = value.clamp(MIN_ENTRY_WIDTH_FLOOR, MAX_ENTRY_WIDTH_LIMIT);
    if clamped != value {
        eprintln!(
            "[Warning] min_entry_width={} out of range ({}..={}), clamped to {}",
            value, MIN_ENTRY_WIDTH_FLOOR, MAX_ENTRY_WIDTH_LIMIT, clamped
        );
    }
    clamped
}

/// Parses a display width given on the command line.
pub fn parse_width(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

/// Treats a reader that went away (`mls | head`) as a normal end of output.
pub fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_valid_values() {
        assert_eq!(clamp_min_entry_width(4), 4);
        assert_eq!(clamp_min_entry_width(64), 64);
    }

    #[test]
    fn clamp_pulls_into_range() {
        assert_eq!(clamp_min_entry_width(0), 1);
        assert_eq!(clamp_min_entry_width(1000), 64);
    }

    #[test]
    fn width_parsing() {
        assert_eq!(parse_width("80"), Some(80));
        assert_eq!(parse_width(" 120 "), Some(120));
        assert_eq!(parse_width("-1"), None);
        assert_eq!(parse_width("wide"), None);
    }

    #[test]
    fn broken_pipe_ends_quietly() {
        let closed = io::Error::from(io::ErrorKind::BrokenPipe);
        assert!(ignore_broken_pipe(Err(closed)).is_ok());
        assert!(ignore_broken_pipe(Ok(())).is_ok());

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let err = ignore_broken_pipe(Err(denied)).err();
        assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::PermissionDenied));
    }
}
