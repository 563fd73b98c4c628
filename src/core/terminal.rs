//! Terminal queries for mls.
//!
//! The only thing `ls` needs from the terminal is how many columns it has. Output that is
//! piped or redirected has no width and gets one entry per line.

use std::io::{self, IsTerminal};

/// Columns of the terminal attached to stdout, or `None` when stdout is not a terminal
/// or its size cannot be read.
pub fn display_width() -> Option<usize> {
    if !io::stdout().is_terminal() {
        return None;
    }
    match crossterm::terminal::size() {
        Ok((columns, _rows)) => Some(columns as usize),
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable");
            None
        }
    }
}

/// Picks the width `ls` lays out for: a forced width wins, a request for single-column output
/// disables fitting, otherwise the terminal is asked.
pub fn effective_width(forced: Option<usize>, columns: bool) -> Option<usize> {
    if !columns {
        return None;
    }
    forced.or_else(display_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_width_wins() {
        assert_eq!(effective_width(Some(42), true), Some(42));
    }

    #[test]
    fn single_column_disables_width() {
        assert_eq!(effective_width(Some(42), false), None);
        assert_eq!(effective_width(None, false), None);
    }
}
