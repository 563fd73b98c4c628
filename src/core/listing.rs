//! The `ls` command: resolve targets, group them, and print each group as a column grid.
//!
//! Targets are resolved strictly in order. Misses are reported inline as they are found.
//! Files are collected into one headerless block printed first; each directory then gets its
//! own block, introduced by a `name:` header whenever more than one block could be shown.

use crate::core::layout::{MIN_ENTRY_WIDTH, compute_layout_with};
use crate::core::node::{Resolve, ResolvedEntry};

use std::io::{self, Write};

/// Target used when `ls` is given no arguments.
pub const CURRENT_DIR: &str = ".";

/// A directory target and the names it contains.
#[derive(Debug)]
struct TargetDirectory {
    name: String,
    children: Vec<String>,
}

/// Runs `ls` with a fixed display width and layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lister {
    width: Option<usize>,
    min_entry_width: usize,
}

impl Lister {
    pub fn new(width: Option<usize>) -> Self {
        Self {
            width,
            min_entry_width: MIN_ENTRY_WIDTH,
        }
    }

    pub fn with_min_entry_width(mut self, min_entry_width: usize) -> Self {
        self.min_entry_width = min_entry_width;
        self
    }

    /// Lists `targets`, writing one line at a time to `out`.
    ///
    /// Only failures of `out` itself are returned; unmatched targets are reported as
    /// `ls: <target>: no such file or directory.` lines.
    pub fn list<S, R, W>(&self, targets: &[S], resolver: &R, out: &mut W) -> io::Result<()>
    where
        S: AsRef<str>,
        R: Resolve + ?Sized,
        W: Write,
    {
        let mut files: Vec<String> = Vec::new();
        let mut directories: Vec<TargetDirectory> = Vec::new();

        let targets: Vec<&str> = if targets.is_empty() {
            vec![CURRENT_DIR]
        } else {
            targets.iter().map(AsRef::as_ref).collect()
        };

        for target in targets {
            match resolver.resolve_entry(target) {
                ResolvedEntry::Missing(pattern) => {
                    writeln!(out, "ls: {}: no such file or directory.", pattern)?;
                }
                ResolvedEntry::File(pattern) => files.push(pattern),
                ResolvedEntry::Directory { pattern, children } => {
                    directories.push(TargetDirectory {
                        name: pattern,
                        children,
                    });
                }
            }
        }

        tracing::trace!(
            ?files,
            ?directories,
            width = ?self.width,
            "ls resolved targets"
        );

        self.print_entries(out, None, &files)?;

        let need_intro = !files.is_empty() || directories.len() > 1;
        let mut first_intro = files.is_empty();
        for directory in &directories {
            let intro = if need_intro {
                let separate = !first_intro;
                first_intro = false;
                Some((separate, directory.name.as_str()))
            } else {
                None
            };
            tracing::trace!(
                name = %directory.name,
                children = ?directory.children,
                "ls directory"
            );
            self.print_entries(out, intro, &directory.children)?;
        }
        Ok(())
    }

    /// Prints one block. `intro` carries the header name and whether a blank line
    /// separates it from the previous block. Empty blocks print nothing at all.
    fn print_entries<W: Write>(
        &self,
        out: &mut W,
        intro: Option<(bool, &str)>,
        entries: &[String],
    ) -> io::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        if let Some((separate, name)) = intro {
            if separate {
                writeln!(out)?;
            }
            writeln!(out, "{}:", name)?;
        }
        let plan = compute_layout_with(self.width, self.min_entry_width, entries);
        tracing::debug!(
            columns = plan.num_columns(),
            rows = plan.entries_per_column(),
            "ls layout"
        );
        for line in plan.render(entries) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Lists `targets` with the default layout settings.
pub fn list<S, R, W>(
    targets: &[S],
    width: Option<usize>,
    resolver: &R,
    out: &mut W,
) -> io::Result<()>
where
    S: AsRef<str>,
    R: Resolve + ?Sized,
    W: Write,
{
    Lister::new(width).list(targets, resolver, out)
}
