//! The general configuration settings for mls.
//!
//! These only shape how [DirTree](crate::core::DirTree) exposes a directory's children.

use crate::core::DirTree;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    sort: bool,
    case_insensitive: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: true,
            sort: true,
            case_insensitive: true,
        }
    }
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn sort(&self) -> bool {
        self.sort
    }

    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Applies these settings to a tree resolver.
    pub fn apply(&self, tree: DirTree) -> DirTree {
        tree.show_hidden(self.show_hidden)
            .sort(self.sort)
            .case_insensitive(self.case_insensitive)
    }
}
