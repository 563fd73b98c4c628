//! Nodes of the metadata tree as seen by `ls`, and the [Resolve] seam used to look them up.

/// A matched tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Child names in the order the tree exposes them.
    Directory { children: Vec<String> },
    File,
}

impl Node {
    pub fn directory<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::Directory {
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of resolving one target pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEntry {
    Missing(String),
    File(String),
    Directory { pattern: String, children: Vec<String> },
}

impl ResolvedEntry {
    pub fn from_lookup(pattern: &str, node: Option<Node>) -> Self {
        match node {
            None => ResolvedEntry::Missing(pattern.to_string()),
            Some(Node::File) => ResolvedEntry::File(pattern.to_string()),
            Some(Node::Directory { children }) => ResolvedEntry::Directory {
                pattern: pattern.to_string(),
                children,
            },
        }
    }
}

/// Looks up a target pattern in the metadata tree.
///
/// `None` means nothing matched.
pub trait Resolve {
    fn resolve(&self, pattern: &str) -> Option<Node>;

    fn resolve_entry(&self, pattern: &str) -> ResolvedEntry {
        ResolvedEntry::from_lookup(pattern, self.resolve(pattern))
    }
}

impl<F> Resolve for F
where
    F: Fn(&str) -> Option<Node>,
{
    fn resolve(&self, pattern: &str) -> Option<Node> {
        self(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_resolves_entries() {
        let resolver = |pattern: &str| match pattern {
            "brokers" => Some(Node::directory(["0", "1"])),
            "brokers/0" => Some(Node::File),
            _ => None,
        };

        assert_eq!(
            resolver.resolve_entry("brokers"),
            ResolvedEntry::Directory {
                pattern: "brokers".into(),
                children: vec!["0".into(), "1".into()],
            }
        );
        assert_eq!(
            resolver.resolve_entry("brokers/0"),
            ResolvedEntry::File("brokers/0".into())
        );
        assert_eq!(
            resolver.resolve_entry("topics"),
            ResolvedEntry::Missing("topics".into())
        );
    }
}
