//! Package tree for navigation UIs.
//!
//! The generator lists parent packages explicitly (with empty member lists)
//! purely so the browser can render a tree; it does not always list every
//! ancestor. [`PackageTree::build`] reconstructs the full tree, synthesizing
//! any ancestors the index omits.

use crate::model::PackageIndex;
use std::collections::BTreeMap;

/// One package node. `declared` distinguishes packages that appear as keys
/// in the index from ancestors synthesized for tree structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    /// Last segment of the package name (`core` for `...scala.core`).
    pub segment: String,
    /// Full dotted package name.
    pub full_name: String,
    /// Number of descriptors directly in this package.
    pub member_count: usize,
    pub declared: bool,
    /// Children keyed by segment, sorted.
    pub children: BTreeMap<String, PackageNode>,
}

impl PackageNode {
    fn new(segment: &str, full_name: &str) -> Self {
        Self {
            segment: segment.to_string(),
            full_name: full_name.to_string(),
            member_count: 0,
            declared: false,
            children: BTreeMap::new(),
        }
    }

    /// Descriptors in this package and all packages below it.
    pub fn total_members(&self) -> usize {
        self.member_count
            + self
                .children
                .values()
                .map(PackageNode::total_members)
                .sum::<usize>()
    }
}

/// The rooted forest of package segments (`gov` → `nasa` → `jpl` → ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageTree {
    /// Top-level packages keyed by first segment, sorted.
    pub roots: BTreeMap<String, PackageNode>,
}

impl PackageTree {
    pub fn build(index: &PackageIndex) -> Self {
        let mut roots: BTreeMap<String, PackageNode> = BTreeMap::new();
        for (package, members) in index.iter() {
            let mut segments = package.split('.');
            let Some(first) = segments.next() else {
                continue;
            };

            let mut full = first.to_string();
            let mut node = roots
                .entry(first.to_string())
                .or_insert_with(|| PackageNode::new(first, first));
            for segment in segments {
                full.push('.');
                full.push_str(segment);
                let full_name = full.clone();
                node = node
                    .children
                    .entry(segment.to_string())
                    .or_insert_with(|| PackageNode::new(segment, &full_name));
            }
            node.declared = true;
            node.member_count = members.len();
        }
        Self { roots }
    }

    /// Indented text rendering for terminal output. Synthesized ancestors
    /// are marked so they are distinguishable from declared empty packages.
    pub fn render(&self) -> String {
        fn walk(node: &PackageNode, depth: usize, out: &mut String) {
            let indent = "  ".repeat(depth);
            let marker = if node.declared { "" } else { " (synthesized)" };
            out.push_str(&format!(
                "{indent}{} ({}){marker}\n",
                node.segment, node.member_count
            ));
            for child in node.children.values() {
                walk(child, depth + 1, out);
            }
        }

        let mut out = String::new();
        for root in self.roots.values() {
            walk(root, 0, &mut out);
        }
        out
    }

    /// Find the node for a full dotted package name.
    pub fn find(&self, package: &str) -> Option<&PackageNode> {
        let mut segments = package.split('.');
        let mut node = self.roots.get(segments.next()?)?;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }
}
