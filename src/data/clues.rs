//! Clue index: the clues the player has collected
//!
//! Clues are kept in a binary search tree ordered by the clue text. A clue
//! is filed once; finding it again changes nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A collected clue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueNode {
    pub clue: String,
    /// Room the clue was first found in
    pub found_in: String,
    pub discovered_at: DateTime<Utc>,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str, found_in: &str) -> Self {
        Self {
            clue: clue.to_string(),
            found_in: found_in.to_string(),
            discovered_at: Utc::now(),
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of unique clues
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clue found in `found_in`.
    ///
    /// Returns `false` when nothing was inserted: the clue is empty or is
    /// already in the index.
    pub fn insert(&mut self, clue: &str, found_in: &str) -> bool {
        if clue.is_empty() {
            return false;
        }

        let inserted = insert_node(&mut self.root, clue, found_in);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walk the collected clues in alphabetical order
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// The clue texts, in alphabetical order
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|node| node.clue.as_str())
    }
}

fn insert_node(slot: &mut Option<Box<ClueNode>>, clue: &str, found_in: &str) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(ClueNode::new(clue, found_in)));
            true
        }
        Some(node) => match clue.cmp(node.clue.as_str()) {
            Ordering::Less => insert_node(&mut node.left, clue, found_in),
            Ordering::Greater => insert_node(&mut node.right, clue, found_in),
            Ordering::Equal => false,
        },
    }
}

/// In-order iterator over a [`ClueIndex`]
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ClueNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a ClueNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
