//! Cumulative per-level fragments.

use crate::element;

/// The drawing's state after each level, `0..=step_count`.
///
/// Level 0 is the background alone; level `k` adds the `k`-th triangle,
/// which is the only one carrying the rotation. Fragments have no root
/// element so they can be embedded as string literals elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Frames {
    canvas_size: f64,
    fragments: Vec<String>,
}

impl Frames {
    pub(crate) fn new(canvas_size: f64, fragments: Vec<String>) -> Self {
        Self {
            canvas_size,
            fragments,
        }
    }

    /// Number of levels, always `step_count + 1`.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Never true for rendered frames; level 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Markup for `level`, or `None` past the last level.
    pub fn level(&self, level: usize) -> Option<&str> {
        self.fragments.get(level).map(String::as_str)
    }

    /// The completed drawing.
    pub fn last(&self) -> Option<&str> {
        self.fragments.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fragments
    }

    /// Owned fragments, level 0 first.
    pub fn into_vec(self) -> Vec<String> {
        self.fragments
    }

    /// `level` inside a root `<svg>` element, for previewing a single frame.
    pub fn wrap(&self, level: usize) -> Option<String> {
        self.level(level).map(|fragment| {
            let mut document = element::document_open(self.canvas_size);
            document.push_str(fragment);
            document.push_str(element::document_close());
            document
        })
    }
}

impl<'a> IntoIterator for &'a Frames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
