//! Backing list records.

use serde::{Deserialize, Serialize};

/// A single record in the backing ordered list. Position in the list is the
/// item's order; nesting and sectioning are expressed purely through
/// adjacency plus the flags below, never through a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortableItem<T> {
    pub id: String,
    /// Section headers own the run of following non-section items.
    pub is_section: bool,
    /// Collapsed sections keep their members in the list but hidden.
    pub section_collapsed: bool,
    /// Parent id when this item is indented under another. One level only.
    pub parent_key: Option<String>,
    /// Optional type tag carried in the cross-list drag payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub data: T,
}

impl<T> SortableItem<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            is_section: false,
            section_collapsed: false,
            parent_key: None,
            kind: None,
            data,
        }
    }

    pub fn section(id: impl Into<String>, data: T) -> Self {
        Self {
            is_section: true,
            ..Self::new(id, data)
        }
    }

    pub fn child_of(id: impl Into<String>, parent: impl Into<String>, data: T) -> Self {
        Self {
            parent_key: Some(parent.into()),
            ..Self::new(id, data)
        }
    }

    /// Derived: an item is a child iff it has a parent reference.
    pub fn is_child(&self) -> bool {
        self.parent_key.is_some()
    }
}
