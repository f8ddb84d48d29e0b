//! Structural queries over the backing list.
//!
//! All pure functions of `(&[SortableItem<T>], index)`. Sections own the
//! maximal run of immediately-following non-section items; children are the
//! run of `is_child` items after their parent.

use std::ops::Range;

use crate::item::SortableItem;

/// Backing index for an id. `None` is an expected outcome (stale rows can
/// exist mid-animation) and every caller must tolerate it.
pub fn index_of<T>(items: &[SortableItem<T>], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

/// Visible dependent run of the item at `index`: section members (empty when
/// the section is collapsed), or the run of following children for a plain
/// parent. Children themselves own nothing.
pub fn children_of<T>(items: &[SortableItem<T>], index: usize) -> Range<usize> {
    let Some(item) = items.get(index) else {
        return index..index;
    };

    if item.is_child() {
        return index..index;
    }

    if item.is_section {
        if item.section_collapsed {
            return index..index;
        }
        return section_member_run(items, index);
    }

    let mut end = index + 1;
    while end < items.len() && items[end].is_child() {
        end += 1;
    }
    index + 1..end
}

/// Member run of a *collapsed* section header; empty for anything else.
/// These move with the header even though no row renders them.
pub fn hidden_children_of<T>(items: &[SortableItem<T>], index: usize) -> Range<usize> {
    match items.get(index) {
        Some(item) if item.is_section && item.section_collapsed => {
            section_member_run(items, index)
        }
        _ => index..index,
    }
}

fn section_member_run<T>(items: &[SortableItem<T>], header: usize) -> Range<usize> {
    let mut end = header + 1;
    while end < items.len() && !items[end].is_section {
        end += 1;
    }
    header + 1..end
}

/// Index of the last item belonging to the section that contains `index`
/// (the item just before the next header, or the end of the list). For an
/// empty section this is the header itself.
pub fn last_in_section<T>(items: &[SortableItem<T>], index: usize) -> usize {
    for i in index + 1..items.len() {
        if items[i].is_section {
            return i - 1;
        }
    }
    items.len().saturating_sub(1)
}

/// Nearest preceding section header, scanning backward. `None` for orphans
/// that precede every section.
pub fn section_of<T>(items: &[SortableItem<T>], index: usize) -> Option<usize> {
    (0..index).rev().find(|&i| items[i].is_section)
}

/// Pinned items cannot be indented: the list head, and the first member of
/// any section (indenting it would orphan the indentation target).
pub fn is_pinned<T>(items: &[SortableItem<T>], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    matches!(section_of(items, index), Some(header) if header + 1 == index)
}

/// The id to record as `parent_key` when the item at `index` indents: the
/// preceding item's own parent if it has one (children do not nest), else
/// the preceding item's id. `None` at the head of the list.
pub fn parent_key_for<T>(items: &[SortableItem<T>], index: usize) -> Option<String> {
    if index == 0 {
        return None;
    }
    let precedent = items.get(index - 1)?;
    Some(
        precedent
            .parent_key
            .clone()
            .unwrap_or_else(|| precedent.id.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> SortableItem<()> {
        SortableItem::new(id, ())
    }

    fn section(id: &str) -> SortableItem<()> {
        SortableItem::section(id, ())
    }

    fn child(id: &str, parent: &str) -> SortableItem<()> {
        SortableItem::child_of(id, parent, ())
    }

    fn sectioned() -> Vec<SortableItem<()>> {
        // s1 [a b] s2 [c]
        vec![section("s1"), item("a"), item("b"), section("s2"), item("c")]
    }

    #[test]
    fn index_of_finds_items_and_tolerates_unknown_ids() {
        let items = sectioned();
        assert_eq!(index_of(&items, "b"), Some(2));
        assert_eq!(index_of(&items, "nope"), None);
    }

    #[test]
    fn section_children_stop_at_next_header() {
        let items = sectioned();
        assert_eq!(children_of(&items, 0), 1..3);
        assert_eq!(children_of(&items, 3), 4..5);
    }

    #[test]
    fn collapsed_section_has_hidden_children_only() {
        let mut items = sectioned();
        items[0].section_collapsed = true;
        assert!(children_of(&items, 0).is_empty());
        assert_eq!(hidden_children_of(&items, 0), 1..3);
        // expanded sections have no hidden children
        assert!(hidden_children_of(&items, 3).is_empty());
    }

    #[test]
    fn parent_children_are_the_following_child_run() {
        let items = vec![item("x"), child("y", "x"), child("z", "x"), item("w")];
        assert_eq!(children_of(&items, 0), 1..3);
        // children own nothing
        assert!(children_of(&items, 1).is_empty());
        assert!(children_of(&items, 3).is_empty());
    }

    #[test]
    fn last_in_section_handles_tail_and_empty_sections() {
        let items = sectioned();
        assert_eq!(last_in_section(&items, 0), 2);
        assert_eq!(last_in_section(&items, 1), 2);
        assert_eq!(last_in_section(&items, 3), 4);

        let empty = vec![section("s1"), section("s2"), item("a")];
        assert_eq!(last_in_section(&empty, 0), 0);
    }

    #[test]
    fn section_of_scans_backward_and_orphans_have_none() {
        let items = vec![item("o"), section("s1"), item("a")];
        assert_eq!(section_of(&items, 0), None);
        assert_eq!(section_of(&items, 2), Some(1));
        assert_eq!(section_of(&items, 1), None);
    }

    #[test]
    fn head_and_first_section_members_are_pinned() {
        let items = sectioned();
        assert!(is_pinned(&items, 0));
        assert!(is_pinned(&items, 1)); // first member of s1
        assert!(!is_pinned(&items, 2));
        assert!(is_pinned(&items, 4)); // first member of s2
    }

    #[test]
    fn parent_key_comes_from_precedent_or_its_parent() {
        let items = vec![item("x"), child("y", "x"), item("z")];
        assert_eq!(parent_key_for(&items, 0), None);
        assert_eq!(parent_key_for(&items, 1), Some("x".into()));
        // precedent is itself a child: resolve to its parent, never nest
        assert_eq!(parent_key_for(&items, 2), Some("x".into()));
    }
}
