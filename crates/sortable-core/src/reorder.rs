//! Atomic list mutation.

use crate::item::SortableItem;

/// The single notification a completed gesture produces. `new_index` is the
/// index the dragged item actually landed on, after the downward-move
/// compensation for its dependents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderEvent {
    pub id: String,
    pub old_index: usize,
    pub new_index: usize,
    pub is_child: bool,
    /// Dependents moved with the item, visible and hidden together.
    pub dependents: usize,
}

/// Move the dragged item plus its `total_dependents` immediate followers as
/// one contiguous slice, preserving order within the slice.
///
/// `new_index` is the resolved target index in the pre-removal list; when
/// moving downward the slice is reinserted at `new_index - total_dependents`
/// to compensate for the rows removed from above the target.
pub fn reorder<T>(
    items: &mut Vec<SortableItem<T>>,
    old_index: usize,
    new_index: usize,
    total_dependents: usize,
    up: bool,
) -> ReorderEvent {
    let end = (old_index + 1 + total_dependents).min(items.len());
    let moved: Vec<SortableItem<T>> = items.drain(old_index..end).collect();

    let target = if up {
        new_index
    } else {
        new_index.saturating_sub(total_dependents)
    };
    let target = target.min(items.len());

    let (id, is_child) = moved
        .first()
        .map(|item| (item.id.clone(), item.is_child()))
        .unwrap_or_default();

    for (offset, item) in moved.into_iter().enumerate() {
        items.insert(target + offset, item);
    }

    log::debug!("reorder {id}: {old_index} -> {target} (+{total_dependents} dependents)");

    ReorderEvent {
        id,
        old_index,
        new_index: target,
        is_child,
        dependents: total_dependents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(n: usize) -> Vec<SortableItem<()>> {
        (0..n)
            .map(|i| SortableItem::new(format!("i{i}"), ()))
            .collect()
    }

    fn ids(items: &[SortableItem<()>]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn flat_move_down_keeps_length_and_lands_on_target() {
        let mut items = flat(10);
        let event = reorder(&mut items, 2, 5, 0, false);
        assert_eq!(items.len(), 10);
        assert_eq!(items[5].id, "i2");
        assert_eq!(event.old_index, 2);
        assert_eq!(event.new_index, 5);
        assert_eq!(event.dependents, 0);
    }

    #[test]
    fn round_trip_restores_original_order() {
        let mut items = flat(6);
        let original = ids(&items)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        reorder(&mut items, 1, 4, 0, false);
        reorder(&mut items, 4, 1, 0, true);
        assert_eq!(ids(&items), original);
    }

    #[test]
    fn group_moves_as_one_slice_in_order() {
        // p x1 x2 a b -> a b p x1 x2
        let mut items = vec![
            SortableItem::new("p", ()),
            SortableItem::child_of("x1", "p", ()),
            SortableItem::child_of("x2", "p", ()),
            SortableItem::new("a", ()),
            SortableItem::new("b", ()),
        ];
        let event = reorder(&mut items, 0, 4, 2, false);
        assert_eq!(ids(&items), vec!["a", "b", "p", "x1", "x2"]);
        assert_eq!(event.new_index, 2);
        assert_eq!(event.dependents, 2);
    }

    #[test]
    fn upward_group_move_uses_target_unchanged() {
        let mut items = vec![
            SortableItem::new("a", ()),
            SortableItem::new("b", ()),
            SortableItem::new("p", ()),
            SortableItem::child_of("x", "p", ()),
        ];
        reorder(&mut items, 2, 0, 1, true);
        assert_eq!(ids(&items), vec!["p", "x", "a", "b"]);
    }
}
