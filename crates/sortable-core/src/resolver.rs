//! Drop position resolution.
//!
//! Two concerns live here: classifying a hover against a row's vertical
//! midpoint (the 50/50 rule), and translating (hovered row, side, drag
//! direction) into a concrete insertion index. The off-by-one corrections
//! are the subtle part: dragging down with an "above" marker must decrement,
//! dragging up with a "below" marker must increment, or items land one slot
//! off silently.

use crate::item::SortableItem;
use crate::structure;

/// Which half of the target row the pointer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    Above,
    Below,
}

/// 50/50 rule. Exactly on the midpoint keeps whatever marker is already
/// there, so flooding dragover events never flickers the border.
pub fn drop_side(pointer_y: f64, row_top: f64, row_height: f64) -> Option<DropSide> {
    let midpoint = row_top + row_height / 2.0;
    if pointer_y < midpoint {
        Some(DropSide::Above)
    } else if pointer_y > midpoint {
        Some(DropSide::Below)
    } else {
        None
    }
}

/// Where the insertion marker belongs while dragging a section over the row
/// at `hovered`. Sections may not land inside a foreign section, so markers
/// are redirected to that section's boundary rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMarker {
    /// Over self or a member of the dragged section.
    Ignore,
    /// Mark "insert above" on this row index.
    Above(usize),
    /// Mark "insert below" on this row index.
    Below(usize),
}

pub fn section_hover_marker<T>(
    items: &[SortableItem<T>],
    dragged: usize,
    hovered: usize,
) -> HoverMarker {
    if hovered == dragged {
        return HoverMarker::Ignore;
    }
    let up = hovered < dragged;
    let Some(target) = items.get(hovered) else {
        return HoverMarker::Ignore;
    };

    if target.is_section {
        if target.section_collapsed || up {
            // collapsed headers take the marker directly; dragging upward
            // always lands above the header
            return if up {
                HoverMarker::Above(hovered)
            } else {
                HoverMarker::Below(hovered)
            };
        }
        // expanded section, dragging down: marker on its last member
        return HoverMarker::Below(structure::last_in_section(items, hovered));
    }

    match structure::section_of(items, hovered) {
        // above all sections: only the very top of the orphan run is a
        // legal landing spot
        None => HoverMarker::Above(0),
        Some(header) if header == dragged => HoverMarker::Ignore,
        Some(header) => {
            if up {
                HoverMarker::Above(header)
            } else {
                HoverMarker::Below(structure::last_in_section(items, hovered))
            }
        }
    }
}

/// Final insertion index for a drop, or `None` when the drop must be
/// ignored (self-drop, drop within the dragged section).
///
/// `side` is the marker state the hover left behind; `None` means no marker
/// was placed (e.g. a suppressed top border) and the hovered index is used
/// as-is.
pub fn resolve_drop_index<T>(
    items: &[SortableItem<T>],
    dragged: usize,
    hovered: usize,
    side: Option<DropSide>,
    is_section_drag: bool,
) -> Option<usize> {
    let up = hovered < dragged;

    if !is_section_drag {
        let mut index = hovered;
        match side {
            Some(DropSide::Above) if !up => index = index.saturating_sub(1),
            Some(DropSide::Below) if up => index += 1,
            _ => {}
        }
        return Some(index.min(items.len().saturating_sub(1)));
    }

    if hovered == dragged {
        return None;
    }
    let target = items.get(hovered)?;

    if target.is_section {
        // land on the section boundary: above the header going up, after
        // its (possibly hidden) member run going down
        return Some(if up {
            hovered
        } else {
            structure::last_in_section(items, hovered)
        });
    }

    match structure::section_of(items, hovered) {
        None => Some(0),
        Some(header) if header == dragged => None,
        Some(header) => Some(if up {
            header
        } else {
            structure::last_in_section(items, hovered)
        }),
    }
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

    // s1 [a b] s2 [c d]
    fn two_sections() -> Vec<SortableItem<()>> {
        vec![
            section("s1"),
            item("a"),
            item("b"),
            section("s2"),
            item("c"),
            item("d"),
        ]
    }

    #[test]
    fn midpoint_classifies_above_and_below() {
        assert_eq!(drop_side(10.0, 0.0, 40.0), Some(DropSide::Above));
        assert_eq!(drop_side(30.0, 0.0, 40.0), Some(DropSide::Below));
        // dead center: leave the previous marker alone
        assert_eq!(drop_side(20.0, 0.0, 40.0), None);
    }

    #[test]
    fn plain_drop_corrections_are_direction_dependent() {
        let items = two_sections();

        // dragging down, marker above the target: one slot short
        assert_eq!(
            resolve_drop_index(&items, 1, 4, Some(DropSide::Above), false),
            Some(3)
        );
        // dragging down, marker below: as-is
        assert_eq!(
            resolve_drop_index(&items, 1, 4, Some(DropSide::Below), false),
            Some(4)
        );
        // dragging up, marker above: as-is
        assert_eq!(
            resolve_drop_index(&items, 4, 1, Some(DropSide::Above), false),
            Some(1)
        );
        // dragging up, marker below: one slot past
        assert_eq!(
            resolve_drop_index(&items, 4, 1, Some(DropSide::Below), false),
            Some(2)
        );
        // no marker placed: hovered index stands
        assert_eq!(
            resolve_drop_index(&items, 4, 1, None, false),
            Some(1)
        );
    }

    #[test]
    fn section_hover_redirects_to_section_boundaries() {
        let items = two_sections();

        // s1 dragged down over s2's member: marker on s2's last member
        assert_eq!(section_hover_marker(&items, 0, 4), HoverMarker::Below(5));
        // s1 dragged down over the s2 header (expanded): same redirection
        assert_eq!(section_hover_marker(&items, 0, 3), HoverMarker::Below(5));
        // s2 dragged up over s1's member: marker on the s1 header
        assert_eq!(section_hover_marker(&items, 3, 1), HoverMarker::Above(0));
        // own members and self are no-ops
        assert_eq!(section_hover_marker(&items, 0, 1), HoverMarker::Ignore);
        assert_eq!(section_hover_marker(&items, 0, 0), HoverMarker::Ignore);
    }

    #[test]
    fn collapsed_header_takes_the_marker_directly() {
        let mut items = two_sections();
        items[3].section_collapsed = true;
        assert_eq!(section_hover_marker(&items, 0, 3), HoverMarker::Below(3));
    }

    #[test]
    fn orphan_run_redirects_to_the_very_top() {
        let items = vec![item("o1"), item("o2"), section("s1"), item("a")];
        assert_eq!(section_hover_marker(&items, 2, 1), HoverMarker::Above(0));
        assert_eq!(
            resolve_drop_index(&items, 2, 1, None, true),
            Some(0)
        );
    }

    #[test]
    fn section_drop_lands_on_boundaries_and_ignores_own_run() {
        let items = two_sections();

        // down onto s2's member: land after s2's run
        assert_eq!(resolve_drop_index(&items, 0, 4, None, true), Some(5));
        // down onto the s2 header: same
        assert_eq!(resolve_drop_index(&items, 0, 3, None, true), Some(5));
        // up onto s1's member: land on the s1 header
        assert_eq!(resolve_drop_index(&items, 3, 2, None, true), Some(0));
        // own member / self: ignored
        assert_eq!(resolve_drop_index(&items, 0, 1, None, true), None);
        assert_eq!(resolve_drop_index(&items, 0, 0, None, true), None);
    }
}
