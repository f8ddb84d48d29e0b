//! Per-row visual flags.
//!
//! The session records flags and the rendering layer folds them into a
//! single class string per row, so every change lands as one batched class
//! replacement instead of incremental class-list mutation.

use std::collections::HashMap;

/// Flags a renderer turns into row classes. `spacer` is the normal gap
/// between rows and defaults on; the resolver clears it on the row after a
/// "below" marker and restores it when markers move away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFlags {
    pub dragging: bool,
    pub drop_above: bool,
    pub drop_below: bool,
    pub spacer: bool,
    pub nesting: bool,
}

impl Default for RowFlags {
    fn default() -> Self {
        Self {
            dragging: false,
            drop_above: false,
            drop_below: false,
            spacer: true,
            nesting: false,
        }
    }
}

/// Visual output of a list instance. Rows not present in the map carry
/// default flags.
#[derive(Debug, Clone, Default)]
pub struct VisualState {
    rows: HashMap<String, RowFlags>,
    /// A foreign drag hovered this list while external drops are disabled.
    pub invalid_drag_over: bool,
    /// A gesture that started in this list is still active.
    pub drag_in_progress: bool,
}

impl VisualState {
    pub fn flags(&self, id: &str) -> RowFlags {
        self.rows.get(id).copied().unwrap_or_default()
    }

    pub(crate) fn row_mut(&mut self, id: &str) -> &mut RowFlags {
        self.rows.entry(id.to_owned()).or_default()
    }

    /// Place an "insert above" marker on a row.
    pub(crate) fn mark_above(&mut self, id: &str) {
        let row = self.row_mut(id);
        row.drop_above = true;
        row.drop_below = false;
    }

    /// Place an "insert below" marker on a row.
    pub(crate) fn mark_below(&mut self, id: &str) {
        let row = self.row_mut(id);
        row.drop_above = false;
        row.drop_below = true;
    }

    /// Remove insertion markers from a row and restore its gap.
    pub(crate) fn clear_markers_on(&mut self, id: &str) {
        let row = self.row_mut(id);
        row.drop_above = false;
        row.drop_below = false;
        row.spacer = true;
    }

    /// Remove insertion markers everywhere, restoring gaps.
    pub(crate) fn clear_all_markers(&mut self) {
        for row in self.rows.values_mut() {
            row.drop_above = false;
            row.drop_below = false;
            row.spacer = true;
        }
    }

    /// Full reset to the idle state.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.invalid_drag_over = false;
        self.drag_in_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rows_carry_default_flags() {
        let visual = VisualState::default();
        let flags = visual.flags("anything");
        assert!(flags.spacer);
        assert!(!flags.dragging && !flags.drop_above && !flags.drop_below);
    }

    #[test]
    fn markers_are_mutually_exclusive_per_row() {
        let mut visual = VisualState::default();
        visual.mark_above("a");
        visual.mark_below("a");
        let flags = visual.flags("a");
        assert!(!flags.drop_above);
        assert!(flags.drop_below);

        visual.clear_markers_on("a");
        assert_eq!(visual.flags("a"), RowFlags::default());
    }

    #[test]
    fn clear_all_markers_keeps_dragging_flags() {
        let mut visual = VisualState::default();
        visual.row_mut("a").dragging = true;
        visual.mark_above("a");
        visual.clear_all_markers();
        assert!(visual.flags("a").dragging);
        assert!(!visual.flags("a").drop_above);
    }
}
