//! Drag gesture state machine.
//!
//! One `DragSession` per list instance. Native drag events arrive serially
//! (dragstart, repeated drag/dragover, dragleave, then drop and/or dragend)
//! and each method resolves the gesture's logical state synchronously; the
//! only deferred work is visual cleanup, which the wiring layer schedules
//! via [`DragSession::finish_visuals`] after its exit animation.

use crate::config::{SortableConfig, SCREEN_X_RESET_PX};
use crate::item::SortableItem;
use crate::reorder::{self, ReorderEvent};
use crate::resolver::{self, DropSide, HoverMarker};
use crate::structure;
use crate::visual::VisualState;

/// Indent/outdent intent of a single-item drag, driven by the horizontal
/// classifier. Absent (`None` on the phase) when nesting cannot apply to
/// the gesture: section or grouped drags, pinned items, nesting disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestIntent {
    /// Not a child and no indent pending.
    Cleared,
    /// Entered the gesture as a child and has not outdented.
    Nested,
    /// Indent pending, committed at gesture end.
    Indenting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragPhase {
    Idle,
    Dragging {
        origin: String,
        is_section: bool,
        over_origin: bool,
        /// Row ids co-dragged with the origin (visible children or section
        /// members). Hidden members of a collapsed section are counted at
        /// drop time, not carried here.
        dependents: Vec<String>,
        nest: Option<NestIntent>,
        /// Captured base for the horizontal delta classifier.
        screen_x: Option<i32>,
        /// Row currently carrying a redirected section-boundary marker.
        section_marker: Option<String>,
    },
}

/// Pointer geometry for a dragover/drop on a candidate row. The wiring
/// layer reads these off the event and the row's bounding rect.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub target_id: String,
    pub pointer_y: f64,
    pub row_top: f64,
    pub row_height: f64,
}

/// What a drop amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing to do: no-op position, disallowed placement, or unknown row.
    Ignored,
    /// An item from another list landed here. `hovered_index` is the row it
    /// was dropped on, `insert_index` where an insertion would go after the
    /// midpoint rule.
    External {
        hovered_index: usize,
        insert_index: usize,
    },
    /// The backing list was mutated.
    Reordered(ReorderEvent),
}

/// The per-list gesture state. Reset atomically at gesture start and end;
/// all event methods are cheap enough for dragover rates.
#[derive(Debug, Default)]
pub struct DragSession {
    phase: DragPhase,
    pub visual: VisualState,
}

impl Default for DragPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gesture that started in this list is still in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Begin a gesture on the row with `id`. Unknown ids are ignored (the
    /// row may be mid-animation and stale).
    pub fn drag_start<T>(
        &mut self,
        items: &[SortableItem<T>],
        config: &SortableConfig,
        id: &str,
    ) {
        self.phase = DragPhase::Idle;
        self.visual.clear();

        let Some(index) = structure::index_of(items, id) else {
            return;
        };
        let item = &items[index];

        self.visual.drag_in_progress = true;

        let dependents: Vec<String> = items[structure::children_of(items, index)]
            .iter()
            .map(|dep| dep.id.clone())
            .collect();

        // Sections and parents drag their run as a unit and never change
        // nesting within the same gesture.
        let nest = if item.is_section || !dependents.is_empty() {
            None
        } else if config.can_nest && !structure::is_pinned(items, index) {
            Some(if item.is_child() {
                NestIntent::Nested
            } else {
                NestIntent::Cleared
            })
        } else {
            None
        };

        self.phase = DragPhase::Dragging {
            origin: id.to_owned(),
            is_section: item.is_section,
            over_origin: false,
            dependents,
            nest,
            screen_x: None,
            section_marker: None,
        };
    }

    /// Apply the "dragging" flags for the active gesture's rows. Kept
    /// separate from [`DragSession::drag_start`] so the wiring layer can
    /// defer it until after the browser has snapshotted its drag image,
    /// which would otherwise capture the faded row.
    pub fn mark_dragging(&mut self) {
        if let DragPhase::Dragging {
            origin, dependents, ..
        } = &self.phase
        {
            self.visual.row_mut(origin).dragging = true;
            for dep in dependents {
                self.visual.row_mut(dep).dragging = true;
            }
        }
    }

    /// Continuous `drag` event: the one-dimensional indent classifier. Runs
    /// only while hovering the origin row, so horizontal adjustment keeps
    /// working when the cursor has left every drop target.
    pub fn drag_move(&mut self, config: &SortableConfig, new_screen_x: i32) {
        let DragPhase::Dragging {
            origin,
            over_origin: true,
            nest: Some(intent),
            screen_x,
            ..
        } = &mut self.phase
        else {
            return;
        };

        match *screen_x {
            // unset, or a jump too large to be intent: recapture the base
            Some(base) if (new_screen_x - base).abs() <= SCREEN_X_RESET_PX => {
                let delta = new_screen_x - base;
                let nested = matches!(intent, NestIntent::Nested | NestIntent::Indenting);
                if nested && delta < -config.nest_tolerance {
                    *intent = NestIntent::Cleared;
                    *screen_x = Some(new_screen_x);
                    self.visual.row_mut(origin).nesting = false;
                } else if !nested && delta > config.nest_tolerance {
                    *intent = NestIntent::Indenting;
                    *screen_x = Some(new_screen_x);
                    self.visual.row_mut(origin).nesting = true;
                }
            }
            _ => *screen_x = Some(new_screen_x),
        }
    }

    /// `dragover` on a candidate row. Returns whether the browser default
    /// must be prevented (i.e. whether a drop here is acceptable).
    pub fn drag_over<T>(
        &mut self,
        items: &[SortableItem<T>],
        config: &SortableConfig,
        hover: &HoverInfo,
    ) -> bool {
        let DragPhase::Dragging {
            origin,
            is_section,
            over_origin,
            dependents,
            section_marker,
            ..
        } = &mut self.phase
        else {
            // foreign drag: another list instance owns the gesture
            if !config.allow_external_drops {
                self.visual.invalid_drag_over = true;
                return false;
            }
            if let Some(hovered) = structure::index_of(items, &hover.target_id) {
                let side = resolver::drop_side(hover.pointer_y, hover.row_top, hover.row_height);
                apply_midpoint_marker(&mut self.visual, items, hovered, side, config);
            }
            return true;
        };

        let (Some(origin_index), Some(hovered)) = (
            structure::index_of(items, origin),
            structure::index_of(items, &hover.target_id),
        ) else {
            return true;
        };

        let is_same = hovered == origin_index;
        if is_same != *over_origin {
            // entering the origin releases the group visually so the user
            // sees what an indent would apply to; leaving re-captures it
            for dep in dependents.iter() {
                self.visual.row_mut(dep).dragging = !is_same;
            }
            *over_origin = is_same;
        }
        if is_same {
            return true;
        }

        if !*is_section {
            if self.visual.flags(&hover.target_id).dragging {
                // hovering a row that is part of the dragged group
                return true;
            }
            let side = resolver::drop_side(hover.pointer_y, hover.row_top, hover.row_height);
            apply_midpoint_marker(&mut self.visual, items, hovered, side, config);
            return true;
        }

        match resolver::section_hover_marker(items, origin_index, hovered) {
            HoverMarker::Ignore => {}
            HoverMarker::Above(index) => {
                retarget_section_marker(&mut self.visual, section_marker, &items[index].id);
                self.visual.mark_above(&items[index].id);
            }
            HoverMarker::Below(index) => {
                retarget_section_marker(&mut self.visual, section_marker, &items[index].id);
                self.visual.mark_below(&items[index].id);
            }
        }
        true
    }

    /// `dragleave` from a row: drop its insertion markers and restore the
    /// gaps. Leaving the origin row keeps the nesting mark, so re-entering
    /// does not lose indent intent.
    pub fn drag_leave<T>(&mut self, items: &[SortableItem<T>], left_id: &str) {
        self.visual.invalid_drag_over = false;

        if let DragPhase::Dragging {
            origin,
            section_marker,
            ..
        } = &mut self.phase
        {
            if left_id == origin {
                return;
            }
            if let Some(marked) = section_marker.take() {
                self.visual.clear_markers_on(&marked);
            }
        }

        self.visual.clear_markers_on(left_id);
        if let Some(index) = structure::index_of(items, left_id) {
            if let Some(next) = items.get(index + 1) {
                self.visual.row_mut(&next.id).spacer = true;
            }
        }
    }

    /// `drop` on a candidate row. Mutates the backing list for same-list
    /// gestures and returns the reorder event synchronously; foreign drops
    /// yield [`DropOutcome::External`] and leave the list untouched.
    pub fn drop_at<T>(
        &mut self,
        items: &mut Vec<SortableItem<T>>,
        config: &SortableConfig,
        hover: &HoverInfo,
    ) -> DropOutcome {
        let DragPhase::Dragging {
            origin,
            is_section,
            dependents,
            nest,
            ..
        } = &self.phase
        else {
            // foreign drop
            if !config.allow_external_drops {
                self.visual.invalid_drag_over = true;
                return DropOutcome::Ignored;
            }
            let Some(hovered) = structure::index_of(items, &hover.target_id) else {
                return DropOutcome::Ignored;
            };
            let side = resolver::drop_side(hover.pointer_y, hover.row_top, hover.row_height);
            self.visual.clear_all_markers();
            let insert_index = match side {
                Some(DropSide::Below) => hovered + 1,
                _ => hovered,
            };
            return DropOutcome::External {
                hovered_index: hovered,
                insert_index,
            };
        };

        let (Some(old_index), Some(hovered)) = (
            structure::index_of(items, origin),
            structure::index_of(items, &hover.target_id),
        ) else {
            self.visual.clear_all_markers();
            return DropOutcome::Ignored;
        };

        let flags = self.visual.flags(&hover.target_id);
        let side = if flags.drop_above {
            Some(DropSide::Above)
        } else if flags.drop_below {
            Some(DropSide::Below)
        } else {
            None
        };

        let is_section = *is_section;
        let nest = *nest;
        let visible_dependents = dependents.len();
        self.visual.clear_all_markers();

        let hidden = structure::hidden_children_of(items, old_index).len();
        let total_dependents = visible_dependents + hidden;

        // dropping on yourself or inside your own dragged run
        if hovered >= old_index && hovered <= old_index + total_dependents {
            return DropOutcome::Ignored;
        }

        let Some(new_index) =
            resolver::resolve_drop_index(items, old_index, hovered, side, is_section)
        else {
            return DropOutcome::Ignored;
        };

        if new_index == 0 && !is_section && !config.can_drop_non_section_at_top {
            log::debug!("drop at top of list disallowed by configuration");
            return DropOutcome::Ignored;
        }

        if new_index == old_index {
            // no positional change; still worth an event if the indent
            // classifier changed the item's child state
            if let Some(intent) = nest {
                if let Some(is_child) = commit_nest_intent(items, old_index, intent) {
                    return DropOutcome::Reordered(ReorderEvent {
                        id: items[old_index].id.clone(),
                        old_index,
                        new_index: old_index,
                        is_child,
                        dependents: 0,
                    });
                }
            }
            return DropOutcome::Ignored;
        }

        let up = hovered < old_index;
        let mut event = reorder::reorder(items, old_index, new_index, total_dependents, up);

        if let Some(intent) = nest {
            if let Some(is_child) = commit_nest_intent(items, event.new_index, intent) {
                event.is_child = is_child;
            }
        }

        DropOutcome::Reordered(event)
    }

    /// `dragend`: terminal for every gesture, dropped or cancelled. A pure
    /// indent/outdent attempt (single item, gesture ended over the origin)
    /// commits the classifier's verdict here, since the cursor never needs
    /// to touch a drop target to change indentation.
    pub fn drag_end<T>(&mut self, items: &mut [SortableItem<T>]) -> Option<ReorderEvent> {
        let phase = std::mem::take(&mut self.phase);
        self.visual.clear_all_markers();
        self.visual.invalid_drag_over = false;
        self.visual.drag_in_progress = false;

        let DragPhase::Dragging {
            origin,
            is_section,
            over_origin,
            dependents,
            nest,
            ..
        } = phase
        else {
            return None;
        };

        if is_section || !dependents.is_empty() || !over_origin {
            return None;
        }
        let intent = nest?;
        let index = structure::index_of(items, &origin)?;
        let is_child = commit_nest_intent(items, index, intent)?;

        Some(ReorderEvent {
            id: origin,
            old_index: index,
            new_index: index,
            is_child,
            dependents: 0,
        })
    }

    /// Clear the remaining visual state (dragging rows, nesting mark). The
    /// wiring layer calls this after its exit animation; correctness never
    /// depends on it.
    pub fn finish_visuals(&mut self) {
        self.visual.clear();
    }
}

/// Apply the indent classifier's verdict to the item at `index`. Returns
/// the new child state when it actually changed, `None` for no change
/// (including an indent that found no legal parent).
fn commit_nest_intent<T>(
    items: &mut [SortableItem<T>],
    index: usize,
    intent: NestIntent,
) -> Option<bool> {
    let was_child = items[index].is_child();
    let desired = matches!(intent, NestIntent::Nested | NestIntent::Indenting);
    if desired == was_child {
        return None;
    }
    if desired {
        let parent = structure::parent_key_for(items, index)?;
        items[index].parent_key = Some(parent);
        Some(true)
    } else {
        items[index].parent_key = None;
        Some(false)
    }
}

/// 50/50 borders for plain (non-section) hovers: mark the hovered row and
/// propagate the gap to the row after it, as one batched flag change.
fn apply_midpoint_marker<T>(
    visual: &mut VisualState,
    items: &[SortableItem<T>],
    hovered: usize,
    side: Option<DropSide>,
    config: &SortableConfig,
) {
    let id = &items[hovered].id;
    match side {
        Some(DropSide::Above) => {
            // the top border is suppressed when nothing may land above row 0
            if hovered != 0 || config.can_drop_non_section_at_top {
                visual.mark_above(id);
            }
            if let Some(next) = items.get(hovered + 1) {
                visual.row_mut(&next.id).spacer = true;
            }
        }
        Some(DropSide::Below) => {
            visual.mark_below(id);
            if let Some(next) = items.get(hovered + 1) {
                visual.row_mut(&next.id).spacer = false;
            }
        }
        None => {}
    }
}

fn retarget_section_marker(
    visual: &mut VisualState,
    section_marker: &mut Option<String>,
    new_target: &str,
) {
    if let Some(old) = section_marker.take() {
        if old != new_target {
            visual.clear_markers_on(&old);
        }
    }
    *section_marker = Some(new_target.to_owned());
}
