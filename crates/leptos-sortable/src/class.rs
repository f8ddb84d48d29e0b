//! Row and list class-string builders.
//!
//! The session keeps per-row flags; these fold them into one class string
//! so every visual change lands as a single class replacement on the row.

use leptos::prelude::*;

use crate::SortableState;

/// Reactive class string for the row with `id`. `base` is the caller's
/// static row class.
pub fn row_class<T: Send + Sync + 'static>(
    state: SortableState<T>,
    id: String,
    base: &'static str,
) -> impl Fn() -> String + Clone + 'static {
    move || {
        let mut class = String::from(base);
        let flags = state.session.with(|session| session.visual.flags(&id));
        if flags.spacer {
            class.push_str(" spacer");
        }
        if flags.dragging {
            class.push_str(" dragging");
        }
        if flags.drop_above {
            class.push_str(" droppable--above");
        }
        if flags.drop_below {
            class.push_str(" droppable--below");
        }
        if flags.nesting {
            class.push_str(" nesting");
        }
        let nested = state
            .items
            .with(|items| items.iter().any(|item| item.id == id && item.is_child()));
        if nested {
            class.push_str(" nested");
        }
        class
    }
}

/// Reactive class string for the list container.
pub fn list_class<T: Send + Sync + 'static>(
    state: SortableState<T>,
    base: &'static str,
) -> impl Fn() -> String + Clone + 'static {
    move || {
        let mut class = String::from(base);
        state.session.with(|session| {
            if session.visual.drag_in_progress {
                class.push_str(" drag-in-progress");
            }
            if session.visual.invalid_drag_over {
                class.push_str(" invalid-dragover");
            }
        });
        class
    }
}
