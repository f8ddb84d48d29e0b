//! Dropwell Component
//!
//! A stationary drop target next to a list: drag a row onto it to assign
//! the row to whatever the well represents. Never reorders anything.

use leptos::prelude::*;
use web_sys::DragEvent;

use sortable_core::dropwell::{dropwell_disabled, DropwellState};
use sortable_core::payload::{DRAG_DATA_KEY, TEXT_KEY};
use sortable_core::DragPayload;

/// Drop target component. Disabled (and visually muted) while `selected`
/// already holds this well's id, so the current assignment cannot be
/// re-dropped onto itself.
#[component]
pub fn Dropwell(
    /// Identity of this well, compared against `selected`.
    well_id: String,
    /// The currently assigned well id, if any.
    #[prop(into)]
    selected: Signal<Option<String>>,
    /// Fired with this well's id and the decoded payload when an enabled
    /// well takes a drop.
    on_drop: Callback<(String, DragPayload)>,
    children: Children,
) -> impl IntoView {
    let (well, set_well) = signal(DropwellState::default());

    let well_key = StoredValue::new(well_id);
    let disabled = Signal::derive(move || {
        well_key.with_value(|id| dropwell_disabled(id, selected.get().as_deref()))
    });

    let on_dragenter = move |_: DragEvent| {
        set_well.update(|w| w.drag_enter(disabled.get_untracked()));
    };

    let on_dragover = move |ev: DragEvent| {
        let accept = set_well
            .try_update(|w| w.drag_over(disabled.get_untracked()))
            .unwrap_or(false);
        if accept {
            ev.prevent_default();
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_well.update(|w| w.drag_leave());
    };

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        let raw = ev
            .data_transfer()
            .and_then(|dt| {
                dt.get_data(DRAG_DATA_KEY)
                    .ok()
                    .filter(|raw| !raw.is_empty())
                    .or_else(|| dt.get_data(TEXT_KEY).ok())
            })
            .unwrap_or_default();
        let payload = set_well
            .try_update(|w| w.drop_payload(disabled.get_untracked(), &raw))
            .flatten();
        if let Some(payload) = payload {
            on_drop.run((well_key.get_value(), payload));
        }
    };

    view! {
        <div
            class=move || {
                let mut c = String::from("dropwell");
                if well.get().is_hovered() { c.push_str(" active"); }
                if disabled.get() { c.push_str(" disabled"); }
                c
            }
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
        >
            {children()}
        </div>
    }
}
