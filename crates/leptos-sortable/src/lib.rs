//! Leptos Sortable List Wiring
//!
//! Binds native HTML5 drag events to a [`sortable_core::DragSession`].
//! One [`SortableState`] per list; rows attach the `make_on_*` handlers
//! and build their class strings with [`row_class`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use sortable_core::payload::{encode_payload, parse_payload, DRAG_DATA_KEY, TEXT_KEY};
use sortable_core::HoverInfo;
pub use sortable_core::{
    DragPayload, DragSession, DropOutcome, DropwellState, ReorderEvent, RowFlags, SortableConfig,
    SortableItem,
};

pub mod class;
pub mod dropwell;

pub use class::{list_class, row_class};
pub use dropwell::Dropwell;

/// Signals for one sortable list instance.
pub struct SortableState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<SortableItem<T>>>,
    pub session: RwSignal<DragSession>,
    pub config: SortableConfig,
}

impl<T: Send + Sync + 'static> Clone for SortableState<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Send + Sync + 'static> Copy for SortableState<T> {}

pub fn create_sortable<T: Send + Sync + 'static>(
    items: Vec<SortableItem<T>>,
    config: SortableConfig,
) -> SortableState<T> {
    SortableState {
        items: RwSignal::new(items),
        session: RwSignal::new(DragSession::new()),
        config,
    }
}

/// Pointer geometry of a drag event against the row element it fired on.
fn hover_info(ev: &DragEvent, target_id: &str) -> Option<HoverInfo> {
    let element = ev
        .current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?;
    let rect = element.get_bounding_client_rect();
    Some(HoverInfo {
        target_id: target_id.to_owned(),
        pointer_y: ev.client_y() as f64,
        row_top: rect.top(),
        row_height: rect.height(),
    })
}

/// Read the drag payload off an event, falling back to the bare id in the
/// plain-text field for drags started outside this library.
fn transfer_payload(ev: &DragEvent) -> Option<DragPayload> {
    let dt = ev.data_transfer()?;
    if let Ok(raw) = dt.get_data(DRAG_DATA_KEY) {
        if let Some(payload) = parse_payload(&raw) {
            return Some(payload);
        }
    }
    let text = dt.get_data(TEXT_KEY).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| DragPayload::new(text, None))
}

/// Create dragstart handler for a row: writes the transfer payload and
/// opens the gesture.
pub fn make_on_dragstart<T: Send + Sync + 'static>(
    state: SortableState<T>,
    id: String,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let payload = state.items.with_untracked(|items| {
                items
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| DragPayload::new(&item.id, item.kind.clone()))
            });
            if let Some(payload) = payload {
                // Firefox refuses to start a drag without transfer data
                let _ = dt.set_data(DRAG_DATA_KEY, &encode_payload(&payload));
                let _ = dt.set_data(TEXT_KEY, &id);
                dt.set_effect_allowed("move");
            }
        }
        let config = state.config;
        state.items.with_untracked(|items| {
            state
                .session
                .update(|session| session.drag_start(items, &config, &id));
        });

        // applying the dragging class synchronously would make the browser
        // snapshot the faded row as the drag image
        let session = state.session;
        Timeout::new(0, move || {
            session.try_update(|s| s.mark_dragging());
        })
        .forget();
    }
}

/// Create drag handler for a row: feeds screen-x into the indent
/// classifier. Only meaningful on lists with nesting enabled.
pub fn make_on_drag<T: Send + Sync + 'static>(
    state: SortableState<T>,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        let config = state.config;
        state
            .session
            .update(|session| session.drag_move(&config, ev.screen_x()));
    }
}

/// Create dragover handler for a row. Calls `prevent_default` exactly when
/// the session accepts a drop here, which is what makes the row droppable.
pub fn make_on_dragover<T: Send + Sync + 'static>(
    state: SortableState<T>,
    id: String,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        let Some(hover) = hover_info(&ev, &id) else {
            return;
        };
        let config = state.config;
        let accept = state.items.with_untracked(|items| {
            state
                .session
                .try_update(|session| session.drag_over(items, &config, &hover))
                .unwrap_or(false)
        });
        if accept {
            ev.prevent_default();
        }
    }
}

/// Create dragleave handler for a row.
pub fn make_on_dragleave<T: Send + Sync + 'static>(
    state: SortableState<T>,
    id: String,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        state.items.with_untracked(|items| {
            state
                .session
                .update(|session| session.drag_leave(items, &id));
        });
    }
}

/// Create drop handler for a row. Same-list drops mutate the backing items
/// and report the reorder through `on_reorder`; drops whose drag started in
/// another list go to `on_external` with the decoded payload and the
/// indices the midpoint rule resolved.
pub fn make_on_drop<T, F, G>(
    state: SortableState<T>,
    id: String,
    on_reorder: F,
    on_external: G,
) -> impl Fn(DragEvent) + Clone + 'static
where
    T: Send + Sync + 'static,
    F: Fn(ReorderEvent) + Clone + 'static,
    G: Fn(DragPayload, usize, usize, DragEvent) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let Some(hover) = hover_info(&ev, &id) else {
            return;
        };
        let config = state.config;
        let outcome = state
            .items
            .try_update(|items| {
                state
                    .session
                    .try_update(|session| session.drop_at(items, &config, &hover))
            })
            .flatten()
            .unwrap_or(DropOutcome::Ignored);

        match outcome {
            DropOutcome::Reordered(event) => on_reorder(event),
            DropOutcome::External {
                hovered_index,
                insert_index,
            } => {
                if let Some(payload) = transfer_payload(&ev) {
                    on_external(payload, hovered_index, insert_index, ev.clone());
                }
            }
            DropOutcome::Ignored => {}
        }
    }
}

/// Create dragend handler. Terminal for every gesture: commits a pure
/// indent/outdent through `on_reorder` and schedules the visual cleanup
/// after the exit transition.
pub fn make_on_dragend<T, F>(
    state: SortableState<T>,
    on_reorder: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    T: Send + Sync + 'static,
    F: Fn(ReorderEvent) + Clone + 'static,
{
    move |_ev: DragEvent| {
        let event = state
            .items
            .try_update(|items| {
                state
                    .session
                    .try_update(|session| session.drag_end(items))
            })
            .flatten()
            .flatten();
        if let Some(event) = event {
            on_reorder(event);
        }

        let session = state.session;
        Timeout::new(state.config.animate_speed, move || {
            session.try_update(|s| s.finish_visuals());
        })
        .forget();
    }
}
