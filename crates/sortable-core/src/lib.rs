//! Sortable Core
//!
//! Framework-free engine for drag-and-drop reorderable lists: sections,
//! collapse/expand, one-level nesting (indent/outdent) and grouped drags.
//! The browser wiring feeds native drag events into a [`DragSession`];
//! this crate owns the gesture state, computes drop positions with the
//! 50/50 midpoint rule, mutates the backing list atomically and returns
//! a single [`ReorderEvent`] per completed gesture.
//!
//! Nothing in here touches the DOM. Rendering layers read per-row
//! [`RowFlags`] and turn them into class strings.

pub mod config;
pub mod dropwell;
pub mod item;
pub mod payload;
pub mod reorder;
pub mod resolver;
pub mod session;
pub mod structure;
pub mod visual;

pub use config::SortableConfig;
pub use dropwell::DropwellState;
pub use item::SortableItem;
pub use payload::DragPayload;
pub use reorder::ReorderEvent;
pub use resolver::DropSide;
pub use session::{DragSession, DropOutcome, HoverInfo};
pub use visual::{RowFlags, VisualState};
