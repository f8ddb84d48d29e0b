//! List configuration.

/// Tunables for a sortable list instance. Defaults are tuned against real
/// browser drag-event firing rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortableConfig {
    /// Enable indent/outdent via horizontal movement.
    pub can_nest: bool,
    /// Horizontal pixels you must drag to indent or outdent.
    pub nest_tolerance: i32,
    /// Visual transition duration in ms; drives deferred cleanup only,
    /// never the reorder notification.
    pub animate_speed: u32,
    /// Accept drops whose drag originated in a different list.
    pub allow_external_drops: bool,
    /// Allow non-section items to land at index 0.
    pub can_drop_non_section_at_top: bool,
}

/// Horizontal jump beyond which the indent classifier re-captures its base
/// coordinate instead of treating the delta as intent.
pub const SCREEN_X_RESET_PX: i32 = 100;

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            can_nest: false,
            nest_tolerance: 60,
            animate_speed: 500,
            allow_external_drops: false,
            can_drop_non_section_at_top: true,
        }
    }
}
