//! Stationary external drop target.
//!
//! A dropwell does not reorder anything: it accepts an item payload dragged
//! out of any list and reports which item landed on it. A well is disabled
//! while it already represents the selected value, so you cannot drop a
//! thing onto itself.

use crate::payload::{parse_payload, DragPayload};

/// Per-well hover state. Disabled wells never light up and never fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropwellState {
    hovered: bool,
}

/// A well is disabled when it represents the currently selected value.
pub fn dropwell_disabled(well_id: &str, selected: Option<&str>) -> bool {
    selected == Some(well_id)
}

impl DropwellState {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn drag_enter(&mut self, disabled: bool) {
        if !disabled {
            self.hovered = true;
        }
    }

    /// Returns whether the browser default must be prevented to permit a
    /// drop here.
    pub fn drag_over(&mut self, disabled: bool) -> bool {
        if !disabled {
            self.hovered = true;
        }
        true
    }

    pub fn drag_leave(&mut self) {
        self.hovered = false;
    }

    /// Accept a drop. `raw` is the transfer payload (JSON, or a bare id as
    /// written to the plain-text field). Yields the payload only when the
    /// well is enabled and the payload is usable.
    pub fn drop_payload(&mut self, disabled: bool, raw: &str) -> Option<DragPayload> {
        self.hovered = false;
        if disabled {
            return None;
        }
        parse_payload(raw).or_else(|| {
            // bare id written by older drag sources
            let trimmed = raw.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{'))
                .then(|| DragPayload::new(trimmed, None))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_well_accepts_json_payload() {
        let mut well = DropwellState::default();
        let disabled = dropwell_disabled("well-1", Some("other"));
        assert!(!disabled);

        well.drag_enter(disabled);
        assert!(well.is_hovered());

        let payload = well.drop_payload(disabled, r#"{"pkid":"42"}"#);
        assert_eq!(payload, Some(DragPayload::new("42", None)));
        assert!(!well.is_hovered());
    }

    #[test]
    fn well_is_disabled_for_its_own_selection() {
        let mut well = DropwellState::default();
        let disabled = dropwell_disabled("42", Some("42"));
        assert!(disabled);

        well.drag_enter(disabled);
        assert!(!well.is_hovered());
        assert_eq!(well.drop_payload(disabled, r#"{"pkid":"42"}"#), None);
    }

    #[test]
    fn bare_id_payload_is_accepted() {
        let mut well = DropwellState::default();
        assert_eq!(
            well.drop_payload(false, "42"),
            Some(DragPayload::new("42", None))
        );
        assert_eq!(well.drop_payload(false, "  "), None);
    }
}
