//! Selection state machine.
//!
//! Governs which hotel is active and whether the upload surface is shown.
//! The upload surface can only be visible while a hotel is selected, and any
//! hotel change unconditionally collapses it so a surface opened for one
//! hotel never lingers over another.

/// Session-long selection state. Initial state is `NoSelection`; there is no
/// terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    SelectedCollapsed {
        hotel_id: String,
    },
    SelectedExpanded {
        hotel_id: String,
    },
}

impl SelectionState {
    /// The active hotel id, if any.
    pub fn active_hotel(&self) -> Option<&str> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::SelectedCollapsed { hotel_id }
            | SelectionState::SelectedExpanded { hotel_id } => Some(hotel_id),
        }
    }

    /// Whether the upload surface is currently shown.
    pub fn upload_surface_visible(&self) -> bool {
        matches!(self, SelectionState::SelectedExpanded { .. })
    }

    /// Choose a hotel. An empty id clears the selection (the picker's
    /// placeholder row). Always lands collapsed, never expanded. Returns true
    /// when a fresh image load should be issued for the chosen hotel.
    pub fn choose(&mut self, hotel_id: &str) -> bool {
        if hotel_id.is_empty() {
            *self = SelectionState::NoSelection;
            return false;
        }
        *self = SelectionState::SelectedCollapsed {
            hotel_id: hotel_id.to_string(),
        };
        true
    }

    /// Expand the upload surface. A no-op when nothing is selected or when
    /// already expanded; returns true only when a transition happened.
    pub fn request_expand(&mut self) -> bool {
        if let SelectionState::SelectedCollapsed { hotel_id } = self {
            let hotel_id = std::mem::take(hotel_id);
            *self = SelectionState::SelectedExpanded { hotel_id };
            return true;
        }
        false
    }
}
