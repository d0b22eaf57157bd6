//! Shot State Machine
//!
//! Tracks where the player is in a shot: aiming, dragging, or watching the
//! ball fly. The simulation owns the physics; this only gates input.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Shot states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Aiming,
    Dragging,
    InFlight,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotAction {
    PointerDown,
    Launch,
    CancelDrag,
    Scored,
    Settled,
    Reset,
}

/// Shot Finite State Machine
pub struct ShotFsm {
    state: FsmState,
}

impl ShotFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Aiming,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ShotAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition. Returns false and stays put if `action` is not
    /// allowed from the current state
    pub fn transition(&mut self, action: ShotAction) -> bool {
        match self.get_next_state(action) {
            Some(next_state) => {
                log::trace!("shot {:?} --{:?}--> {:?}", self.state, action, next_state);
                self.state = next_state;
                true
            }
            None => false,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: ShotAction) -> Option<FsmState> {
        match (self.state, action) {
            // Reset works from anywhere
            (_, ShotAction::Reset) => Some(FsmState::Aiming),

            // From Aiming
            (FsmState::Aiming, ShotAction::PointerDown) => Some(FsmState::Dragging),

            // From Dragging
            (FsmState::Dragging, ShotAction::Launch) => Some(FsmState::InFlight),
            (FsmState::Dragging, ShotAction::CancelDrag) => Some(FsmState::Aiming),

            // From InFlight
            (FsmState::InFlight, ShotAction::Scored) => Some(FsmState::Aiming),
            (FsmState::InFlight, ShotAction::Settled) => Some(FsmState::Aiming),

            // Invalid transition
            _ => None,
        }
    }
}

impl Default for ShotFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = ShotFsm::new();
        assert_eq!(fsm.state(), FsmState::Aiming);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = ShotFsm::new();
        assert!(fsm.transition(ShotAction::PointerDown));
        assert_eq!(fsm.state(), FsmState::Dragging);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = ShotFsm::new();
        assert!(!fsm.transition(ShotAction::Launch));
        assert_eq!(fsm.state(), FsmState::Aiming);
    }

    #[test]
    fn test_shot_flow() {
        let mut fsm = ShotFsm::new();
        fsm.transition(ShotAction::PointerDown);
        fsm.transition(ShotAction::Launch);
        assert_eq!(fsm.state(), FsmState::InFlight);
        fsm.transition(ShotAction::Scored);
        assert_eq!(fsm.state(), FsmState::Aiming);

        fsm.transition(ShotAction::PointerDown);
        fsm.transition(ShotAction::Launch);
        fsm.transition(ShotAction::Settled);
        assert_eq!(fsm.state(), FsmState::Aiming);
    }

    #[test]
    fn test_no_drag_while_in_flight() {
        let mut fsm = ShotFsm::new();
        fsm.transition(ShotAction::PointerDown);
        fsm.transition(ShotAction::Launch);

        assert!(!fsm.can_transition(ShotAction::PointerDown));
        assert!(!fsm.transition(ShotAction::PointerDown));
        assert_eq!(fsm.state(), FsmState::InFlight);
    }

    #[test]
    fn test_cancelled_drag_returns_to_aiming() {
        let mut fsm = ShotFsm::new();
        fsm.transition(ShotAction::PointerDown);
        fsm.transition(ShotAction::CancelDrag);
        assert_eq!(fsm.state(), FsmState::Aiming);
    }

    #[test]
    fn test_reset_from_any_state() {
        for setup in [
            vec![],
            vec![ShotAction::PointerDown],
            vec![ShotAction::PointerDown, ShotAction::Launch],
        ] {
            let mut fsm = ShotFsm::new();
            for action in setup {
                fsm.transition(action);
            }
            assert!(fsm.transition(ShotAction::Reset));
            assert_eq!(fsm.state(), FsmState::Aiming);
        }
    }
}
