//! Per-instance interaction state
//!
//! Every interactive component instance owns one `InteractionState` and
//! mutates it exclusively through `apply`. Pointer events drive the
//! resting/hovered/pressed portion, focus is an orthogonal flag, and
//! disabled is absorbing: while set, no event changes the state, and only
//! an external `set_disabled(false)` leaves it.

use serde::{Deserialize, Serialize};

/// Events an interactive instance receives from its own handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    FocusGained,
    FocusLost,
}

/// The precedence phase a style resolution selects from. First match wins:
/// disabled, then pressed, then hovered, then resting. Focus is not a phase;
/// it layers an overlay on top of whichever phase applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Disabled,
    Pressed,
    Hovered,
    Resting,
}

/// Transient visual state of one rendered instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub disabled: bool,
}

impl InteractionState {
    /// State for an instance created with a `disabled` prop.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Apply an event from this instance's own handlers.
    ///
    /// Events are ignored while disabled.
    pub fn apply(&mut self, event: InteractionEvent) {
        if self.disabled {
            return;
        }
        match event {
            InteractionEvent::PointerEnter => self.hovered = true,
            // Leaving cancels an in-flight press.
            InteractionEvent::PointerLeave => {
                self.hovered = false;
                self.pressed = false;
            }
            InteractionEvent::PointerDown => {
                self.hovered = true;
                self.pressed = true;
            }
            InteractionEvent::PointerUp => self.pressed = false,
            InteractionEvent::FocusGained => self.focused = true,
            InteractionEvent::FocusLost => self.focused = false,
        }
    }

    /// External prop change. Entering disabled clears transient flags so a
    /// later re-enable starts from resting.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && !self.disabled {
            self.hovered = false;
            self.pressed = false;
            self.focused = false;
        }
        self.disabled = disabled;
    }

    /// Resolve the precedence phase for this state.
    pub fn phase(&self) -> Phase {
        if self.disabled {
            Phase::Disabled
        } else if self.pressed {
            Phase::Pressed
        } else if self.hovered {
            Phase::Hovered
        } else {
            Phase::Resting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_cycle_drives_phases() {
        let mut s = InteractionState::default();
        assert_eq!(s.phase(), Phase::Resting);

        s.apply(InteractionEvent::PointerEnter);
        assert_eq!(s.phase(), Phase::Hovered);

        s.apply(InteractionEvent::PointerDown);
        assert_eq!(s.phase(), Phase::Pressed);

        s.apply(InteractionEvent::PointerUp);
        assert_eq!(s.phase(), Phase::Hovered);

        s.apply(InteractionEvent::PointerLeave);
        assert_eq!(s.phase(), Phase::Resting);
    }

    #[test]
    fn leave_cancels_press() {
        let mut s = InteractionState::default();
        s.apply(InteractionEvent::PointerEnter);
        s.apply(InteractionEvent::PointerDown);
        s.apply(InteractionEvent::PointerLeave);
        assert_eq!(s.phase(), Phase::Resting);
        assert!(!s.pressed);
    }

    #[test]
    fn focus_is_orthogonal() {
        let mut s = InteractionState::default();
        s.apply(InteractionEvent::FocusGained);
        assert_eq!(s.phase(), Phase::Resting);
        assert!(s.focused);

        s.apply(InteractionEvent::PointerEnter);
        s.apply(InteractionEvent::PointerDown);
        assert_eq!(s.phase(), Phase::Pressed);
        assert!(s.focused);

        s.apply(InteractionEvent::FocusLost);
        assert!(!s.focused);
        assert_eq!(s.phase(), Phase::Pressed);
    }

    #[test]
    fn disabled_is_absorbing() {
        let mut s = InteractionState::default();
        s.apply(InteractionEvent::PointerEnter);
        s.set_disabled(true);
        assert_eq!(s.phase(), Phase::Disabled);
        assert!(!s.hovered);

        for event in [
            InteractionEvent::PointerEnter,
            InteractionEvent::PointerDown,
            InteractionEvent::PointerUp,
            InteractionEvent::FocusGained,
            InteractionEvent::PointerLeave,
        ] {
            s.apply(event);
            assert_eq!(s.phase(), Phase::Disabled);
        }

        s.set_disabled(false);
        assert_eq!(s.phase(), Phase::Resting);
    }

    #[test]
    fn state_serde_round_trip_keeps_the_phase() {
        let mut s = InteractionState::default();
        s.apply(InteractionEvent::PointerEnter);
        s.apply(InteractionEvent::FocusGained);

        let json = serde_json::to_string(&s).unwrap();
        let back: InteractionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.phase(), Phase::Hovered);
        assert!(back.focused);
    }

    #[test]
    fn disabled_wins_over_any_flag_combination() {
        for hovered in [false, true] {
            for pressed in [false, true] {
                for focused in [false, true] {
                    let s = InteractionState {
                        hovered,
                        pressed,
                        focused,
                        disabled: true,
                    };
                    assert_eq!(s.phase(), Phase::Disabled);
                }
            }
        }
    }
}
