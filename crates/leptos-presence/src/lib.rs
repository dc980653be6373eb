//! Leptos Presence Utilities
//!
//! Keeps a conditionally rendered subtree mounted while its exit animation
//! plays. A `<Show>` drops its children the moment the condition turns
//! false; with presence the subtree enters an `Exiting` phase first and is
//! only unmounted once a timeout settles it.

use std::time::Duration;

use leptos::prelude::*;

/// Lifecycle of a conditionally rendered subtree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresencePhase {
    /// Not rendered
    Absent,
    /// Rendered and visible (entering or settled)
    Present,
    /// Still rendered, playing its exit animation
    Exiting,
}

/// Pure presence state machine.
///
/// Every `hide` hands out a generation token; only the settle carrying the
/// latest token may unmount the subtree, so re-showing during an exit
/// turns the pending settle into a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenceMachine {
    phase: PresencePhase,
    generation: u64,
    animate_enter: bool,
}

impl PresenceMachine {
    /// `animate_initial = false` skips the entrance animation when the
    /// subtree is already visible on first render.
    pub fn new(visible: bool, animate_initial: bool) -> Self {
        Self {
            phase: if visible { PresencePhase::Present } else { PresencePhase::Absent },
            generation: 0,
            animate_enter: visible && animate_initial,
        }
    }

    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != PresencePhase::Absent
    }

    /// Whether the current `Present` phase was reached through an entrance
    pub fn animates_enter(&self) -> bool {
        self.animate_enter
    }

    pub fn show(&mut self) {
        match self.phase {
            PresencePhase::Present => {}
            PresencePhase::Absent => {
                self.phase = PresencePhase::Present;
                self.animate_enter = true;
            }
            PresencePhase::Exiting => {
                // Cancel the exit; the in-flight settle is now stale
                self.generation += 1;
                self.phase = PresencePhase::Present;
                self.animate_enter = true;
            }
        }
    }

    /// Start an exit. Returns the token to settle it with, or `None` when
    /// nothing is visible.
    pub fn hide(&mut self) -> Option<u64> {
        if self.phase != PresencePhase::Present {
            return None;
        }
        self.generation += 1;
        self.phase = PresencePhase::Exiting;
        Some(self.generation)
    }

    /// Finish the exit started with `token`. Returns true if the subtree
    /// was unmounted.
    pub fn settle(&mut self, token: u64) -> bool {
        if self.phase == PresencePhase::Exiting && self.generation == token {
            self.phase = PresencePhase::Absent;
            self.animate_enter = false;
            true
        } else {
            false
        }
    }
}

/// Reactive handle over a [`PresenceMachine`]
#[derive(Clone, Copy)]
pub struct Presence {
    machine: RwSignal<PresenceMachine>,
}

impl Presence {
    /// Handle without any reactive wiring; drive it with [`Presence::follow`]
    pub fn new(visible: bool, animate_initial: bool) -> Self {
        Self { machine: RwSignal::new(PresenceMachine::new(visible, animate_initial)) }
    }

    pub fn phase(&self) -> PresencePhase {
        self.machine.with(|m| m.phase())
    }

    pub fn is_mounted(&self) -> bool {
        self.machine.with(|m| m.is_mounted())
    }

    pub fn is_exiting(&self) -> bool {
        self.phase() == PresencePhase::Exiting
    }

    pub fn animates_enter(&self) -> bool {
        self.machine.with(|m| m.animates_enter())
    }

    /// Apply a change of the visibility condition. Hiding schedules the
    /// settle after `delay_ms`.
    pub fn follow(&self, visible: bool, delay_ms: i32) {
        let machine = self.machine;
        if visible {
            machine.update(|m| m.show());
        } else if let Some(token) = machine.try_update(|m| m.hide()).flatten() {
            after_timeout(delay_ms, move || {
                machine.update(|m| {
                    m.settle(token);
                });
            });
        }
    }
}

/// Create a presence that follows `when`, keeping the subtree mounted for
/// `exit_after` once `when` turns false.
pub fn create_presence(when: Signal<bool>, exit_after: Duration, animate_initial: bool) -> Presence {
    let presence = Presence::new(when.get_untracked(), animate_initial);
    let delay_ms = i32::try_from(exit_after.as_millis()).unwrap_or(i32::MAX);

    Effect::new(move |_| {
        presence.follow(when.get(), delay_ms);
    });

    presence
}

/// Run `f` once after `delay_ms`
#[cfg(target_arch = "wasm32")]
fn after_timeout(delay_ms: i32, mut f: impl FnMut() + 'static) {
    use wasm_bindgen::JsCast;

    let Some(win) = web_sys::window() else {
        f();
        return;
    };
    let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(f);
    if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms) {
        web_sys::console::error_1(&format!("[PRESENCE] set_timeout failed: {:?}", e).into());
        return;
    }
    cb.forget();
}

/// Off-browser there are no timers or animations; settle right away
#[cfg(not(target_arch = "wasm32"))]
fn after_timeout(_delay_ms: i32, mut f: impl FnMut() + 'static) {
    f();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent_or_present() {
        let hidden = PresenceMachine::new(false, true);
        assert_eq!(hidden.phase(), PresencePhase::Absent);
        assert!(!hidden.is_mounted());

        let shown = PresenceMachine::new(true, false);
        assert_eq!(shown.phase(), PresencePhase::Present);
        assert!(!shown.animates_enter());

        assert!(PresenceMachine::new(true, true).animates_enter());
    }

    #[test]
    fn test_hide_then_settle_unmounts() {
        let mut m = PresenceMachine::new(false, false);
        m.show();
        assert!(m.animates_enter());

        let token = m.hide().expect("visible subtree should start exiting");
        assert_eq!(m.phase(), PresencePhase::Exiting);
        assert!(m.is_mounted());

        assert!(m.settle(token));
        assert_eq!(m.phase(), PresencePhase::Absent);
        assert!(!m.is_mounted());
    }

    #[test]
    fn test_reshow_during_exit_ignores_stale_settle() {
        let mut m = PresenceMachine::new(true, false);
        let stale = m.hide().unwrap();
        m.show();
        assert_eq!(m.phase(), PresencePhase::Present);

        assert!(!m.settle(stale));
        assert_eq!(m.phase(), PresencePhase::Present);

        // A fresh exit still settles normally
        let fresh = m.hide().unwrap();
        assert_ne!(fresh, stale);
        assert!(m.settle(fresh));
        assert_eq!(m.phase(), PresencePhase::Absent);
    }

    #[test]
    fn test_hide_when_absent_is_noop() {
        let mut m = PresenceMachine::new(false, true);
        assert_eq!(m.hide(), None);
        assert_eq!(m.phase(), PresencePhase::Absent);

        let mut exiting = PresenceMachine::new(true, true);
        exiting.hide();
        assert_eq!(exiting.hide(), None);
    }

    #[test]
    fn test_presence_follows_visibility() {
        let owner = Owner::new();
        owner.with(|| {
            let presence = Presence::new(false, false);
            assert!(!presence.is_mounted());

            presence.follow(true, 500);
            assert!(presence.is_mounted());
            assert!(presence.animates_enter());
            assert_eq!(presence.phase(), PresencePhase::Present);

            // Off-browser the exit settles immediately
            presence.follow(false, 500);
            assert!(!presence.is_mounted());
            assert_eq!(presence.phase(), PresencePhase::Absent);

            // Hiding again is a no-op
            presence.follow(false, 500);
            assert_eq!(presence.phase(), PresencePhase::Absent);
        });
    }

    #[test]
    fn test_after_timeout_runs_off_browser() {
        let ran = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = ran.clone();
        after_timeout(10, move || flag.set(true));
        assert!(ran.get());
    }
}
