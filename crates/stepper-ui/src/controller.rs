//! Numeric stepper state machine.
//!
//! A [`StepperController`] holds a number, keeps it inside `[min, max]`, and
//! moves it by `step`. In uncontrolled mode it owns the number; in controlled
//! mode (`config.value` is `Some`) the caller owns it and the controller only
//! reports requested changes through `on_change`.
//!
//! The controller is a cheap handle: clones share the same config, state and
//! input ref, so handlers given to the host can each hold one. No borrow is
//! held while `on_change` runs, which lets the callback feed a new config
//! straight back into the stepper.

use std::cell::RefCell;
use std::rc::Rc;

use stepper_core::numeric::{clamp, format_number, parse_float};
use stepper_core::{InputElement, InputRef, Signal, SubmitEvent, signal};

use crate::config::StepperConfig;

/// Selection end used to select the whole field on focus; hosts clamp it to
/// the text length.
pub const SELECT_ALL_END: usize = 9999;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepperState {
    /// Only meaningful in uncontrolled mode.
    pub value: f64,
    /// `None` until the input has seen its first focus or blur.
    pub focused: Option<bool>,
}

#[derive(Clone)]
pub struct StepperController {
    config: Rc<RefCell<StepperConfig>>,
    state: Signal<StepperState>,
    input: InputRef,
}

impl StepperController {
    pub fn new(config: StepperConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("stepper: {e}; values will still saturate");
        }
        let initial = clamp(
            config.value.unwrap_or(config.default_value),
            config.min,
            config.max,
        );
        Self {
            config: Rc::new(RefCell::new(config)),
            state: signal(StepperState {
                value: initial,
                focused: None,
            }),
            input: InputRef::new(),
        }
    }

    pub fn config(&self) -> StepperConfig {
        self.config.borrow().clone()
    }

    /// Swap in the config for the next pass and return the previous one.
    /// Does not run [`on_update`](Self::on_update); the caller decides when.
    pub fn replace_config(&self, config: StepperConfig) -> StepperConfig {
        if let Err(e) = config.validate() {
            log::warn!("stepper: {e}; values will still saturate");
        }
        std::mem::replace(&mut *self.config.borrow_mut(), config)
    }

    /// The state signal. Subscribe to it to learn when a re-render is due.
    pub fn state(&self) -> &Signal<StepperState> {
        &self.state
    }

    pub fn input_ref(&self) -> &InputRef {
        &self.input
    }

    pub fn is_controlled(&self) -> bool {
        self.config.borrow().is_controlled()
    }

    pub fn focused(&self) -> Option<bool> {
        self.state.with(|s| s.focused)
    }

    /// The value consumers see: the caller's value when controlled, ours otherwise.
    pub fn value(&self) -> f64 {
        let controlled = self.config.borrow().value;
        controlled.unwrap_or_else(|| self.state.with(|s| s.value))
    }

    /// Saturate `v` into the bounds and commit it. Uncontrolled steppers
    /// store it first; either way `on_change` is told afterwards.
    pub fn set_value(&self, v: f64) {
        let (clamped, controlled, on_change) = {
            let cfg = self.config.borrow();
            (
                clamp(v, cfg.min, cfg.max),
                cfg.is_controlled(),
                cfg.on_change.clone(),
            )
        };
        if clamped != v {
            log::trace!("stepper: {v} saturated to {clamped}");
        }

        if controlled {
            log::debug!("stepper: requesting {clamped} from owner");
            on_change(&clamped);
        } else {
            log::debug!("stepper: value -> {clamped}");
            self.state.update(|s| s.value = clamped);
            on_change(&self.value());
        }
    }

    pub fn increment(&self) {
        let step = self.config.borrow().step;
        self.set_value(self.value() + step);
    }

    pub fn decrement(&self) {
        let step = self.config.borrow().step;
        self.set_value(self.value() - step);
    }

    /// Post-update hook. Re-syncs to a changed `default_value` when
    /// reinitializing is enabled and the value had not moved away from the
    /// previous default.
    pub fn on_update(&self, prev_config: &StepperConfig, prev_state: &StepperState) {
        let (enabled, default_value) = {
            let cfg = self.config.borrow();
            (cfg.enable_reinitialize, cfg.default_value)
        };
        if !enabled || prev_config.default_value == default_value {
            return;
        }
        // Compare against what the old default produced, which is the
        // clamped default.
        let prev_default = clamp(prev_config.default_value, prev_config.min, prev_config.max);
        if prev_state.value != prev_default {
            log::trace!(
                "stepper: default changed to {default_value} but value {} was edited; keeping it",
                prev_state.value
            );
            return;
        }
        log::debug!("stepper: reinitializing to {default_value}");
        self.set_value(default_value);
    }

    pub fn handle_input_ref(&self, node: Option<Rc<dyn InputElement>>) {
        self.input.attach(node);
    }

    /// Input gained focus: show the bare number and select all of it.
    pub fn handle_focus(&self) {
        let Some(input) = self.input.get() else {
            return;
        };
        log::trace!("stepper: focus");
        self.state.update(|s| s.focused = Some(true));
        input.set_raw_value(&format_number(self.value()));
        input.set_selection_range(0, SELECT_ALL_END);
    }

    /// Input lost focus: commit whatever number the user typed. Text that
    /// does not start with a number is dropped.
    pub fn handle_blur(&self) {
        let Some(input) = self.input.get() else {
            return;
        };
        input.blur();
        log::trace!("stepper: blur");
        self.state.update(|s| s.focused = Some(false));

        let raw = input.raw_value();
        let parsed = match parse_float(&raw) {
            Ok(v) => v,
            Err(e) => {
                log::trace!("stepper: discarding edit, {e}");
                return;
            }
        };
        let candidate = {
            let cfg = self.config.borrow();
            clamp(parsed, cfg.min, cfg.max)
        };
        if candidate == self.value() {
            return;
        }
        self.set_value(candidate);
    }

    /// Keep the host from submitting and commit through blur instead.
    pub fn handle_submit(&self, ev: &SubmitEvent) {
        ev.prevent_default();
        if let Some(input) = self.input.get() {
            input.blur();
        }
    }
}

impl std::fmt::Debug for StepperController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepperController")
            .field("config", &*self.config.borrow())
            .field("state", &self.state.get())
            .field("input", &self.input)
            .finish()
    }
}
