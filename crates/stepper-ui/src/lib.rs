//! # Headless numeric stepper
//!
//! A stepper is a number with a floor, a ceiling and a step, edited through
//! two buttons and a text field. This crate owns the state machine and leaves
//! every pixel to the host.
//!
//! - [`StepperConfig`]: options for one render pass (bounds, step, controlled
//!   value, change callback, reinitialization).
//! - [`StepperController`]: the state machine. Values always saturate into
//!   `[min, max]`.
//! - [`Stepper`]: adapter for a host with a render/update lifecycle. It calls
//!   the render callback with [`RenderArgs`] and tracks when a re-render is due.
//!
//! ## Uncontrolled
//!
//! ```rust
//! use stepper_ui::*;
//!
//! let stepper = Stepper::new(StepperConfig::default().bounds(0.0, 10.0), |args| {
//!     format!("[-] {} [+]", args.value)
//! });
//! let args = stepper.args();
//! (args.increment)();
//! assert_eq!(stepper.render(), "[-] 1 [+]");
//! ```
//!
//! ## Controlled
//!
//! With `value` set, the stepper never stores the number. It asks the owner
//! through `on_change`, and the owner answers with a new config:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use stepper_ui::*;
//!
//! let owned = Rc::new(Cell::new(5.0));
//! let cfg = {
//!     let owned = owned.clone();
//!     StepperConfig::default().value(5.0).on_change(move |v| owned.set(v))
//! };
//! let stepper = Stepper::new(cfg.clone(), |args| args.value);
//! (stepper.args().decrement)();
//! assert_eq!(stepper.render(), 5.0); // not fed back yet
//! stepper.update(cfg.value(owned.get()));
//! assert_eq!(stepper.render(), 4.0);
//! ```
//!
//! ## Text input
//!
//! While the text field has focus, [`InputProps::value`] is `None` so the
//! host leaves the user's typing alone. On blur the typed text is parsed,
//! saturated and committed; text that does not start with a number is
//! dropped without an error.

pub mod component;
pub mod config;
pub mod controller;
pub mod props;
pub mod tests;

pub use component::{RenderArgs, Stepper};
pub use config::{StepperConfig, StepperOptions};
pub use controller::{SELECT_ALL_END, StepperController, StepperState};
pub use props::*;
