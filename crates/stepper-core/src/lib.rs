//! # Signals, handlers and the input seam
//!
//! `stepper-core` holds the pieces a headless widget needs that are not
//! specific to any one widget:
//!
//! - [`Signal<T>`]: a cloneable observable cell. Hosts subscribe to learn that
//!   a widget's state changed and a re-render is due.
//! - [`Handler<E>`] and [`call_all`]: event callbacks and their composition,
//!   so a caller can observe an event the widget also handles.
//! - [`InputElement`] / [`InputRef`]: how a widget reaches the host's text
//!   field without knowing anything about the host.
//! - [`numeric`]: clamping, lenient float parsing and number display.
//!
//! ```rust
//! use stepper_core::*;
//!
//! let count = signal(0);
//! let seen = signal(Vec::new());
//! count.subscribe({
//!     let seen = seen.clone();
//!     move |v: &i32| seen.update(|s| s.push(*v))
//! });
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! assert_eq!(seen.get(), vec![1, 2]);
//! ```
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); handlers run to
//! completion on the host's event loop.

pub mod error;
pub mod handler;
pub mod input;
pub mod numeric;
pub mod signal;

pub use error::{Result, StepperError};
pub use handler::*;
pub use input::*;
pub use signal::*;
