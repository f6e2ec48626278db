use std::rc::Rc;

use stepper_core::{Handler, Result, StepperError};

/// Data-only stepper options: everything in [`StepperConfig`] except the
/// change callback. With the `serde` feature this is what hosts load from
/// their settings files; keys use the camelCase option names.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StepperOptions {
    pub default_value: f64,
    /// `Some` puts the stepper in controlled mode.
    pub value: Option<f64>,
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub enable_reinitialize: bool,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            default_value: 0.0,
            value: None,
            step: 1.0,
            min: -f64::MAX,
            max: f64::MAX,
            enable_reinitialize: false,
        }
    }
}

/// Everything a stepper is configured with for one render pass.
///
/// ```rust
/// use stepper_ui::StepperConfig;
///
/// let cfg = StepperConfig::default()
///     .default_value(5.0)
///     .bounds(0.0, 10.0)
///     .step(0.5)
///     .on_change(|v| println!("now {v}"));
/// assert!(cfg.validate().is_ok());
/// assert!(!cfg.is_controlled());
/// ```
#[derive(Clone)]
pub struct StepperConfig {
    pub default_value: f64,
    pub value: Option<f64>,
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub on_change: Handler<f64>,
    pub enable_reinitialize: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self::from_options(StepperOptions::default())
    }
}

impl StepperConfig {
    pub fn from_options(opts: StepperOptions) -> Self {
        Self {
            default_value: opts.default_value,
            value: opts.value,
            step: opts.step,
            min: opts.min,
            max: opts.max,
            on_change: Rc::new(|_: &f64| {}),
            enable_reinitialize: opts.enable_reinitialize,
        }
    }

    pub fn options(&self) -> StepperOptions {
        StepperOptions {
            default_value: self.default_value,
            value: self.value,
            step: self.step,
            min: self.min,
            max: self.max,
            enable_reinitialize: self.enable_reinitialize,
        }
    }

    pub fn default_value(mut self, v: f64) -> Self {
        self.default_value = v;
        self
    }

    /// Hand ownership of the value to the caller.
    pub fn value(mut self, v: f64) -> Self {
        self.value = Some(v);
        self
    }

    pub fn uncontrolled(mut self) -> Self {
        self.value = None;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn bounds(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    pub fn on_change(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_change = Rc::new(move |v: &f64| f(*v));
        self
    }

    pub fn enable_reinitialize(mut self, enable: bool) -> Self {
        self.enable_reinitialize = enable;
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Check the options for values that make the stepper meaningless.
    ///
    /// The stepper itself never fails on these; it keeps saturating. Hosts
    /// call this when they want to surface the mistake early.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_nan() || self.max.is_nan() {
            return Err(StepperError::NanBound);
        }
        if self.min > self.max {
            return Err(StepperError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() {
            return Err(StepperError::InvalidStep(self.step));
        }
        Ok(())
    }
}

impl From<StepperOptions> for StepperConfig {
    fn from(opts: StepperOptions) -> Self {
        Self::from_options(opts)
    }
}

impl std::fmt::Debug for StepperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepperConfig")
            .field("default_value", &self.default_value)
            .field("value", &self.value)
            .field("step", &self.step)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("enable_reinitialize", &self.enable_reinitialize)
            .finish_non_exhaustive()
    }
}
