use std::cell::Cell;
use std::rc::Rc;

use stepper_core::{Callback, Handler, SubId, callback, handler};

use crate::config::StepperConfig;
use crate::controller::StepperController;
use crate::props::{
    ButtonOverrides, ButtonProps, FormOverrides, FormProps, InputOverrides, InputProps,
};

/// Everything the render callback gets to build its UI from.
pub struct RenderArgs {
    pub value: f64,
    pub focused: Option<bool>,
    pub increment: Callback,
    pub decrement: Callback,
    pub set_value: Handler<f64>,
    controller: StepperController,
}

impl RenderArgs {
    fn new(controller: &StepperController) -> Self {
        Self {
            value: controller.value(),
            focused: controller.focused(),
            increment: {
                let ctl = controller.clone();
                callback(move || ctl.increment())
            },
            decrement: {
                let ctl = controller.clone();
                callback(move || ctl.decrement())
            },
            set_value: {
                let ctl = controller.clone();
                handler(move |v: &f64| ctl.set_value(*v))
            },
            controller: controller.clone(),
        }
    }

    pub fn form_props(&self, overrides: FormOverrides) -> FormProps {
        self.controller.form_props(overrides)
    }

    pub fn input_props(&self, overrides: InputOverrides) -> InputProps {
        self.controller.input_props(overrides)
    }

    pub fn increment_props(&self, overrides: ButtonOverrides) -> ButtonProps {
        self.controller.increment_props(overrides)
    }

    pub fn decrement_props(&self, overrides: ButtonOverrides) -> ButtonProps {
        self.controller.decrement_props(overrides)
    }
}

/// Host adapter around a [`StepperController`].
///
/// The host drives the lifecycle: [`render`](Self::render) whenever
/// [`needs_render`](Self::needs_render) says so, [`update`](Self::update)
/// whenever it has a new config for the stepper (new props).
///
/// ```rust
/// use stepper_ui::{Stepper, StepperConfig};
///
/// let stepper = Stepper::new(StepperConfig::default().bounds(0.0, 1.0), |args| args.value);
/// assert_eq!(stepper.render(), 0.0);
///
/// let args = stepper.args();
/// (args.increment)();
/// (args.increment)();
/// assert!(stepper.needs_render());
/// assert_eq!(stepper.render(), 1.0);
/// ```
pub struct Stepper<R> {
    controller: StepperController,
    render: Box<dyn Fn(&RenderArgs) -> R>,
    dirty: Rc<Cell<bool>>,
    sub: SubId,
}

impl<R> Stepper<R> {
    pub fn new(config: StepperConfig, render: impl Fn(&RenderArgs) -> R + 'static) -> Self {
        let controller = StepperController::new(config);
        let dirty = Rc::new(Cell::new(true));
        let sub = controller.state().subscribe({
            let dirty = dirty.clone();
            move |_| dirty.set(true)
        });
        Self {
            controller,
            render: Box::new(render),
            dirty,
            sub,
        }
    }

    pub fn controller(&self) -> &StepperController {
        &self.controller
    }

    pub fn args(&self) -> RenderArgs {
        RenderArgs::new(&self.controller)
    }

    pub fn render(&self) -> R {
        self.dirty.set(false);
        (self.render)(&self.args())
    }

    /// True after any state change since the last `render`.
    pub fn needs_render(&self) -> bool {
        self.dirty.get()
    }

    /// Feed a new config, then run the post-update hook against the config
    /// and state from before the swap.
    pub fn update(&self, config: StepperConfig) {
        let prev_state = self.controller.state().get();
        let prev_config = self.controller.replace_config(config);
        self.dirty.set(true);
        self.controller.on_update(&prev_config, &prev_state);
    }
}

impl<R> Drop for Stepper<R> {
    fn drop(&mut self) {
        self.controller.state().unsubscribe(self.sub);
    }
}
