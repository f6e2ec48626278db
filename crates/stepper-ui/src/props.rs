//! Prop bundles handed to the host's form, text input and buttons.
//!
//! Each builder takes caller overrides; a caller handler for the same event
//! runs first, then the stepper's own.

use std::rc::Rc;

use stepper_core::numeric::NUMERIC_PATTERN;
use stepper_core::{ClickEvent, FocusEvent, Handler, InputElement, SubmitEvent, call_both, handler};

use crate::controller::StepperController;

/// Node passed to an input's ref handler; `None` when the host detaches it.
pub type InputNode = Option<Rc<dyn InputElement>>;

#[derive(Clone, Default)]
pub struct FormOverrides {
    pub on_submit: Option<Handler<SubmitEvent>>,
}

#[derive(Clone, Default)]
pub struct ButtonOverrides {
    pub on_click: Option<Handler<ClickEvent>>,
}

#[derive(Clone, Default)]
pub struct InputOverrides {
    pub on_ref: Option<Handler<InputNode>>,
    pub on_focus: Option<Handler<FocusEvent>>,
    pub on_blur: Option<Handler<FocusEvent>>,
}

#[derive(Clone)]
pub struct FormProps {
    pub on_submit: Handler<SubmitEvent>,
}

#[derive(Clone)]
pub struct ButtonProps {
    pub on_click: Handler<ClickEvent>,
}

#[derive(Clone)]
pub struct InputProps {
    pub input_type: &'static str,
    pub pattern: &'static str,
    pub on_ref: Handler<InputNode>,
    pub on_focus: Handler<FocusEvent>,
    pub on_blur: Handler<FocusEvent>,
    pub focused: Option<bool>,
    /// `None` while focused so the user's typing is left alone.
    pub value: Option<f64>,
}

impl StepperController {
    pub fn form_props(&self, overrides: FormOverrides) -> FormProps {
        let ctl = self.clone();
        FormProps {
            on_submit: call_both(
                overrides.on_submit,
                handler(move |ev: &SubmitEvent| ctl.handle_submit(ev)),
            ),
        }
    }

    pub fn increment_props(&self, overrides: ButtonOverrides) -> ButtonProps {
        let ctl = self.clone();
        ButtonProps {
            on_click: call_both(overrides.on_click, handler(move |_: &ClickEvent| ctl.increment())),
        }
    }

    pub fn decrement_props(&self, overrides: ButtonOverrides) -> ButtonProps {
        let ctl = self.clone();
        ButtonProps {
            on_click: call_both(overrides.on_click, handler(move |_: &ClickEvent| ctl.decrement())),
        }
    }

    pub fn input_props(&self, overrides: InputOverrides) -> InputProps {
        let focused = self.focused();
        let on_ref = {
            let ctl = self.clone();
            call_both(
                overrides.on_ref,
                handler(move |node: &InputNode| ctl.handle_input_ref(node.clone())),
            )
        };
        let on_focus = {
            let ctl = self.clone();
            call_both(overrides.on_focus, handler(move |_: &FocusEvent| ctl.handle_focus()))
        };
        let on_blur = {
            let ctl = self.clone();
            call_both(overrides.on_blur, handler(move |_: &FocusEvent| ctl.handle_blur()))
        };
        InputProps {
            input_type: "text",
            pattern: NUMERIC_PATTERN,
            on_ref,
            on_focus,
            on_blur,
            focused,
            value: if focused == Some(true) {
                None
            } else {
                Some(self.value())
            },
        }
    }
}

struct HandlerSlot;

impl std::fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fn")
    }
}

impl std::fmt::Debug for FormProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormProps")
            .field("on_submit", &HandlerSlot)
            .finish()
    }
}

impl std::fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonProps")
            .field("on_click", &HandlerSlot)
            .finish()
    }
}

impl std::fmt::Debug for InputProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("InputProps");
        d.field("type", &self.input_type)
            .field("pattern", &self.pattern)
            .field("on_ref", &HandlerSlot)
            .field("on_focus", &HandlerSlot)
            .field("on_blur", &HandlerSlot)
            .field("focused", &self.focused);
        // omitted entirely while focused
        if let Some(v) = self.value {
            d.field("value", &v);
        }
        d.finish()
    }
}
