//! DOM-like events and the text-input seam.
//!
//! The host owns the real text field. Widgets only see it through
//! [`InputElement`], which the host hands over via the input's ref handler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub modifiers: Modifiers,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusEvent;

/// Form submission. Handlers call [`SubmitEvent::prevent_default`] to stop
/// the host from performing its own submission.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: Cell<bool>,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Host text field as seen by a widget.
pub trait InputElement {
    /// Raw text currently in the field, as typed.
    fn raw_value(&self) -> String;

    fn set_raw_value(&self, text: &str);

    /// Byte offsets; hosts clamp `end` to the text length.
    fn set_selection_range(&self, start: usize, end: usize);

    /// Drop keyboard focus. Hosts are expected to dispatch their blur event
    /// in response, as a browser does.
    fn blur(&self);
}

/// Slot filled by an input's ref handler.
#[derive(Clone, Default)]
pub struct InputRef(Rc<RefCell<Option<Rc<dyn InputElement>>>>);

impl InputRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// A detached ref (`None`) keeps whatever element was attached before.
    pub fn attach(&self, node: Option<Rc<dyn InputElement>>) {
        if let Some(node) = node {
            *self.0.borrow_mut() = Some(node);
        }
    }

    pub fn get(&self) -> Option<Rc<dyn InputElement>> {
        self.0.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }
}

impl std::fmt::Debug for InputRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("InputRef")
            .field(&if self.is_attached() { "attached" } else { "empty" })
            .finish()
    }
}

/// In-memory text field for headless hosts and tests.
///
/// `blur()` marks the field unfocused and runs the blur hook, if any, so a
/// host can route a programmatic blur back into its blur handler.
#[derive(Default)]
pub struct MemoryInput {
    text: RefCell<String>,
    selection: Cell<(usize, usize)>,
    focused: Cell<bool>,
    blur_count: Cell<usize>,
    on_blur: RefCell<Option<Rc<dyn Fn()>>>,
}

impl MemoryInput {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Simulates the user typing over the whole field.
    pub fn type_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        let end = text.len();
        self.selection.set((end, end));
    }

    pub fn set_focused(&self, focused: bool) {
        self.focused.set(focused);
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn selection(&self) -> (usize, usize) {
        self.selection.get()
    }

    pub fn blur_count(&self) -> usize {
        self.blur_count.get()
    }

    /// Runs `hook` when a focused field is blurred.
    ///
    /// A hook that captures whatever holds this input (typically a stepper
    /// whose [`InputRef`] points back here) forms an `Rc` cycle. Call
    /// [`clear_blur_hook`](Self::clear_blur_hook) on teardown to break it.
    pub fn set_blur_hook(&self, hook: impl Fn() + 'static) {
        *self.on_blur.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn clear_blur_hook(&self) {
        self.on_blur.borrow_mut().take();
    }
}

impl InputElement for MemoryInput {
    fn raw_value(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_raw_value(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        let len = text.len();
        let (s, e) = self.selection.get();
        self.selection.set((s.min(len), e.min(len)));
    }

    fn set_selection_range(&self, start: usize, end: usize) {
        let len = self.text.borrow().len();
        let end = end.min(len);
        self.selection.set((start.min(end), end));
    }

    fn blur(&self) {
        self.blur_count.set(self.blur_count.get() + 1);
        if !self.focused.replace(false) {
            return;
        }
        // Clone out so the hook may touch this input again.
        let hook = self.on_blur.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}
