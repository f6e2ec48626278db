//! Event handlers and handler composition.
//!
//! Widgets hand out handlers as `Rc<dyn Fn(&E)>` so that the host can clone
//! them into whatever event table it keeps. When a caller wants to observe an
//! event the widget also handles, the two are merged with [`call_all`]: every
//! handler that is present runs, in the order given.

use std::rc::Rc;

use smallvec::SmallVec;

/// Handler for an event carrying a payload.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// Handler for an event without a payload.
pub type Callback = Rc<dyn Fn()>;

pub fn handler<E: 'static>(f: impl Fn(&E) + 'static) -> Handler<E> {
    Rc::new(f)
}

pub fn callback(f: impl Fn() + 'static) -> Callback {
    Rc::new(f)
}

/// Compose optional handlers into one. Missing handlers are skipped; the rest
/// run in iteration order with the same event.
pub fn call_all<E: 'static>(handlers: impl IntoIterator<Item = Option<Handler<E>>>) -> Handler<E> {
    let present: SmallVec<[Handler<E>; 2]> = handlers.into_iter().flatten().collect();
    if present.len() == 1 {
        return present[0].clone();
    }
    Rc::new(move |ev: &E| {
        for h in &present {
            h(ev);
        }
    })
}

/// `call_all` for the usual caller-then-widget pair.
pub fn call_both<E: 'static>(caller: Option<Handler<E>>, own: Handler<E>) -> Handler<E> {
    call_all([caller, Some(own)])
}
