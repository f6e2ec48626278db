#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use stepper_core::{ClickEvent, FocusEvent, InputElement, MemoryInput, SubmitEvent};

    use crate::*;

    fn value_of(stepper: &Stepper<f64>) -> f64 {
        stepper.render()
    }

    fn value_stepper(config: StepperConfig) -> Stepper<f64> {
        Stepper::new(config, |args| args.value)
    }

    #[test]
    fn test_value_defaults_to_zero() {
        let stepper = value_stepper(StepperConfig::default());
        assert_eq!(value_of(&stepper), 0.0);
    }

    #[test]
    fn test_value_follows_default_value() {
        let stepper = value_stepper(StepperConfig::default().default_value(33.0));
        assert_eq!(value_of(&stepper), 33.0);
    }

    #[test]
    fn test_set_value_is_between_min_and_max() {
        let stepper = value_stepper(StepperConfig::default().bounds(0.0, 1.0));
        let set_value = stepper.args().set_value;

        set_value(&2.0);
        assert_eq!(stepper.controller().state().get().value, 1.0);
        set_value(&-1.0);
        assert_eq!(stepper.controller().state().get().value, 0.0);
        set_value(&1.0);
        assert_eq!(stepper.controller().state().get().value, 1.0);
        set_value(&0.0);
        assert_eq!(stepper.controller().state().get().value, 0.0);
    }

    #[test]
    fn test_increment_decrement_are_capped() {
        let stepper = value_stepper(StepperConfig::default().bounds(0.0, 1.0));
        let args = stepper.args();

        assert_eq!(value_of(&stepper), 0.0);
        (args.increment)();
        assert_eq!(value_of(&stepper), 1.0);
        (args.increment)();
        assert_eq!(value_of(&stepper), 1.0);
        (args.decrement)();
        assert_eq!(value_of(&stepper), 0.0);
        (args.decrement)();
        assert_eq!(value_of(&stepper), 0.0);
    }

    #[test]
    fn test_reinitialize_updates_unmodified_value() {
        let cfg = StepperConfig::default()
            .default_value(33.0)
            .enable_reinitialize(true);
        let stepper = value_stepper(cfg.clone());

        assert_eq!(value_of(&stepper), 33.0);
        stepper.update(cfg.default_value(42.0));
        assert_eq!(value_of(&stepper), 42.0);
    }

    #[test]
    fn test_reinitialize_keeps_modified_value() {
        let cfg = StepperConfig::default()
            .default_value(33.0)
            .enable_reinitialize(true);
        let stepper = value_stepper(cfg.clone());

        assert_eq!(value_of(&stepper), 33.0);
        stepper.controller().state().update(|s| s.value = 418.0);
        stepper.update(cfg.default_value(42.0));
        assert_eq!(value_of(&stepper), 418.0);
    }

    #[test]
    fn test_reinitialize_disabled_by_default() {
        let cfg = StepperConfig::default().default_value(33.0);
        let stepper = value_stepper(cfg.clone());

        assert_eq!(value_of(&stepper), 33.0);
        stepper.update(cfg.default_value(42.0));
        assert_eq!(value_of(&stepper), 33.0);
    }

    #[test]
    fn test_reinitialize_controlled_asks_owner() {
        let requested = Rc::new(Cell::new(None));
        let cfg = {
            let requested = requested.clone();
            StepperConfig::default()
                .value(33.0)
                .default_value(33.0)
                .enable_reinitialize(true)
                .on_change(move |v| requested.set(Some(v)))
        };
        let stepper = value_stepper(cfg.clone());

        stepper.update(cfg.default_value(42.0));
        assert_eq!(requested.get(), Some(42.0));
        // the owner has not fed 42 back yet
        assert_eq!(value_of(&stepper), 33.0);
    }

    #[test]
    fn test_reinitialize_controlled_skips_when_value_differs() {
        let requested = Rc::new(Cell::new(None));
        let cfg = {
            let requested = requested.clone();
            StepperConfig::default()
                .value(5.0)
                .enable_reinitialize(true)
                .on_change(move |v| requested.set(Some(v)))
        };
        let stepper = value_stepper(cfg.clone());

        stepper.update(cfg.default_value(10.0));
        assert_eq!(requested.get(), None);
        assert_eq!(value_of(&stepper), 5.0);
    }

    #[test]
    fn test_input_value_omitted_while_focused() {
        let stepper = value_stepper(StepperConfig::default());
        let args = stepper.args();
        assert_eq!(args.input_props(InputOverrides::default()).value, Some(0.0));

        stepper.controller().state().update(|s| s.focused = Some(true));
        assert_eq!(args.input_props(InputOverrides::default()).value, None);
        assert_eq!(stepper.args().focused, Some(true));
    }

    #[test]
    fn test_render_scheduling() {
        let renders = Rc::new(Cell::new(0));
        let stepper = Stepper::new(StepperConfig::default(), {
            let renders = renders.clone();
            move |args: &RenderArgs| {
                renders.set(renders.get() + 1);
                args.value
            }
        });
        assert!(stepper.needs_render());
        stepper.render();
        assert!(!stepper.needs_render());

        (stepper.args().increment)();
        assert!(stepper.needs_render());
        assert_eq!(stepper.render(), 1.0);
        assert_eq!(renders.get(), 2);

        stepper.update(StepperConfig::default());
        assert!(stepper.needs_render());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let stepper = value_stepper(StepperConfig::default());
        let state = stepper.controller().state().clone();
        assert_eq!(state.subscriber_count(), 1);
        drop(stepper);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_controlled_owner_round_trip() {
        let owned = Rc::new(Cell::new(2.0));
        let base = {
            let owned = owned.clone();
            StepperConfig::default()
                .bounds(0.0, 3.0)
                .on_change(move |v| owned.set(v))
        };
        let stepper = value_stepper(base.clone().value(owned.get()));
        let args = stepper.args();

        (args.increment)();
        stepper.update(base.clone().value(owned.get()));
        assert_eq!(value_of(&stepper), 3.0);

        // already at max: owner is asked for the same value again
        (stepper.args().increment)();
        assert_eq!(owned.get(), 3.0);

        (args.set_value)(&-5.0);
        stepper.update(base.value(owned.get()));
        assert_eq!(value_of(&stepper), 0.0);
    }

    #[test]
    fn test_owner_updates_from_on_change() {
        // The owner feeds the value back synchronously from inside on_change.
        let slot: Rc<RefCell<Option<Rc<Stepper<f64>>>>> = Rc::new(RefCell::new(None));
        let cfg = {
            let slot = slot.clone();
            StepperConfig::default().bounds(0.0, 10.0).value(4.0).on_change(move |v| {
                if let Some(stepper) = slot.borrow().as_ref() {
                    let next = stepper.controller().config().value(v);
                    stepper.update(next);
                }
            })
        };
        let stepper = Rc::new(value_stepper(cfg));
        *slot.borrow_mut() = Some(stepper.clone());

        (stepper.args().increment)();
        assert_eq!(value_of(&stepper), 5.0);
        (stepper.args().set_value)(&99.0);
        assert_eq!(value_of(&stepper), 10.0);

        // break the cycle
        slot.borrow_mut().take();
    }

    #[test]
    fn test_full_edit_cycle_through_props() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let stepper = value_stepper(
            StepperConfig::default()
                .default_value(5.0)
                .bounds(0.0, 20.0)
                .step(5.0)
                .on_change({
                    let changes = changes.clone();
                    move |v| changes.borrow_mut().push(v)
                }),
        );
        let args = stepper.args();
        let input_props = args.input_props(InputOverrides::default());
        let form_props = args.form_props(FormOverrides::default());

        let input = MemoryInput::new();
        (input_props.on_ref)(&Some(input.clone() as Rc<dyn InputElement>));
        input.set_blur_hook({
            let on_blur = input_props.on_blur.clone();
            move || on_blur(&FocusEvent)
        });

        // click +
        (args.increment_props(ButtonOverrides::default()).on_click)(&ClickEvent::default());
        assert_eq!(value_of(&stepper), 10.0);

        // focus, type, press enter
        input.set_focused(true);
        (input_props.on_focus)(&FocusEvent);
        assert_eq!(input.raw_value(), "10");
        assert_eq!(input.selection(), (0, 2));
        input.type_text("17.5");
        let submit = SubmitEvent::new();
        (form_props.on_submit)(&submit);
        assert!(submit.default_prevented());
        assert_eq!(value_of(&stepper), 17.5);
        assert_eq!(stepper.args().focused, Some(false));

        // 17.5 -> 12.5 -> 7.5
        let minus = args.decrement_props(ButtonOverrides::default());
        (minus.on_click)(&ClickEvent::default());
        (minus.on_click)(&ClickEvent::default());
        assert_eq!(value_of(&stepper), 7.5);

        // garbage is dropped
        input.set_focused(true);
        (input_props.on_focus)(&FocusEvent);
        input.type_text("abc");
        (input_props.on_blur)(&FocusEvent);
        assert_eq!(value_of(&stepper), 7.5);

        assert_eq!(*changes.borrow(), vec![10.0, 17.5, 12.5, 7.5]);
        input.clear_blur_hook();
    }
}
