use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::Context;
use stepper_core::{ClickEvent, FocusEvent, InputElement, MemoryInput, SubmitEvent};
use stepper_ui::*;

const HELP: &str = "commands: + | - | focus | type <text> | blur | submit | set <n> | default <n> | q";

fn load_options() -> anyhow::Result<StepperOptions> {
    let Some(arg) = std::env::args().nth(1) else {
        return Ok(StepperOptions::default());
    };
    let json = if arg.trim_start().starts_with('{') {
        arg
    } else {
        std::fs::read_to_string(&arg).with_context(|| format!("reading options from {arg}"))?
    };
    serde_json::from_str(&json).context("parsing stepper options")
}

fn render(args: &RenderArgs) -> String {
    let input = args.input_props(InputOverrides::default());
    let field = match input.value {
        Some(v) => stepper_core::numeric::format_number(v),
        None => "<editing>".to_string(),
    };
    format!("[ - ] [{field:^12}] [ + ]")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = load_options()?;
    let base = StepperConfig::from_options(options)
        .on_change(|v| log::info!("on_change({})", stepper_core::numeric::format_number(v)));
    base.validate().context("invalid stepper options")?;

    let stepper = Stepper::new(base, render);
    let args = stepper.args();
    let input_props = args.input_props(InputOverrides::default());
    let form_props = args.form_props(FormOverrides::default());
    let plus = args.increment_props(ButtonOverrides::default());
    let minus = args.decrement_props(ButtonOverrides::default());

    let input = MemoryInput::new();
    (input_props.on_ref)(&Some(input.clone() as Rc<dyn InputElement>));
    input.set_blur_hook({
        let on_blur = input_props.on_blur.clone();
        move || on_blur(&FocusEvent)
    });

    println!("{HELP}");
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", stepper.render())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let (cmd, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
        match cmd {
            "+" => (plus.on_click)(&ClickEvent::default()),
            "-" => (minus.on_click)(&ClickEvent::default()),
            "focus" => {
                input.set_focused(true);
                (input_props.on_focus)(&FocusEvent);
                writeln!(out, "text: {:?}", input.raw_value())?;
            }
            "type" => input.type_text(rest),
            "blur" => input.blur(),
            "submit" => (form_props.on_submit)(&SubmitEvent::new()),
            "set" => match rest.parse::<f64>() {
                Ok(v) => (args.set_value)(&v),
                Err(e) => writeln!(out, "bad number {rest:?}: {e}")?,
            },
            "default" => match rest.parse::<f64>() {
                Ok(v) => {
                    let next = stepper.controller().config().default_value(v);
                    stepper.update(next);
                }
                Err(e) => writeln!(out, "bad number {rest:?}: {e}")?,
            },
            "q" | "quit" => break,
            "" => continue,
            other => {
                log::warn!("unknown command {other:?}");
                writeln!(out, "{HELP}")?;
            }
        }
        if stepper.needs_render() {
            writeln!(out, "{}", stepper.render())?;
        }
    }
    input.clear_blur_hook();
    Ok(())
}
