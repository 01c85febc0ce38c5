extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use keypad::lang::key::Action;
use keypad::mach::{Display, Runtime};
use linefeed::{Interface, ReadResult, Signal};
use tracing::{debug, info};

pub fn main(plain: bool) {
    if let Err(error) = main_loop(plain) {
        eprintln!("{}", error);
    }
}

fn main_loop(plain: bool) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let interface = Interface::new("keypad")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);
    info!("keypad ready");

    loop {
        match interface.read_line()? {
            ReadResult::Input(string) => match runtime.enter(&string) {
                Ok(()) => {
                    if !string.trim().is_empty() {
                        interface.add_history_unique(string);
                    }
                    interface.write_fmt(format_args!("{}\n", render(&runtime.display(), plain)))?;
                }
                Err(error) => {
                    interface.write_fmt(format_args!("{}\n", render_error(&error, plain)))?;
                }
            },
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                runtime.dispatch(Action::Clear);
                interface.write_fmt(format_args!("{}\n", render(&runtime.display(), plain)))?;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    debug!("keypad closed");
    Ok(())
}

/// Enters each argument as a line of keys and prints the final display.
/// Returns the process exit code.
pub fn batch(lines: &[String], plain: bool) -> i32 {
    let mut runtime = Runtime::new();
    for line in lines {
        if let Err(error) = runtime.enter(line) {
            eprintln!("{}", render_error(&error, plain));
            return 1;
        }
    }
    println!("{}", render(&runtime.display(), plain));
    0
}

fn render(display: &Display, plain: bool) -> String {
    if plain {
        return display.to_string();
    }
    format!(
        "{}\n{}",
        Style::new().dimmed().paint(display.previous_line()),
        Style::new().bold().paint(display.current_line())
    )
}

fn render_error(error: &keypad::lang::Error, plain: bool) -> String {
    let s = format!("?{}", error);
    if plain {
        s
    } else {
        Style::new().bold().paint(s).to_string()
    }
}
