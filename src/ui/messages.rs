//! One-line console messages for the commands that don't take over the screen.

use ansi_term::Colour;
use std::fmt::Display;

fn tag(colour: Colour, icon: &str) -> String {
    colour.bold().paint(icon).to_string()
}

pub fn info(msg: impl Display) {
    println!("{} {}", tag(Colour::Blue, "ℹ️"), msg);
}

pub fn success(msg: impl Display) {
    println!("{} {}", tag(Colour::Green, "✅"), msg);
}

pub fn warning(msg: impl Display) {
    println!("{} {}", tag(Colour::Yellow, "⚠️"), msg);
}

/// Goes to stderr.
pub fn error(msg: impl Display) {
    eprintln!("{} {}", tag(Colour::Red, "❌"), msg);
}
