// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// ASCII art rendering of a list of signals.

use crate::pad::pad_end;
use crate::token::glyph;
use crate::{RenderOptions, Signal};

/// Renders one line per signal with the default label width and separator.
pub fn render(signals: &[Signal]) -> String {
    render_with_options(signals, &RenderOptions::default())
}

pub fn render_with_options(signals: &[Signal], options: &RenderOptions) -> String {
    let mut out = String::new();
    for signal in signals.iter() {
        render_signal(signal, options, &mut out);
    }
    out
}

/// Appends the line for `signal`, including its trailing newline, to `out`.
/// Characters that do not encode a known token are rendered as [`crate::UNKNOWN_GLYPH`].
pub fn render_signal(signal: &Signal, options: &RenderOptions, out: &mut String) {
    out.push_str(&pad_end(signal.name(), options.label_width, ' '));
    out.push_str(&options.separator);
    for c in signal.wave().chars() {
        out.push_str(glyph(c));
    }
    out.push('\n');
}
