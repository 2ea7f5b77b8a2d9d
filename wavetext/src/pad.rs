// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Fixed width text columns.

use std::borrow::Cow;

/// Left-aligns `text` in a column of `width` characters by appending `fill`.
/// Text that already is `width` characters or longer is returned as is, i.e., nothing
/// is ever truncated. Widths are measured in `char`s, not bytes.
pub fn pad_end(text: &str, width: usize, fill: char) -> Cow<'_, str> {
    let len = text.chars().count();
    if len >= width {
        Cow::Borrowed(text)
    } else {
        let missing = width - len;
        let mut out = String::with_capacity(text.len() + missing * fill.len_utf8());
        out.push_str(text);
        out.extend(std::iter::repeat(fill).take(missing));
        Cow::Owned(out)
    }
}
