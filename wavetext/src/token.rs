// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Wave string tokens and the text they expand to.

use num_enum::TryFromPrimitive;

/// Rendered in place of any character that is not a known [`Token`].
pub const UNKNOWN_GLYPH: &str = "????";

/// One time slot of a wave string. The discriminant is the ASCII code of the character
/// that encodes the token.
#[repr(u8)]
#[derive(Debug, TryFromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// `P`
    Pulse = 0x50,
    /// `0`
    Low = 0x30,
    /// `1`
    High = 0x31,
    /// `.`: keep the previous level
    Hold = 0x2e,
    /// `x`
    Undefined = 0x78,
    /// `=`: multi-bit value
    Data = 0x3d,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::Pulse,
        Token::Low,
        Token::High,
        Token::Hold,
        Token::Undefined,
        Token::Data,
    ];

    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;
        Self::try_from_primitive(byte).ok()
    }

    #[inline]
    pub fn to_char(self) -> char {
        self as u8 as char
    }

    /// The text that represents this token in a rendered line.
    /// Note that a pulse is wider than all other tokens.
    #[inline]
    pub fn glyph(self) -> &'static str {
        match self {
            Token::Pulse => "|‾‾‾‾|",
            Token::Low => "____",
            Token::High => "‾‾‾‾",
            Token::Hold => "    ",
            Token::Undefined => "xxxx",
            Token::Data => "====",
        }
    }

    /// Number of characters in [`Token::glyph`].
    #[inline]
    pub fn width(self) -> usize {
        self.glyph().chars().count()
    }
}

/// Total mapping from a wave character to its rendered run.
#[inline]
pub fn glyph(c: char) -> &'static str {
    match Token::from_char(c) {
        Some(token) => token.glyph(),
        None => UNKNOWN_GLYPH,
    }
}
