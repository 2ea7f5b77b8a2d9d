// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// One shot conversion from WaveDrom JSON to text. Either the complete rendering or an
// error is returned, never a partial result.

use crate::{parse_document, parse_document_slice, render_with_options, RenderOptions, Result};
use std::io::Read;

/// Renders a WaveDrom JSON string with the default options.
pub fn convert_str(text: &str) -> Result<String> {
    convert_str_with_options(text, &RenderOptions::default())
}

pub fn convert_str_with_options(text: &str, options: &RenderOptions) -> Result<String> {
    let doc = parse_document(text)?;
    Ok(render_with_options(doc.signals(), options))
}

/// Read from something that is not a file, e.g., stdin.
pub fn convert_reader<R: Read>(input: R) -> Result<String> {
    convert_reader_with_options(input, &RenderOptions::default())
}

pub fn convert_reader_with_options<R: Read>(mut input: R, options: &RenderOptions) -> Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    convert_slice_with_options(&bytes, options)
}

/// Bytes that are not valid UTF-8 are reported as a parse error, not as an io error.
pub fn convert_slice_with_options(bytes: &[u8], options: &RenderOptions) -> Result<String> {
    let doc = parse_document_slice(bytes)?;
    Ok(render_with_options(doc.signals(), options))
}

/// Reads and renders a WaveDrom JSON file with the default options.
pub fn convert_file<P: AsRef<std::path::Path>>(filename: P) -> Result<String> {
    convert_file_with_options(filename, &RenderOptions::default())
}

pub fn convert_file_with_options<P: AsRef<std::path::Path>>(
    filename: P,
    options: &RenderOptions,
) -> Result<String> {
    let filename = filename.as_ref();
    log::debug!("reading {}", filename.display());
    let bytes = std::fs::read(filename)?;
    convert_slice_with_options(&bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WavetextError;

    #[test]
    fn test_convert_str() {
        let out = convert_str(r#"{ "signal": [ { "name": "req", "wave": "01." } ] }"#).unwrap();
        assert_eq!(out, "req       : ____‾‾‾‾    \n");
    }

    #[test]
    fn test_convert_reader() {
        let input = std::io::Cursor::new(br#"{ "signal": [ {} ] }"#.to_vec());
        assert_eq!(convert_reader(input).unwrap(), "          : \n");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let input = std::io::Cursor::new(vec![0xff, 0xfe, 0x00]);
        assert!(matches!(convert_reader(input), Err(WavetextError::Parse(_))));
        let mut bytes = br#"{ "signal": [ { "name": ""#.to_vec();
        bytes.extend_from_slice(&[0xc3, 0x28]);
        bytes.extend_from_slice(br#"" } ] }"#);
        let err = convert_slice_with_options(&bytes, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, WavetextError::Parse(_)), "{err:?}");
    }

    #[test]
    fn test_missing_file() {
        let err = convert_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, WavetextError::Io(_)), "{err:?}");
    }
}
