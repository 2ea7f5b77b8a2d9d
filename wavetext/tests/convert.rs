// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

use wavetext::simple::*;
use wavetext::*;

#[test]
fn test_clock_and_data() {
    let out = convert_file("inputs/clk_data.json").expect("failed to convert");
    assert_eq!(out, "clk       : |‾‾‾‾|    \nData      : ____‾‾‾‾xxxx\n");
}

#[test]
fn test_bus_write() {
    let out = convert_file("inputs/bus.json").expect("failed to convert");
    let expected = [
        "clk       : |‾‾‾‾|                ",
        "          : ",
        "addr      : xxxx========    xxxx",
        "wdata     : xxxx====        xxxx",
        "write_enable_n: ‾‾‾‾____    ‾‾‾‾    ",
        "ack       : ____    ????????____",
    ];
    let lines: Vec<_> = out.split_terminator('\n').collect();
    assert_eq!(lines, expected);
    assert!(out.ends_with('\n'));
}

#[test]
fn test_data_labels_are_decoded() {
    let text = std::fs::read_to_string("inputs/bus.json").unwrap();
    let doc = parse_document(&text).unwrap();
    assert_eq!(doc.signal[2].data, ["A0", "A1"]);
    assert_eq!(doc.signal[3].data, ["D0"]);
    assert!(doc.signal[1].data.is_empty());
}

#[test]
fn test_empty_signal_list() {
    assert_eq!(convert_file("inputs/empty.json").unwrap(), "");
}

#[test]
fn test_no_extension() {
    let out = convert_file("inputs/no_extension").unwrap();
    assert_eq!(out, "req       : ____‾‾‾‾    ____\n");
}

#[test]
fn test_boundary_errors() {
    assert!(matches!(
        convert_file("inputs/no_signal.json"),
        Err(WavetextError::Shape(_))
    ));
    assert!(matches!(
        convert_file("inputs/signal_object.json"),
        Err(WavetextError::Shape(_))
    ));
    assert!(matches!(
        convert_file("inputs/truncated.json"),
        Err(WavetextError::Parse(_))
    ));
    assert!(matches!(
        convert_file("inputs/missing.json"),
        Err(WavetextError::Io(_))
    ));
}

#[test]
fn test_custom_label_width() {
    let options = RenderOptions {
        label_width: 5,
        ..Default::default()
    };
    let out = convert_file_with_options("inputs/clk_data.json", &options).unwrap();
    assert_eq!(out, "clk  : |‾‾‾‾|    \nData : ____‾‾‾‾xxxx\n");
}

#[test]
fn test_reader_matches_file() {
    let bytes = std::fs::read("inputs/bus.json").unwrap();
    let from_reader = convert_reader(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(from_reader, convert_file("inputs/bus.json").unwrap());
}
