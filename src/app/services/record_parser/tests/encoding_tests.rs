//! Tests for encoding lookup and decoded line scanning

use crate::Error;
use crate::app::services::record_parser::encoding::EncodingAdapter;

fn read_all(adapter: &EncodingAdapter, bytes: &[u8]) -> Vec<String> {
    adapter
        .wrap(bytes)
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap()
}

#[test]
fn test_resolve_known_labels() {
    assert_eq!(EncodingAdapter::resolve("UTF-8").unwrap().name(), "UTF-8");
    assert_eq!(EncodingAdapter::resolve("utf8").unwrap().name(), "UTF-8");
    assert_eq!(EncodingAdapter::resolve("latin1").unwrap().name(), "windows-1252");
    assert_eq!(EncodingAdapter::resolve("TIS-620").unwrap().name(), "windows-874");
}

#[test]
fn test_resolve_unknown_label() {
    let err = EncodingAdapter::resolve("UTF-99").unwrap_err();

    match err {
        Error::UnknownEncoding { label } => assert_eq!(label, "UTF-99"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lines_split_and_crlf_stripped() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();

    assert_eq!(read_all(&adapter, b"a,b\r\nc,d\ne"), vec!["a,b", "c,d", "e"]);
}

#[test]
fn test_trailing_newline_adds_no_line() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();

    assert_eq!(read_all(&adapter, b"one\ntwo\n"), vec!["one", "two"]);
    assert!(read_all(&adapter, b"").is_empty());
}

#[test]
fn test_blank_lines_are_kept() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();

    assert_eq!(read_all(&adapter, b"a\n\nb"), vec!["a", "", "b"]);
}

#[test]
fn test_utf8_bom_removed() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();

    assert_eq!(read_all(&adapter, b"\xEF\xBB\xBFid,name\n1,x"), vec!["id,name", "1,x"]);
}

#[test]
fn test_windows_1252_decoding() {
    let adapter = EncodingAdapter::resolve("windows-1252").unwrap();

    // 0xE9 is 'é', 0x80 is the euro sign
    assert_eq!(read_all(&adapter, b"caf\xE9,\x80\n"), vec!["café,€"]);
}

#[test]
fn test_utf16le_decoding() {
    let adapter = EncodingAdapter::resolve("UTF-16LE").unwrap();
    let bytes: Vec<u8> = "id,name\n1,Ä"
        .encode_utf16()
        .flat_map(|unit| unit.to_le_bytes())
        .collect();

    assert_eq!(read_all(&adapter, &bytes), vec!["id,name", "1,Ä"]);
}

#[test]
fn test_invalid_utf8_replaced() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();

    assert_eq!(read_all(&adapter, b"a\xFFb\n"), vec!["a\u{FFFD}b"]);
}

#[test]
fn test_multibyte_sequence_across_chunks() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();
    // Long enough that the 3-byte euro sign straddles the first chunk boundary
    let mut content = "x".repeat(8 * 1024 - 1);
    content.push('€');
    content.push_str("\nnext");

    let lines = read_all(&adapter, content.as_bytes());

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("x€"));
    assert_eq!(lines[0].chars().count(), 8 * 1024);
    assert_eq!(lines[1], "next");
}

#[test]
fn test_line_numbers() {
    let adapter = EncodingAdapter::resolve("UTF-8").unwrap();
    let mut reader = adapter.wrap(&b"a\nb\n"[..]);

    assert_eq!(reader.line_number(), 0);
    reader.next_line().unwrap();
    reader.next_line().unwrap();
    assert_eq!(reader.line_number(), 2);
    assert!(reader.next_line().unwrap().is_none());
    assert_eq!(reader.line_number(), 2);
}
