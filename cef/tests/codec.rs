use cef::{
    decode, decode_with, encode_binary, encode_text, flags, transpose, CefError, DecodeOptions,
    MatrixDocument,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{Cursor, Read};

fn scenario() -> MatrixDocument {
    let mut doc = MatrixDocument::from_rows(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    doc.add_row_attribute("Gene", vec!["A".into(), "B".into(), "C".into()])
        .unwrap();
    doc.add_column_attribute("Cell", vec!["X".into(), "Y".into()])
        .unwrap();
    doc
}

fn to_binary(doc: &MatrixDocument) -> Vec<u8> {
    let mut bytes = Vec::new();
    encode_binary(doc, &mut bytes).unwrap();
    bytes
}

fn to_text(doc: &MatrixDocument) -> Vec<u8> {
    let mut bytes = Vec::new();
    encode_text(doc, &mut bytes).unwrap();
    bytes
}

const CHARSET: &[char] = &['a', 'Z', '7', ' ', '\t', '"', '\n', '\r', 'é', '_'];

fn random_string(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..6);
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())])
        .collect()
}

fn random_document(rng: &mut StdRng) -> MatrixDocument {
    let rows = rng.gen_range(0..8);
    let columns = rng.gen_range(0..8);
    let matrix = (0..rows * columns)
        .map(|_| rng.gen_range(-1000.0f32..1000.0))
        .collect();
    let mut doc = MatrixDocument::from_rows(rows, columns, matrix).unwrap();

    for _ in 0..rng.gen_range(0..3) {
        let (name, value) = (random_string(rng), random_string(rng));
        doc.add_header(name, value);
    }
    for _ in 0..rng.gen_range(0..3) {
        let values = (0..rows).map(|_| random_string(rng)).collect();
        let name = random_string(rng);
        doc.add_row_attribute(name, values).unwrap();
    }
    for _ in 0..rng.gen_range(0..3) {
        let values = (0..columns).map(|_| random_string(rng)).collect();
        let name = random_string(rng);
        doc.add_column_attribute(name, values).unwrap();
    }
    if rng.gen_bool(0.3) {
        doc.set_transposed(true);
    }
    doc
}

#[test]
fn test_scenario_binary_round_trip() {
    let doc = scenario();
    let decoded = decode(&mut Cursor::new(to_binary(&doc)), false, false).unwrap();

    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.matrix, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(decoded.row_attribute("Gene").unwrap().values, ["A", "B", "C"]);
    assert_eq!(decoded.column_attribute("Cell").unwrap().values, ["X", "Y"]);
    assert!(decoded.headers.is_empty());
    assert_eq!(decoded, doc);
}

#[test]
fn test_scenario_text_layout() {
    let text = String::from_utf8(to_text(&scenario())).unwrap();
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(|line| line.split('\t').collect())
        .collect();

    assert_eq!(rows.len(), 1 + 1 + 1 + 3);
    assert_eq!(rows[0], ["CEF", "0", "2", "3", "1", "1", "0"]);
    assert_eq!(rows[1][1..4], ["Cell", "X", "Y"]);
    assert_eq!(rows[2][0], "Gene");
    assert_eq!(rows[3][..4], ["A", "", "1", "2"]);
    assert_eq!(rows[5][..4], ["C", "", "5", "6"]);
    assert!(rows.iter().all(|row| row.len() == 7));
}

#[test]
fn test_skip_matrix_leaves_cursor_after_document() {
    let mut doc = scenario();
    doc.add_header("Source", "unit test");
    let bytes = to_binary(&doc);

    let mut cursor = Cursor::new(bytes.as_slice());
    let skipped = decode(&mut cursor, false, true).unwrap();
    assert_eq!(cursor.position() as usize, bytes.len());

    assert_eq!(skipped.dimensions(), (3, 2));
    assert!(skipped.matrix.is_empty());
    assert!(!skipped.has_matrix());
    assert_eq!(skipped.header("Source"), Some("unit test"));
    assert_eq!(skipped.row_attributes, doc.row_attributes);
    assert_eq!(skipped.column_attributes, doc.column_attributes);

    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert!(rest.is_empty());
}

#[test]
fn test_random_documents_round_trip_both_layouts() {
    let mut rng = StdRng::seed_from_u64(0xCEF);
    for _ in 0..200 {
        let doc = random_document(&mut rng);

        let binary = decode(&mut Cursor::new(to_binary(&doc)), false, false).unwrap();
        assert_eq!(binary, doc);

        let text = decode(&mut Cursor::new(to_text(&doc)), false, false).unwrap();
        assert_eq!(text, doc);
    }
}

#[test]
fn test_transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let doc = random_document(&mut rng);
        let t = transpose(&doc);
        assert_eq!(t.dimensions(), (doc.num_columns, doc.num_rows));
        for row in 0..doc.num_rows {
            for col in 0..doc.num_columns {
                assert_eq!(t.get(row, col), doc.get(col, row));
            }
        }
        assert_eq!(transpose(&t), doc);
    }
}

#[test]
fn test_decode_with_transpose_matches_transform() {
    let mut rng = StdRng::seed_from_u64(11);
    let options = DecodeOptions::default().with_transpose(true);
    for _ in 0..100 {
        let doc = random_document(&mut rng);
        let expected = transpose(&doc);

        let from_binary = decode_with(&mut Cursor::new(to_binary(&doc)), options).unwrap();
        assert_eq!(from_binary, expected);

        let from_text = decode_with(&mut Cursor::new(to_text(&doc)), options).unwrap();
        assert_eq!(from_text, expected);
    }
}

#[test]
fn test_future_major_version_rejected() {
    let mut bytes = to_binary(&scenario());
    bytes[4..8].copy_from_slice(&1i32.to_le_bytes());

    let err = decode(&mut Cursor::new(bytes), false, false).unwrap_err();
    assert_eq!(err.kind(), Some(CefError::UnsupportedVersion));
}

#[test]
fn test_set_survives_encode_decode() {
    let mut doc = scenario();
    doc.set(1, 2, 42.5);
    doc.set(0, 0, -0.25);

    for bytes in [to_binary(&doc), to_text(&doc)] {
        let decoded = decode(&mut Cursor::new(bytes), false, false).unwrap();
        assert_eq!(decoded.get(1, 2), 42.5);
        assert_eq!(decoded.get(0, 0), -0.25);
        assert_eq!(decoded.get(1, 0), 2.0);
    }
}

#[test]
fn test_transposed_flag_is_carried_not_applied() {
    let mut doc = scenario();
    doc.set_transposed(true);

    let decoded = decode(&mut Cursor::new(to_binary(&doc)), false, false).unwrap();
    assert!(decoded.is_transposed());
    assert_eq!(decoded.flags & flags::TRANSPOSED, flags::TRANSPOSED);
    assert_eq!(decoded.dimensions(), (3, 2));
}

#[test]
fn test_truncated_input_is_eof() {
    let bytes = to_binary(&scenario());
    for len in 8..bytes.len() {
        let err = decode(&mut Cursor::new(&bytes[..len]), false, false).unwrap_err();
        assert_eq!(err.kind(), Some(CefError::UnexpectedEof), "prefix of {len} bytes");
    }
}

#[test]
fn test_huge_declared_dimensions_fail_cleanly() {
    let mut binary = 0x4345_4209u32.to_le_bytes().to_vec();
    binary.extend_from_slice(&0i32.to_le_bytes());
    binary.extend_from_slice(&1i32.to_le_bytes());
    binary.extend_from_slice(&(1i64 << 30).to_le_bytes());
    binary.extend_from_slice(&(1i64 << 30).to_le_bytes());
    binary.extend_from_slice(&0i64.to_le_bytes());
    binary.extend_from_slice(&[0u8; 8]);
    for transpose in [false, true] {
        let err = decode(&mut Cursor::new(binary.as_slice()), transpose, false).unwrap_err();
        assert_eq!(err.kind(), Some(CefError::UnexpectedEof));
    }

    let text = b"CEF\t0\t1000000000000\t0\t1\t0\t0\n\tname\n".to_vec();
    let err = decode(&mut Cursor::new(text), false, false).unwrap_err();
    assert_eq!(err.kind(), Some(CefError::MalformedField));
}

#[test]
fn test_skip_matrix_and_transpose_combine() {
    let doc = scenario();
    for bytes in [to_binary(&doc), to_text(&doc)] {
        let decoded = decode(&mut Cursor::new(bytes), true, true).unwrap();

        assert_eq!(decoded.dimensions(), (2, 3));
        assert!(decoded.matrix.is_empty());
        assert_eq!(decoded.row_attributes, doc.column_attributes);
        assert_eq!(decoded.column_attributes, doc.row_attributes);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_document_serializes_to_json() {
    let json = serde_json::to_value(scenario()).unwrap();
    assert_eq!(json["num_rows"], 3);
    assert_eq!(json["num_columns"], 2);
    assert_eq!(json["row_attributes"][0]["name"], "Gene");

    let back: MatrixDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, scenario());
}
