//! End-to-end rendering through the public API.

use canvas_render::canvas::{dimension, CanvasSize};
use canvas_render::{parse_request, render, render_batch, CanvasResponse, ErrorKind};

const REFERENCE: &str = include_str!("fixtures/reference.json");
const LAYERED: &str = include_str!("fixtures/layered.json");
const OUT_OF_BOUNDS: &str = include_str!("fixtures/out_of_bounds.json");

#[test]
fn test_reference_request_renders() {
    let request = parse_request(REFERENCE).expect("valid payload");
    let drawing = render(&request).expect("valid request");

    let expected = "              .......\n              .......\n              .......\noooooooo      .......\no      o      .......\no      o      .......\noooooooo             ";
    assert_eq!(drawing, expected);
}

#[test]
fn test_layered_request_renders() {
    let request = parse_request(LAYERED).expect("valid payload");
    assert_eq!(dimension(&request), CanvasSize::new(9, 24));

    let drawing = render(&request).expect("valid request");
    let expected = [
        "                        ",
        "                        ",
        "   @@@@@                ",
        "   @XXX@  XXXXXXXXXXXXXX",
        "   @@@@@  XOOOOOOOOOOOOX",
        "          XOOOOOOOOOOOOX",
        "          XOOOOOOOOOOOOX",
        "          XOOOOOOOOOOOOX",
        "          XXXXXXXXXXXXXX",
    ];
    assert_eq!(drawing.split('\n').collect::<Vec<_>>(), expected);
}

#[test]
fn test_out_of_bounds_request_rejected() {
    let request = parse_request(OUT_OF_BOUNDS).expect("valid payload");
    let err = render(&request).expect_err("must be rejected");
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(err.to_string(), "The Canvas size is 100x100");
}

#[test]
fn test_response_rows_match_drawing() {
    let request = parse_request(REFERENCE).expect("valid payload");
    let drawing = render(&request).expect("valid request");
    let response = CanvasResponse::new(&drawing);

    assert_eq!(response.drawing.len(), 7);
    assert_eq!(response.drawing[6], "oooooooo             ");
    assert_eq!(response.text(), drawing);
}

#[test]
fn test_batch_mixes_results() {
    let batch = vec![
        parse_request(REFERENCE).expect("valid payload"),
        parse_request(OUT_OF_BOUNDS).expect("valid payload"),
        parse_request(LAYERED).expect("valid payload"),
    ];
    let results = render_batch(&batch);

    assert!(results[0].is_ok());
    assert!(results[1]
        .as_ref()
        .is_err_and(|err| err.kind() == ErrorKind::OutOfBounds));
    assert!(results[2].as_ref().is_ok_and(|text| text.lines().count() == 9));
}

#[test]
fn test_loose_payload_renders() {
    let request = parse_request(r#"[{"rectangleAt":[1,0],"width":2,"height":1,"fill":"x"}]"#)
        .expect("valid payload");
    assert_eq!(render(&request).expect("valid request"), " xx");

    let request = parse_request(r#"[{"RectangleAt":[2],"Width":1,"Height":2,"Fill":null,"Outline":"|"}]"#)
        .expect("valid payload");
    assert_eq!(render(&request).expect("valid request"), "  |\n  |");
}
