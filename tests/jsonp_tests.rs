use loglens::jsonp::wrap_jsonp;
use pretty_assertions::assert_eq;
use serde_json::json;
use yare::parameterized;

#[test]
fn wraps_compact_json_with_trailing_newline() {
    let doc = json!({"totals": {"[ERROR]": 2}});
    let payload = wrap_jsonp(&doc, "handleTotals").unwrap();
    assert_eq!(payload, "handleTotals({\"totals\":{\"[ERROR]\":2}});\n");
}

#[parameterized(
    plain = { "cb" },
    dotted = { "window.app.onData" },
    dollar = { "$jsonp_1" },
    leading_underscore = { "_cb" },
)]
fn accepts_js_identifier_callbacks(name: &str) {
    assert!(wrap_jsonp(&json!([]), name).is_ok());
}

#[parameterized(
    empty = { "" },
    leading_digit = { "1cb" },
    whitespace = { "cb name" },
    script_injection = { "cb();evil" },
    parens = { "cb()" },
)]
fn rejects_non_identifier_callbacks(name: &str) {
    let err = wrap_jsonp(&json!([]), name).unwrap_err();
    assert!(err.to_string().contains("callback"));
}
