use loglens::record::{IndexError, LogRecord, MalformedPolicy, index_lines, lift_lines};
use pretty_assertions::assert_eq;
use yare::parameterized;

const FIXTURE: &str = "[DEBUG] foo\n[ERROR] bar\n[ERROR] baz\n[INFO] boz\n";

fn rec(severity: &str, message: &str) -> LogRecord {
    LogRecord {
        severity: severity.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn lift_keeps_lines_in_input_order() {
    let lifted = lift_lines(FIXTURE);
    assert_eq!(
        lifted,
        vec!["[DEBUG] foo", "[ERROR] bar", "[ERROR] baz", "[INFO] boz"]
    );
}

#[test]
fn lift_final_newline_is_not_a_record() {
    assert_eq!(lift_lines("a\nb\n"), vec!["a", "b"]);
    assert_eq!(lift_lines("a\nb"), vec!["a", "b"]);
}

#[test]
fn lift_keeps_interior_empty_lines() {
    assert_eq!(lift_lines("a\n\nb"), vec!["a", "", "b"]);
}

#[test]
fn lift_empty_input_is_empty() {
    assert_eq!(lift_lines(""), Vec::<String>::new());
}

#[test]
fn index_fixture_yields_four_records() {
    let records = index_lines(FIXTURE, MalformedPolicy::Fail).unwrap();
    assert_eq!(
        records,
        vec![
            rec("[DEBUG]", "foo"),
            rec("[ERROR]", "bar"),
            rec("[ERROR]", "baz"),
            rec("[INFO]", "boz"),
        ]
    );
}

#[parameterized(
    single_space = { "[INFO] up", "[INFO]", "up" },
    tab_boundary = { "[WARN]\tdisk low", "[WARN]", "disk low" },
    message_keeps_spaces = { "[DEBUG]  double", "[DEBUG]", " double" },
    message_with_words = { "x y z", "x", "y z" },
    empty_message = { "[TRACE] ", "[TRACE]", "" },
    unbracketed_tag = { "error it broke", "error", "it broke" },
)]
fn index_splits_on_first_whitespace(line: &str, severity: &str, message: &str) {
    let records = index_lines(line, MalformedPolicy::Fail).unwrap();
    assert_eq!(records, vec![rec(severity, message)]);
}

#[test]
fn index_skips_blank_lines() {
    let records = index_lines("[A] one\n\n   \n[B] two\n", MalformedPolicy::Fail).unwrap();
    assert_eq!(records, vec![rec("[A]", "one"), rec("[B]", "two")]);
}

#[parameterized(
    no_boundary = { "[DEBUG] ok\nnoboundary\n", 2, "noboundary" },
    leading_whitespace = { "  [INFO] shifted\n", 1, "  [INFO] shifted" },
)]
fn index_fail_policy_aborts_with_line_context(text: &str, line: usize, content: &str) {
    let err = index_lines(text, MalformedPolicy::Fail).unwrap_err();
    match err.downcast_ref::<IndexError>() {
        Some(IndexError::MalformedLine {
            line: got_line,
            content: got_content,
        }) => {
            assert_eq!(*got_line, line);
            assert_eq!(got_content, content);
        }
        None => panic!("expected IndexError::MalformedLine, got {:?}", err),
    }
}

#[test]
fn index_skip_policy_drops_malformed_lines() {
    let records = index_lines("[DEBUG] ok\nnoboundary\n[INFO] ok2\n", MalformedPolicy::Skip)
        .unwrap();
    assert_eq!(records, vec![rec("[DEBUG]", "ok"), rec("[INFO]", "ok2")]);
}
