use super::*;

const SAMPLE: &str = "\
# two small diagrams
[dot]
'*'

[tower]
'*'
'|'
'*'
";

#[test]
fn test_load_named_diagrams() {
    let c = load(SAMPLE).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.diagrams[0].name, "dot");
    assert_eq!(c.diagrams[0].rows, vec!["*"]);
    assert_eq!(c.get("tower").unwrap().rows, vec!["*", "|", "*"]);
    assert!(c.get("missing").is_none());
}

#[test]
fn test_quoted_rows_keep_blanks() {
    let c = load("[stair]\n'*  '\n' \\0'\n").unwrap();
    assert_eq!(c.diagrams[0].rows, vec!["*  ", " \\0"]);
}

#[test]
fn test_row_before_header() {
    let err = load("'*'\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput(ref m) if m.contains("line 1")));
}

#[test]
fn test_garbage_line_reports_line_number() {
    let err = load("[a]\n'*'\n*\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput(ref m) if m.contains("line 3")));
}

#[test]
fn test_duplicate_name() {
    let err = load("[a]\n'*'\n[a]\n'*'\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)));
}

#[test]
fn test_empty_collection() {
    let c = load("# nothing here\n\n").unwrap();
    assert!(c.is_empty());
    assert_eq!(c.iter().count(), 0);
}

#[test]
fn test_load_missing_file() {
    let err = load_file("/nonexistent/hocus/collection.txt").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
