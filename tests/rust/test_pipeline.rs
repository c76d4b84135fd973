use super::*;

use crate::observe::Silent;
use crate::parsers::collection::load;

const STAIR: [&str; 5] = ["*  ", "|2 ", "*  ", " \\0", "  *"];

/// Four edges crossing in a cycle of occlusion pairs.
const WEAVE: [&str; 9] = [
    "*   *   *  ",
    " \\   \\ /   ",
    "  \\   \\   *",
    "   \\ / \\ / ",
    "    /   /  ",
    "   / \\ / \\ ",
    "  /   \\   *",
    " /   / \\   ",
    "*   *   *  ",
];

#[test]
fn test_process_solves_stair() {
    let outcome = process("stair", &STAIR, &Config::new(), &mut Silent).unwrap();
    assert_eq!(outcome.name, "stair");
    assert_eq!(outcome.order, vec![0, 1]);
    let route = outcome.route.as_ref().unwrap();
    assert_eq!(route.nodes, vec![0, 1, 2]);
    let report = outcome.report();
    assert!(report.starts_with("[stair]\n"));
    assert!(report.contains("forward:\n  go S to node 1\n  go SE to node 2\n"));
    assert!(report.contains("reverse:\n  go NW to node 1\n  go N to node 0\n"));
}

#[test]
fn test_no_markers_report() {
    let outcome = process("dot", &["*"], &Config::new(), &mut Silent).unwrap();
    assert!(outcome.route.is_none());
    assert!(outcome.report().ends_with("no markers\n"));
}

#[test]
fn test_unsolvable_is_not_fatal() {
    // Two separate cubes, entrance on the first and exit on the second.
    let rows = ["*", "3", "*", "3"];
    let outcome = process("apart", &rows, &Config::new(), &mut Silent).unwrap();
    assert!(outcome.has_markers());
    assert!(outcome.route.is_none());
    assert!(outcome.report().ends_with("no path\n"));
}

#[test]
fn test_skip_render() {
    let config = Config {
        skip_render: vec!["stair".to_string()],
        ..Config::new()
    };
    let outcome = process("stair", &STAIR, &config, &mut Silent).unwrap();
    assert!(outcome.canvas.is_none());
    assert!(outcome.route.is_some());
    assert!(outcome.report().starts_with("[stair]\nforward:\n"));
}

#[test]
fn test_skip_render_bypasses_occlusion_cycle() {
    let config = Config {
        skip_render: vec!["weave".to_string()],
        ..Config::new()
    };
    let outcome = process("weave", &WEAVE, &config, &mut Silent).unwrap();
    assert!(outcome.canvas.is_none());
    assert!(outcome.order.is_empty());
    assert_eq!(outcome.diagram.edge_count(), 4);
    assert!(outcome.route.is_none());
    assert_eq!(outcome.report(), "[weave]\nno markers\n");
}

#[test]
fn test_rendered_weave_reports_cycle() {
    let err = process("weave", &WEAVE, &Config::new(), &mut Silent).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { ref cycle } if cycle.len() == 4));
}

#[test]
fn test_process_all_keeps_going() {
    let text = "[bad]\n'*'\n'|'\n[good]\n'*'\n[third]\n'*'\n";
    let collection = load(text).unwrap();
    let results = process_all(&collection, &Config::new(), &mut Silent);
    assert_eq!(results.len(), 3);
    assert!(matches!(results[0].1, Err(Error::OutOfBounds { .. })));
    assert!(results[1].1.is_ok());
    assert_eq!(results[2].0, "third");
}

#[test]
fn test_process_all_limit() {
    let collection = load("[a]\n'*'\n[b]\n'*'\n[c]\n'*'\n").unwrap();
    let config = Config {
        limit: Some(2),
        ..Config::new()
    };
    let names: Vec<String> = process_all(&collection, &config, &mut Silent)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}
