use super::*;

use crate::config::Config;
use crate::pipeline::process;

#[derive(Default)]
struct Recorder {
    stages: Vec<String>,
}

impl Observer for Recorder {
    fn parsed(&mut self, name: &str, _diagram: &Diagram) {
        self.stages.push(format!("parsed {name}"));
    }

    fn rendered(&mut self, name: &str, _canvas: &Canvas) {
        self.stages.push(format!("rendered {name}"));
    }

    fn solved(&mut self, name: &str, route: Option<&Route>) {
        self.stages.push(format!("solved {name} {}", route.is_some()));
    }
}

#[test]
fn test_unimplemented_hooks_default_to_noop() {
    let mut rec = Recorder::default();
    process("dot", &["*"], &Config::new(), &mut rec).unwrap();
    assert_eq!(rec.stages, vec!["parsed dot", "rendered dot", "solved dot false"]);
}

#[test]
fn test_skipped_render_not_observed() {
    let mut rec = Recorder::default();
    let config = Config {
        skip_render: vec!["dot".to_string()],
        ..Config::new()
    };
    process("dot", &["*"], &config, &mut rec).unwrap();
    assert_eq!(rec.stages, vec!["parsed dot", "solved dot false"]);
}

#[test]
fn test_builtin_observers_accept_every_stage() {
    for observer in [&mut Silent as &mut dyn Observer, &mut LogObserver] {
        let outcome = process("tube", &["*", "|", "*"], &Config::new(), observer).unwrap();
        assert!(outcome.canvas.is_some());
    }
}
