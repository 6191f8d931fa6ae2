//! Annotation contract tests: combination, parse/merge composition,
//! absence propagation and origin resolution.

use errpath::{combine_errors, AnnotatedError, Annotator, Origin};
use std::error::Error;
use std::fmt;
use std::io;

fn err(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, msg.to_string())
}

fn leaf() -> Annotator {
    Annotator::new(Origin::verbatim("p."), "B", "S")
}

fn outer() -> Annotator {
    Annotator::new(Origin::verbatim("q."), "B2", "S2")
}

#[derive(Debug)]
struct Timeout(u32);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timeout after {}ms", self.0)
    }
}

impl Error for Timeout {}

#[test]
fn combine_joins_present_in_order() {
    let lists: Vec<Vec<Option<&str>>> = vec![
        vec![Some("a")],
        vec![Some("a"), Some("b")],
        vec![None, Some("a"), None, Some("b"), Some("c"), None],
        vec![Some(""), Some("x")],
    ];
    for list in lists {
        let expected: Vec<&str> = list.iter().flatten().copied().collect();
        let got = combine_errors(list.clone()).unwrap();
        assert_eq!(got.as_str(), expected.join("|"), "input: {:?}", list);
    }
}

#[test]
fn combine_nothing_is_none() {
    assert!(combine_errors(Vec::<Option<&str>>::new()).is_none());
    assert!(combine_errors(vec![None::<&str>; 5]).is_none());
}

#[test]
fn combine_trait_objects() {
    let io_err = err("disk");
    let timeout = Timeout(30);
    let errs: Vec<Option<&dyn Error>> = vec![Some(&io_err as &dyn Error), None, Some(&timeout as &dyn Error)];
    assert_eq!(combine_errors(errs).unwrap().as_str(), "disk|timeout after 30ms");
}

#[test]
fn parse_without_errors_is_none_for_any_description() {
    for desc in ["", "D", "load config", "描述"] {
        assert!(leaf().parse_error(desc, Vec::<Option<io::Error>>::new()).is_none());
        assert!(leaf().parse_error(desc, [None::<io::Error>, None]).is_none());
    }
}

#[test]
fn parse_exact_format() {
    let e = leaf().parse_error("D", [Some(err("E"))]).unwrap();
    assert_eq!(e.detail_error(), Some("B : E "));
    assert_eq!(e.path_error(), Some("p.D : B "));
}

#[test]
fn merge_exact_format() {
    let prior = leaf().parse_error("D", [Some(err("E"))]).unwrap();
    let e = outer().merge_error("D2", &prior).unwrap();
    assert_eq!(e.detail_error(), Some("B2 : B : E  "));
    assert_eq!(e.path_error(), Some("q.D2 : B2 : p.D : B "));
}

#[test]
fn merge_preserves_inner_path_verbatim() {
    let prior = leaf().parse_error("D", [Some(err("E"))]).unwrap();
    let e = outer().merge_error("D2", &prior).unwrap();
    let inner_path = prior.path_error().unwrap();
    assert!(e.path_error().unwrap().ends_with(inner_path));
    assert!(e.path_error().unwrap().starts_with("q.D2 : B2 : "));
}

#[test]
fn merge_absent_or_empty_is_none() {
    for desc in ["", "D2", "serve"] {
        assert!(outer().merge_error(desc, None).is_none());
        assert!(outer().merge_error(desc, &AnnotatedError::default()).is_none());
    }
}

#[test]
fn is_nil_err() {
    let a = leaf();
    assert!(a.is_nil_err(None));
    assert!(a.is_nil_err(&AnnotatedError::default()));
    let e = a.parse_error("D", [Some(err("E"))]).unwrap();
    assert!(!a.is_nil_err(&e));
}

#[test]
fn detail_and_path_set_together() {
    let e = leaf().parse_error("D", [Some(err("E"))]).unwrap();
    assert_eq!(e.detail_error().is_some(), e.path_error().is_some());
    let m = outer().merge_error("D2", &e).unwrap();
    assert_eq!(m.detail_error().is_some(), m.path_error().is_some());
    let d = AnnotatedError::default();
    assert_eq!(d.detail_error().is_some(), d.path_error().is_some());
}

#[test]
fn absence_idempotent_through_layers() {
    let layers: Vec<Annotator> = (0..8)
        .map(|i| Annotator::new(Origin::verbatim(format!("l{}.", i)), format!("B{}", i), "S"))
        .collect();

    let mut cur = layers[0].parse_error("leaf", [None::<io::Error>]);
    for (i, layer) in layers.iter().enumerate().skip(1) {
        cur = layer.merge_error(&format!("step{}", i), cur.as_ref());
        assert!(cur.is_none(), "layer {} fabricated an error", i);
    }
}

#[test]
fn deep_chain_accumulates() {
    let layers: Vec<Annotator> = (0..3)
        .map(|i| Annotator::new(Origin::verbatim(format!("l{}.", i)), format!("B{}", i), "S"))
        .collect();

    let mut cur = layers[0].parse_error("d0", [Some(err("E"))]);
    for (i, layer) in layers.iter().enumerate().skip(1) {
        cur = layer.merge_error(&format!("d{}", i), cur.as_ref());
    }
    let e = cur.unwrap();
    assert_eq!(e.detail_error(), Some("B2 : B1 : B0 : E   "));
    assert_eq!(e.path_error(), Some("l2.d2 : B2 : l1.d1 : B1 : l0.d0 : B0 "));
    assert_eq!(e.base_error(), "B2");
}

#[test]
fn origin_resolution() {
    assert_eq!(Origin::resolve("github.com/org/proj/sub/pkg").as_str(), "sub/pkg.");
    assert_eq!(Origin::resolve("github.com/org/proj").as_str(), "");
    assert_eq!(Origin::resolve("main").as_str(), "");
    assert_eq!(Origin::resolve("properties::sub").as_str(), "sub.");
}

#[test]
fn annotated_error_is_std_error() {
    fn boxed() -> Result<(), Box<dyn Error + Send + Sync>> {
        let e = leaf().parse_error("D", [Some(err("E"))]).unwrap();
        Err(Box::new(e))
    }
    let b = boxed().unwrap_err();
    let e = b.downcast_ref::<AnnotatedError>().unwrap();
    assert_eq!(e.short_error(), "S");
}
