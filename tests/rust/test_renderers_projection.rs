use super::*;

#[test]
fn test_to_canvas_origin() {
    assert_eq!(to_canvas(0, 0, 0, 0, 0), (4, 2));
    assert_eq!(to_canvas(3, 5, 3, 5, 2), (4, 2));
}

#[test]
fn test_to_canvas_units() {
    assert_eq!(to_canvas(2, 0, 0, 0, 0), (10, 2));
    assert_eq!(to_canvas(4, 2, 0, 0, 1), (18, 9));
    assert_eq!(to_canvas(6, 8, 2, 4, 3), (22, 20));
}

#[test]
fn test_fit_single_node() {
    let p = Projection::fit(&[Node::new(3, 7)], 1).unwrap();
    assert_eq!(p.canvas_size(), (7, 5));
    assert_eq!(p.anchor(&Node::new(3, 7)), (4, 2));
}

#[test]
fn test_fit_canvas_size() {
    let nodes = [Node::new(0, 0), Node::new(2, 0)];
    assert_eq!(Projection::fit(&nodes, 0).unwrap().canvas_size(), (13, 5));
    assert_eq!(Projection::fit(&nodes, 1).unwrap().canvas_size(), (14, 5));

    let nodes = [Node::new(0, 0), Node::new(2, 0), Node::new(4, 2)];
    assert_eq!(Projection::fit(&nodes, 1).unwrap().canvas_size(), (21, 12));
}

#[test]
fn test_fit_uneven_span() {
    let nodes = [Node::new(0, 0), Node::new(0, 3)];
    assert!(matches!(
        Projection::fit(&nodes, 0),
        Err(Error::UnevenSpan {
            row_offset: 0,
            col_offset: 3
        })
    ));
}
