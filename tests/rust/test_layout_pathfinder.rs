use super::*;

use proptest::prelude::*;

use crate::parsers::parse_grid;

fn build(rows: &[&str]) -> (Diagram, Lattice) {
    let d = parse_grid(rows).unwrap();
    let l = Lattice::build(&d.nodes, &d.edges, &d.syndromes());
    (d, l)
}

fn stair() -> (Diagram, Lattice) {
    build(&["*  ", "|2 ", "*  ", " \\0", "  *"])
}

fn assert_walk(l: &Lattice, path: &[Subnode]) {
    for pair in path.windows(2) {
        assert!(l.is_subedge(pair[0], pair[1]), "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn test_same_endpoint() {
    let (_, l) = build(&["*"]);
    let s = Subnode::facing(0, Direction::N);
    assert_eq!(shortest_path(&l, s, s).unwrap(), vec![s]);
}

#[test]
fn test_across_one_cube() {
    let (_, l) = build(&["*"]);
    let path = shortest_path(
        &l,
        Subnode::facing(0, Direction::N),
        Subnode::facing(0, Direction::S),
    )
    .unwrap();
    assert_eq!(path.len(), 3);
    assert_walk(&l, &path);
}

#[test]
fn test_stair_route() {
    let (d, l) = stair();
    let (entrance, exit) = d.endpoints().unwrap();
    let route = Route::solve(&d, &l, entrance, exit).unwrap();
    assert_eq!(
        route.path,
        vec![
            Subnode::new(0, [1, 0, 0]),
            Subnode::new(0, [1, 0, -1]),
            Subnode::new(1, [1, 0, 1]),
            Subnode::new(2, [-1, 0, 1]),
            Subnode::new(2, [0, 0, 1]),
        ]
    );
    assert_eq!(route.nodes, vec![0, 1, 2]);
    let forward: Vec<String> = route.forward.iter().map(|t| t.to_string()).collect();
    let reverse: Vec<String> = route.reverse.iter().map(|t| t.to_string()).collect();
    assert_eq!(forward, vec!["go S to node 1", "go SE to node 2"]);
    assert_eq!(reverse, vec!["go NW to node 1", "go N to node 0"]);
}

#[test]
fn test_reverse_path_is_walk() {
    let (d, l) = stair();
    let (entrance, exit) = d.endpoints().unwrap();
    let back = shortest_path(
        &l,
        Subnode::facing(exit.node, exit.direction),
        Subnode::facing(entrance.node, entrance.direction),
    )
    .unwrap();
    assert_walk(&l, &back);
    assert_eq!(collapse(&back), vec![2, 1, 0]);
}

#[test]
fn test_disconnected_is_unsolvable() {
    let (_, l) = build(&["*", " ", "*"]);
    let from = Subnode::facing(0, Direction::N);
    let to = Subnode::facing(1, Direction::N);
    assert!(matches!(
        shortest_path(&l, from, to),
        Err(Error::Unsolvable { .. })
    ));
}

#[test]
fn test_missing_face_is_unsolvable() {
    // The bottom face of the upper cube is replaced by the beam.
    let (_, l) = build(&["*", "|", "*"]);
    let from = Subnode::facing(0, Direction::S);
    let to = Subnode::facing(1, Direction::S);
    assert!(matches!(
        shortest_path(&l, from, to),
        Err(Error::Unsolvable { .. })
    ));
}

#[test]
fn test_collapse_merges_runs() {
    let path = [
        Subnode::new(0, [1, 0, 0]),
        Subnode::new(0, [1, 0, -1]),
        Subnode::new(1, [1, 0, 1]),
        Subnode::new(1, [0, 0, 1]),
        Subnode::new(0, [1, 0, -1]),
    ];
    assert_eq!(collapse(&path), vec![0, 1, 0]);
    assert!(collapse(&[]).is_empty());
}

#[test]
fn test_turns_display() {
    let nodes = [Node::new(0, 2), Node::new(2, 0)];
    let t = turns(&nodes, &[0, 1]);
    assert_eq!(t, vec![Turn { direction: Direction::SW, node: 1 }]);
    assert_eq!(t[0].to_string(), "go SW to node 1");
}

proptest! {
    #[test]
    fn prop_tower_paths_are_walks(height in 1usize..6, from_dir in 0u32..6, to_dir in 0u32..6) {
        let mut rows = vec!["*".to_string()];
        for _ in 1..height {
            rows.push("|".to_string());
            rows.push("*".to_string());
        }
        let d = parse_grid(&rows).unwrap();
        let l = Lattice::build(&d.nodes, &d.edges, &d.syndromes());
        // Top face of the top cube to a side face of the bottom cube.
        let from = Subnode::facing(0, Direction::N);
        let side = Direction::from_digit(from_dir);
        let last = d.node_count() - 1;
        let to = if matches!(side, Direction::N | Direction::S) {
            Subnode::facing(last, Direction::from_digit(to_dir % 2 + 1))
        } else {
            Subnode::facing(last, side)
        };
        let path = shortest_path(&l, from, to).unwrap();
        prop_assert_eq!(path[0], from);
        prop_assert_eq!(*path.last().unwrap(), to);
        for pair in path.windows(2) {
            prop_assert!(l.is_subedge(pair[0], pair[1]));
        }
        let visited = collapse(&path);
        prop_assert_eq!(visited, (0..d.node_count()).collect::<Vec<_>>());
    }
}
