use super::*;

use proptest::prelude::*;

fn position(order: &[usize], edge: usize) -> usize {
    order.iter().position(|&e| e == edge).unwrap()
}

#[test]
fn test_no_precedence_is_index_order() {
    assert_eq!(occlusion_order(4, &[]).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_empty() {
    assert!(occlusion_order(0, &[]).unwrap().is_empty());
}

#[test]
fn test_behind_drawn_first() {
    let order = occlusion_order(3, &[(2, 0)]).unwrap();
    assert_eq!(order, vec![2, 0, 1]);
}

#[test]
fn test_chain() {
    let order = occlusion_order(3, &[(2, 1), (1, 0)]).unwrap();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_duplicate_pairs_ignored() {
    let order = occlusion_order(2, &[(1, 0), (1, 0)]).unwrap();
    assert_eq!(order, vec![1, 0]);
}

#[test]
fn test_two_cycle() {
    let err = occlusion_order(2, &[(0, 1), (1, 0)]).unwrap_err();
    match err {
        Error::CycleDetected { mut cycle } => {
            cycle.sort_unstable();
            assert_eq!(cycle, vec![0, 1]);
        }
        other => panic!("expected cycle, got {other:?}"),
    }
}

#[test]
fn test_four_cycle_reports_members_only() {
    // 4 hangs off the cycle 0 -> 1 -> 2 -> 3 -> 0.
    let pairs = [(0, 1), (1, 2), (2, 3), (3, 0), (4, 0)];
    let err = occlusion_order(5, &pairs).unwrap_err();
    match err {
        Error::CycleDetected { mut cycle } => {
            cycle.sort_unstable();
            assert_eq!(cycle, vec![0, 1, 2, 3]);
        }
        other => panic!("expected cycle, got {other:?}"),
    }
}

#[test]
fn test_pair_out_of_range() {
    assert!(matches!(
        occlusion_order(1, &[(0, 3)]),
        Err(Error::MalformedInput(_))
    ));
}

proptest! {
    #[test]
    fn prop_forward_pairs_respected(
        n in 1usize..12,
        raw in prop::collection::vec((0usize..12, 0usize..12), 0..30),
    ) {
        // Only pairs from a lower to a higher index: always acyclic.
        let pairs: Vec<(usize, usize)> = raw
            .into_iter()
            .map(|(a, b)| (a % n, b % n))
            .filter(|(a, b)| a < b)
            .collect();
        let order = occlusion_order(n, &pairs).unwrap();
        prop_assert_eq!(order.len(), n);
        for &(a, b) in &pairs {
            prop_assert!(position(&order, a) < position(&order, b));
        }
    }
}
