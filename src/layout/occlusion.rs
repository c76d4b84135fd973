//! Occlusion order: back-to-front drawing order of edges.
//!
//! A precedence pair `(a, b)` means edge `a` is behind edge `b`. The sort
//! emits every edge after all edges behind it, breaking ties by edge index.

use log::trace;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// Order `edge_count` edges so that every precedence pair is respected.
///
/// Iterative depth-first search over predecessor lists. Meeting an edge that
/// is still being visited reports the cycle, listed from that edge onward.
pub fn occlusion_order(edge_count: usize, precedence: &[(usize, usize)]) -> Result<Vec<usize>> {
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); edge_count];
    for &(behind, front) in precedence {
        if behind >= edge_count || front >= edge_count {
            return Err(Error::MalformedInput(format!(
                "precedence pair ({behind}, {front}) names an edge beyond {edge_count}"
            )));
        }
        preds[front].push(behind);
    }
    for list in &mut preds {
        list.sort_unstable();
        list.dedup();
    }

    let mut marks = vec![Mark::Unvisited; edge_count];
    let mut order = Vec::with_capacity(edge_count);
    // (edge, next predecessor slot)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..edge_count {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::Visiting;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (edge, slot) = *top;
            match preds[edge].get(slot) {
                Some(&pred) => {
                    top.1 += 1;
                    match marks[pred] {
                        Mark::Unvisited => {
                            marks[pred] = Mark::Visiting;
                            stack.push((pred, 0));
                        }
                        Mark::Visiting => {
                            let start = stack.iter().position(|&(e, _)| e == pred).unwrap_or(0);
                            let cycle: Vec<usize> = stack[start..].iter().map(|&(e, _)| e).collect();
                            return Err(Error::CycleDetected { cycle });
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[edge] = Mark::Done;
                    order.push(edge);
                    stack.pop();
                }
            }
        }
    }

    trace!(order:?; "Occlusion order");
    Ok(order)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_occlusion.rs"]
mod tests;
