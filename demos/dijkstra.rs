//! Shortest paths with an updatable frontier
//!
//! Dijkstra's algorithm needs a priority queue whose entries can be
//! re-prioritized whenever a shorter tentative distance turns up. The
//! indexed heap's `upsert` is exactly that decrease-key step, so the
//! frontier never accumulates stale duplicate entries.
//!
//! ```bash
//! cargo run --example dijkstra
//! ```

use std::collections::HashMap;

use indexed_heap::MinHeap;

/// Computes shortest distances from `source` over an undirected edge list.
fn shortest_paths<'a>(
    edges: &[(&'a str, &'a str, u64)],
    source: &'a str,
) -> HashMap<&'a str, u64> {
    let mut adjacency: HashMap<&str, Vec<(&'a str, u64)>> = HashMap::new();
    for &(from, to, weight) in edges {
        adjacency.entry(from).or_default().push((to, weight));
        adjacency.entry(to).or_default().push((from, weight));
    }

    let mut distances: HashMap<&'a str, u64> = HashMap::new();
    let mut frontier: MinHeap<&'a str, u64> = MinHeap::new();
    frontier.upsert(source, 0);

    // Popping settles a node; its distance is final from then on.
    while let Ok((node, dist)) = frontier.pop() {
        for &(next, weight) in adjacency.get(node).into_iter().flatten() {
            if distances.contains_key(next) {
                continue;
            }
            let candidate = dist + weight;
            let improves = frontier.get(&next).map_or(true, |&known| candidate < known);
            if improves {
                frontier.upsert(next, candidate);
            }
        }
        distances.insert(node, dist);
    }

    distances
}

fn main() {
    let edges = [
        ("depot", "north", 4),
        ("depot", "east", 2),
        ("east", "north", 1),
        ("north", "harbor", 5),
        ("east", "harbor", 8),
        ("harbor", "island", 3),
        ("north", "mill", 10),
        ("harbor", "mill", 2),
    ];

    let distances = shortest_paths(&edges, "depot");

    let mut report: Vec<_> = distances.into_iter().collect();
    report.sort_by_key(|&(_, dist)| dist);

    println!("shortest distances from depot:");
    for (node, dist) in report {
        println!("  {node:<8} {dist}");
    }
}
