use std::collections::VecDeque;

use crate::graph::{Graph, LocationId};

const UNREACHED: u32 = u32::MAX;

/// Shortest total weight of a walk from `from` to `to`, or `None` if `to`
/// cannot be reached.
///
/// Label-correcting search over a FIFO worklist: a location is re-queued
/// every time its best distance improves. Candidates heavier than the best
/// distance already found to `to` are dropped.
///
/// When `from == to` the target starts at distance 0, which would make the
/// answer trivially 0. The first route back into `to` is therefore allowed to
/// overwrite that 0, so the result is the lightest cycle through `to`.
pub fn shortest_distance(graph: &Graph, from: LocationId, to: LocationId) -> Option<u32> {
    let mut best = vec![UNREACHED; graph.capacity()];
    best[from] = 0;

    let mut worklist = VecDeque::from([from]);
    let mut shortest = UNREACHED;

    while let Some(current) = worklist.pop_front() {
        for route in graph.routes_from(current) {
            let next = route.destination;
            let candidate = best[current].saturating_add(route.weight);

            if candidate > shortest {
                continue;
            }

            let leaving_start = next == to && best[next] == 0;
            if candidate < best[next] || leaving_start {
                best[next] = candidate;
                worklist.push_back(next);
            }

            if next == to && best[next] < shortest {
                shortest = best[next];
            }
        }
    }

    (shortest != UNREACHED).then_some(shortest)
}
