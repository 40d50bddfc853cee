// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Whole-graph transformations applied between correlation-graph
//! construction and the clique search.
//!
//! A correlation graph only links directly correlated columns. Widening it
//! to distance-2 neighborhoods before clique mining lets a subspace absorb
//! columns that correlate through an intermediary; [`distance_graph`]
//! composes the passes here the way the mining driver uses them.

use foldhash::{HashSet, HashSetExt};

use crate::graph::{Graph, VertexId};

/// Replace each vertex's neighbor set with the union of its neighbors'
/// neighbor sets (the exact-distance-2 relation; self-references dropped).
///
/// The result of one application is symmetric whenever the input is.
pub fn lookup_neighbors(input: &Graph) -> Graph {
    let mut output = Graph::with_capacity(input.len());
    for v in 0..input.len() as VertexId {
        let mut merged: HashSet<VertexId> = HashSet::new();
        for &w in input.neighbors(v) {
            merged.extend(input.neighbors(w).iter().copied());
        }
        merged.remove(&v);
        output.add_vertex(merged.into_iter().collect());
    }
    output
}

/// Fraction of `v`'s neighbors that are adjacent to `w`.
fn connection_rate(input: &Graph, v: VertexId, w: VertexId) -> f64 {
    let neighbors = input.neighbors(v);
    let count = neighbors
        .iter()
        .filter(|&&x| input.contains_edge(x, w))
        .count();
    count as f64 / neighbors.len() as f64
}

/// Widen each neighbor set with well-connected distance-2 candidates.
///
/// A candidate `x` reached through a common neighbor joins `N(v)` only if
/// the connection rate is at least `threshold` in both directions. For
/// candidates with a lower id the decision already made from the other side
/// is looked up instead of recomputed, which keeps the output symmetric.
pub fn bidir_lookup(input: &Graph, threshold: f64) -> Graph {
    let mut output = Graph::with_capacity(input.len());
    let mut accepted: Vec<HashSet<VertexId>> = Vec::with_capacity(input.len());

    for v in 0..input.len() as VertexId {
        let mut merged: HashSet<VertexId> = input.neighbors(v).iter().copied().collect();

        for &w in input.neighbors(v) {
            for &x in input.neighbors(w) {
                if merged.contains(&x) {
                    continue;
                }
                if x < v {
                    if accepted[x as usize].contains(&v) {
                        merged.insert(x);
                    }
                } else if x != v
                    && connection_rate(input, v, x) >= threshold
                    && connection_rate(input, x, v) >= threshold
                {
                    merged.insert(x);
                }
            }
        }

        output.add_vertex(merged.iter().copied().collect());
        accepted.push(merged);
    }
    output
}

/// Per-vertex union of several graphs over the same vertex set, with
/// self-references stripped.
///
/// Panics if `inputs` is empty. All inputs must have the size of the first.
pub fn join_edges(inputs: &[Graph]) -> Graph {
    assert!(!inputs.is_empty(), "join_edges needs at least one input graph");

    let size = inputs[0].len();
    let mut output = Graph::with_capacity(size);
    for v in 0..size as VertexId {
        let mut merged: HashSet<VertexId> = HashSet::new();
        for input in inputs {
            merged.extend(input.neighbors(v).iter().copied());
        }
        merged.remove(&v);
        output.add_vertex(merged.into_iter().collect());
    }
    output
}

/// Connect all vertices within graph distance `max_dist` of each other.
///
/// With `threshold == 0.0` each widening step is an unconditional
/// [`lookup_neighbors`] and the per-distance layers are joined at the end;
/// otherwise the steps chain [`bidir_lookup`] and the final layer is the
/// result. A `max_dist` below 2 returns the input unchanged.
pub fn distance_graph(input: &Graph, max_dist: usize, threshold: f64) -> Graph {
    if max_dist < 2 {
        return input.clone();
    }

    let mut steps: Vec<Graph> = vec![input.clone()];
    for _ in 2..=max_dist {
        let last = &steps[steps.len() - 1];
        let next = if threshold == 0.0 {
            lookup_neighbors(last)
        } else {
            bidir_lookup(last, threshold)
        };
        steps.push(next);
    }

    if threshold == 0.0 {
        join_edges(&steps)
    } else {
        steps.remove(steps.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{bidir_lookup, distance_graph, join_edges, lookup_neighbors};
    use crate::graph::Graph;

    #[test]
    fn lookup_neighbors_is_exact_distance_two() {
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        let dist2 = lookup_neighbors(&path);
        assert_eq!(dist2.neighbors(0), &[2]);
        assert_eq!(dist2.neighbors(1), &[] as &[u32]);
        assert_eq!(dist2.neighbors(2), &[0]);
        assert!(dist2.validate().is_ok());
    }

    #[test]
    fn join_edges_unions_and_strips_self_references() {
        let a = Graph::from_edges(3, [(0, 1)]);
        let mut b = Graph::new();
        b.add_vertex(vec![0, 2]);
        b.add_vertex(vec![]);
        b.add_vertex(vec![0]);
        let joined = join_edges(&[a, b]);
        assert_eq!(joined.neighbors(0), &[1, 2]);
        assert_eq!(joined.neighbors(1), &[0]);
        assert_eq!(joined.neighbors(2), &[0]);
    }

    #[test]
    fn distance_graph_closes_a_path_into_a_triangle() {
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        let widened = distance_graph(&path, 2, 0.0);
        assert_eq!(widened.neighbors(0), &[1, 2]);
        assert_eq!(widened.neighbors(1), &[0, 2]);
        assert_eq!(widened.neighbors(2), &[0, 1]);
    }

    #[test]
    fn distance_graph_below_two_is_identity() {
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(distance_graph(&path, 1, 0.0), path);
    }

    #[test]
    fn bidir_lookup_respects_the_threshold() {
        // Pentagon: each distance-2 candidate is reachable through exactly
        // one of the two neighbors, a connection rate of 0.5.
        let pentagon = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);

        let strict = bidir_lookup(&pentagon, 0.6);
        assert_eq!(strict.neighbors(0), &[1, 4]);

        let permissive = bidir_lookup(&pentagon, 0.4);
        assert_eq!(permissive.neighbors(0), &[1, 2, 3, 4]);
        assert!(permissive.validate().is_ok());
    }

    #[test]
    fn bidir_lookup_output_is_symmetric() {
        let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let widened = bidir_lookup(&square, 1.0);
        assert!(widened.validate().is_ok());
        // Opposite corners are fully mutually connected, so K4.
        for v in 0..4u32 {
            assert_eq!(widened.degree(v), 3);
        }
    }
}
