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

//! Smallest-last (degeneracy) ordering.
//!
//! Vertices are peeled off by minimum remaining degree; the removal sequence
//! becomes the new vertex numbering. Under that numbering every vertex has at
//! most `degeneracy` neighbors with a greater id, which is what keeps the
//! top-level branching of the clique search small.

use fixedbitset::FixedBitSet;

use crate::graph::{Graph, VertexId};

/// Result of [`degeneracy_order`].
#[derive(Debug, Clone)]
pub struct DegeneracyOrdering {
    /// The input graph renumbered so that removal order is id order.
    pub graph: Graph,
    /// Old id -> new id.
    pub old_to_new: Vec<VertexId>,
    /// New id -> old id. Inverse of `old_to_new`.
    pub new_to_old: Vec<VertexId>,
    /// Maximum remaining degree seen at any removal; `None` for the
    /// zero-vertex graph.
    pub degeneracy: Option<usize>,
    /// Largest neighbor-list length of the input graph.
    pub max_degree: usize,
}

/// Compute a smallest-last vertex ordering and renumber the graph under it.
///
/// Vertices sit in bins indexed by remaining degree. Each round takes the
/// most recently inserted vertex of the lowest nonempty bin, assigns it the
/// next id, and drops its remaining neighbors one bin down. Removing a
/// vertex lowers neighbor degrees by at most one, so the lowest nonempty bin
/// index never falls more than one below its previous value; the scan cursor
/// backs up a single step per removal instead of restarting at zero.
///
/// The input must be symmetric (see [`Graph::validate`]).
pub fn degeneracy_order(input: &Graph) -> DegeneracyOrdering {
    let n = input.len();
    let mut degree: Vec<usize> = (0..n).map(|v| input.degree(v as VertexId)).collect();
    let max_degree = degree.iter().copied().max().unwrap_or(0);

    let mut bins: Vec<Vec<VertexId>> = vec![Vec::new(); max_degree + 1];
    for (v, &d) in degree.iter().enumerate() {
        bins[d].push(v as VertexId);
    }

    let mut removed = FixedBitSet::with_capacity(n);
    let mut old_to_new = vec![0 as VertexId; n];
    let mut new_to_old = vec![0 as VertexId; n];
    let mut degeneracy: Option<usize> = None;
    let mut cursor = 0usize;
    let mut assigned = 0usize;

    while assigned < n {
        let Some(element) = bins[cursor].pop() else {
            cursor += 1;
            continue;
        };

        old_to_new[element as usize] = assigned as VertexId;
        new_to_old[assigned] = element;
        assigned += 1;
        removed.insert(element as usize);
        degeneracy = Some(match degeneracy {
            Some(d) => d.max(cursor),
            None => cursor,
        });

        for &w in input.neighbors(element) {
            if removed.contains(w as usize) {
                continue;
            }
            let d = degree[w as usize];
            if let Some(pos) = bins[d].iter().position(|&x| x == w) {
                bins[d].swap_remove(pos);
            }
            degree[w as usize] = d - 1;
            bins[d - 1].push(w);
        }

        cursor = cursor.saturating_sub(1);
    }

    // Rewrite every neighbor list under the new numbering. add_vertex sorts,
    // so the renumbered lists stay ascending.
    let mut graph = Graph::with_capacity(n);
    for &old in new_to_old.iter() {
        let translated: Vec<VertexId> = input
            .neighbors(old)
            .iter()
            .map(|&w| old_to_new[w as usize])
            .collect();
        graph.add_vertex(translated);
    }

    DegeneracyOrdering {
        graph,
        old_to_new,
        new_to_old,
        degeneracy,
        max_degree,
    }
}

#[cfg(test)]
mod tests {
    use super::degeneracy_order;
    use crate::graph::Graph;

    fn forward_degree(graph: &Graph, v: u32) -> usize {
        graph.neighbors(v).iter().filter(|&&w| w > v).count()
    }

    #[test]
    fn empty_graph_has_no_degeneracy() {
        let ordering = degeneracy_order(&Graph::new());
        assert_eq!(ordering.degeneracy, None);
        assert!(ordering.graph.is_empty());
        assert!(ordering.old_to_new.is_empty());
        assert!(ordering.new_to_old.is_empty());
    }

    #[test]
    fn triangle() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        let ordering = degeneracy_order(&graph);
        assert_eq!(ordering.degeneracy, Some(2));
        assert_eq!(ordering.max_degree, 2);
    }

    #[test]
    fn path_and_star_are_one_degenerate() {
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(degeneracy_order(&path).degeneracy, Some(1));

        let star = Graph::from_edges(6, [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        let ordering = degeneracy_order(&star);
        assert_eq!(ordering.degeneracy, Some(1));
        assert_eq!(ordering.max_degree, 5);
    }

    #[test]
    fn maps_are_mutually_inverse_bijections() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (1, 3)]);
        let ordering = degeneracy_order(&graph);
        for old in 0..graph.len() as u32 {
            assert_eq!(ordering.new_to_old[ordering.old_to_new[old as usize] as usize], old);
        }
        for new in 0..graph.len() as u32 {
            assert_eq!(ordering.old_to_new[ordering.new_to_old[new as usize] as usize], new);
        }
    }

    #[test]
    fn renumbering_preserves_adjacency() {
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5)]);
        let ordering = degeneracy_order(&graph);
        for v in 0..graph.len() as u32 {
            for w in 0..graph.len() as u32 {
                assert_eq!(
                    graph.contains_edge(v, w),
                    ordering.graph.contains_edge(
                        ordering.old_to_new[v as usize],
                        ordering.old_to_new[w as usize],
                    )
                );
            }
        }
        assert!(ordering.graph.validate().is_ok());
    }

    #[test]
    fn forward_degrees_respect_degeneracy_bound() {
        // 4-clique with a tail; degeneracy 3.
        let graph = Graph::from_edges(
            6,
            [
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 2),
                (1, 3),
                (2, 3),
                (3, 4),
                (4, 5),
            ],
        );
        let ordering = degeneracy_order(&graph);
        let d = ordering.degeneracy.unwrap();
        assert_eq!(d, 3);
        for v in 0..graph.len() as u32 {
            assert!(forward_degree(&ordering.graph, v) <= d);
        }
    }
}
