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

//! Undirected graph over dense vertex ids.
//!
//! Vertices are `u32` ids assigned sequentially from 0 in insertion order,
//! one id per column of the mined dataset. Neighbor lists are kept sorted
//! ascending and duplicate-free, so membership tests are binary searches and
//! the clique search can run set algebra with linear merges.

use std::fmt;

use foldhash::{HashMap, HashMapExt, HashSet, HashSetExt};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

/// Identifier of a vertex (a dataset column) within one `Graph`.
pub type VertexId = u32;

/// Rejection reasons for a malformed adjacency structure.
///
/// The clique search assumes a validated graph; these are produced by
/// [`Graph::validate`] before any ordering or enumeration runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex lists itself as a neighbor.
    SelfLoop { vertex: VertexId },
    /// A neighbor id is not a vertex of the graph.
    NeighborOutOfRange {
        vertex: VertexId,
        neighbor: VertexId,
        size: usize,
    },
    /// An edge is recorded in one direction only.
    NotSymmetric { vertex: VertexId, neighbor: VertexId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GraphError::SelfLoop { vertex } => {
                write!(f, "vertex {vertex} lists itself as a neighbor")
            }
            GraphError::NeighborOutOfRange {
                vertex,
                neighbor,
                size,
            } => write!(
                f,
                "vertex {vertex} references neighbor {neighbor}, but the graph has {size} vertices"
            ),
            GraphError::NotSymmetric { vertex, neighbor } => {
                write!(f, "edge {vertex} -> {neighbor} has no reverse edge")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Append-only adjacency-list graph.
///
/// [`Graph::add_vertex`] assigns ids sequentially; a neighbor id may point at
/// a vertex that has not been added yet, which lets callers stream vertices in
/// while referencing forward. Symmetry is therefore only checked by
/// [`Graph::validate`] once the graph is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    lists: Vec<Vec<VertexId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            lists: Vec::with_capacity(vertices),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Append a vertex and return its assigned id.
    ///
    /// The neighbor list is sorted and deduplicated; it may reference ids
    /// that will only be added later.
    pub fn add_vertex(&mut self, mut neighbors: Vec<VertexId>) -> VertexId {
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors.shrink_to_fit();
        let id = self.lists.len() as VertexId;
        self.lists.push(neighbors);
        id
    }

    /// Neighbors of `vertex`, ascending and duplicate-free.
    ///
    /// Panics if `vertex` is out of range.
    #[inline]
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.lists[vertex as usize]
    }

    #[inline]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.lists[vertex as usize].len()
    }

    /// Largest neighbor-list length over all vertices.
    pub fn max_degree(&self) -> usize {
        self.lists.iter().map(|list| list.len()).max().unwrap_or(0)
    }

    /// Whether `w` appears in the neighbor list of `v`.
    ///
    /// Panics if `v` is out of range.
    #[inline]
    pub fn contains_edge(&self, v: VertexId, w: VertexId) -> bool {
        self.lists[v as usize].binary_search(&w).is_ok()
    }

    /// Build a graph with `vertices` vertices from an undirected edge list.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut lists: Vec<Vec<VertexId>> = vec![Vec::new(); vertices];
        for (u, v) in edges {
            lists[u as usize].push(v);
            lists[v as usize].push(u);
        }
        let mut graph = Graph::with_capacity(vertices);
        for list in lists {
            graph.add_vertex(list);
        }
        graph
    }

    /// Convert a petgraph undirected graph into the dense-id representation.
    ///
    /// Node indices are compacted into `0..node_count` in iteration order;
    /// the returned table maps each new id back to its `NodeIndex`. Parallel
    /// edges are collapsed and self-loops dropped, so the result always
    /// passes [`Graph::validate`].
    pub fn from_petgraph<N, E>(graph: &UnGraph<N, E>) -> (Self, Vec<NodeIndex>) {
        let node_count = graph.node_count();
        let mut forward: HashMap<NodeIndex, VertexId> = HashMap::with_capacity(node_count);
        let mut reverse: Vec<NodeIndex> = Vec::with_capacity(node_count);
        for (i, node) in graph.node_indices().enumerate() {
            forward.insert(node, i as VertexId);
            reverse.push(node);
        }

        let mut adjacency: Vec<HashSet<VertexId>> = vec![HashSet::new(); node_count];
        for edge in graph.edge_references() {
            if edge.source() == edge.target() {
                continue;
            }
            if let (Some(&s), Some(&t)) =
                (forward.get(&edge.source()), forward.get(&edge.target()))
            {
                adjacency[s as usize].insert(t);
                adjacency[t as usize].insert(s);
            }
        }

        let mut result = Graph::with_capacity(node_count);
        for set in adjacency {
            result.add_vertex(set.into_iter().collect());
        }
        (result, reverse)
    }

    /// Check the whole-graph invariants: no self-loops, every neighbor id in
    /// range, and every edge recorded in both directions.
    pub fn validate(&self) -> Result<(), GraphError> {
        let size = self.lists.len();
        for (v, neighbors) in self.lists.iter().enumerate() {
            let v = v as VertexId;
            for &w in neighbors {
                if w == v {
                    return Err(GraphError::SelfLoop { vertex: v });
                }
                if w as usize >= size {
                    return Err(GraphError::NeighborOutOfRange {
                        vertex: v,
                        neighbor: w,
                        size,
                    });
                }
                if !self.contains_edge(w, v) {
                    return Err(GraphError::NotSymmetric {
                        vertex: v,
                        neighbor: w,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Graph, GraphError};
    use petgraph::graph::UnGraph;

    #[test]
    fn add_vertex_sorts_and_dedups() {
        let mut graph = Graph::new();
        let id = graph.add_vertex(vec![5, 1, 3, 1, 5]);
        assert_eq!(id, 0);
        assert_eq!(graph.neighbors(0), &[1, 3, 5]);
    }

    #[test]
    fn from_edges_is_symmetric() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(2), &[1]);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn validate_rejects_self_loop() {
        let graph = Graph::from_edges(2, [(0, 1), (1, 1)]);
        assert_eq!(graph.validate(), Err(GraphError::SelfLoop { vertex: 1 }));
    }

    #[test]
    fn validate_rejects_out_of_range_neighbor() {
        let mut graph = Graph::new();
        graph.add_vertex(vec![7]);
        assert_eq!(
            graph.validate(),
            Err(GraphError::NeighborOutOfRange {
                vertex: 0,
                neighbor: 7,
                size: 1,
            })
        );
    }

    #[test]
    fn validate_rejects_one_way_edge() {
        let mut graph = Graph::new();
        graph.add_vertex(vec![1]);
        graph.add_vertex(vec![]);
        assert_eq!(
            graph.validate(),
            Err(GraphError::NotSymmetric {
                vertex: 0,
                neighbor: 1,
            })
        );
    }

    #[test]
    fn from_petgraph_collapses_multi_edges_and_self_loops() {
        let mut pg: UnGraph<(), ()> = UnGraph::new_undirected();
        let a = pg.add_node(());
        let b = pg.add_node(());
        let c = pg.add_node(());
        pg.add_edge(a, b, ());
        pg.add_edge(a, b, ());
        pg.add_edge(b, c, ());
        pg.add_edge(c, c, ());

        let (graph, back) = Graph::from_petgraph(&pg);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(2), &[1]);
        assert_eq!(back, vec![a, b, c]);
        assert!(graph.validate().is_ok());
    }
}
