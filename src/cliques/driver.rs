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

//! Parallel fan-out over clique-search roots.
//!
//! Every vertex of the renumbered graph seeds one top-level expansion. A
//! clique is discovered only in the subtree rooted at its minimum-id member:
//! the root's candidate set holds its higher-numbered neighbors and its
//! excluded set the lower-numbered ones, so no two roots can emit the same
//! clique. Roots share nothing but the read-only graph and a progress
//! counter, which makes the loop embarrassingly parallel.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::cliques::expand::expand;
use crate::graph::{Graph, VertexId};
use crate::progress::Progress;

/// Run one pivoted expansion per root and concatenate the per-root clique
/// lists in root order, so the result does not depend on the worker count.
///
/// `graph` must be degeneracy-renumbered; the forward-degree bound is what
/// keeps each root's candidate set, and with it the branching factor, small.
pub(crate) fn enumerate_roots(graph: &Graph, progress: &dyn Progress) -> Vec<Vec<VertexId>> {
    let finished = AtomicU64::new(0);

    let per_root: Vec<Vec<Vec<VertexId>>> = (0..graph.len() as VertexId)
        .into_par_iter()
        .map(|root| {
            let neighbors = graph.neighbors(root);
            let above = neighbors.partition_point(|&w| w < root);
            let candidates = neighbors[above..].to_vec();
            let excluded = neighbors[..above].to_vec();

            let mut clique = vec![root];
            let mut found = Vec::new();
            expand(graph, &mut clique, candidates, excluded, &mut found);

            progress.tick(finished.fetch_add(1, Ordering::Relaxed));
            found
        })
        .collect();

    per_root.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::enumerate_roots;
    use crate::graph::Graph;
    use crate::progress::{Progress, SilentProgress};

    struct CountingProgress(AtomicU64);

    impl Progress for CountingProgress {
        fn tick(&self, _done: u64) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn two_disjoint_triangles() {
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
        let mut cliques = enumerate_roots(&graph, &SilentProgress);
        for clique in &mut cliques {
            clique.sort_unstable();
        }
        cliques.sort();
        assert_eq!(cliques, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn isolated_vertices_are_singleton_cliques() {
        let graph = Graph::from_edges(2, []);
        let mut cliques = enumerate_roots(&graph, &SilentProgress);
        cliques.sort();
        assert_eq!(cliques, vec![vec![0], vec![1]]);
    }

    #[test]
    fn one_tick_per_root() {
        let graph = Graph::from_edges(5, [(0, 1), (2, 3)]);
        let progress = CountingProgress(AtomicU64::new(0));
        enumerate_roots(&graph, &progress);
        assert_eq!(progress.0.load(Ordering::Relaxed), 5);
    }
}
