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

//! Maximal-clique enumeration.
//!
//! The full pipeline: validate the input, renumber it by degeneracy order,
//! fan the Bron-Kerbosch-with-pivot search out over one root per vertex, and
//! map the found cliques back into the caller's id space. Each clique of the
//! result names a group of mutually correlated columns, a candidate
//! subspace.

pub mod degeneracy;
mod driver;
mod expand;

pub use degeneracy::{degeneracy_order, DegeneracyOrdering};

use crate::graph::{Graph, GraphError, VertexId};
use crate::progress::{Progress, SilentProgress};

/// A maximal clique, as ascending original vertex ids.
pub type Clique = Vec<VertexId>;

/// Find all maximal cliques of `graph`.
///
/// These are the maximal complete subgraphs: vertex sets in which all
/// members are pairwise adjacent and which no outside vertex extends. The
/// returned cliques use the ids of `graph` itself (the degeneracy
/// renumbering used internally is not visible in the output), each sorted
/// ascending, the whole list ordered by smallest member, then length, then
/// lexicographically. The same graph always yields the same list,
/// regardless of how many threads the ambient rayon pool runs.
///
/// # Errors
///
/// Returns a [`GraphError`] if the graph fails [`Graph::validate`]; no
/// partial result is produced.
pub fn find_maximal_cliques(graph: &Graph) -> Result<Vec<Clique>, GraphError> {
    find_maximal_cliques_with_progress(graph, &SilentProgress)
}

/// [`find_maximal_cliques`] with a tick per finished search root.
pub fn find_maximal_cliques_with_progress(
    graph: &Graph,
    progress: &dyn Progress,
) -> Result<Vec<Clique>, GraphError> {
    graph.validate()?;
    if graph.is_empty() {
        return Ok(Vec::new());
    }

    let ordering = degeneracy_order(graph);
    let mut cliques: Vec<Clique> = driver::enumerate_roots(&ordering.graph, progress)
        .into_iter()
        .map(|clique| {
            let mut members: Vec<VertexId> = clique
                .into_iter()
                .map(|v| ordering.new_to_old[v as usize])
                .collect();
            members.sort_unstable();
            members
        })
        .collect();

    sort_cliques(&mut cliques);
    Ok(cliques)
}

/// Deterministic output order: smallest member first, then size, then full
/// lexicographic order.
pub(crate) fn sort_cliques(cliques: &mut [Clique]) {
    cliques.sort_by(|a, b| {
        a.first()
            .cmp(&b.first())
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.cmp(b))
    });
}
