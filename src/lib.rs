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

//! Maximal-clique mining over correlation graphs.
//!
//! Subspace search over wide tabular data reduces, once a correlation graph
//! over the columns exists, to enumerating that graph's maximal cliques:
//! each clique is a group of mutually correlated dimensions. This crate is
//! that reduction's algorithmic core, a Bron-Kerbosch variant with pivoting,
//! a smallest-last degeneracy preprocessing pass, and parallel fan-out over
//! the search roots.
//!
//! Building the correlation graph (edge weighting, thresholding, column
//! statistics) and persisting results are the caller's concern; the crate
//! consumes a finished [`Graph`] and hands back cliques in the caller's id
//! space.
//!
//! ```
//! use cliquemine::{find_maximal_cliques, Graph};
//!
//! // A triangle with a pendant vertex.
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);
//! let cliques = find_maximal_cliques(&graph)?;
//! assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3]]);
//! # Ok::<(), cliquemine::GraphError>(())
//! ```

pub mod cliques;
pub mod graph;
pub mod progress;
pub mod transform;

pub use cliques::{
    degeneracy_order, find_maximal_cliques, find_maximal_cliques_with_progress, Clique,
    DegeneracyOrdering,
};
pub use graph::{Graph, GraphError, VertexId};
pub use progress::{DotProgress, Progress, SilentProgress};
