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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

//! Pivoted clique expansion.
//!
//! The recursion state is three pairwise-disjoint sorted vertex sets:
//! `candidates` can still extend the current clique, `clique` is the clique
//! built so far, and `excluded` holds vertices already fully explored in a
//! sibling branch (kept only to suppress duplicate maximal cliques).

use std::cmp::Ordering;

use crate::graph::{Graph, VertexId};

/// Recursively expand `clique`, emitting every maximal clique reachable from
/// the current state into `out`.
///
/// `candidates` and `excluded` must be sorted ascending, and every member of
/// both must be adjacent to every member of `clique`. Ownership of both sets
/// stays with this call frame; recursive calls get freshly built
/// intersections.
pub(crate) fn expand(
    graph: &Graph,
    clique: &mut Vec<VertexId>,
    mut candidates: Vec<VertexId>,
    mut excluded: Vec<VertexId>,
    out: &mut Vec<Vec<VertexId>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        out.push(clique.clone());
        return;
    }

    for v in pick_branches(graph, &candidates, &excluded) {
        let neighbors = graph.neighbors(v);
        let next_candidates = intersect_sorted(&candidates, neighbors);
        let next_excluded = intersect_sorted(&excluded, neighbors);

        clique.push(v);
        expand(graph, clique, next_candidates, next_excluded, out);
        clique.pop();

        // v is now fully explored: later branches must not re-extend
        // through it, or the same clique would be emitted twice.
        if let Ok(pos) = candidates.binary_search(&v) {
            candidates.remove(pos);
        }
        if let Err(pos) = excluded.binary_search(&v) {
            excluded.insert(pos, v);
        }
    }
}

/// Choose the pivot and return the branch set `candidates \ N(pivot)`.
///
/// The pivot is the member of `candidates ∪ excluded` leaving the fewest
/// candidates outside its neighborhood; every maximal clique extending the
/// current state contains either the pivot or one of those leftovers, so only
/// the leftovers need a recursive call. Ties keep the first winner of a
/// single scan over `candidates` then `excluded`.
fn pick_branches(graph: &Graph, candidates: &[VertexId], excluded: &[VertexId]) -> Vec<VertexId> {
    let mut winner: Option<Vec<VertexId>> = None;
    for &u in candidates.iter().chain(excluded.iter()) {
        let outside = difference_sorted(candidates, graph.neighbors(u));
        if winner
            .as_ref()
            .map_or(true, |best| outside.len() < best.len())
        {
            let dominates_all = outside.is_empty();
            winner = Some(outside);
            if dominates_all {
                break;
            }
        }
    }

    match winner {
        Some(branches) => branches,
        // The caller only gets here with candidates or excluded nonempty,
        // so the scan above must have produced a winner.
        None => panic!("pivot scan over nonempty candidate/excluded sets found no pivot"),
    }
}

/// Elements present in both sorted slices.
fn intersect_sorted(a: &[VertexId], b: &[VertexId]) -> Vec<VertexId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Elements of sorted `a` missing from sorted `b`.
fn difference_sorted(a: &[VertexId], b: &[VertexId]) -> Vec<VertexId> {
    let mut out = Vec::new();
    let mut j = 0;
    for &x in a {
        while j < b.len() && b[j] < x {
            j += 1;
        }
        if j >= b.len() || b[j] != x {
            out.push(x);
        }
    }
    out
}
