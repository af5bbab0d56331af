//! Generic A* search over a min-priority frontier.
//!
//! Search nodes live in a single [IndexMap] acting as an arena: a node's
//! parent is stored as the integer index of the parent's map entry, never as
//! a reference, so the whole tree is dropped in one go when the call returns.
//! Frontier entries are immutable once pushed; a cheaper route to a known
//! node pushes a fresh entry and the stale one is discarded on pop.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct FrontierEntry<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on f = g + h; equal f prefers the larger g, which favors
        // nodes deeper along their path.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks parent indices from `start` back to the root and reverses.
fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// A* from `start` until `success` holds, returning the path and its cost.
/// Returns [None] if the frontier exhausts first.
pub fn astar_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let expansions = {
            let (node, &(_, best_cost)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // Stale entry: a cheaper route to this node was pushed later.
            if cost > best_cost {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in expansions {
            let new_cost = cost + move_cost;
            let h;
            let successor_index;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    successor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        successor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: successor_index,
            });
        }
    }
    warn!("Frontier exhausted before the goal was reached");
    None
}
