use rand::Rng;

use crate::{
    graph::ReachabilityMatrix,
    sets::visited::{PackedSet, VisitorSet},
};

/// The growing set of plausible winners.
///
/// Only ever gains members: a node enters either as the winner of some
/// election or because it is loss-reachable from such a winner.
#[derive(Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    members: PackedSet,
}

impl ExclusionSet {
    pub fn new(n: usize) -> Self {
        Self {
            members: PackedSet::new(n),
        }
    }

    pub fn contains(&self, node: usize) -> bool {
        self.members.get(node)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether every node of the graph is a member.
    pub fn is_full(&self) -> bool {
        self.members.is_full()
    }

    /// Adds `winner` and every node it reaches in `reachability`.
    ///
    /// Returns the number of nodes that were not members before.
    pub fn absorb(&mut self, winner: usize, reachability: &ReachabilityMatrix) -> usize {
        let fresh_winner = usize::from(self.members.set(winner));
        fresh_winner + self.members.union_words(reachability.row_words(winner))
    }

    /// A member drawn uniformly at random, `None` if the set is empty.
    pub fn sample_member<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.members.is_empty() {
            return None;
        }
        let rank = rng.random_range(0..self.members.len());
        self.members.nth_member(rank)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter()
    }

    /// Membership flag of every node, indexed by node id.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.members.capacity())
            .map(|node| self.members.get(node))
            .collect()
    }
}

impl std::fmt::Debug for ExclusionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExclusionSet").field(&self.members).finish()
    }
}
