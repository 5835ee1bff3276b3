use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{
    error::{Error, Result},
    graph::{AdjacencyGraph, ReachabilityMatrix, compute_reachability},
    statistics::EstimatorStats,
    voting::{build_majority_graph_with_progress, resolve_irv},
    zone::{ExclusionSet, ZoneParams},
};

/// How the estimator stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convergence {
    /// Every node became a plausible winner; the answer is exact.
    Exhaustive,
    /// The patience bound elapsed without growth; the answer holds with
    /// probability at least `1 - delta`.
    PatienceElapsed,
}

/// Result of one random-subset trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The winner was already a member.
    Known { winner: usize },
    /// The winner was new and pulled `added` nodes into the set.
    Grew { winner: usize, added: usize },
}

/// Final plausible-winner set together with how it was obtained.
#[derive(Debug, Clone)]
pub struct ExclusionZone {
    members: ExclusionSet,
    convergence: Convergence,
    patience: usize,
    stats: EstimatorStats,
}

impl ExclusionZone {
    pub fn contains(&self, node: usize) -> bool {
        self.members.contains(node)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending order.
    pub fn members(&self) -> Vec<usize> {
        self.members.iter().collect()
    }

    /// Membership flag of every node, indexed by node id.
    pub fn to_bools(&self) -> Vec<bool> {
        self.members.to_bools()
    }

    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    pub fn patience(&self) -> usize {
        self.patience
    }

    pub fn stats(&self) -> &EstimatorStats {
        &self.stats
    }
}

/// Monte Carlo search for the nodes that can plausibly win an IRV election.
///
/// The estimator owns the loss-graph reachability and the growing set. It is
/// driven either all at once through [`ExclusionZoneEstimator::run`] or one
/// phase at a time with [`seed`](Self::seed) and [`step`](Self::step).
pub struct ExclusionZoneEstimator<'g> {
    graph: &'g AdjacencyGraph,
    reachability: ReachabilityMatrix,
    members: ExclusionSet,
    coin: Bernoulli,
    patience: usize,
    trial: usize,
    last_growth: usize,
    seeded: bool,
    ballot: Vec<usize>,
    stats: EstimatorStats,
}

impl<'g> ExclusionZoneEstimator<'g> {
    /// Validates `params` and precomputes the pairwise loss graph of `graph`
    /// and its transitive closure.
    pub fn new(graph: &'g AdjacencyGraph, params: ZoneParams) -> Result<Self> {
        params.validate()?;
        let coin =
            Bernoulli::new(params.inclusion_probability).map_err(|_| Error::InvalidParameter {
                name: "inclusion_probability",
                value: params.inclusion_probability,
                expected: "a probability in (0, 1]",
            })?;

        let n = graph.len();
        let majority = build_majority_graph_with_progress(graph, params.show_progress)?;
        let reachability = compute_reachability(majority.graph())?;
        info!(
            nodes = n,
            loss_edges = majority.graph().edge_count(),
            "loss graph closure ready"
        );

        let mut ballot = Vec::new();
        ballot
            .try_reserve_exact(n)
            .map_err(|source| Error::Allocation {
                what: "candidate ballot",
                source,
            })?;

        Ok(Self {
            graph,
            reachability,
            members: ExclusionSet::new(n),
            coin,
            patience: params.patience(),
            trial: 0,
            last_growth: 0,
            seeded: false,
            ballot,
            stats: EstimatorStats::new(),
        })
    }

    pub fn members(&self) -> &ExclusionSet {
        &self.members
    }

    pub fn patience(&self) -> usize {
        self.patience
    }

    pub fn stats(&self) -> &EstimatorStats {
        &self.stats
    }

    /// Seeds the set with the winners of `n` full-population elections and
    /// everything those winners reach in the loss graph.
    ///
    /// Each election starts from the ordering the previous one left behind.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let n = self.graph.len();
        self.ballot.clear();
        self.ballot.extend(0..n);

        for _ in 0..n {
            let winner = resolve_irv(self.graph, &mut self.ballot, rng)?;
            self.stats.bump_seed_elections();
            self.stats.bump_eliminations(n - 1);
            self.members.absorb(winner, &self.reachability);
        }

        self.seeded = true;
        info!(
            seed_elections = n,
            zone_size = self.members.len(),
            "seed phase done"
        );
        Ok(())
    }

    /// Whether the run is over: the set covers every node, or `patience`
    /// trials in a row have passed without growth.
    pub fn is_finished(&self) -> bool {
        self.seeded
            && (self.members.is_full() || self.trial - self.last_growth >= self.patience)
    }

    /// Runs one random-subset election.
    ///
    /// The subset draws every node independently with the configured
    /// probability and then always contains at least one current member,
    /// chosen uniformly.
    ///
    /// # Panics
    /// If called before [`seed`](Self::seed) or on an empty graph.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TrialOutcome> {
        assert!(self.seeded, "seed the estimator before running trials");

        self.ballot.clear();
        for node in 0..self.graph.len() {
            if self.coin.sample(rng) {
                self.ballot.push(node);
            }
        }

        if let Some(anchor) = self.members.sample_member(rng) {
            // the ballot is built in ascending node order
            if let Err(slot) = self.ballot.binary_search(&anchor) {
                self.ballot.insert(slot, anchor);
            }
        }

        let winner = resolve_irv(self.graph, &mut self.ballot, rng)?;
        self.stats.bump_trials();
        self.stats.bump_eliminations(self.ballot.len() - 1);

        let outcome = if self.members.contains(winner) {
            trace!(trial = self.trial, winner, "winner already known");
            TrialOutcome::Known { winner }
        } else {
            self.last_growth = self.trial;
            self.stats.record_growth(self.trial);
            let added = self.members.absorb(winner, &self.reachability);
            debug!(
                trial = self.trial,
                winner,
                added,
                zone_size = self.members.len(),
                "zone grew"
            );
            TrialOutcome::Grew { winner, added }
        };

        self.trial += 1;
        Ok(outcome)
    }

    /// Consumes the estimator and hands back the set.
    pub fn finish(self) -> ExclusionZone {
        let convergence = if self.members.is_full() {
            Convergence::Exhaustive
        } else {
            Convergence::PatienceElapsed
        };
        info!(
            zone_size = self.members.len(),
            trials = self.trial,
            ?convergence,
            "exclusion zone estimated"
        );

        ExclusionZone {
            members: self.members,
            convergence,
            patience: self.patience,
            stats: self.stats,
        }
    }

    /// Seeds, then runs trials until [`is_finished`](Self::is_finished).
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<ExclusionZone> {
        self.seed(rng)?;
        while !self.is_finished() {
            self.step(rng)?;
        }
        Ok(self.finish())
    }
}

/// Estimates the plausible-winner set of `graph` under random-subset IRV.
///
/// All randomness comes from `rng`, so a seeded generator gives a
/// reproducible zone.
pub fn estimate_exclusion_zone<R: Rng + ?Sized>(
    graph: &AdjacencyGraph,
    params: ZoneParams,
    rng: &mut R,
) -> Result<ExclusionZone> {
    ExclusionZoneEstimator::new(graph, params)?.run(rng)
}
