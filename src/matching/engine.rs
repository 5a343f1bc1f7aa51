//! Priority-driven greedy assignment engine.
//!
//! # Algorithm
//!
//! 1. Shuffle the candidate pool once with a seeded RNG (initial
//!    tie-breaking only; the RNG is not consulted again).
//! 2. For each scheduled timeslot group, run the four role passes in
//!    fixed order: primary delegate, backup delegate, primary staff,
//!    backup staff.
//! 3. Each pass services an explicit work queue of the group's owners,
//!    most severe status first. An owner that receives a candidate and
//!    still has quota left is pushed back; an owner with no eligible
//!    candidates is dropped for the pass.
//!
//! Matching is greedy and local: a recorded placement is never revised.
//! Owners that cannot be satisfied simply keep a non-`Satisfied` status
//! for reporting — there is no error path.
//!
//! # Termination
//! Each iteration either fills a bucket (owner leaves the queue) or
//! consumes a candidate's availability, so a pass runs at most
//! owners × quota iterations.

use std::collections::VecDeque;

use chrono::{NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{
    Candidate, Commitment, MeetingOwner, Placement, Quotas, RoleKind, TimeslotGroups,
};

use super::{availability, status, tier};

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// RNG seed for the initial pool shuffle. `None` = draw from entropy.
    pub seed: Option<u64>,
    /// Per-role bucket capacities.
    pub quotas: Quotas,
    /// Minimum time between any two commitments of one candidate.
    pub min_separation: TimeDelta,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            quotas: Quotas::default(),
            min_separation: TimeDelta::hours(1),
        }
    }
}

/// Summary of one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Seed actually used. Feed it back to reproduce the run exactly.
    pub seed: u64,
    /// Total placements recorded across all owners and roles.
    pub placements: usize,
}

/// The assignment engine.
///
/// Takes exclusive access to the owner and candidate collections for
/// the duration of [`run`](Matchmaker::run) and mutates them in place:
/// owners gain bucket placements and status updates, candidates gain
/// commitments. Nothing else may touch the records mid-run.
///
/// # Example
/// ```
/// use matchmaker::matching::Matchmaker;
/// use matchmaker::models::{Candidate, MeetingOwner};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
///     .and_hms_opt(10, 0, 0).unwrap();
/// let mut owners = vec![MeetingOwner::new("MP Smith")
///     .with_province("Ontario")
///     .with_timeslot(ts)];
/// let mut candidates = vec![Candidate::new("Ada")
///     .with_province("Ontario")
///     .with_availability(ts.date(), true)];
///
/// let outcome = Matchmaker::new().with_seed(1).run(&mut owners, &mut candidates);
/// assert_eq!(outcome.placements, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matchmaker {
    config: MatchConfig,
}

impl Matchmaker {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets per-role quotas.
    pub fn with_quotas(mut self, quotas: Quotas) -> Self {
        self.config.quotas = quotas;
        self
    }

    /// Sets the minimum separation between commitments.
    pub fn with_min_separation(mut self, min_separation: TimeDelta) -> Self {
        self.config.min_separation = min_separation;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches candidates into owner meetings, mutating both in place.
    ///
    /// Unsatisfiable owners are left with a non-`Satisfied` status;
    /// `run` itself cannot fail. The sentinel unscheduled group is
    /// skipped entirely.
    pub fn run(&self, owners: &mut [MeetingOwner], candidates: &mut [Candidate]) -> MatchOutcome {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        // One up-front shuffle; ties further down fall back to this order.
        let mut pool: Vec<usize> = (0..candidates.len()).collect();
        pool.shuffle(&mut rng);
        let delegate_pool: Vec<usize> =
            pool.iter().copied().filter(|&i| !candidates[i].staff).collect();
        let staff_pool: Vec<usize> =
            pool.iter().copied().filter(|&i| candidates[i].staff).collect();

        for owner in owners.iter_mut() {
            let initial = status::derive_status(owner, self.config.quotas.primary_delegates);
            owner.status = initial;
        }

        let groups = TimeslotGroups::from_owners(owners);
        tracing::info!(
            seed,
            owners = owners.len(),
            candidates = candidates.len(),
            groups = groups.group_count(),
            unscheduled = groups.unscheduled.len(),
            "starting assignment run"
        );

        let mut placements = 0;
        for (&timeslot, group) in &groups.scheduled {
            for role in RoleKind::PASS_ORDER {
                let pool = if role.is_staff() { &staff_pool } else { &delegate_pool };
                let recorded = self.run_pass(timeslot, group, role, pool, owners, candidates);
                tracing::debug!(%timeslot, ?role, recorded, "pass complete");
                placements += recorded;
            }
        }

        MatchOutcome { seed, placements }
    }

    /// Runs one role pass over one timeslot group.
    fn run_pass(
        &self,
        timeslot: NaiveDateTime,
        group: &[usize],
        role: RoleKind,
        pool: &[usize],
        owners: &mut [MeetingOwner],
        candidates: &mut [Candidate],
    ) -> usize {
        let quota = self.config.quotas.for_role(role);
        if quota == 0 {
            return 0;
        }

        // Most severe first; stable sort keeps input order on ties.
        let mut ordered = group.to_vec();
        ordered.sort_by(|&a, &b| owners[b].status.cmp(&owners[a].status));
        let mut queue: VecDeque<usize> = ordered.into();

        let mut recorded = 0;
        while let Some(owner_idx) = queue.pop_front() {
            let owner_name = owners[owner_idx].name.clone();

            // One role per (owner, candidate) pair: a candidate already
            // committed to this owner is never eligible again.
            let eligible: Vec<usize> = pool
                .iter()
                .copied()
                .filter(|&c| {
                    availability::is_available(&candidates[c], timeslot, self.config.min_separation)
                        && !candidates[c].is_committed_to(&owner_name)
                })
                .collect();
            if eligible.is_empty() {
                continue;
            }

            // Best tier first; among ties, fewest primary then fewest
            // backup commitments (load balancing). Stable sort leaves
            // full ties in shuffled pool order.
            let mut scored: Vec<(tier::Tier, usize, usize, usize)> = eligible
                .iter()
                .map(|&c| {
                    (
                        tier::score(&owners[owner_idx], &candidates[c]),
                        candidates[c].primary_count(),
                        candidates[c].backup_count(),
                        c,
                    )
                })
                .collect();
            scored.sort_by(|a, b| (a.0, a.1, a.2).cmp(&(b.0, b.1, b.2)));
            let (matched_tier, _, _, best) = scored[0];

            candidates[best].commitments.push(Commitment {
                role,
                owner: owner_name,
                timeslot,
            });
            owners[owner_idx].bucket_mut(role).push(Placement {
                candidate: best,
                tier: matched_tier,
            });
            let updated =
                status::derive_status(&owners[owner_idx], self.config.quotas.primary_delegates);
            owners[owner_idx].status = updated;
            recorded += 1;

            if owners[owner_idx].bucket(role).len() < quota {
                queue.push_back(owner_idx);
            }
        }
        recorded
    }
}
