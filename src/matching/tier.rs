//! Affinity tier and requirement scorer.
//!
//! Scores how closely one candidate matches one owner's geography.
//! Evaluation is strict first-match-wins precedence: locality, then
//! constituency, then province. A candidate is never credited with a
//! "better" tier further down the chain once an earlier condition has
//! been decided — the rule is "best available affinity", not a set of
//! independently evaluated fallbacks.

use serde::{Deserialize, Serialize};

use crate::models::{Candidate, MeetingOwner};

/// Geographic/affiliation affinity of a match.
///
/// Ordered best-first: `Local < Constituency < Province < Unrestricted`,
/// so an ascending sort puts the most preferred matches at the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Candidate belongs to one of the owner's required locals.
    Local,
    /// Candidate lives in the owner's constituency.
    Constituency,
    /// Candidate lives in the owner's province.
    Province,
    /// No geographic affinity.
    Unrestricted,
}

impl Tier {
    /// Human-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Local => "Local",
            Tier::Constituency => "Constituency",
            Tier::Province => "Province",
            Tier::Unrestricted => "Any",
        }
    }
}

/// Scores the affinity between one owner and one candidate.
///
/// Precedence, first match wins:
/// 1. Owner has locality requirements and the candidate's local is among
///    them.
/// 2. Owner has a constituency and the candidate's equals it.
/// 3. The candidate's province equals the owner's.
/// 4. Otherwise unrestricted.
pub fn score(owner: &MeetingOwner, candidate: &Candidate) -> Tier {
    if !owner.requirement.required_locals.is_empty()
        && candidate
            .local
            .is_some_and(|l| owner.requirement.required_locals.contains(&l))
    {
        Tier::Local
    } else if owner.constituency.is_some() && owner.constituency == candidate.constituency {
        Tier::Constituency
    } else if owner.province == candidate.province {
        Tier::Province
    } else {
        Tier::Unrestricted
    }
}
