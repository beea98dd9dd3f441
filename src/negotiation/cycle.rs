use std::fmt;

use crate::negotiation::trigger::NegotiationTrigger;

/// Which side produced the offer that started a cycle.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CycleOrigin {
    Local,
    Remote,
}

const CYCLE_ORIGIN_LOCAL_STR: &str = "local";
const CYCLE_ORIGIN_REMOTE_STR: &str = "remote";

impl fmt::Display for CycleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CycleOrigin::Local => write!(f, "{CYCLE_ORIGIN_LOCAL_STR}"),
            CycleOrigin::Remote => write!(f, "{CYCLE_ORIGIN_REMOTE_STR}"),
        }
    }
}

/// How a cycle ended, or that it has not ended yet.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum CycleOutcome {
    /// The offer/answer exchange is still in flight.
    #[default]
    Pending,

    /// The answer was applied and the round settled cleanly.
    Completed,

    /// The round settled but a request arrived while it was in flight, so a
    /// follow-up cycle replaces it as the current description exchange.
    Superseded,

    /// Producing or applying a description failed mid-round.
    Failed,
}

const CYCLE_OUTCOME_PENDING_STR: &str = "pending";
const CYCLE_OUTCOME_COMPLETED_STR: &str = "completed";
const CYCLE_OUTCOME_SUPERSEDED_STR: &str = "superseded";
const CYCLE_OUTCOME_FAILED_STR: &str = "failed";

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CycleOutcome::Pending => write!(f, "{CYCLE_OUTCOME_PENDING_STR}"),
            CycleOutcome::Completed => write!(f, "{CYCLE_OUTCOME_COMPLETED_STR}"),
            CycleOutcome::Superseded => write!(f, "{CYCLE_OUTCOME_SUPERSEDED_STR}"),
            CycleOutcome::Failed => write!(f, "{CYCLE_OUTCOME_FAILED_STR}"),
        }
    }
}

/// One offer/answer round.
///
/// Cycles are numbered per peer starting at 1 and never reused; at most one
/// cycle is pending at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationCycle {
    trigger: NegotiationTrigger,
    started_by: CycleOrigin,
    sequence_ordinal: u64,
    outcome: CycleOutcome,
}

impl NegotiationCycle {
    pub(crate) fn new(
        trigger: NegotiationTrigger,
        started_by: CycleOrigin,
        sequence_ordinal: u64,
    ) -> Self {
        NegotiationCycle {
            trigger,
            started_by,
            sequence_ordinal,
            outcome: CycleOutcome::Pending,
        }
    }

    pub fn trigger(&self) -> NegotiationTrigger {
        self.trigger
    }

    pub fn started_by(&self) -> CycleOrigin {
        self.started_by
    }

    pub fn sequence_ordinal(&self) -> u64 {
        self.sequence_ordinal
    }

    pub fn outcome(&self) -> CycleOutcome {
        self.outcome
    }

    pub(crate) fn set_outcome(&mut self, outcome: CycleOutcome) {
        self.outcome = outcome;
    }
}

impl fmt::Display for NegotiationCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycle #{} ({}, {}): {}",
            self.sequence_ordinal, self.trigger, self.started_by, self.outcome
        )
    }
}
