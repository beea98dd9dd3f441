pub mod cycle;
pub mod trigger;

use crate::negotiation::cycle::{CycleOrigin, CycleOutcome, NegotiationCycle};
use crate::negotiation::trigger::NegotiationTrigger;

/// A negotiation request that could not start a cycle immediately.
///
/// At most one of these exists per peer. When a second request arrives while
/// one is already held, the two merge: the newest trigger and origin win,
/// except that a requested ICE restart is never forgotten by the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredRequest {
    pub(crate) trigger: NegotiationTrigger,
    pub(crate) origin: CycleOrigin,
    pub(crate) ice_restart: bool,
}

impl DeferredRequest {
    fn from_trigger(trigger: NegotiationTrigger, origin: CycleOrigin) -> Self {
        DeferredRequest {
            trigger,
            origin,
            ice_restart: trigger == NegotiationTrigger::IceRestart,
        }
    }
}

/// What the caller should do with a negotiation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationDecision {
    /// No cycle was pending: one has been opened and a local offer should be
    /// produced and emitted now. `ice_restart` asks offer creation to gather
    /// fresh connectivity.
    Begin {
        sequence_ordinal: u64,
        ice_restart: bool,
    },

    /// A cycle was already pending, or the connection is not established yet;
    /// the request was folded into the deferred slot and will run later.
    Deferred,
}

/// A settled cycle together with the follow-up request, if one accumulated
/// while the cycle was in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCompletion {
    pub cycle: NegotiationCycle,
    pub follow_up: Option<DeferredRequest>,
}

/// Serializes offer/answer rounds for one peer.
///
/// The coordinator holds at most one pending [`NegotiationCycle`] and at most
/// one [`DeferredRequest`]. Requests that arrive while a cycle is in flight,
/// or before the connection is established, coalesce into the deferred slot
/// and are replayed once the pending cycle settles (or once the connection
/// comes up), so any burst of overlapping requests costs exactly one
/// follow-up cycle.
#[derive(Debug)]
pub struct NegotiationCoordinator {
    in_flight: Option<NegotiationCycle>,
    deferred: Option<DeferredRequest>,

    /// A local offer for the in-flight cycle has been emitted and no answer
    /// (or rollback) has been seen for it yet. This is the glare window.
    local_offer_outstanding: bool,

    /// The transport reached its first connected state. Before that, only the
    /// initial-connect exchange may start a cycle; everything else defers.
    connection_ready: bool,

    /// At least one cycle has settled, so later inbound offers are
    /// renegotiations rather than the first exchange.
    initial_exchange_done: bool,

    next_ordinal: u64,
    cycles_completed: u64,
    cycles_superseded: u64,
    cycles_failed: u64,
}

impl Default for NegotiationCoordinator {
    fn default() -> Self {
        NegotiationCoordinator::new()
    }
}

impl NegotiationCoordinator {
    pub fn new() -> Self {
        NegotiationCoordinator {
            in_flight: None,
            deferred: None,
            local_offer_outstanding: false,
            connection_ready: false,
            initial_exchange_done: false,
            next_ordinal: 1,
            cycles_completed: 0,
            cycles_superseded: 0,
            cycles_failed: 0,
        }
    }

    /// Requests a local offer/answer round, returning whether to produce an
    /// offer now or wait.
    pub fn request(
        &mut self,
        trigger: NegotiationTrigger,
        origin: CycleOrigin,
    ) -> NegotiationDecision {
        self.handle_request(DeferredRequest::from_trigger(trigger, origin))
    }

    /// Replays a request returned from [`CycleCompletion::follow_up`] or
    /// [`on_connection_ready`](Self::on_connection_ready), keeping its merged
    /// ICE-restart flag.
    pub fn request_deferred(&mut self, request: DeferredRequest) -> NegotiationDecision {
        self.handle_request(request)
    }

    fn handle_request(&mut self, request: DeferredRequest) -> NegotiationDecision {
        let must_wait = self.in_flight.is_some()
            || (!self.connection_ready && request.trigger != NegotiationTrigger::InitialConnect);
        if must_wait {
            self.defer(request);
            return NegotiationDecision::Deferred;
        }

        let sequence_ordinal = self.begin(request.trigger, request.origin);
        self.local_offer_outstanding = true;
        NegotiationDecision::Begin {
            sequence_ordinal,
            ice_restart: request.ice_restart,
        }
    }

    fn defer(&mut self, request: DeferredRequest) {
        let merged = match self.deferred.take() {
            Some(held) => DeferredRequest {
                trigger: request.trigger,
                origin: request.origin,
                ice_restart: held.ice_restart || request.ice_restart,
            },
            None => request,
        };
        log::trace!(
            "negotiation request ({}) deferred, ice_restart={}",
            merged.trigger,
            merged.ice_restart
        );
        self.deferred = Some(merged);
    }

    fn begin(&mut self, trigger: NegotiationTrigger, origin: CycleOrigin) -> u64 {
        let sequence_ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        let cycle = NegotiationCycle::new(trigger, origin, sequence_ordinal);
        log::debug!("begin {cycle}");
        self.in_flight = Some(cycle);
        sequence_ordinal
    }

    /// Opens a cycle for an inbound offer that did not collide with a local
    /// one. The trigger is inferred: the first exchange ever seen is the
    /// initial connect, anything later is a remote renegotiation.
    pub fn begin_remote(&mut self) -> u64 {
        let trigger = if self.initial_exchange_done {
            NegotiationTrigger::RemoteRequested
        } else {
            NegotiationTrigger::InitialConnect
        };
        self.begin(trigger, CycleOrigin::Remote)
    }

    /// Settles the pending cycle after the closing description of its round
    /// was applied (inbound answer) or emitted (outbound answer).
    ///
    /// With no deferred request the cycle completes and the caller should
    /// surface it; with one, the cycle is superseded and the caller should
    /// replay `follow_up` instead of surfacing anything.
    pub fn complete(&mut self) -> Option<CycleCompletion> {
        let mut cycle = self.in_flight.take()?;
        self.local_offer_outstanding = false;
        self.initial_exchange_done = true;

        let follow_up = self.deferred.take();
        if follow_up.is_some() {
            cycle.set_outcome(CycleOutcome::Superseded);
            self.cycles_superseded += 1;
        } else {
            cycle.set_outcome(CycleOutcome::Completed);
            self.cycles_completed += 1;
        }
        log::debug!("{cycle}");

        Some(CycleCompletion { cycle, follow_up })
    }

    /// Abandons the pending cycle after a description could not be produced
    /// or applied. Any deferred request is handed back so a follow-up round
    /// can still be attempted.
    pub fn fail(&mut self) -> Option<CycleCompletion> {
        let mut cycle = self.in_flight.take()?;
        self.local_offer_outstanding = false;
        cycle.set_outcome(CycleOutcome::Failed);
        self.cycles_failed += 1;
        log::debug!("{cycle}");

        Some(CycleCompletion {
            cycle,
            follow_up: self.deferred.take(),
        })
    }

    /// Records that the local offer of the pending cycle was rolled back to
    /// resolve an offer collision. The cycle itself stays pending; it settles
    /// with the answer to the remote offer that won.
    pub fn on_local_offer_rolled_back(&mut self) {
        self.local_offer_outstanding = false;
    }

    /// Records the first established transport state. Returns the deferred
    /// request to replay, if one was parked while the connection was still
    /// coming up and nothing is in flight.
    pub fn on_connection_ready(&mut self) -> Option<DeferredRequest> {
        self.connection_ready = true;
        if self.in_flight.is_none() {
            self.deferred.take()
        } else {
            None
        }
    }

    /// Drops the pending cycle and the deferred slot without settling either.
    pub fn discard(&mut self) {
        if let Some(cycle) = self.in_flight.take() {
            log::trace!("discarding pending {cycle}");
        }
        self.deferred = None;
        self.local_offer_outstanding = false;
    }

    pub fn is_negotiating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether an emitted local offer is still waiting for its answer. An
    /// inbound offer arriving while this holds is an offer collision.
    pub fn has_local_offer_outstanding(&self) -> bool {
        self.local_offer_outstanding
    }

    pub fn has_deferred(&self) -> bool {
        self.deferred.is_some()
    }

    pub fn in_flight(&self) -> Option<&NegotiationCycle> {
        self.in_flight.as_ref()
    }

    pub fn cycles_started(&self) -> u64 {
        self.next_ordinal - 1
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    pub fn cycles_superseded(&self) -> u64 {
        self.cycles_superseded
    }

    pub fn cycles_failed(&self) -> u64 {
        self.cycles_failed
    }
}
