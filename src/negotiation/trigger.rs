use std::fmt;

/// What asked for a new offer/answer round.
///
/// The trigger is recorded on the cycle it starts (or on the deferred slot
/// when a cycle is already pending) and only matters for accounting and for
/// the ICE-restart flag carried into offer creation; the coordinator treats
/// all triggers uniformly otherwise.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum NegotiationTrigger {
    /// The initiator's implicit first exchange at construction.
    InitialConnect,

    /// A caller invoked `negotiate()` directly.
    ManualRequest,

    /// Local media was attached after construction.
    StreamAdded,

    /// Local media was detached.
    StreamRemoved,

    /// A caller asked for a fresh connectivity-gathering pass.
    IceRestart,

    /// The remote side asked for a round, via an inbound offer, renegotiate
    /// flag, or transceiver request.
    RemoteRequested,
}

const TRIGGER_INITIAL_CONNECT_STR: &str = "initial-connect";
const TRIGGER_MANUAL_REQUEST_STR: &str = "manual-request";
const TRIGGER_STREAM_ADDED_STR: &str = "stream-added";
const TRIGGER_STREAM_REMOVED_STR: &str = "stream-removed";
const TRIGGER_ICE_RESTART_STR: &str = "ice-restart";
const TRIGGER_REMOTE_REQUESTED_STR: &str = "remote-requested";

impl fmt::Display for NegotiationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NegotiationTrigger::InitialConnect => write!(f, "{TRIGGER_INITIAL_CONNECT_STR}"),
            NegotiationTrigger::ManualRequest => write!(f, "{TRIGGER_MANUAL_REQUEST_STR}"),
            NegotiationTrigger::StreamAdded => write!(f, "{TRIGGER_STREAM_ADDED_STR}"),
            NegotiationTrigger::StreamRemoved => write!(f, "{TRIGGER_STREAM_REMOVED_STR}"),
            NegotiationTrigger::IceRestart => write!(f, "{TRIGGER_ICE_RESTART_STR}"),
            NegotiationTrigger::RemoteRequested => {
                write!(f, "{TRIGGER_REMOTE_REQUESTED_STR}")
            }
        }
    }
}
