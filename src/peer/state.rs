use std::fmt;

/// PeerLifecycleState tracks a peer from construction to teardown.
///
/// The lifecycle only moves forward. In particular it never leaves
/// `Connected` for `Connecting` again: an ICE restart renegotiates
/// connectivity without demoting the peer.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum PeerLifecycleState {
    #[default]
    Unspecified,

    /// The peer exists but no transport activity has been observed.
    Created,

    /// Signaling has begun and the transport is coming up.
    Connecting,

    /// The transport reached its first established state.
    Connected,

    /// The peer was torn down, by a caller or by a fatal transport state.
    Closed,
}

const PEER_LIFECYCLE_STATE_CREATED_STR: &str = "created";
const PEER_LIFECYCLE_STATE_CONNECTING_STR: &str = "connecting";
const PEER_LIFECYCLE_STATE_CONNECTED_STR: &str = "connected";
const PEER_LIFECYCLE_STATE_CLOSED_STR: &str = "closed";

impl From<&str> for PeerLifecycleState {
    fn from(raw: &str) -> Self {
        match raw {
            PEER_LIFECYCLE_STATE_CREATED_STR => PeerLifecycleState::Created,
            PEER_LIFECYCLE_STATE_CONNECTING_STR => PeerLifecycleState::Connecting,
            PEER_LIFECYCLE_STATE_CONNECTED_STR => PeerLifecycleState::Connected,
            PEER_LIFECYCLE_STATE_CLOSED_STR => PeerLifecycleState::Closed,
            _ => PeerLifecycleState::Unspecified,
        }
    }
}

impl From<u8> for PeerLifecycleState {
    fn from(v: u8) -> Self {
        match v {
            1 => PeerLifecycleState::Created,
            2 => PeerLifecycleState::Connecting,
            3 => PeerLifecycleState::Connected,
            4 => PeerLifecycleState::Closed,
            _ => PeerLifecycleState::Unspecified,
        }
    }
}

impl fmt::Display for PeerLifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PeerLifecycleState::Created => write!(f, "{PEER_LIFECYCLE_STATE_CREATED_STR}"),
            PeerLifecycleState::Connecting => {
                write!(f, "{PEER_LIFECYCLE_STATE_CONNECTING_STR}")
            }
            PeerLifecycleState::Connected => write!(f, "{PEER_LIFECYCLE_STATE_CONNECTED_STR}"),
            PeerLifecycleState::Closed => write!(f, "{PEER_LIFECYCLE_STATE_CLOSED_STR}"),
            PeerLifecycleState::Unspecified => write!(f, "Unspecified"),
        }
    }
}
