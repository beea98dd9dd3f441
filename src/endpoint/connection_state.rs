use std::fmt;

/// Aggregate state of the endpoint's underlying transports, as notified
/// through [`EndpointEvent::ConnectionStateChange`](super::EndpointEvent).
///
/// The peer derives its own lifecycle from these notifications: the first
/// `Connected` fires the connect event, `Failed` and an unexpected `Closed`
/// tear the peer down, and everything else is informational.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Unspecified,

    /// Transports are freshly created or gathering has not begun.
    New,

    /// At least one transport is in the process of establishing a session.
    Connecting,

    /// All transports required by the session are established.
    Connected,

    /// Connectivity was lost on at least one transport; the endpoint may
    /// still recover on its own.
    Disconnected,

    /// A transport failed in a way the endpoint cannot recover from.
    Failed,

    /// The endpoint was shut down.
    Closed,
}

const CONNECTION_STATE_NEW_STR: &str = "new";
const CONNECTION_STATE_CONNECTING_STR: &str = "connecting";
const CONNECTION_STATE_CONNECTED_STR: &str = "connected";
const CONNECTION_STATE_DISCONNECTED_STR: &str = "disconnected";
const CONNECTION_STATE_FAILED_STR: &str = "failed";
const CONNECTION_STATE_CLOSED_STR: &str = "closed";

impl From<&str> for ConnectionState {
    fn from(raw: &str) -> Self {
        match raw {
            CONNECTION_STATE_NEW_STR => ConnectionState::New,
            CONNECTION_STATE_CONNECTING_STR => ConnectionState::Connecting,
            CONNECTION_STATE_CONNECTED_STR => ConnectionState::Connected,
            CONNECTION_STATE_DISCONNECTED_STR => ConnectionState::Disconnected,
            CONNECTION_STATE_FAILED_STR => ConnectionState::Failed,
            CONNECTION_STATE_CLOSED_STR => ConnectionState::Closed,
            _ => ConnectionState::Unspecified,
        }
    }
}

impl From<u8> for ConnectionState {
    fn from(v: u8) -> Self {
        match v {
            1 => ConnectionState::New,
            2 => ConnectionState::Connecting,
            3 => ConnectionState::Connected,
            4 => ConnectionState::Disconnected,
            5 => ConnectionState::Failed,
            6 => ConnectionState::Closed,
            _ => ConnectionState::Unspecified,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConnectionState::New => write!(f, "{CONNECTION_STATE_NEW_STR}"),
            ConnectionState::Connecting => write!(f, "{CONNECTION_STATE_CONNECTING_STR}"),
            ConnectionState::Connected => write!(f, "{CONNECTION_STATE_CONNECTED_STR}"),
            ConnectionState::Disconnected => {
                write!(f, "{CONNECTION_STATE_DISCONNECTED_STR}")
            }
            ConnectionState::Failed => write!(f, "{CONNECTION_STATE_FAILED_STR}"),
            ConnectionState::Closed => write!(f, "{CONNECTION_STATE_CLOSED_STR}"),
            _ => write!(f, "Unspecified"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_connection_state() {
        let tests = vec![
            ("Unspecified", ConnectionState::Unspecified),
            ("new", ConnectionState::New),
            ("connecting", ConnectionState::Connecting),
            ("connected", ConnectionState::Connected),
            ("disconnected", ConnectionState::Disconnected),
            ("failed", ConnectionState::Failed),
            ("closed", ConnectionState::Closed),
        ];

        for (state_string, expected_state) in tests {
            assert_eq!(ConnectionState::from(state_string), expected_state);
        }
    }

    #[test]
    fn test_connection_state_string() {
        let tests = vec![
            (ConnectionState::Unspecified, "Unspecified"),
            (ConnectionState::New, "new"),
            (ConnectionState::Connecting, "connecting"),
            (ConnectionState::Connected, "connected"),
            (ConnectionState::Disconnected, "disconnected"),
            (ConnectionState::Failed, "failed"),
            (ConnectionState::Closed, "closed"),
        ];

        for (state, expected_string) in tests {
            assert_eq!(state.to_string(), expected_string);
        }
    }
}
