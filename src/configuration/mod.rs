pub mod data_channel;
pub mod ice_server;

pub use data_channel::{DataChannelConfig, DataChannelId};
pub use ice_server::IceServer;

use std::fmt;

use crate::media_stream::MediaStream;

/// The fixed role a peer takes for the lifetime of the connection.
///
/// The initiator drives the first offer/answer exchange and wins glare
/// collisions; the responder answers the initial exchange and yields on
/// glare. Exactly one side of a connection must be the initiator.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum PeerRole {
    Initiator,
    #[default]
    Responder,
}

const PEER_ROLE_INITIATOR_STR: &str = "initiator";
const PEER_ROLE_RESPONDER_STR: &str = "responder";

impl From<&str> for PeerRole {
    fn from(raw: &str) -> Self {
        match raw {
            PEER_ROLE_INITIATOR_STR => PeerRole::Initiator,
            _ => PeerRole::Responder,
        }
    }
}

impl fmt::Display for PeerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PeerRole::Initiator => write!(f, "{PEER_ROLE_INITIATOR_STR}"),
            PeerRole::Responder => write!(f, "{PEER_ROLE_RESPONDER_STR}"),
        }
    }
}

/// A PeerConfig defines how a peer establishes and renegotiates its
/// connection. Configurations are treated as readonly once a peer is
/// constructed from them.
#[derive(Default, Debug, Clone)]
pub struct PeerConfig {
    /// role decides which side drives the initial exchange and wins glare.
    pub(crate) role: PeerRole,

    /// streams holds media attached from the start; it rides the initial
    /// exchange and never triggers a renegotiation by itself.
    pub(crate) streams: Vec<MediaStream>,

    /// channel_name labels the data channel advertised in the first
    /// exchange. Empty means a random label is picked at construction.
    pub(crate) channel_name: String,

    /// channel_config optionally overrides the data channel properties,
    /// including out-of-band negotiation with a fixed id.
    pub(crate) channel_config: Option<DataChannelConfig>,

    /// ice_servers defines servers available to the endpoint's ICE agent,
    /// such as STUN and TURN servers.
    pub(crate) ice_servers: Vec<IceServer>,
}

impl PeerConfig {
    pub fn role(&self) -> PeerRole {
        self.role
    }
}

#[derive(Default)]
pub struct PeerConfigBuilder {
    role: PeerRole,
    streams: Vec<MediaStream>,
    channel_name: String,
    channel_config: Option<DataChannelConfig>,
    ice_servers: Vec<IceServer>,
}

impl PeerConfigBuilder {
    pub fn new() -> Self {
        PeerConfigBuilder::default()
    }

    pub fn with_role(mut self, role: PeerRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_streams(mut self, streams: Vec<MediaStream>) -> Self {
        self.streams = streams;
        self
    }

    pub fn with_channel_name(mut self, channel_name: String) -> Self {
        self.channel_name = channel_name;
        self
    }

    pub fn with_channel_config(mut self, channel_config: DataChannelConfig) -> Self {
        self.channel_config = Some(channel_config);
        self
    }

    pub fn with_ice_servers(mut self, ice_servers: Vec<IceServer>) -> Self {
        self.ice_servers = ice_servers;
        self
    }

    pub fn build(self) -> PeerConfig {
        PeerConfig {
            role: self.role,
            streams: self.streams,
            channel_name: self.channel_name,
            channel_config: self.channel_config,
            ice_servers: self.ice_servers,
        }
    }
}
