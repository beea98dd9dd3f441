use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// ErrConnectionClosed indicates an operation executed after the peer has
    /// already been destroyed.
    #[error("connection closed")]
    ErrConnectionClosed,

    /// ErrConnectionFailure indicates the underlying transport reported a
    /// connection failure it cannot recover from.
    #[error("connection failed")]
    ErrConnectionFailure,

    /// ErrIceConnectionFailure indicates ICE connectivity was lost and could
    /// not be re-established.
    #[error("ice connection failed")]
    ErrIceConnectionFailure,

    /// ErrIceConnectionClosed indicates the underlying transport closed while
    /// the peer still considered the session live.
    #[error("ice connection closed")]
    ErrIceConnectionClosed,

    /// ErrCreateOffer indicates the endpoint failed to produce an offer for a
    /// negotiation cycle.
    #[error("failed to create offer: {0}")]
    ErrCreateOffer(String),

    /// ErrCreateAnswer indicates the endpoint failed to produce an answer to
    /// a remote offer.
    #[error("failed to create answer: {0}")]
    ErrCreateAnswer(String),

    /// ErrSetLocalDescription indicates a locally produced description was
    /// rejected by the endpoint.
    #[error("failed to set local description: {0}")]
    ErrSetLocalDescription(String),

    /// ErrSetRemoteDescription indicates an inbound description was rejected
    /// by the endpoint (malformed or out-of-order).
    #[error("failed to set remote description: {0}")]
    ErrSetRemoteDescription(String),

    /// ErrAddIceCandidate indicates an inbound connectivity candidate was
    /// rejected by the endpoint.
    #[error("failed to add ice candidate: {0}")]
    ErrAddIceCandidate(String),

    /// ErrSignaling indicates an inbound signal envelope carried no payload
    /// this peer knows how to apply.
    #[error("signal envelope with no recognizable payload")]
    ErrSignaling,

    /// ErrDataChannel indicates the pre-negotiated data channel could not be
    /// created at construction.
    #[error("failed to create data channel: {0}")]
    ErrDataChannel(String),

    /// ErrAddTrack indicates a local media track could not be attached to the
    /// endpoint.
    #[error("failed to add track: {0}")]
    ErrAddTrack(String),

    /// ErrRemoveTrack indicates a local media track could not be detached
    /// from the endpoint.
    #[error("failed to remove track: {0}")]
    ErrRemoveTrack(String),

    /// ErrAddTransceiver indicates a transceiver could not be added to the
    /// endpoint.
    #[error("failed to add transceiver: {0}")]
    ErrAddTransceiver(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn new(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(e.to_string())
    }
}
