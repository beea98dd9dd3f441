pub mod connection_state;

pub use connection_state::ConnectionState;

use crate::configuration::data_channel::DataChannelConfig;
use crate::configuration::ice_server::IceServer;
use crate::error::Result;
use crate::media_stream::track::{MediaKind, MediaStreamTrack, MediaTrackId};
use crate::media_stream::MediaStreamId;
use crate::signal::candidate::IceCandidateInit;
use crate::signal::session_description::SessionDescription;

/// Options used when producing an offer.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#dictionary-rtcofferoptions-members)
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub struct OfferOptions {
    /// Force ICE restart: the generated offer carries fresh ICE credentials
    /// so the agent re-runs candidate gathering without tearing down the
    /// established media/data session.
    pub ice_restart: bool,
}

/// Something the endpoint wants the peer to know, drained via
/// [`RtcEndpoint::poll_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointEvent {
    /// A locally gathered connectivity candidate, ready to be signaled to
    /// the remote side.
    IceCandidate(IceCandidateInit),

    /// The aggregate transport state changed.
    ConnectionStateChange(ConnectionState),

    /// Remote media arrived. Re-delivered for still-attached media after an
    /// ICE restart completes.
    Track {
        track: MediaStreamTrack,
        stream_id: MediaStreamId,
    },
}

/// The underlying connection primitive the peer drives.
///
/// This is the crate's only boundary to the actual WebRTC machinery: SDP
/// production and parsing, ICE gathering, DTLS/SCTP transports, and media all
/// live behind it (a browser engine, a native stack, or a test double). The
/// peer never interprets SDP; it only sequences these calls.
///
/// Implementations are driven single-threadedly: every method is invoked from
/// inside a peer operation, and spontaneous activity (gathered candidates,
/// transport state changes, inbound media) is reported through
/// [`poll_event`](Self::poll_event), which the peer drains after each
/// operation.
pub trait RtcEndpoint {
    /// Applies the ICE server configuration before any exchange starts.
    fn set_configuration(&mut self, ice_servers: &[IceServer]) -> Result<()>;

    /// Produces an offer describing the current local session.
    fn create_offer(&mut self, options: Option<OfferOptions>) -> Result<SessionDescription>;

    /// Produces an answer to the currently applied remote offer.
    fn create_answer(&mut self) -> Result<SessionDescription>;

    /// Applies a locally produced description. A
    /// [`rollback`](SessionDescription::rollback) description withdraws a
    /// local offer that has not been answered.
    fn set_local_description(&mut self, description: SessionDescription) -> Result<()>;

    fn set_remote_description(&mut self, description: SessionDescription) -> Result<()>;

    /// Adds a remote connectivity candidate. The peer guarantees a remote
    /// description has been applied first.
    fn add_ice_candidate(&mut self, candidate: IceCandidateInit) -> Result<()>;

    /// Creates the data channel advertised in the first exchange. With
    /// `config.negotiated` both sides call this with the same id and the
    /// channel is never announced in-band.
    fn create_data_channel(&mut self, label: &str, config: &DataChannelConfig) -> Result<()>;

    /// Attaches a local track to the session under the given stream id.
    fn add_track(&mut self, track: MediaStreamTrack, stream_id: &MediaStreamId) -> Result<()>;

    fn remove_track(&mut self, track_id: &MediaTrackId) -> Result<()>;

    /// Adds a media transceiver of the given kind (send/receive slot in the
    /// session, independent of any attached track).
    fn add_transceiver(&mut self, kind: MediaKind) -> Result<()>;

    /// Releases all transports. Must be idempotent; no events may surface
    /// after this returns.
    fn close(&mut self);

    /// Drains the next pending endpoint notification, if any.
    fn poll_event(&mut self) -> Option<EndpointEvent>;
}
