use std::fmt;

use serde::{Deserialize, Serialize};

use super::candidate::IceCandidateInit;
use super::sdp_type::SdpType;
use super::session_description::SessionDescription;
use crate::media_stream::track::MediaKind;

/// Discriminates the payload of a [`SignalEnvelope`].
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum SignalKind {
    #[default]
    Unspecified,

    #[serde(rename = "offer")]
    Offer,

    #[serde(rename = "answer")]
    Answer,

    #[serde(rename = "candidate")]
    Candidate,

    #[serde(rename = "renegotiate")]
    Renegotiate,

    #[serde(rename = "transceiverRequest")]
    TransceiverRequest,
}

const SIGNAL_KIND_OFFER_STR: &str = "offer";
const SIGNAL_KIND_ANSWER_STR: &str = "answer";
const SIGNAL_KIND_CANDIDATE_STR: &str = "candidate";
const SIGNAL_KIND_RENEGOTIATE_STR: &str = "renegotiate";
const SIGNAL_KIND_TRANSCEIVER_REQUEST_STR: &str = "transceiverRequest";

impl From<&str> for SignalKind {
    fn from(raw: &str) -> Self {
        match raw {
            SIGNAL_KIND_OFFER_STR => SignalKind::Offer,
            SIGNAL_KIND_ANSWER_STR => SignalKind::Answer,
            SIGNAL_KIND_CANDIDATE_STR => SignalKind::Candidate,
            SIGNAL_KIND_RENEGOTIATE_STR => SignalKind::Renegotiate,
            SIGNAL_KIND_TRANSCEIVER_REQUEST_STR => SignalKind::TransceiverRequest,
            _ => SignalKind::Unspecified,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SignalKind::Offer => write!(f, "{SIGNAL_KIND_OFFER_STR}"),
            SignalKind::Answer => write!(f, "{SIGNAL_KIND_ANSWER_STR}"),
            SignalKind::Candidate => write!(f, "{SIGNAL_KIND_CANDIDATE_STR}"),
            SignalKind::Renegotiate => write!(f, "{SIGNAL_KIND_RENEGOTIATE_STR}"),
            SignalKind::TransceiverRequest => {
                write!(f, "{SIGNAL_KIND_TRANSCEIVER_REQUEST_STR}")
            }
            _ => write!(f, "Unspecified"),
        }
    }
}

/// A responder's request that the remote side add a transceiver on its
/// behalf, carried inside a [`SignalEnvelope`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransceiverRequest {
    pub kind: MediaKind,
}

/// The unit exchanged between two peers' signaling adapters.
///
/// Envelopes are opaque to the transport the caller provides: they are handed
/// out through the signal event and must be fed verbatim into the remote
/// peer's `signal()`. The JSON shape matches what the adapters on both ends
/// produce and consume:
///
/// ```json
/// { "type": "offer", "sdp": "v=0..." }
/// { "type": "candidate", "candidate": { "candidate": "candidate:...", ... } }
/// { "type": "renegotiate", "renegotiate": true }
/// { "type": "transceiverRequest", "transceiverRequest": { "kind": "video" } }
/// ```
///
/// Payload fields are checked independently on receipt, so an envelope whose
/// `type` is missing or unknown is still applied by whatever payload it
/// carries.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEnvelope {
    #[serde(rename = "type", default)]
    pub kind: SignalKind,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sdp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub candidate: Option<IceCandidateInit>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub renegotiate: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transceiver_request: Option<TransceiverRequest>,
}

impl SignalEnvelope {
    /// Wraps a locally produced offer or answer for emission.
    pub fn from_description(description: &SessionDescription) -> Self {
        let kind = match description.sdp_type {
            SdpType::Offer => SignalKind::Offer,
            SdpType::Answer => SignalKind::Answer,
            _ => SignalKind::Unspecified,
        };
        SignalEnvelope {
            kind,
            sdp: Some(description.sdp.clone()),
            ..Default::default()
        }
    }

    pub fn candidate(candidate: IceCandidateInit) -> Self {
        SignalEnvelope {
            kind: SignalKind::Candidate,
            candidate: Some(candidate),
            ..Default::default()
        }
    }

    pub fn renegotiate() -> Self {
        SignalEnvelope {
            kind: SignalKind::Renegotiate,
            renegotiate: Some(true),
            ..Default::default()
        }
    }

    pub fn transceiver_request(kind: MediaKind) -> Self {
        SignalEnvelope {
            kind: SignalKind::TransceiverRequest,
            transceiver_request: Some(TransceiverRequest { kind }),
            ..Default::default()
        }
    }

    /// The session description carried by this envelope, if any.
    ///
    /// The description type follows the envelope's `type` field, so an
    /// envelope must declare itself `offer` or `answer` for its SDP to be
    /// usable.
    pub fn description(&self) -> Option<SessionDescription> {
        let sdp = self.sdp.as_ref()?;
        let sdp_type = match self.kind {
            SignalKind::Offer => SdpType::Offer,
            SignalKind::Answer => SdpType::Answer,
            _ => return None,
        };
        Some(SessionDescription {
            sdp_type,
            sdp: sdp.clone(),
        })
    }

    pub fn requests_renegotiation(&self) -> bool {
        self.renegotiate.unwrap_or(false)
    }

    /// True when no payload field is present at all.
    pub fn is_empty(&self) -> bool {
        self.sdp.is_none()
            && self.candidate.is_none()
            && self.renegotiate.is_none()
            && self.transceiver_request.is_none()
    }
}
