use std::fmt;

use serde::{Deserialize, Serialize};

use super::sdp_type::SdpType;

/// A session description exchanged during an offer/answer round.
///
/// The SDP text is carried opaquely: producing and interpreting it is the
/// endpoint's job. This type only pins the `(type, sdp)` pair to the shape
/// both peers serialize onto the signaling channel.
///
/// ```
/// use rtc_peer::signal::{SdpType, SessionDescription};
///
/// let offer = SessionDescription::offer("v=0\r\no=- 0 0 IN IP4 0.0.0.0\r\n".to_string());
/// assert_eq!(offer.sdp_type, SdpType::Offer);
///
/// let json = serde_json::to_string(&offer).unwrap();
/// let parsed: SessionDescription = serde_json::from_str(&json).unwrap();
/// assert_eq!(parsed.sdp_type, SdpType::Offer);
/// ```
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescription {
    #[serde(rename = "type")]
    pub sdp_type: SdpType,

    /// The SDP content as a string (RFC 8866 format), opaque at this layer.
    #[serde(default)]
    pub sdp: String,
}

impl fmt::Display for SessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, sdp:\n{}",
            self.sdp_type,
            self.sdp.replace("\r\n", "\n")
        )
    }
}

impl SessionDescription {
    /// Wraps SDP text as an offer.
    pub fn offer(sdp: String) -> SessionDescription {
        SessionDescription {
            sdp_type: SdpType::Offer,
            sdp,
        }
    }

    /// Wraps SDP text as a final answer.
    pub fn answer(sdp: String) -> SessionDescription {
        SessionDescription {
            sdp_type: SdpType::Answer,
            sdp,
        }
    }

    /// A rollback description; carries no SDP.
    pub fn rollback() -> SessionDescription {
        SessionDescription {
            sdp_type: SdpType::Rollback,
            sdp: String::new(),
        }
    }
}
