use std::fmt;

use serde::{Deserialize, Serialize};

/// Describes the type of a session description in the offer/answer model.
///
/// `Rollback` cancels an in-progress exchange and returns the endpoint to its
/// previous stable state; it is how the yielding side of a glare collision
/// withdraws its own offer before answering the remote one.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#dom-rtcsessiondescription-type)
/// * [RFC 3264](https://datatracker.ietf.org/doc/html/rfc3264)
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum SdpType {
    #[default]
    Unspecified,

    /// Indicates that a description MUST be treated as an SDP offer.
    #[serde(rename = "offer")]
    Offer,

    /// Indicates that a description MUST be treated as a final SDP answer.
    #[serde(rename = "answer")]
    Answer,

    /// Indicates that a description MUST be treated as canceling the current
    /// SDP negotiation and rolling back to the previous stable state.
    #[serde(rename = "rollback")]
    Rollback,
}

const SDP_TYPE_OFFER_STR: &str = "offer";
const SDP_TYPE_ANSWER_STR: &str = "answer";
const SDP_TYPE_ROLLBACK_STR: &str = "rollback";

impl From<&str> for SdpType {
    fn from(raw: &str) -> Self {
        match raw {
            SDP_TYPE_OFFER_STR => SdpType::Offer,
            SDP_TYPE_ANSWER_STR => SdpType::Answer,
            SDP_TYPE_ROLLBACK_STR => SdpType::Rollback,
            _ => SdpType::Unspecified,
        }
    }
}

impl fmt::Display for SdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SdpType::Offer => write!(f, "{SDP_TYPE_OFFER_STR}"),
            SdpType::Answer => write!(f, "{SDP_TYPE_ANSWER_STR}"),
            SdpType::Rollback => write!(f, "{SDP_TYPE_ROLLBACK_STR}"),
            _ => write!(f, "Unspecified"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_sdp_type() {
        let tests = vec![
            ("Unspecified", SdpType::Unspecified),
            ("offer", SdpType::Offer),
            ("answer", SdpType::Answer),
            ("rollback", SdpType::Rollback),
        ];

        for (sdp_type_string, expected_sdp_type) in tests {
            assert_eq!(SdpType::from(sdp_type_string), expected_sdp_type);
        }
    }

    #[test]
    fn test_sdp_type_string() {
        let tests = vec![
            (SdpType::Unspecified, "Unspecified"),
            (SdpType::Offer, "offer"),
            (SdpType::Answer, "answer"),
            (SdpType::Rollback, "rollback"),
        ];

        for (sdp_type, expected_string) in tests {
            assert_eq!(sdp_type.to_string(), expected_string);
        }
    }
}
