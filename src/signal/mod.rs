pub(crate) mod adapter;
pub mod candidate;
pub mod envelope;
pub mod sdp_type;
pub mod session_description;

pub use candidate::IceCandidateInit;
pub use envelope::{SignalEnvelope, SignalKind, TransceiverRequest};
pub use sdp_type::SdpType;
pub use session_description::SessionDescription;
