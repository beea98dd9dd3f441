//! # RTC Peer - Sans-I/O Peer-to-Peer Negotiation
//!
//! A coordinator for WebRTC-style offer/answer negotiation between two peers,
//! built with a **sans-I/O architecture**. The crate sequences description
//! exchange, candidate trickling, renegotiation and teardown; the actual
//! session machinery (SDP, ICE, DTLS, media) stays behind the
//! [`RtcEndpoint`](endpoint::RtcEndpoint) trait you implement, and the
//! signaling transport stays entirely in your hands.
//!
//! ## What is Sans-I/O?
//!
//! Sans-I/O (without I/O) separates protocol logic from I/O. A [`Peer`] never
//! touches a socket or a signaling server: every mutating call reacts
//! synchronously and leaves its output in an internal queue that you drain
//! with [`poll_event`](peer::Peer::poll_event). This gives you:
//!
//! - **Runtime Independence**: Works with tokio, async-std, smol, or blocking I/O
//! - **Any Signaling Transport**: WebSockets, HTTP long-polling, QR codes
//! - **Testability**: Negotiation logic can be tested without real network I/O
//!
//! ## Quick Start
//!
//! Construct one initiating and one responding peer, then shuttle the
//! envelopes each surfaces into the other until both report connected:
//!
//! ```no_run
//! use rtc_peer::configuration::{PeerConfigBuilder, PeerRole};
//! use rtc_peer::endpoint::RtcEndpoint;
//! use rtc_peer::peer::event::PeerEvent;
//! use rtc_peer::peer::Peer;
//!
//! # fn example<E: RtcEndpoint>(endpoint_a: E, endpoint_b: E) -> Result<(), rtc_peer::Error> {
//! let mut initiator = Peer::new(
//!     PeerConfigBuilder::new()
//!         .with_role(PeerRole::Initiator)
//!         .build(),
//!     endpoint_a,
//! )?;
//! let mut responder = Peer::new(PeerConfigBuilder::new().build(), endpoint_b)?;
//!
//! loop {
//!     let mut exchanged = false;
//!
//!     while let Some(event) = initiator.poll_event() {
//!         match event {
//!             PeerEvent::OnSignalEvent(envelope) => {
//!                 // In a real application this envelope travels through your
//!                 // signaling channel, e.g. as JSON over a WebSocket.
//!                 exchanged = true;
//!                 responder.handle_signal(envelope);
//!             }
//!             PeerEvent::OnConnectEvent => println!("initiator connected"),
//!             PeerEvent::OnNegotiatedEvent => println!("initiator negotiated"),
//!             _ => {}
//!         }
//!     }
//!
//!     while let Some(event) = responder.poll_event() {
//!         match event {
//!             PeerEvent::OnSignalEvent(envelope) => {
//!                 exchanged = true;
//!                 initiator.handle_signal(envelope);
//!             }
//!             PeerEvent::OnConnectEvent => println!("responder connected"),
//!             PeerEvent::OnNegotiatedEvent => println!("responder negotiated"),
//!             _ => {}
//!         }
//!     }
//!
//!     if !exchanged {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Envelopes serialize to the compact JSON shape commonly used by signaling
//! servers (`{"type":"offer","sdp":"..."}`, `{"candidate":{...}}`), so the
//! wire format interoperates with non-Rust peers:
//!
//! ```
//! use rtc_peer::signal::SignalEnvelope;
//!
//! # fn example(envelope: SignalEnvelope) -> Result<(), rtc_peer::Error> {
//! let json = serde_json::to_string(&envelope)?;
//! let parsed: SignalEnvelope = serde_json::from_str(&json)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Negotiation Model
//!
//! All description exchange is organized into cycles: one offer, one answer,
//! at most one cycle in flight per peer. Requests that arrive while a cycle
//! is pending (more media added, a manual [`negotiate`](peer::Peer::negotiate),
//! an [ICE restart](peer::Peer::restart_ice)) coalesce into a single deferred
//! follow-up cycle, so negotiation storms collapse into exactly one extra
//! round. When both sides start a cycle at once, the responding side rolls
//! its offer back and answers the initiator's; the collision resolves without
//! either side observing a failure.
//!
//! ## Module Organization
//!
//! - **[`peer`]** - [`Peer`], its lifecycle states and application events
//! - **[`negotiation`]** - cycle bookkeeping and request coalescing
//! - **[`signal`]** - signaling envelopes, descriptions and candidates
//! - **[`endpoint`]** - the [`RtcEndpoint`](endpoint::RtcEndpoint) boundary trait
//! - **[`configuration`]** - peer construction options
//! - **[`media_stream`]** - stream/track identities carried through negotiation
//!
//! ## Specification Compliance
//!
//! The negotiation flow follows these specifications:
//!
//! - [W3C WebRTC 1.0] - Main WebRTC API specification
//! - [RFC 8829] - JSEP: JavaScript Session Establishment Protocol
//!
//! [W3C WebRTC 1.0]: https://www.w3.org/TR/webrtc/
//! [RFC 8829]: https://datatracker.ietf.org/doc/html/rfc8829

#![doc(
    html_logo_url = "https://raw.githubusercontent.com/webrtc-rs/webrtc-rs.github.io/master/res/rtc.png"
)]
#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod configuration;
pub mod endpoint;
pub mod error;
pub mod media_stream;
pub mod negotiation;
pub mod peer;
pub mod signal;

pub use error::{Error, Result};
pub use peer::Peer;
