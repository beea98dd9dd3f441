use crate::error::Error;
use crate::media_stream::track::MediaStreamTrack;
use crate::media_stream::MediaStream;
use crate::signal::SignalEnvelope;

/// Events surfaced by [`Peer::poll_event`](crate::peer::Peer::poll_event).
///
/// The queue preserves causal order: an envelope that must reach the remote
/// side is queued before the event that reports the local consequence of the
/// same reaction, and the negotiated event for a settled round is queued
/// before the connect event when both happen in one reaction.
#[allow(clippy::enum_variant_names)]
#[derive(Default, Debug, Clone, PartialEq)]
pub enum PeerEvent {
    /// A settled offer/answer round. Fires exactly once per surfaced cycle,
    /// on both sides, including the initial exchange.
    #[default]
    OnNegotiatedEvent,

    /// An envelope to deliver to the remote peer over the signaling channel.
    OnSignalEvent(SignalEnvelope),

    /// The transport reached its first established state. Fires once.
    OnConnectEvent,

    /// First sighting of a remote media stream.
    OnStreamEvent(MediaStream),

    /// A remote track was attached. Re-fires for known tracks after an ICE
    /// restart re-delivers them.
    OnTrackEvent(MediaStreamTrack),

    /// The peer was torn down. Always the last event.
    OnCloseEvent,

    /// A failure the peer either recovered from or is about to close over.
    OnErrorEvent(Error),
}

#[cfg(test)]
mod test {
    use super::*;

    // Every variant payload must stay cloneable, the error one included.
    #[test]
    fn test_error_events_are_cloneable() {
        let event = PeerEvent::OnErrorEvent(Error::ErrCreateOffer("no transceivers".to_owned()));
        assert_eq!(event.clone(), event);
    }
}
