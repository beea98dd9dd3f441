use super::candidate::IceCandidateInit;
use super::envelope::SignalEnvelope;
use super::session_description::SessionDescription;
use crate::media_stream::track::MediaKind;

/// The payloads one inbound envelope resolved to, in application order.
#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) struct RoutedSignal {
    pub(crate) renegotiation_requested: bool,
    pub(crate) transceiver_request: Option<MediaKind>,
    /// Candidates ready for immediate application. Empty when the envelope's
    /// candidate was buffered instead.
    pub(crate) candidates: Vec<IceCandidateInit>,
    pub(crate) description: Option<SessionDescription>,
    /// No payload at all; surfaces as a signaling error upstream.
    pub(crate) empty: bool,
}

/// Translates between inbound envelopes and the endpoint's ingestion order.
///
/// The underlying transport requires a remote description before it will
/// accept candidates, so candidates that arrive early are buffered here and
/// flushed the moment the description lands. The flag is sticky: once any
/// remote description has been applied, later exchanges (renegotiation, ICE
/// restart) take candidates directly.
#[derive(Default, Debug)]
pub(crate) struct SignalChannelAdapter {
    pending_candidates: Vec<IceCandidateInit>,
    remote_description_seen: bool,
}

impl SignalChannelAdapter {
    pub(crate) fn new() -> Self {
        SignalChannelAdapter::default()
    }

    /// Routes one inbound envelope. Payload fields are examined
    /// independently, so a single envelope may yield several payloads.
    pub(crate) fn route(&mut self, envelope: &SignalEnvelope) -> RoutedSignal {
        let mut routed = RoutedSignal {
            renegotiation_requested: envelope.requests_renegotiation(),
            transceiver_request: envelope
                .transceiver_request
                .as_ref()
                .map(|request| request.kind),
            empty: envelope.is_empty(),
            ..Default::default()
        };

        if let Some(candidate) = &envelope.candidate {
            if self.remote_description_seen {
                routed.candidates.push(candidate.clone());
            } else {
                log::trace!("buffering candidate until a remote description is applied");
                self.pending_candidates.push(candidate.clone());
            }
        }

        routed.description = envelope.description();
        routed
    }

    /// Marks that a remote description has been applied and drains the
    /// candidates that were waiting on it.
    pub(crate) fn on_remote_description(&mut self) -> Vec<IceCandidateInit> {
        self.remote_description_seen = true;
        std::mem::take(&mut self.pending_candidates)
    }

    pub(crate) fn remote_description_seen(&self) -> bool {
        self.remote_description_seen
    }
}
