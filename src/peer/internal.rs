use crate::configuration::PeerRole;
use crate::endpoint::{ConnectionState, EndpointEvent, OfferOptions, RtcEndpoint};
use crate::error::Error;
use crate::media_stream::track::{MediaKind, MediaStreamTrack};
use crate::media_stream::{MediaStream, MediaStreamId};
use crate::negotiation::cycle::{CycleOrigin, CycleOutcome};
use crate::negotiation::trigger::NegotiationTrigger;
use crate::negotiation::{DeferredRequest, NegotiationDecision};
use crate::peer::event::PeerEvent;
use crate::peer::state::PeerLifecycleState;
use crate::peer::Peer;
use crate::signal::candidate::IceCandidateInit;
use crate::signal::sdp_type::SdpType;
use crate::signal::session_description::SessionDescription;
use crate::signal::SignalEnvelope;

impl<E: RtcEndpoint> Peer<E> {
    pub(super) fn request_negotiation(
        &mut self,
        trigger: NegotiationTrigger,
        origin: CycleOrigin,
    ) {
        match self.coordinator.request(trigger, origin) {
            NegotiationDecision::Begin {
                sequence_ordinal,
                ice_restart,
            } => self.produce_offer(sequence_ordinal, ice_restart),
            NegotiationDecision::Deferred => {}
        }
    }

    fn replay_deferred(&mut self, request: DeferredRequest) {
        match self.coordinator.request_deferred(request) {
            NegotiationDecision::Begin {
                sequence_ordinal,
                ice_restart,
            } => self.produce_offer(sequence_ordinal, ice_restart),
            NegotiationDecision::Deferred => {}
        }
    }

    /// Produces the local offer for a freshly opened cycle, applies it and
    /// queues it for the signaling channel.
    fn produce_offer(&mut self, sequence_ordinal: u64, ice_restart: bool) {
        let options = if ice_restart {
            Some(OfferOptions { ice_restart: true })
        } else {
            None
        };

        let offer = match self.endpoint.create_offer(options) {
            Ok(offer) => offer,
            Err(err) => return self.fail_cycle(err),
        };
        if let Err(err) = self.endpoint.set_local_description(offer.clone()) {
            return self.fail_cycle(err);
        }

        log::debug!(
            "[{}] emitting offer for cycle #{sequence_ordinal} (ice_restart={ice_restart})",
            self.peer_id
        );
        self.queue_signal(SignalEnvelope::from_description(&offer));
    }

    /// Abandons the in-flight cycle, surfaces the failure and attempts the
    /// follow-up round that may have queued up behind it.
    fn fail_cycle(&mut self, err: Error) {
        log::warn!("[{}] negotiation failed: {err}", self.peer_id);
        let follow_up = self
            .coordinator
            .fail()
            .and_then(|completion| completion.follow_up);
        self.events.push_back(PeerEvent::OnErrorEvent(err));
        if let Some(request) = follow_up {
            self.replay_deferred(request);
        }
    }

    pub(super) fn handle_remote_description(&mut self, description: SessionDescription) {
        match description.sdp_type {
            SdpType::Offer => self.handle_remote_offer(description),
            SdpType::Answer => self.handle_remote_answer(description),
            _ => {}
        }
    }

    fn handle_remote_offer(&mut self, description: SessionDescription) {
        if self.coordinator.has_local_offer_outstanding() {
            // Offer collision. Deterministic tie-break: the initiating side's
            // offer survives, the responding side withdraws its own.
            if self.config.role() == PeerRole::Initiator {
                log::debug!(
                    "[{}] offer collision, discarding the remote offer",
                    self.peer_id
                );
                return;
            }

            log::debug!(
                "[{}] offer collision, rolling back the local offer",
                self.peer_id
            );
            if let Err(err) = self
                .endpoint
                .set_local_description(SessionDescription::rollback())
            {
                return self.fail_cycle(err);
            }
            self.coordinator.on_local_offer_rolled_back();
        }

        // An offer that did not collide with anything local opens a
        // remote-started cycle; a rolled-back collision keeps its cycle.
        if !self.coordinator.is_negotiating() {
            self.coordinator.begin_remote();
        }

        if let Err(err) = self.endpoint.set_remote_description(description) {
            return self.fail_cycle(err);
        }
        self.flush_buffered_candidates();

        let answer = match self.endpoint.create_answer() {
            Ok(answer) => answer,
            Err(err) => return self.fail_cycle(err),
        };
        if let Err(err) = self.endpoint.set_local_description(answer.clone()) {
            return self.fail_cycle(err);
        }

        self.queue_signal(SignalEnvelope::from_description(&answer));
        self.complete_cycle();
    }

    fn handle_remote_answer(&mut self, description: SessionDescription) {
        if !self.coordinator.has_local_offer_outstanding() {
            // Late or duplicate answer. Apply it if the endpoint will take
            // it, otherwise drop it; either way no round settles here.
            match self.endpoint.set_remote_description(description) {
                Ok(()) => self.flush_buffered_candidates(),
                Err(err) => {
                    log::warn!("[{}] ignoring unexpected answer: {err}", self.peer_id);
                }
            }
            return;
        }

        if let Err(err) = self.endpoint.set_remote_description(description) {
            return self.fail_cycle(err);
        }
        self.flush_buffered_candidates();
        self.complete_cycle();
    }

    /// Settles the in-flight cycle once its round's closing description has
    /// been exchanged. A cleanly completed cycle surfaces the negotiated
    /// event; a superseded one surfaces nothing and its follow-up round is
    /// started (or re-deferred) in its place.
    fn complete_cycle(&mut self) {
        let Some(completion) = self.coordinator.complete() else {
            return;
        };

        if completion.cycle.outcome() == CycleOutcome::Completed {
            self.events.push_back(PeerEvent::OnNegotiatedEvent);
        }
        if let Some(request) = completion.follow_up {
            self.replay_deferred(request);
        }
    }

    pub(super) fn apply_remote_candidate(&mut self, candidate: IceCandidateInit) {
        if let Err(err) = self.endpoint.add_ice_candidate(candidate) {
            // A bad candidate does not doom the pair; other candidates can
            // still connect.
            log::warn!("[{}] remote candidate rejected: {err}", self.peer_id);
            self.events.push_back(PeerEvent::OnErrorEvent(err));
        }
    }

    fn flush_buffered_candidates(&mut self) {
        for candidate in self.adapter.on_remote_description() {
            self.apply_remote_candidate(candidate);
        }
    }

    pub(super) fn handle_transceiver_request(&mut self, kind: MediaKind) {
        match self.config.role() {
            PeerRole::Initiator => {
                if let Err(err) = self.endpoint.add_transceiver(kind) {
                    log::warn!("[{}] requested transceiver failed: {err}", self.peer_id);
                    self.events.push_back(PeerEvent::OnErrorEvent(err));
                    return;
                }
                self.request_negotiation(NegotiationTrigger::StreamAdded, CycleOrigin::Remote);
            }
            PeerRole::Responder => {
                log::warn!(
                    "[{}] ignoring transceiver request on responding side",
                    self.peer_id
                );
            }
        }
    }

    /// Drains the endpoint's notifications into peer reactions. Stops early
    /// if a notification tears the peer down.
    pub(super) fn pump_endpoint(&mut self) {
        while let Some(event) = self.endpoint.poll_event() {
            self.handle_endpoint_event(event);
            if self.destroyed {
                break;
            }
        }
    }

    fn handle_endpoint_event(&mut self, event: EndpointEvent) {
        match event {
            EndpointEvent::IceCandidate(candidate) => {
                self.queue_signal(SignalEnvelope::candidate(candidate));
            }
            EndpointEvent::ConnectionStateChange(state) => {
                self.handle_connection_state(state);
            }
            EndpointEvent::Track { track, stream_id } => {
                self.handle_remote_track(track, stream_id);
            }
        }
    }

    fn handle_connection_state(&mut self, state: ConnectionState) {
        log::info!("[{}] connection state changed: {state}", self.peer_id);
        match state {
            ConnectionState::Connected => {
                if self.lifecycle == PeerLifecycleState::Connected {
                    // Reconnects after an ICE restart do not repeat the
                    // connect event; the lifecycle never regresses.
                    return;
                }
                self.set_lifecycle(PeerLifecycleState::Connected);
                self.events.push_back(PeerEvent::OnConnectEvent);
                if let Some(request) = self.coordinator.on_connection_ready() {
                    self.replay_deferred(request);
                }
            }
            ConnectionState::Failed => {
                self.destroy_internal(Some(Error::ErrIceConnectionFailure));
            }
            ConnectionState::Closed => {
                self.destroy_internal(Some(Error::ErrIceConnectionClosed));
            }
            ConnectionState::Disconnected => {
                log::warn!(
                    "[{}] connectivity lost, waiting for recovery",
                    self.peer_id
                );
            }
            _ => {}
        }
    }

    fn handle_remote_track(&mut self, track: MediaStreamTrack, stream_id: MediaStreamId) {
        log::debug!(
            "[{}] remote track {} on stream {stream_id}",
            self.peer_id,
            track.id()
        );
        self.events.push_back(PeerEvent::OnTrackEvent(track.clone()));

        match self.remote_streams.get_mut(&stream_id) {
            Some(stream) => {
                // Known stream: track re-delivery (after an ICE restart) or a
                // stream growing a track. No stream event either way.
                stream.add_track(track);
            }
            None => {
                let stream = MediaStream::new(stream_id.clone(), vec![track]);
                self.remote_streams.insert(stream_id, stream.clone());
                self.events.push_back(PeerEvent::OnStreamEvent(stream));
            }
        }
    }

    /// Queues an envelope for the caller to deliver. Envelopes produced by a
    /// reaction that also destroyed the peer are dropped silently.
    pub(super) fn queue_signal(&mut self, envelope: SignalEnvelope) {
        if self.destroyed {
            log::trace!("[{}] outbound signal discarded after destroy", self.peer_id);
            return;
        }
        self.advance_to_connecting();
        self.events.push_back(PeerEvent::OnSignalEvent(envelope));
    }

    /// First signaling activity in either direction moves a freshly created
    /// peer to connecting.
    pub(super) fn advance_to_connecting(&mut self) {
        if self.lifecycle == PeerLifecycleState::Created {
            self.set_lifecycle(PeerLifecycleState::Connecting);
        }
    }

    fn set_lifecycle(&mut self, state: PeerLifecycleState) {
        if self.lifecycle == state {
            return;
        }
        log::info!("[{}] lifecycle state changed: {state}", self.peer_id);
        self.lifecycle = state;
    }

    /// Tears the peer down exactly once. `reason` is the fatal error to
    /// surface, or `None` for a caller-requested teardown.
    ///
    /// Undelivered events are dropped so that nothing surfaces after the
    /// close event except the error that caused it.
    pub(super) fn destroy_internal(&mut self, reason: Option<Error>) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;

        match &reason {
            Some(err) => log::warn!("[{}] destroying peer: {err}", self.peer_id),
            None => log::debug!("[{}] destroying peer", self.peer_id),
        }

        self.coordinator.discard();
        self.endpoint.close();
        self.events.clear();
        self.set_lifecycle(PeerLifecycleState::Closed);

        if let Some(err) = reason {
            self.events.push_back(PeerEvent::OnErrorEvent(err));
        }
        self.events.push_back(PeerEvent::OnCloseEvent);
    }
}
