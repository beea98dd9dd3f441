pub mod event;
mod internal;
pub mod state;

use std::collections::{HashMap, VecDeque};

use crate::configuration::{PeerConfig, PeerRole};
use crate::endpoint::RtcEndpoint;
use crate::error::{Error, Result};
use crate::media_stream::track::MediaKind;
use crate::media_stream::{MediaStream, MediaStreamId};
use crate::negotiation::cycle::{CycleOrigin, NegotiationCycle};
use crate::negotiation::trigger::NegotiationTrigger;
use crate::negotiation::NegotiationCoordinator;
use crate::peer::event::PeerEvent;
use crate::peer::state::PeerLifecycleState;
use crate::signal::adapter::SignalChannelAdapter;
use crate::signal::SignalEnvelope;

/// Peer drives one end of a peer-to-peer session: it owns an [`RtcEndpoint`],
/// serializes offer/answer rounds over it, and condenses the endpoint's raw
/// notifications into a small application-facing event stream.
///
/// A peer is sans-IO. It never touches a socket or a signaling server;
/// instead every mutating call reacts synchronously and leaves its output in
/// an internal queue, drained with [`poll_event`](Peer::poll_event). Envelopes
/// surfaced as [`PeerEvent::OnSignalEvent`] must be carried to the remote
/// peer by the caller and fed into its [`handle_signal`](Peer::handle_signal).
///
/// Mutating calls other than [`Peer::new`] do not return errors: failures
/// surface as [`PeerEvent::OnErrorEvent`] so that wire-triggered and
/// caller-triggered faults travel the same path. After
/// [`destroy`](Peer::destroy) every operation is a silent no-op.
pub struct Peer<E: RtcEndpoint> {
    pub(crate) peer_id: String,
    pub(crate) config: PeerConfig,
    pub(crate) endpoint: E,

    pub(crate) lifecycle: PeerLifecycleState,
    pub(crate) coordinator: NegotiationCoordinator,
    pub(crate) adapter: SignalChannelAdapter,
    pub(crate) remote_streams: HashMap<MediaStreamId, MediaStream>,

    pub(crate) events: VecDeque<PeerEvent>,
    pub(crate) destroyed: bool,
}

impl<E: RtcEndpoint> Peer<E> {
    /// Creates a peer around the given endpoint.
    ///
    /// Configuration is applied, the session's data channel is created (on
    /// the initiating side, or on both sides for a pre-negotiated channel)
    /// and any configured local streams are attached. The initiating side
    /// additionally starts the first offer/answer round, so its first events
    /// are ready to poll as soon as this returns.
    pub fn new(config: PeerConfig, mut endpoint: E) -> Result<Self> {
        let peer_id = format!("{:08x}", rand::random::<u32>())[..7].to_string();

        endpoint.set_configuration(&config.ice_servers)?;

        let channel_config = config.channel_config.clone().unwrap_or_default();
        if config.role() == PeerRole::Initiator || channel_config.negotiated {
            let channel_name = if config.channel_name.is_empty() {
                format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>())
            } else {
                config.channel_name.clone()
            };
            endpoint.create_data_channel(&channel_name, &channel_config)?;
        }

        for stream in &config.streams {
            for track in stream.get_tracks() {
                endpoint.add_track(track.clone(), stream.stream_id())?;
            }
        }

        let mut peer = Peer {
            peer_id,
            config,
            endpoint,
            lifecycle: PeerLifecycleState::Created,
            coordinator: NegotiationCoordinator::new(),
            adapter: SignalChannelAdapter::new(),
            remote_streams: HashMap::new(),
            events: VecDeque::new(),
            destroyed: false,
        };
        log::debug!(
            "[{}] new peer ({})",
            peer.peer_id,
            peer.config.role()
        );

        if peer.config.role() == PeerRole::Initiator {
            peer.request_negotiation(NegotiationTrigger::InitialConnect, CycleOrigin::Local);
        }
        peer.pump_endpoint();

        Ok(peer)
    }

    /// Feeds one envelope received from the remote peer.
    ///
    /// A well-formed envelope may carry a description, a candidate, a
    /// renegotiation request or a transceiver request; each payload is
    /// reacted to in turn. An envelope with no recognizable payload is a
    /// signaling fault and tears the peer down.
    pub fn handle_signal(&mut self, envelope: SignalEnvelope) {
        if self.destroyed {
            log::trace!("[{}] signal discarded after destroy", self.peer_id);
            return;
        }
        self.advance_to_connecting();

        let routed = self.adapter.route(&envelope);
        if routed.empty {
            log::warn!("[{}] signal envelope carries no payload", self.peer_id);
            self.destroy_internal(Some(Error::ErrSignaling));
            return;
        }

        if routed.renegotiation_requested {
            self.request_negotiation(NegotiationTrigger::RemoteRequested, CycleOrigin::Remote);
        }
        if let Some(kind) = routed.transceiver_request {
            self.handle_transceiver_request(kind);
        }
        if let Some(description) = routed.description {
            self.handle_remote_description(description);
        }
        for candidate in routed.candidates {
            self.apply_remote_candidate(candidate);
        }

        self.pump_endpoint();
    }

    /// Requests an offer/answer round. Back-to-back calls while a round is in
    /// flight coalesce into a single follow-up round.
    pub fn negotiate(&mut self) {
        if self.destroyed {
            return;
        }
        self.request_negotiation(NegotiationTrigger::ManualRequest, CycleOrigin::Local);
        self.pump_endpoint();
    }

    /// Requests a round whose offer gathers fresh connectivity, keeping the
    /// established session alive while new candidate pairs are probed.
    pub fn restart_ice(&mut self) {
        if self.destroyed {
            return;
        }
        self.request_negotiation(NegotiationTrigger::IceRestart, CycleOrigin::Local);
        self.pump_endpoint();
    }

    /// Attaches a local stream's tracks to the session and requests the round
    /// that announces them.
    pub fn add_stream(&mut self, stream: MediaStream) {
        if self.destroyed {
            return;
        }
        for track in stream.get_tracks() {
            if let Err(err) = self.endpoint.add_track(track.clone(), stream.stream_id()) {
                log::warn!("[{}] add_track failed: {err}", self.peer_id);
                self.events.push_back(PeerEvent::OnErrorEvent(err));
                self.pump_endpoint();
                return;
            }
        }
        self.request_negotiation(NegotiationTrigger::StreamAdded, CycleOrigin::Local);
        self.pump_endpoint();
    }

    /// Detaches a previously added local stream's tracks and requests the
    /// round that withdraws them.
    pub fn remove_stream(&mut self, stream: &MediaStream) {
        if self.destroyed {
            return;
        }
        for track in stream.get_tracks() {
            if let Err(err) = self.endpoint.remove_track(track.id()) {
                log::warn!("[{}] remove_track failed: {err}", self.peer_id);
                self.events.push_back(PeerEvent::OnErrorEvent(err));
                self.pump_endpoint();
                return;
            }
        }
        self.request_negotiation(NegotiationTrigger::StreamRemoved, CycleOrigin::Local);
        self.pump_endpoint();
    }

    /// Adds a send/receive slot for the given media kind.
    ///
    /// Only the initiating side may grow the session directly; the responding
    /// side instead emits a transceiver-request envelope asking the initiator
    /// to do it, which keeps the resulting round collision-free.
    pub fn add_transceiver(&mut self, kind: MediaKind) {
        if self.destroyed {
            return;
        }
        match self.config.role() {
            PeerRole::Initiator => {
                if let Err(err) = self.endpoint.add_transceiver(kind) {
                    log::warn!("[{}] add_transceiver failed: {err}", self.peer_id);
                    self.events.push_back(PeerEvent::OnErrorEvent(err));
                } else {
                    self.request_negotiation(
                        NegotiationTrigger::StreamAdded,
                        CycleOrigin::Local,
                    );
                }
            }
            PeerRole::Responder => {
                self.queue_signal(SignalEnvelope::transceiver_request(kind));
            }
        }
        self.pump_endpoint();
    }

    /// Tears the peer down: pending rounds are dropped, the endpoint is
    /// closed and a final close event is queued. Idempotent; all later calls
    /// on this peer are silent no-ops.
    pub fn destroy(&mut self) {
        self.destroy_internal(None);
    }

    /// Drains the next application event, first collecting anything the
    /// endpoint produced since the last call.
    pub fn poll_event(&mut self) -> Option<PeerEvent> {
        if !self.destroyed {
            self.pump_endpoint();
        }
        self.events.pop_front()
    }

    pub fn peer_id(&self) -> &str {
        &self.peer_id
    }

    pub fn role(&self) -> PeerRole {
        self.config.role()
    }

    pub fn lifecycle_state(&self) -> PeerLifecycleState {
        self.lifecycle
    }

    pub fn connected(&self) -> bool {
        self.lifecycle == PeerLifecycleState::Connected
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether an offer/answer round is currently in flight.
    pub fn is_negotiating(&self) -> bool {
        self.coordinator.is_negotiating()
    }

    /// The round currently in flight, if any.
    pub fn current_cycle(&self) -> Option<&NegotiationCycle> {
        self.coordinator.in_flight()
    }

    /// Remote streams seen so far, in no particular order.
    pub fn remote_streams(&self) -> impl Iterator<Item = &MediaStream> {
        self.remote_streams.values()
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Mutable access to the owned endpoint. Callers that reach past the peer
    /// are responsible for not breaking the descriptions it negotiated.
    pub fn endpoint_mut(&mut self) -> &mut E {
        &mut self.endpoint
    }
}
