#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::Result;

use rtc_peer::configuration::{IceServer, PeerConfigBuilder, PeerRole};
use rtc_peer::endpoint::{ConnectionState, EndpointEvent, OfferOptions, RtcEndpoint};
use rtc_peer::error::Error;
use rtc_peer::media_stream::track::{MediaKind, MediaStreamTrack, MediaTrackId};
use rtc_peer::media_stream::{MediaStream, MediaStreamId};
use rtc_peer::peer::event::PeerEvent;
use rtc_peer::peer::Peer;
use rtc_peer::signal::{IceCandidateInit, SdpType, SessionDescription, SignalEnvelope, SignalKind};

/// Marker the mock embeds in restart offers so the answering side can tell a
/// restart round from an ordinary renegotiation, the way real SDP carries
/// fresh ufrag/pwd lines.
const ICE_RESTART_ATTR: &str = "a=ice-restart\r\n";

const CANDIDATES_PER_DESCRIPTION: u32 = 2;

/// A scriptable endpoint double that mimics the signaling-state rules of a
/// real session stack: offers and answers must alternate legally, candidates
/// need a remote description first, and connectivity comes up once a round
/// settles. Failure flags let tests force the next operation to error.
#[derive(Default)]
pub struct MockEndpoint {
    events: VecDeque<EndpointEvent>,
    closed: bool,

    have_local_offer: bool,
    have_remote_offer: bool,
    remote_description_applied: bool,
    established: bool,
    connecting_reported: bool,
    restart_pending: bool,

    offer_seq: u32,
    answer_seq: u32,
    candidate_seq: u32,

    remote_tracks: Vec<(MediaStreamTrack, MediaStreamId)>,

    pub ice_servers: Vec<IceServer>,
    pub data_channels: Vec<String>,
    pub local_tracks: Vec<(MediaTrackId, MediaStreamId)>,
    pub transceivers: Vec<MediaKind>,
    pub offers_created: u32,
    pub answers_created: u32,
    pub rollbacks: u32,
    pub restarts_requested: u32,
    pub candidates_applied: u32,

    pub fail_next_create_offer: bool,
    pub fail_next_create_answer: bool,
    pub fail_next_set_remote: bool,
    pub fail_next_add_candidate: bool,
}

impl MockEndpoint {
    pub fn new() -> Self {
        MockEndpoint::default()
    }

    /// Simulates remote media arriving over the established session.
    pub fn push_remote_track(&mut self, track: MediaStreamTrack, stream_id: MediaStreamId) {
        self.remote_tracks.push((track.clone(), stream_id.clone()));
        self.events.push_back(EndpointEvent::Track { track, stream_id });
    }

    /// Injects a raw transport state notification.
    pub fn push_connection_state(&mut self, state: ConnectionState) {
        self.events
            .push_back(EndpointEvent::ConnectionStateChange(state));
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn maybe_connecting(&mut self) {
        if !self.established && !self.connecting_reported {
            self.connecting_reported = true;
            self.events
                .push_back(EndpointEvent::ConnectionStateChange(
                    ConnectionState::Connecting,
                ));
        }
    }

    fn gather_candidates(&mut self) {
        for _ in 0..CANDIDATES_PER_DESCRIPTION {
            self.candidate_seq += 1;
            self.events.push_back(EndpointEvent::IceCandidate(IceCandidateInit {
                candidate: format!(
                    "candidate:{} 1 udp 2130706431 127.0.0.1 {} typ host",
                    self.candidate_seq,
                    40000 + self.candidate_seq
                ),
                sdp_mid: Some("0".to_owned()),
                sdp_mline_index: Some(0),
                username_fragment: None,
            }));
        }
    }

    /// A round just settled: first settlement brings connectivity up, a
    /// settled restart re-confirms it and re-delivers the remote media.
    fn on_stable(&mut self) {
        if !self.established {
            self.established = true;
            self.events
                .push_back(EndpointEvent::ConnectionStateChange(
                    ConnectionState::Connected,
                ));
        } else if self.restart_pending {
            self.events
                .push_back(EndpointEvent::ConnectionStateChange(
                    ConnectionState::Connected,
                ));
            let remote_tracks = self.remote_tracks.clone();
            for (track, stream_id) in remote_tracks {
                self.events.push_back(EndpointEvent::Track { track, stream_id });
            }
        }
        self.restart_pending = false;
    }
}

impl RtcEndpoint for MockEndpoint {
    fn set_configuration(&mut self, ice_servers: &[IceServer]) -> rtc_peer::Result<()> {
        self.ice_servers = ice_servers.to_vec();
        Ok(())
    }

    fn create_offer(&mut self, options: Option<OfferOptions>) -> rtc_peer::Result<SessionDescription> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        if self.fail_next_create_offer {
            self.fail_next_create_offer = false;
            return Err(Error::ErrCreateOffer("forced failure".to_owned()));
        }

        self.offers_created += 1;
        self.offer_seq += 1;
        let ice_restart = options.map(|o| o.ice_restart).unwrap_or(false);
        if ice_restart {
            self.restarts_requested += 1;
        }

        let mut sdp = format!(
            "v=0\r\no=- {} {} IN IP4 127.0.0.1\r\ns=-\r\n",
            self.offer_seq, self.offer_seq
        );
        if ice_restart {
            sdp.push_str(ICE_RESTART_ATTR);
        }
        Ok(SessionDescription::offer(sdp))
    }

    fn create_answer(&mut self) -> rtc_peer::Result<SessionDescription> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        if self.fail_next_create_answer {
            self.fail_next_create_answer = false;
            return Err(Error::ErrCreateAnswer("forced failure".to_owned()));
        }
        if !self.have_remote_offer {
            return Err(Error::ErrCreateAnswer("no remote offer".to_owned()));
        }

        self.answers_created += 1;
        self.answer_seq += 1;
        Ok(SessionDescription::answer(format!(
            "v=0\r\no=- {} {} IN IP4 127.0.0.1\r\ns=-\r\n",
            self.answer_seq, self.answer_seq
        )))
    }

    fn set_local_description(&mut self, description: SessionDescription) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        match description.sdp_type {
            SdpType::Offer => {
                if self.have_remote_offer {
                    return Err(Error::ErrSetLocalDescription(
                        "have-remote-offer".to_owned(),
                    ));
                }
                self.have_local_offer = true;
                self.restart_pending = description.sdp.contains(ICE_RESTART_ATTR);
                self.maybe_connecting();
                self.gather_candidates();
                Ok(())
            }
            SdpType::Answer => {
                if !self.have_remote_offer {
                    return Err(Error::ErrSetLocalDescription(
                        "no remote offer to answer".to_owned(),
                    ));
                }
                self.have_remote_offer = false;
                self.gather_candidates();
                self.on_stable();
                Ok(())
            }
            SdpType::Rollback => {
                if !self.have_local_offer {
                    return Err(Error::ErrSetLocalDescription(
                        "no pending local offer to roll back".to_owned(),
                    ));
                }
                self.have_local_offer = false;
                self.rollbacks += 1;
                Ok(())
            }
            SdpType::Unspecified => Err(Error::ErrSetLocalDescription(
                "unspecified description type".to_owned(),
            )),
        }
    }

    fn set_remote_description(&mut self, description: SessionDescription) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        if self.fail_next_set_remote {
            self.fail_next_set_remote = false;
            return Err(Error::ErrSetRemoteDescription("forced failure".to_owned()));
        }
        match description.sdp_type {
            SdpType::Offer => {
                if self.have_local_offer {
                    return Err(Error::ErrSetRemoteDescription(
                        "offer collision: have-local-offer".to_owned(),
                    ));
                }
                self.have_remote_offer = true;
                self.remote_description_applied = true;
                if description.sdp.contains(ICE_RESTART_ATTR) {
                    self.restart_pending = true;
                }
                self.maybe_connecting();
                Ok(())
            }
            SdpType::Answer => {
                if !self.have_local_offer {
                    return Err(Error::ErrSetRemoteDescription(
                        "answer without pending local offer".to_owned(),
                    ));
                }
                self.have_local_offer = false;
                self.remote_description_applied = true;
                self.on_stable();
                Ok(())
            }
            _ => Err(Error::ErrSetRemoteDescription(
                "unsupported description type".to_owned(),
            )),
        }
    }

    fn add_ice_candidate(&mut self, _candidate: IceCandidateInit) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        if self.fail_next_add_candidate {
            self.fail_next_add_candidate = false;
            return Err(Error::ErrAddIceCandidate("forced failure".to_owned()));
        }
        if !self.remote_description_applied {
            return Err(Error::ErrAddIceCandidate("no remote description".to_owned()));
        }
        self.candidates_applied += 1;
        Ok(())
    }

    fn create_data_channel(
        &mut self,
        label: &str,
        _config: &rtc_peer::configuration::DataChannelConfig,
    ) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        self.data_channels.push(label.to_owned());
        Ok(())
    }

    fn add_track(
        &mut self,
        track: MediaStreamTrack,
        stream_id: &MediaStreamId,
    ) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        self.local_tracks.push((track.id().clone(), stream_id.clone()));
        Ok(())
    }

    fn remove_track(&mut self, track_id: &MediaTrackId) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        let before = self.local_tracks.len();
        self.local_tracks.retain(|(id, _)| id != track_id);
        if self.local_tracks.len() == before {
            return Err(Error::ErrRemoveTrack(format!("unknown track {track_id}")));
        }
        Ok(())
    }

    fn add_transceiver(&mut self, kind: MediaKind) -> rtc_peer::Result<()> {
        if self.closed {
            return Err(Error::ErrConnectionClosed);
        }
        self.transceivers.push(kind);
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.events.clear();
    }

    fn poll_event(&mut self) -> Option<EndpointEvent> {
        self.events.pop_front()
    }
}

/// Everything one peer surfaced while being pumped, split by event type.
#[derive(Default, Debug)]
pub struct PeerEventLog {
    /// Envelopes this peer emitted, in order.
    pub signals: Vec<SignalEnvelope>,
    pub connects: usize,
    pub negotiated: usize,
    pub streams: Vec<MediaStream>,
    pub tracks: Vec<MediaStreamTrack>,
    pub errors: Vec<Error>,
    pub closes: usize,
}

impl PeerEventLog {
    fn count_kind(&self, kind: SignalKind) -> usize {
        self.signals.iter().filter(|s| s.kind == kind).count()
    }

    pub fn offers(&self) -> usize {
        self.count_kind(SignalKind::Offer)
    }

    pub fn answers(&self) -> usize {
        self.count_kind(SignalKind::Answer)
    }

    pub fn candidates(&self) -> usize {
        self.count_kind(SignalKind::Candidate)
    }

    pub fn renegotiate_flags(&self) -> usize {
        self.count_kind(SignalKind::Renegotiate)
    }

    pub fn transceiver_requests(&self) -> usize {
        self.count_kind(SignalKind::TransceiverRequest)
    }
}

/// Drains a peer's event queue into its log, returning the envelopes that
/// should be delivered to the other side.
pub fn drain_signals(
    peer: &mut Peer<MockEndpoint>,
    log: &mut PeerEventLog,
) -> Vec<SignalEnvelope> {
    let mut outbound = Vec::new();
    while let Some(event) = peer.poll_event() {
        match event {
            PeerEvent::OnSignalEvent(envelope) => {
                log.signals.push(envelope.clone());
                outbound.push(envelope);
            }
            PeerEvent::OnConnectEvent => log.connects += 1,
            PeerEvent::OnNegotiatedEvent => log.negotiated += 1,
            PeerEvent::OnStreamEvent(stream) => log.streams.push(stream),
            PeerEvent::OnTrackEvent(track) => log.tracks.push(track),
            PeerEvent::OnErrorEvent(err) => log.errors.push(err),
            PeerEvent::OnCloseEvent => log.closes += 1,
        }
    }
    outbound
}

/// Delivers one envelope the way a signaling channel would: serialized to
/// JSON and parsed back on the far side.
pub fn deliver(peer: &mut Peer<MockEndpoint>, envelope: &SignalEnvelope) -> Result<()> {
    let json = serde_json::to_string(envelope)?;
    peer.handle_signal(serde_json::from_str(&json)?);
    Ok(())
}

/// Shuttles envelopes between the two peers until neither has anything left
/// to say, accumulating every surfaced event into the logs.
pub fn pump_until_idle(
    a: &mut Peer<MockEndpoint>,
    b: &mut Peer<MockEndpoint>,
    log_a: &mut PeerEventLog,
    log_b: &mut PeerEventLog,
) -> Result<()> {
    loop {
        let to_b = drain_signals(a, log_a);
        let to_a = drain_signals(b, log_b);
        if to_b.is_empty() && to_a.is_empty() {
            return Ok(());
        }
        for envelope in &to_b {
            deliver(b, envelope)?;
        }
        for envelope in &to_a {
            deliver(a, envelope)?;
        }
    }
}

pub fn new_peer(role: PeerRole) -> Result<Peer<MockEndpoint>> {
    new_peer_with_streams(role, vec![])
}

pub fn new_peer_with_streams(
    role: PeerRole,
    streams: Vec<MediaStream>,
) -> Result<Peer<MockEndpoint>> {
    let config = PeerConfigBuilder::new()
        .with_role(role)
        .with_streams(streams)
        .with_ice_servers(vec![IceServer {
            urls: vec!["stun:stun.l.google.com:19302".to_owned()],
            ..Default::default()
        }])
        .build();
    Ok(Peer::new(config, MockEndpoint::new())?)
}

pub fn video_stream(stream_id: &str, track_id: &str) -> MediaStream {
    MediaStream::new(
        stream_id.to_owned(),
        vec![MediaStreamTrack::new(track_id.to_owned(), MediaKind::Video)],
    )
}

pub fn audio_stream(stream_id: &str, track_id: &str) -> MediaStream {
    MediaStream::new(
        stream_id.to_owned(),
        vec![MediaStreamTrack::new(track_id.to_owned(), MediaKind::Audio)],
    )
}
