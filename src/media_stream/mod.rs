pub mod track;

use crate::media_stream::track::{MediaStreamTrack, MediaTrackId};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// <https://www.w3.org/TR/mediacapture-streams/#stream-api>
////////////////////////////////////////////////////////////////////////////////////////////////////
pub type MediaStreamId = String;

/// A handle for a group of media tracks that travel together.
///
/// Only identity and track membership are modeled here; capture, constraints
/// and codec concerns live behind the endpoint.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MediaStream {
    stream_id: MediaStreamId,
    tracks: Vec<MediaStreamTrack>,
}

impl MediaStream {
    pub fn new(stream_id: MediaStreamId, tracks: Vec<MediaStreamTrack>) -> Self {
        Self { stream_id, tracks }
    }

    pub fn stream_id(&self) -> &MediaStreamId {
        &self.stream_id
    }

    pub fn get_tracks(&self) -> impl Iterator<Item = &MediaStreamTrack> {
        self.tracks.iter()
    }

    pub fn get_track_by_id(&self, track_id: &MediaTrackId) -> Option<&MediaStreamTrack> {
        self.tracks.iter().find(|track| track.id() == track_id)
    }

    /// Appends a track, replacing any previous track with the same id.
    pub fn add_track(&mut self, track: MediaStreamTrack) {
        self.tracks.retain(|t| t.id() != track.id());
        self.tracks.push(track);
    }

    pub fn remove_track(&mut self, track_id: &MediaTrackId) {
        self.tracks.retain(|t| t.id() != track_id);
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
