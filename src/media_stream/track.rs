use std::fmt;

use serde::{Deserialize, Serialize};

pub type MediaTrackId = String;

/// Describes whether a track or transceiver carries audio or video.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum MediaKind {
    #[default]
    Unspecified,

    #[serde(rename = "audio")]
    Audio,

    #[serde(rename = "video")]
    Video,
}

const MEDIA_KIND_AUDIO_STR: &str = "audio";
const MEDIA_KIND_VIDEO_STR: &str = "video";

impl From<&str> for MediaKind {
    fn from(raw: &str) -> Self {
        match raw {
            MEDIA_KIND_AUDIO_STR => MediaKind::Audio,
            MEDIA_KIND_VIDEO_STR => MediaKind::Video,
            _ => MediaKind::Unspecified,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MediaKind::Audio => write!(f, "{MEDIA_KIND_AUDIO_STR}"),
            MediaKind::Video => write!(f, "{MEDIA_KIND_VIDEO_STR}"),
            _ => write!(f, "Unspecified"),
        }
    }
}

/// A single media track identity as seen by the negotiation layer.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MediaStreamTrack {
    id: MediaTrackId,
    kind: MediaKind,
    label: String,
}

impl MediaStreamTrack {
    pub fn new(id: MediaTrackId, kind: MediaKind) -> Self {
        Self {
            id,
            kind,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = label;
        self
    }

    pub fn id(&self) -> &MediaTrackId {
        &self.id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
