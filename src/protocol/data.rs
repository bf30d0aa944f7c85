use crate::amf::Amf0Value;
use crate::protocol::constants::{ON_METADATA, SET_DATA_FRAME};
use std::collections::HashMap;

/// Data message envelope
#[derive(Debug, Clone, PartialEq)]
pub struct DataEnvelope {
    pub name: String,
    pub payload: DataPayload,
}

/// Payload of a data message, resolved at decode time.
///
/// A `@setDataFrame` body either parses into a [`SetDataFrame`] or is
/// tagged invalid right away; the dispatcher never inspects raw values
/// for that name. Every other data name keeps its values untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPayload {
    SetDataFrame(SetDataFrame),
    InvalidSetDataFrame,
    Other(Vec<Amf0Value>),
}

impl DataEnvelope {
    /// Create a `@setDataFrame` envelope from an already-parsed frame
    pub fn set_data_frame(frame: SetDataFrame) -> Self {
        DataEnvelope {
            name: SET_DATA_FRAME.to_string(),
            payload: DataPayload::SetDataFrame(frame),
        }
    }

    /// Classify a decoded data message body.
    ///
    /// `@setDataFrame` bodies come in two layouts: `["onMetaData", {..}]`
    /// as relayed by most encoders, or a bare `[{..}]`. Both are
    /// accepted; anything else under that name is tagged invalid.
    pub fn from_values(name: String, values: Vec<Amf0Value>) -> Self {
        if name != SET_DATA_FRAME {
            return DataEnvelope {
                name,
                payload: DataPayload::Other(values),
            };
        }

        let object = match values.first() {
            Some(first) if first.as_string() == Some(ON_METADATA) => values.get(1),
            other => other,
        };

        let payload = match object.and_then(|v| v.as_object()) {
            Some(obj) => DataPayload::SetDataFrame(SetDataFrame::from_amf(obj)),
            None => DataPayload::InvalidSetDataFrame,
        };

        DataEnvelope { name, payload }
    }
}

/// Stream metadata sent once per publish via `@setDataFrame`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetDataFrame {
    /// Video codec
    pub video_codec: Option<String>,

    /// Audio codec
    pub audio_codec: Option<String>,

    /// Video width
    pub width: Option<f64>,

    /// Video height
    pub height: Option<f64>,

    /// Frame rate
    pub framerate: Option<f64>,

    /// Video bitrate
    pub video_bitrate: Option<f64>,

    /// Audio bitrate
    pub audio_bitrate: Option<f64>,

    /// Audio sample rate
    pub audio_sample_rate: Option<f64>,

    /// Audio channels
    pub audio_channels: Option<f64>,

    /// Duration for VOD
    pub duration: Option<f64>,

    /// Custom properties
    pub custom: HashMap<String, Amf0Value>,
}

impl SetDataFrame {
    /// Create from AMF metadata
    pub fn from_amf(data: &HashMap<String, Amf0Value>) -> Self {
        let mut frame = SetDataFrame {
            video_codec: data
                .get("videocodecid")
                .and_then(|v| v.as_string())
                .map(String::from),
            audio_codec: data
                .get("audiocodecid")
                .and_then(|v| v.as_string())
                .map(String::from),
            width: data.get("width").and_then(|v| v.as_number()),
            height: data.get("height").and_then(|v| v.as_number()),
            framerate: data.get("framerate").and_then(|v| v.as_number()),
            video_bitrate: data.get("videodatarate").and_then(|v| v.as_number()),
            audio_bitrate: data.get("audiodatarate").and_then(|v| v.as_number()),
            audio_sample_rate: data.get("audiosamplerate").and_then(|v| v.as_number()),
            audio_channels: data.get("audiochannels").and_then(|v| v.as_number()),
            duration: data.get("duration").and_then(|v| v.as_number()),
            custom: HashMap::new(),
        };

        // Store other properties as custom
        for (key, value) in data {
            if !is_standard_metadata_key(key) {
                frame.custom.insert(key.clone(), value.clone());
            }
        }

        frame
    }

    /// Convert to AMF for sending
    pub fn to_amf(&self) -> HashMap<String, Amf0Value> {
        let mut data = HashMap::new();

        if let Some(ref codec) = self.video_codec {
            data.insert("videocodecid".to_string(), Amf0Value::String(codec.clone()));
        }
        if let Some(ref codec) = self.audio_codec {
            data.insert("audiocodecid".to_string(), Amf0Value::String(codec.clone()));
        }
        if let Some(width) = self.width {
            data.insert("width".to_string(), Amf0Value::Number(width));
        }
        if let Some(height) = self.height {
            data.insert("height".to_string(), Amf0Value::Number(height));
        }
        if let Some(fps) = self.framerate {
            data.insert("framerate".to_string(), Amf0Value::Number(fps));
        }
        if let Some(bitrate) = self.video_bitrate {
            data.insert("videodatarate".to_string(), Amf0Value::Number(bitrate));
        }
        if let Some(bitrate) = self.audio_bitrate {
            data.insert("audiodatarate".to_string(), Amf0Value::Number(bitrate));
        }
        if let Some(rate) = self.audio_sample_rate {
            data.insert("audiosamplerate".to_string(), Amf0Value::Number(rate));
        }
        if let Some(channels) = self.audio_channels {
            data.insert("audiochannels".to_string(), Amf0Value::Number(channels));
        }
        if let Some(duration) = self.duration {
            data.insert("duration".to_string(), Amf0Value::Number(duration));
        }

        // Add custom properties
        for (key, value) in &self.custom {
            data.insert(key.clone(), value.clone());
        }

        data
    }

    /// Check if has video
    pub fn has_video(&self) -> bool {
        self.video_codec.is_some() || self.width.is_some()
    }

    /// Check if has audio
    pub fn has_audio(&self) -> bool {
        self.audio_codec.is_some() || self.audio_sample_rate.is_some()
    }

    /// Get video resolution
    pub fn resolution(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w as u32, h as u32)),
            _ => None,
        }
    }
}

fn is_standard_metadata_key(key: &str) -> bool {
    matches!(
        key,
        "videocodecid"
            | "audiocodecid"
            | "width"
            | "height"
            | "framerate"
            | "videodatarate"
            | "audiodatarate"
            | "audiosamplerate"
            | "audiochannels"
            | "duration"
    )
}
