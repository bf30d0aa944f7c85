use std::fmt;

use crate::protocol::constants::*;
use crate::protocol::{CommandEnvelope, DataEnvelope};

/// Serialization dialect for command/data message bodies.
///
/// The two dialects are mutually incompatible; a reply must be encoded
/// in the dialect of the request it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmfDialect {
    Amf0,
    Amf3,
}

impl fmt::Display for AmfDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmfDialect::Amf0 => write!(f, "AMF0"),
            AmfDialect::Amf3 => write!(f, "AMF3"),
        }
    }
}

/// One reassembled RTMP message, as delivered by the chunk-stream
/// demultiplexer.
///
/// Command and data bodies arrive with their envelopes already decoded;
/// audio and video payloads are passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RtmpMessage {
    Audio {
        payload: Vec<u8>,
    },
    Video {
        payload: Vec<u8>,
    },
    Command {
        dialect: AmfDialect,
        command: CommandEnvelope,
    },
    Data {
        dialect: AmfDialect,
        data: DataEnvelope,
    },
}

impl RtmpMessage {
    /// Wire message type ID, respecting the dialect tag
    pub fn type_id(&self) -> u8 {
        match self {
            RtmpMessage::Audio { .. } => MSG_TYPE_AUDIO,
            RtmpMessage::Video { .. } => MSG_TYPE_VIDEO,
            RtmpMessage::Command { dialect: AmfDialect::Amf0, .. } => MSG_TYPE_COMMAND_AMF0,
            RtmpMessage::Command { dialect: AmfDialect::Amf3, .. } => MSG_TYPE_COMMAND_AMF3,
            RtmpMessage::Data { dialect: AmfDialect::Amf0, .. } => MSG_TYPE_DATA_AMF0,
            RtmpMessage::Data { dialect: AmfDialect::Amf3, .. } => MSG_TYPE_DATA_AMF3,
        }
    }

    /// Check if this is a media message (audio/video)
    pub fn is_media(&self) -> bool {
        matches!(self, RtmpMessage::Audio { .. } | RtmpMessage::Video { .. })
    }

    /// Check if this is a command message
    pub fn is_command(&self) -> bool {
        matches!(self, RtmpMessage::Command { .. })
    }

    /// Check if this is a data message
    pub fn is_data(&self) -> bool {
        matches!(self, RtmpMessage::Data { .. })
    }

    /// Short category name for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            RtmpMessage::Audio { .. } => "audio",
            RtmpMessage::Video { .. } => "video",
            RtmpMessage::Command { .. } => "command",
            RtmpMessage::Data { .. } => "data",
        }
    }
}
