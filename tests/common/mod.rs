// Common test utilities and helper functions
//
// Message builders and recording sinks shared by the integration tests

use rtmp_ingest::{
    Amf0Value, AmfDialect, CommandEnvelope, DataEnvelope, PublishRequest, Result, RtmpMessage,
    SET_DATA_FRAME, SetDataFrame, StreamHandler, StreamWriter,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Create a publish command message in the given dialect
pub fn publish_message(dialect: AmfDialect, stream_name: &str) -> RtmpMessage {
    RtmpMessage::Command {
        dialect,
        command: CommandEnvelope::publish(stream_name, "live"),
    }
}

/// Create an audio message
pub fn audio_message(payload: Vec<u8>) -> RtmpMessage {
    RtmpMessage::Audio { payload }
}

/// Create a video message
pub fn video_message(payload: Vec<u8>) -> RtmpMessage {
    RtmpMessage::Video { payload }
}

/// Create a `@setDataFrame` message the way encoders send it:
/// `["onMetaData", {..}]`
pub fn metadata_message(width: f64, height: f64, video_codec: &str) -> RtmpMessage {
    let mut obj = HashMap::new();
    obj.insert("width".to_string(), Amf0Value::Number(width));
    obj.insert("height".to_string(), Amf0Value::Number(height));
    obj.insert(
        "videocodecid".to_string(),
        Amf0Value::String(video_codec.to_string()),
    );

    RtmpMessage::Data {
        dialect: AmfDialect::Amf0,
        data: DataEnvelope::from_values(
            SET_DATA_FRAME.to_string(),
            vec![
                Amf0Value::String("onMetaData".to_string()),
                Amf0Value::Object(obj),
            ],
        ),
    }
}

/// Create a data message this core does not interpret
pub fn unknown_data_message(name: &str) -> RtmpMessage {
    RtmpMessage::Data {
        dialect: AmfDialect::Amf0,
        data: DataEnvelope::from_values(name.to_string(), Vec::new()),
    }
}

/// Everything a session produced, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Publish(u32, String),
    Audio(u32, Vec<u8>),
    Video(u32, Vec<u8>),
    Metadata(u32, SetDataFrame),
}

/// Handler collecting callback invocations in order
#[derive(Default)]
pub struct CollectingHandler {
    events: Mutex<Vec<SessionEvent>>,
}

impl CollectingHandler {
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl StreamHandler for CollectingHandler {
    async fn on_command(&self, timestamp: u32, request: &PublishRequest) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(SessionEvent::Publish(timestamp, request.stream_name.clone()));
        Ok(())
    }

    async fn on_audio(&self, timestamp: u32, payload: &[u8]) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(SessionEvent::Audio(timestamp, payload.to_vec()));
        Ok(())
    }

    async fn on_video(&self, timestamp: u32, payload: &[u8]) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(SessionEvent::Video(timestamp, payload.to_vec()));
        Ok(())
    }

    async fn on_data(&self, timestamp: u32, frame: &SetDataFrame) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(SessionEvent::Metadata(timestamp, frame.clone()));
        Ok(())
    }
}

/// Writer collecting outbound messages instead of chunking them
#[derive(Default)]
pub struct CollectingWriter {
    written: Mutex<Vec<(u32, u32, RtmpMessage)>>,
}

impl CollectingWriter {
    pub fn written(&self) -> Vec<(u32, u32, RtmpMessage)> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl StreamWriter for CollectingWriter {
    async fn write(&self, chunk_stream_id: u32, timestamp: u32, message: RtmpMessage) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((chunk_stream_id, timestamp, message));
        Ok(())
    }
}
