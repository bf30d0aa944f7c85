use log::{debug, info};

use crate::Result;
use crate::protocol::{PublishRequest, SetDataFrame};

/// Application-side sink for everything a publishing session produces.
///
/// Implemented by the embedding application and invoked by the
/// dispatcher as messages arrive. Returning an error from any callback
/// aborts the dispatch step that triggered it; the error reaches the
/// connection layer unchanged.
#[async_trait::async_trait]
pub trait StreamHandler: Send + Sync {
    /// Called with an inbound publish request before it is acknowledged.
    /// Failing here rejects the publisher.
    async fn on_command(&self, timestamp: u32, request: &PublishRequest) -> Result<()>;

    /// Called for each audio payload of an admitted publisher
    async fn on_audio(&self, timestamp: u32, payload: &[u8]) -> Result<()>;

    /// Called for each video payload of an admitted publisher
    async fn on_video(&self, timestamp: u32, payload: &[u8]) -> Result<()>;

    /// Called with the stream metadata from `@setDataFrame`
    async fn on_data(&self, timestamp: u32, frame: &SetDataFrame) -> Result<()>;
}

/// Handler that accepts every event and logs it
pub struct LoggingHandler;

#[async_trait::async_trait]
impl StreamHandler for LoggingHandler {
    async fn on_command(&self, timestamp: u32, request: &PublishRequest) -> Result<()> {
        info!(
            "publish: name={}, type={}, timestamp={}",
            request.stream_name, request.publish_type, timestamp
        );
        Ok(())
    }

    async fn on_audio(&self, timestamp: u32, payload: &[u8]) -> Result<()> {
        debug!("audio: timestamp={}, size={}", timestamp, payload.len());
        Ok(())
    }

    async fn on_video(&self, timestamp: u32, payload: &[u8]) -> Result<()> {
        debug!("video: timestamp={}, size={}", timestamp, payload.len());
        Ok(())
    }

    async fn on_data(&self, timestamp: u32, frame: &SetDataFrame) -> Result<()> {
        info!(
            "metadata: timestamp={}, video={}, audio={}",
            timestamp,
            frame.has_video(),
            frame.has_audio()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_handler_accepts_everything() {
        let handler = LoggingHandler;
        let request = PublishRequest {
            stream_name: "parade".to_string(),
            publish_type: "live".to_string(),
        };

        assert!(handler.on_command(0, &request).await.is_ok());
        assert!(handler.on_audio(0, &[0xAF]).await.is_ok());
        assert!(handler.on_video(0, &[0x17]).await.is_ok());
        assert!(handler.on_data(0, &SetDataFrame::default()).await.is_ok());
    }
}
