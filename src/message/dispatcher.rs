use std::sync::Arc;

use log::{debug, info, warn};

use crate::handlers::StreamHandler;
use crate::message::{DispatchState, wrap_command};
use crate::protocol::{
    CommandEnvelope, DataPayload, NetStreamCommand, RtmpMessage, SET_DATA_FRAME,
};
use crate::stream::{LogicalStream, StreamWriter};
use crate::{Error, Result};

/// Per-stream dispatcher for messages categorised as NetStream.
///
/// Transitions:
///   NotInAction  | publish -> HasPublisher
///                | play    -> HasPlayer (not implemented)
///                | _       -> self
///
///   HasPublisher | _ -> self
///
///   HasPlayer    | _ -> self
///
/// One dispatcher exists per logical stream and expects its messages in
/// arrival order from a single caller; distinct streams may be dispatched
/// concurrently without any coordination here.
pub struct NetStreamDispatcher {
    state: DispatchState,
    handler: Arc<dyn StreamHandler>,
    writer: Arc<dyn StreamWriter>,
}

impl NetStreamDispatcher {
    /// Create a dispatcher in the initial state
    pub fn new(handler: Arc<dyn StreamHandler>, writer: Arc<dyn StreamWriter>) -> Self {
        NetStreamDispatcher {
            state: DispatchState::NotInAction,
            handler,
            writer,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Dispatch one message for this stream.
    ///
    /// Callback and writer failures bubble up unchanged; the lifecycle
    /// state only advances once a publish admission has fully succeeded.
    pub async fn handle(
        &mut self,
        chunk_stream_id: u32,
        timestamp: u32,
        message: RtmpMessage,
        stream: &LogicalStream,
    ) -> Result<()> {
        match self.state {
            DispatchState::NotInAction => {
                self.handle_action(chunk_stream_id, timestamp, message, stream)
                    .await
            }
            DispatchState::HasPublisher => self.handle_publisher(timestamp, message, stream).await,
            DispatchState::HasPlayer => {
                Err(Error::not_implemented("playback streams are not dispatched"))
            }
        }
    }

    async fn handle_action(
        &mut self,
        chunk_stream_id: u32,
        timestamp: u32,
        message: RtmpMessage,
        stream: &LogicalStream,
    ) -> Result<()> {
        let (dialect, command) = match message {
            RtmpMessage::Command { dialect, command } => (dialect, command),
            other => {
                debug!(
                    "stream {} ({}): message unhandled: {}",
                    stream.id(),
                    self.state,
                    other.kind()
                );
                return Ok(());
            }
        };

        match command.command {
            NetStreamCommand::Publish(request) => {
                info!(
                    "stream {}: publisher incoming: {} ({})",
                    stream.id(),
                    request.stream_name,
                    request.publish_type
                );

                self.handler.on_command(timestamp, &request).await?;

                let reply = wrap_command(dialect, |envelope| {
                    *envelope = CommandEnvelope::on_status(
                        "status",
                        "NetStream.Publish.Start",
                        &format!("{} is now published.", request.stream_name),
                    );
                });
                self.writer.write(chunk_stream_id, timestamp, reply).await?;
                info!("stream {}: publisher accepted", stream.id());

                self.state = DispatchState::HasPublisher;

                Ok(())
            }
            _ => {
                warn!(
                    "stream {} ({}): unexpected command: {}",
                    stream.id(),
                    self.state,
                    command.name
                );

                Ok(())
            }
        }
    }

    async fn handle_publisher(
        &mut self,
        timestamp: u32,
        message: RtmpMessage,
        stream: &LogicalStream,
    ) -> Result<()> {
        let data = match message {
            RtmpMessage::Audio { payload } => {
                return self.handler.on_audio(timestamp, &payload).await;
            }
            RtmpMessage::Video { payload } => {
                return self.handler.on_video(timestamp, &payload).await;
            }
            RtmpMessage::Data { data, .. } => data,
            other => {
                debug!(
                    "stream {} ({}): message unhandled: {}",
                    stream.id(),
                    self.state,
                    other.kind()
                );
                return Ok(());
            }
        };

        match data.name.as_str() {
            SET_DATA_FRAME => match data.payload {
                DataPayload::SetDataFrame(frame) => self.handler.on_data(timestamp, &frame).await,
                _ => Err(Error::protocol("set-data-frame payload missing or invalid")),
            },
            _ => {
                warn!(
                    "stream {} ({}): ignoring unknown data message: {}",
                    stream.id(),
                    self.state,
                    data.name
                );

                Ok(())
            }
        }
    }
}
