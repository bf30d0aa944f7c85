use crate::amf::Amf0Value;
use crate::{Error, Result};
use std::collections::HashMap;

/// Command message envelope
///
/// The generic carrier for NetStream commands: the command name, the
/// transaction ID echoed back in replies, and the already-classified
/// command payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandEnvelope {
    pub name: String,
    pub transaction_id: f64,
    pub command: NetStreamCommand,
}

/// Classified NetStream command payload
#[derive(Debug, Clone, PartialEq)]
pub enum NetStreamCommand {
    Publish(PublishRequest),
    OnStatus(StatusInfo),
    Unrecognized {
        object: Option<Amf0Value>,
        arguments: Vec<Amf0Value>,
    },
}

impl Default for NetStreamCommand {
    fn default() -> Self {
        NetStreamCommand::Unrecognized {
            object: None,
            arguments: Vec::new(),
        }
    }
}

/// Parameters of an inbound `publish` command
#[derive(Debug, Clone, PartialEq)]
pub struct PublishRequest {
    pub stream_name: String,
    pub publish_type: String,
}

/// Info object of an `onStatus` notification
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo {
    pub level: String,
    pub code: String,
    pub description: String,
}

impl StatusInfo {
    /// Convert to AMF object for sending
    pub fn to_amf(&self) -> Amf0Value {
        let mut info = HashMap::new();
        info.insert("level".to_string(), Amf0Value::String(self.level.clone()));
        info.insert("code".to_string(), Amf0Value::String(self.code.clone()));
        info.insert(
            "description".to_string(),
            Amf0Value::String(self.description.clone()),
        );

        Amf0Value::Object(info)
    }
}

impl CommandEnvelope {
    /// Create publish command
    pub fn publish(stream_name: &str, publish_type: &str) -> Self {
        CommandEnvelope {
            name: "publish".to_string(),
            transaction_id: 0.0,
            command: NetStreamCommand::Publish(PublishRequest {
                stream_name: stream_name.to_string(),
                publish_type: publish_type.to_string(),
            }),
        }
    }

    /// Create onStatus notification
    pub fn on_status(level: &str, code: &str, description: &str) -> Self {
        CommandEnvelope {
            name: "onStatus".to_string(),
            transaction_id: 0.0,
            command: NetStreamCommand::OnStatus(StatusInfo {
                level: level.to_string(),
                code: code.to_string(),
                description: description.to_string(),
            }),
        }
    }

    /// Classify a decoded command body.
    ///
    /// Called by the AMF layer once it has pulled the command name,
    /// transaction ID, command object and trailing arguments off the
    /// wire. Commands this core does not interpret stay around as
    /// `Unrecognized` with their values untouched.
    pub fn from_values(
        name: String,
        transaction_id: f64,
        object: Option<Amf0Value>,
        arguments: Vec<Amf0Value>,
    ) -> Result<Self> {
        let command = match name.as_str() {
            "publish" => {
                let stream_name = arguments
                    .first()
                    .and_then(|v| v.as_string())
                    .ok_or_else(|| Error::protocol("Publish without stream name"))?
                    .to_string();

                let publish_type = arguments
                    .get(1)
                    .and_then(|v| v.as_string())
                    .unwrap_or("live")
                    .to_string();

                NetStreamCommand::Publish(PublishRequest {
                    stream_name,
                    publish_type,
                })
            }
            _ => NetStreamCommand::Unrecognized { object, arguments },
        };

        Ok(CommandEnvelope {
            name,
            transaction_id,
            command,
        })
    }

    /// Flatten back into the AMF value sequence the wire codec expects
    pub fn to_values(&self) -> Vec<Amf0Value> {
        let mut values = vec![
            Amf0Value::String(self.name.clone()),
            Amf0Value::Number(self.transaction_id),
        ];

        match &self.command {
            NetStreamCommand::Publish(request) => {
                values.push(Amf0Value::Null);
                values.push(Amf0Value::String(request.stream_name.clone()));
                values.push(Amf0Value::String(request.publish_type.clone()));
            }
            NetStreamCommand::OnStatus(info) => {
                values.push(Amf0Value::Null);
                values.push(info.to_amf());
            }
            NetStreamCommand::Unrecognized { object, arguments } => {
                values.push(object.clone().unwrap_or(Amf0Value::Null));
                values.extend(arguments.iter().cloned());
            }
        }

        values
    }
}
