use crate::protocol::{AmfDialect, CommandEnvelope, RtmpMessage};

/// Build an outbound command message in an explicitly chosen dialect.
///
/// Replies go out in the dialect of the request they answer, so the
/// dialect is a required argument here rather than something the
/// builder could default.
pub fn wrap_command<F>(dialect: AmfDialect, build: F) -> RtmpMessage
where
    F: FnOnce(&mut CommandEnvelope),
{
    let mut command = CommandEnvelope::default();
    build(&mut command);

    RtmpMessage::Command { dialect, command }
}
