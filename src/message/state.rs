use std::fmt;

/// Lifecycle state of one logical stream's dispatch path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    /// No publisher or player admitted yet
    #[default]
    NotInAction,

    /// A publisher was admitted; media and metadata flow
    HasPublisher,

    /// Reserved for the playback path; no implemented transition
    /// leads here
    HasPlayer,
}

impl DispatchState {
    /// Check if a publisher was admitted
    pub fn is_publishing(&self) -> bool {
        *self == DispatchState::HasPublisher
    }

    /// Check if media messages are meaningful in this state
    pub fn accepts_media(&self) -> bool {
        matches!(self, DispatchState::HasPublisher)
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchState::NotInAction => write!(f, "NotInAction"),
            DispatchState::HasPublisher => write!(f, "HasPublisher"),
            DispatchState::HasPlayer => write!(f, "HasPlayer"),
        }
    }
}
