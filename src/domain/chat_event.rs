//! Chat room events as delivered by the chat websocket.

use serde::Deserialize;

/// Chat event category, numbered as on the Stack Exchange chat wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A new message was posted.
    MessagePosted,
    /// A message was edited.
    MessageEdited,
    /// A user entered the room.
    UserEntered,
    /// A user left the room.
    UserLeft,
    /// The room was renamed.
    RoomNameChanged,
    /// A message was starred.
    MessageStarred,
    /// A user was `@`-mentioned.
    UserMentioned,
    /// A message was flagged.
    MessageFlagged,
    /// A message was deleted.
    MessageDeleted,
    /// A file was uploaded.
    FileAdded,
    /// A message was flagged for moderator attention.
    MessageFlaggedForModerator,
    /// Someone changed their chat settings.
    UserSettingsChanged,
    /// Site-wide notification.
    GlobalNotification,
    /// Room access level changed.
    AccessLevelChanged,
    /// Per-user notification.
    UserNotification,
    /// Room invitation.
    Invitation,
    /// A reply to one of the target user's messages.
    MessageReply,
    /// A message was moved out of the room.
    MessageMovedOut,
    /// A message was moved into the room.
    MessageMovedIn,
    /// Transcript time break.
    TimeBreak,
    /// Feed ticker item.
    FeedTicker,
    /// A user was suspended.
    UserSuspended,
    /// Two accounts were merged.
    UserMerged,
    /// A user changed name or avatar.
    UserNameOrAvatarChanged,
    /// Internal or unknown event code.
    Other(u32),
}

impl EventType {
    /// Whether the dispatcher should skip this category outright.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        !matches!(
            self,
            Self::MessagePosted | Self::UserMentioned | Self::MessageReply
        )
    }

    /// Whether this category targets a specific user.
    #[must_use]
    pub const fn is_targeted(self) -> bool {
        matches!(self, Self::UserMentioned | Self::MessageReply)
    }
}

impl From<u32> for EventType {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::MessagePosted,
            2 => Self::MessageEdited,
            3 => Self::UserEntered,
            4 => Self::UserLeft,
            5 => Self::RoomNameChanged,
            6 => Self::MessageStarred,
            8 => Self::UserMentioned,
            9 => Self::MessageFlagged,
            10 => Self::MessageDeleted,
            11 => Self::FileAdded,
            12 => Self::MessageFlaggedForModerator,
            13 => Self::UserSettingsChanged,
            14 => Self::GlobalNotification,
            15 => Self::AccessLevelChanged,
            16 => Self::UserNotification,
            17 => Self::Invitation,
            18 => Self::MessageReply,
            19 => Self::MessageMovedOut,
            20 => Self::MessageMovedIn,
            21 => Self::TimeBreak,
            22 => Self::FeedTicker,
            29 => Self::UserSuspended,
            30 => Self::UserMerged,
            34 => Self::UserNameOrAvatarChanged,
            other => Self::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from)
    }
}

/// A single chat event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatEvent {
    /// Event category.
    pub event_type: EventType,
    /// Room the event happened in.
    #[serde(default)]
    pub room_id: u64,
    /// Acting user; `-1` is Community, `-2` is Feeds.
    #[serde(default)]
    pub user_id: i64,
    /// Display name of the acting user.
    #[serde(default)]
    pub user_name: String,
    /// Message HTML, for message events.
    #[serde(default)]
    pub content: Option<String>,
    /// Message id, for message events.
    #[serde(default)]
    pub message_id: Option<u64>,
    /// Mentioned or replied-to user, for targeted events.
    #[serde(default)]
    pub target_user_id: Option<i64>,
}

impl ChatEvent {
    /// Whether the event was produced by a system pseudo-user.
    #[must_use]
    pub const fn is_from_system_user(&self) -> bool {
        self.user_id <= 0
    }
}
