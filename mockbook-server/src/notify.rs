//! Fan-out policy: which store mutations produce a notification, and
//! for whom. Mutations emit an [`Event`]; [`fan_out`] turns it into at
//! most one notification draft. Keeping the policy out of the handlers
//! means the de-dup rules are testable without HTTP or the store.

use mockbook_common::{NotificationKind, UserSummary};

/// Emitted by store mutations that other users may care about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    PostLiked {
        post_id: String,
        author_id: String,
        actor: UserSummary,
    },
    PostCommented {
        post_id: String,
        author_id: String,
        actor: UserSummary,
        content: String,
    },
    FriendRequestSent {
        to_user_id: String,
        from: UserSummary,
    },
}

/// A notification minus the fields the store assigns on insert
/// (id, timestamp, read=false).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub user_id: String,
    pub kind: NotificationKind,
    pub actor: UserSummary,
    pub post_id: Option<String>,
    pub message: String,
}

/// Comment bodies are previewed, not quoted in full.
pub const COMMENT_PREVIEW_CHARS: usize = 50;

/// `None` means nobody gets notified. Likes and comments on your own
/// post are the only suppressed case; friend requests always notify
/// the target.
pub fn fan_out(event: &Event) -> Option<Draft> {
    match event {
        Event::PostLiked {
            post_id,
            author_id,
            actor,
        } => {
            if actor.id == *author_id {
                return None;
            }
            Some(Draft {
                user_id: author_id.clone(),
                kind: NotificationKind::Like,
                actor: actor.clone(),
                post_id: Some(post_id.clone()),
                message: String::from("liked your post"),
            })
        }
        Event::PostCommented {
            post_id,
            author_id,
            actor,
            content,
        } => {
            if actor.id == *author_id {
                return None;
            }
            Some(Draft {
                user_id: author_id.clone(),
                kind: NotificationKind::Comment,
                actor: actor.clone(),
                post_id: Some(post_id.clone()),
                message: format!("commented on your post: \"{}\"", preview(content)),
            })
        }
        Event::FriendRequestSent { to_user_id, from } => Some(Draft {
            user_id: to_user_id.clone(),
            kind: NotificationKind::FriendRequest,
            actor: from.clone(),
            post_id: None,
            message: String::from("sent you a friend request"),
        }),
    }
}

fn preview(content: &str) -> String {
    if content.chars().count() > COMMENT_PREVIEW_CHARS {
        let truncated: String = content.chars().take(COMMENT_PREVIEW_CHARS).collect();
        truncated + "..."
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: &str) -> UserSummary {
        UserSummary {
            id: id.to_string(),
            name: String::from("Test User"),
            avatar: String::from("https://i.pravatar.cc/150?img=1"),
        }
    }

    #[test]
    fn liking_own_post_notifies_nobody() {
        let event = Event::PostLiked {
            post_id: String::from("p1"),
            author_id: String::from("1"),
            actor: actor("1"),
        };
        assert_eq!(fan_out(&event), None);
    }

    #[test]
    fn liking_anothers_post_notifies_the_author() {
        let event = Event::PostLiked {
            post_id: String::from("p1"),
            author_id: String::from("1"),
            actor: actor("2"),
        };
        let draft = fan_out(&event).unwrap();
        assert_eq!(draft.user_id, "1");
        assert_eq!(draft.kind, NotificationKind::Like);
        assert_eq!(draft.post_id.as_deref(), Some("p1"));
        assert_eq!(draft.message, "liked your post");
    }

    #[test]
    fn commenting_on_own_post_notifies_nobody() {
        let event = Event::PostCommented {
            post_id: String::from("p1"),
            author_id: String::from("1"),
            actor: actor("1"),
            content: String::from("nice"),
        };
        assert_eq!(fan_out(&event), None);
    }

    #[test]
    fn short_comments_are_quoted_in_full() {
        let event = Event::PostCommented {
            post_id: String::from("p1"),
            author_id: String::from("1"),
            actor: actor("2"),
            content: String::from("This is awesome!"),
        };
        let draft = fan_out(&event).unwrap();
        assert_eq!(draft.message, "commented on your post: \"This is awesome!\"");
    }

    #[test]
    fn long_comments_are_truncated_with_ellipsis() {
        let content = "x".repeat(80);
        let event = Event::PostCommented {
            post_id: String::from("p1"),
            author_id: String::from("1"),
            actor: actor("2"),
            content,
        };
        let draft = fan_out(&event).unwrap();
        let expected = format!("commented on your post: \"{}...\"", "x".repeat(50));
        assert_eq!(draft.message, expected);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let content = "é".repeat(60);
        let event = Event::PostCommented {
            post_id: String::from("p1"),
            author_id: String::from("1"),
            actor: actor("2"),
            content,
        };
        let draft = fan_out(&event).unwrap();
        assert!(draft.message.contains(&format!("{}...", "é".repeat(50))));
    }

    #[test]
    fn friend_requests_always_notify_the_target() {
        let event = Event::FriendRequestSent {
            to_user_id: String::from("5"),
            from: actor("1"),
        };
        let draft = fan_out(&event).unwrap();
        assert_eq!(draft.user_id, "5");
        assert_eq!(draft.kind, NotificationKind::FriendRequest);
        assert_eq!(draft.post_id, None);
        assert_eq!(draft.message, "sent you a friend request");
    }
}
