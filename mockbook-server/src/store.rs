//! The in-memory datastore. One `Store` owns every collection; handlers
//! get at it through `State`, so tests can build their own instance
//! instead of sharing module-level globals.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use mockbook_common::non_api_structs::UserRecord;
use mockbook_common::{
    Comment, FriendRequest, Friendship, LikeAction, LikeRequest, NewComment, NewFriendRequest,
    NewPost, Notification, Post, PresenceStatus, RequestStatus, Story, User, UserUpdate,
};

use crate::error::{AppError, Result};
use crate::notify::{self, Event};
use crate::seed;

#[derive(Default)]
pub struct Store {
    users: HashMap<String, UserRecord>,
    posts: HashMap<String, Post>,
    friendships: Vec<Friendship>,
    friend_requests: Vec<FriendRequest>,
    notifications: Vec<Notification>,
    stories: Vec<Story>,
}

impl Store {
    /// Store pre-populated with the demo data set.
    pub fn seeded() -> Self {
        Self {
            users: seed::users(),
            posts: seed::posts(),
            friendships: seed::friendships(),
            friend_requests: seed::friend_requests(),
            notifications: seed::notifications(),
            stories: seed::stories(),
        }
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }

    // ---- users ----

    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        self.users
            .values()
            .find(|u| u.email == email && u.password == password)
            .map(UserRecord::to_user)
            .ok_or(AppError::Unauthenticated)
    }

    pub fn users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().map(UserRecord::to_user).collect();
        // seed ids are numeric strings, this orders them numerically
        users.sort_by_key(|u| (u.id.len(), u.id.clone()));
        users
    }

    pub fn user(&self, id: &str) -> Result<User> {
        self.users
            .get(id)
            .map(UserRecord::to_user)
            .ok_or(AppError::NotFound("User"))
    }

    /// Shallow merge: only fields present in the update change, the id
    /// never does.
    pub fn update_user(&mut self, id: &str, update: UserUpdate) -> Result<User> {
        let user = self.users.get_mut(id).ok_or(AppError::NotFound("User"))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(cover_photo) = update.cover_photo {
            user.cover_photo = cover_photo;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(location) = update.location {
            user.location = location;
        }
        if let Some(work) = update.work {
            user.work = work;
        }
        if let Some(education) = update.education {
            user.education = education;
        }
        Ok(user.to_user())
    }

    // ---- posts ----

    pub fn posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }

    pub fn create_post(&mut self, new: NewPost) -> Post {
        let post = Post {
            id: Self::next_id(),
            user_id: new.user_id,
            user_name: new.user_name,
            user_avatar: new.user_avatar,
            content: new.content,
            image: new.image,
            timestamp: Utc::now(),
            likes: 0,
            comments: Vec::new(),
        };
        self.posts.insert(post.id.clone(), post.clone());
        post
    }

    pub fn like_post(&mut self, post_id: &str, like: &LikeRequest) -> Result<Post> {
        let post = self
            .posts
            .get_mut(post_id)
            .ok_or(AppError::NotFound("Post"))?;
        let event = match like.action {
            LikeAction::Unlike => {
                if post.likes > 0 {
                    post.likes -= 1;
                }
                None
            }
            LikeAction::Like => {
                post.likes += 1;
                Some(Event::PostLiked {
                    post_id: post.id.clone(),
                    author_id: post.user_id.clone(),
                    actor: like_actor(like),
                })
            }
        };
        let snapshot = post.clone();
        if let Some(event) = event {
            self.record(event);
        }
        Ok(snapshot)
    }

    pub fn comment_post(&mut self, post_id: &str, new: NewComment) -> Result<Post> {
        let post = self
            .posts
            .get_mut(post_id)
            .ok_or(AppError::NotFound("Post"))?;
        let comment = Comment {
            id: Self::next_id(),
            user_id: new.user_id.clone(),
            user_name: new.user_name.clone(),
            user_avatar: new.user_avatar.clone(),
            content: new.content.clone(),
            timestamp: Utc::now(),
        };
        post.comments.push(comment);
        let event = Event::PostCommented {
            post_id: post.id.clone(),
            author_id: post.user_id.clone(),
            actor: mockbook_common::UserSummary {
                id: new.user_id,
                name: new.user_name,
                avatar: new.user_avatar,
            },
            content: new.content,
        };
        let snapshot = post.clone();
        self.record(event);
        Ok(snapshot)
    }

    pub fn delete_post(&mut self, post_id: &str) -> Result<()> {
        self.posts
            .remove(post_id)
            .map(|_| ())
            .ok_or(AppError::NotFound("Post"))
    }

    // ---- friendship state machine ----

    pub fn friends_of(&self, user_id: &str) -> Vec<Friendship> {
        self.friendships
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn are_friends(&self, user_id: &str, friend_id: &str) -> bool {
        self.friendships
            .iter()
            .any(|f| f.user_id == user_id && f.friend_id == friend_id)
    }

    /// Pending in either direction. Resolved requests never block.
    pub fn has_pending_request(&self, a: &str, b: &str) -> bool {
        self.friend_requests.iter().any(|r| {
            r.status == RequestStatus::Pending
                && ((r.from_user_id == a && r.to_user_id == b)
                    || (r.from_user_id == b && r.to_user_id == a))
        })
    }

    pub fn pending_requests_to(&self, user_id: &str) -> Vec<FriendRequest> {
        let mut requests: Vec<FriendRequest> = self
            .friend_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending && r.to_user_id == user_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        requests
    }

    pub fn pending_requests_from(&self, user_id: &str) -> Vec<FriendRequest> {
        self.friend_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending && r.from_user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn send_friend_request(&mut self, new: NewFriendRequest) -> Result<FriendRequest> {
        if self.are_friends(&new.from_user.id, &new.to_user.id) {
            return Err(AppError::InvalidState(String::from("Already friends")));
        }
        if self.has_pending_request(&new.from_user.id, &new.to_user.id) {
            return Err(AppError::InvalidState(String::from(
                "Friend request already pending",
            )));
        }
        let request = FriendRequest {
            id: Self::next_id(),
            from_user_id: new.from_user.id.clone(),
            from_user_name: new.from_user.name.clone(),
            from_user_avatar: new.from_user.avatar.clone(),
            to_user_id: new.to_user.id.clone(),
            to_user_name: new.to_user.name,
            to_user_avatar: new.to_user.avatar,
            status: RequestStatus::Pending,
            timestamp: Utc::now(),
        };
        self.friend_requests.push(request.clone());
        self.record(Event::FriendRequestSent {
            to_user_id: new.to_user.id,
            from: new.from_user,
        });
        Ok(request)
    }

    /// pending -> accepted, plus the two directed edges. The request
    /// record stays around in its terminal state.
    pub fn accept_friend_request(&mut self, request_id: &str) -> Result<()> {
        let request = self
            .friend_requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(AppError::NotFound("Friend request"))?;
        if request.status != RequestStatus::Pending {
            return Err(AppError::InvalidState(String::from(
                "Friend request already resolved",
            )));
        }
        request.status = RequestStatus::Accepted;
        let request = request.clone();

        self.friendships.push(Friendship {
            id: Self::next_id(),
            user_id: request.from_user_id.clone(),
            friend_id: request.to_user_id.clone(),
            friend_name: request.to_user_name.clone(),
            friend_avatar: request.to_user_avatar.clone(),
            status: PresenceStatus::Online,
        });
        self.friendships.push(Friendship {
            id: Self::next_id(),
            user_id: request.to_user_id,
            friend_id: request.from_user_id,
            friend_name: request.from_user_name,
            friend_avatar: request.from_user_avatar,
            status: PresenceStatus::Online,
        });
        Ok(())
    }

    /// pending -> declined. Terminal, keeps the record, creates no
    /// edges, and never blocks a later request between the same pair.
    pub fn decline_friend_request(&mut self, request_id: &str) -> Result<()> {
        let request = self
            .friend_requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(AppError::NotFound("Friend request"))?;
        if request.status != RequestStatus::Pending {
            return Err(AppError::InvalidState(String::from(
                "Friend request already resolved",
            )));
        }
        request.status = RequestStatus::Declined;
        Ok(())
    }

    /// Both directed edges go, each by its own predicate pass. No index
    /// arithmetic: removing one edge can never strand the other.
    pub fn remove_friend(&mut self, user_id: &str, friend_id: &str) -> Result<()> {
        if !self.are_friends(user_id, friend_id) && !self.are_friends(friend_id, user_id) {
            return Err(AppError::NotFound("Friendship"));
        }
        self.friendships
            .retain(|f| !(f.user_id == user_id && f.friend_id == friend_id));
        self.friendships
            .retain(|f| !(f.user_id == friend_id && f.friend_id == user_id));
        Ok(())
    }

    // ---- notifications ----

    fn record(&mut self, event: Event) {
        if let Some(draft) = notify::fan_out(&event) {
            self.notifications.push(Notification {
                id: Self::next_id(),
                user_id: draft.user_id,
                kind: draft.kind,
                actor_id: draft.actor.id,
                actor_name: draft.actor.name,
                actor_avatar: draft.actor.avatar,
                post_id: draft.post_id,
                message: draft.message,
                timestamp: Utc::now(),
                read: false,
            });
        }
    }

    pub fn notifications_of(&self, user_id: &str) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        notifications
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    pub fn mark_read(&mut self, notification_id: &str) {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            notification.read = true;
        }
    }

    pub fn mark_all_read(&mut self, user_id: &str) {
        for notification in &mut self.notifications {
            if notification.user_id == user_id {
                notification.read = true;
            }
        }
    }

    // ---- stories ----

    pub fn stories(&self) -> Vec<Story> {
        self.stories.clone()
    }
}

fn like_actor(like: &LikeRequest) -> mockbook_common::UserSummary {
    mockbook_common::UserSummary {
        id: like.user_id.clone(),
        name: like.user_name.clone(),
        avatar: like.user_avatar.clone(),
    }
}
