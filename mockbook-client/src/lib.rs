pub mod client {
    //! Thin reqwest wrappers, one per server endpoint. Every call
    //! surfaces HTTP 4xx/5xx as an error so callers can tell a guard
    //! rejection from success.

    use anyhow::Result;
    use reqwest::Client;

    use mockbook_common::{
        Ack, FriendRequest, Friendship, FriendshipStatus, LikeRequest, LoginRequest,
        LoginResponse, MultiUploadResponse, NewComment, NewFriendRequest, NewPost, Notification,
        Post, Story, UnreadCount, UploadResponse, User, UserUpdate,
    };

    pub async fn login(client: &Client, base: &str, email: &str, password: &str) -> Result<LoginResponse> {
        Ok(client
            .post(format!("{base}/api/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_users(client: &Client, base: &str) -> Result<Vec<User>> {
        Ok(client
            .get(format!("{base}/api/users"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_user(client: &Client, base: &str, id: &str) -> Result<User> {
        Ok(client
            .get(format!("{base}/api/users/{id}"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn update_user(client: &Client, base: &str, id: &str, update: &UserUpdate) -> Result<User> {
        Ok(client
            .put(format!("{base}/api/users/{id}"))
            .json(update)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_posts(client: &Client, base: &str) -> Result<Vec<Post>> {
        Ok(client
            .get(format!("{base}/api/posts"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn create_post(client: &Client, base: &str, new: &NewPost) -> Result<Post> {
        Ok(client
            .post(format!("{base}/api/posts"))
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn like_post(client: &Client, base: &str, post_id: &str, like: &LikeRequest) -> Result<Post> {
        Ok(client
            .post(format!("{base}/api/posts/{post_id}/like"))
            .json(like)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn comment_post(client: &Client, base: &str, post_id: &str, new: &NewComment) -> Result<Post> {
        Ok(client
            .post(format!("{base}/api/posts/{post_id}/comment"))
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn delete_post(client: &Client, base: &str, post_id: &str) -> Result<Ack> {
        Ok(client
            .delete(format!("{base}/api/posts/{post_id}"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_stories(client: &Client, base: &str) -> Result<Vec<Story>> {
        Ok(client
            .get(format!("{base}/api/stories"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_friends(client: &Client, base: &str, user_id: &str) -> Result<Vec<Friendship>> {
        Ok(client
            .get(format!("{base}/api/friends/{user_id}"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_friend_requests(client: &Client, base: &str, user_id: &str) -> Result<Vec<FriendRequest>> {
        Ok(client
            .get(format!("{base}/api/friend-requests/{user_id}"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn get_sent_friend_requests(client: &Client, base: &str, user_id: &str) -> Result<Vec<FriendRequest>> {
        Ok(client
            .get(format!("{base}/api/friend-requests/{user_id}/sent"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn friendship_status(client: &Client, base: &str, user_id: &str, target_id: &str) -> Result<FriendshipStatus> {
        Ok(client
            .get(format!("{base}/api/friendship-status/{user_id}/{target_id}"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn send_friend_request(client: &Client, base: &str, new: &NewFriendRequest) -> Result<FriendRequest> {
        Ok(client
            .post(format!("{base}/api/friend-requests"))
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn accept_friend_request(client: &Client, base: &str, request_id: &str) -> Result<()> {
        client
            .post(format!("{base}/api/friend-requests/{request_id}/accept"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn decline_friend_request(client: &Client, base: &str, request_id: &str) -> Result<()> {
        client
            .post(format!("{base}/api/friend-requests/{request_id}/decline"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn remove_friend(client: &Client, base: &str, user_id: &str, friend_id: &str) -> Result<()> {
        client
            .delete(format!("{base}/api/friends/{user_id}/{friend_id}"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn get_notifications(client: &Client, base: &str, user_id: &str) -> Result<Vec<Notification>> {
        Ok(client
            .get(format!("{base}/api/notifications/{user_id}"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn unread_count(client: &Client, base: &str, user_id: &str) -> Result<UnreadCount> {
        Ok(client
            .get(format!("{base}/api/notifications/{user_id}/unread-count"))
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn mark_read(client: &Client, base: &str, notification_id: &str) -> Result<()> {
        client
            .post(format!("{base}/api/notifications/{notification_id}/read"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn mark_all_read(client: &Client, base: &str, user_id: &str) -> Result<()> {
        client
            .post(format!("{base}/api/notifications/{user_id}/mark-all-read"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn upload_image(client: &Client, base: &str, filename: &str, mime: &str, bytes: Vec<u8>) -> Result<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("image", part);
        Ok(client
            .post(format!("{base}/api/upload"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }

    pub async fn upload_images(client: &Client, base: &str, files: Vec<(String, String, Vec<u8>)>) -> Result<MultiUploadResponse> {
        let mut form = reqwest::multipart::Form::new();
        for (filename, mime, bytes) in files {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(filename)
                .mime_str(&mime)?;
            form = form.part("images", part);
        }
        Ok(client
            .post(format!("{base}/api/upload/multiple"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<_>()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use std::process::{Child, Command};
    use std::thread;
    use std::time::Duration;

    use reqwest::Client;

    use mockbook_common::{
        LikeAction, LikeRequest, NewComment, NewFriendRequest, NewPost, NotificationKind, User,
        UserSummary,
    };

    use crate::client::*;

    const BASE: &str = "http://localhost:8350";

    pub struct ServerRunner(Child);
    impl ServerRunner {
        pub fn new(server: Child) -> Self {
            Self(server)
        }
    }
    impl Drop for ServerRunner {
        fn drop(&mut self) {
            self.0.kill().unwrap()
        }
    }

    fn summary(user: &User) -> UserSummary {
        UserSummary {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }

    async fn wait_for_server(client: &Client) {
        for _ in 0..60 {
            if get_users(client, BASE).await.is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(500));
        }
        panic!("server never came up on {BASE}");
    }

    #[test]
    fn end_to_end() {
        let uploads_dir = std::env::temp_dir().join("mockbook-e2e-uploads");
        let server = Command::new("cargo")
            .arg("run")
            .arg("-p")
            .arg("mockbook-server")
            .env("PORT", "8350")
            .env("UPLOADS_DIR", &uploads_dir)
            .spawn()
            .unwrap();
        thread::sleep(Duration::from_secs(2));
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(wrapper(ServerRunner::new(server)));
    }

    async fn wrapper(_server_runner: ServerRunner) {
        actual_test().await.unwrap();
    }

    async fn actual_test() -> anyhow::Result<()> {
        let client = Client::new();
        wait_for_server(&client).await;

        let users = get_users(&client, BASE).await?;
        assert_eq!(users.len(), 10);
        let john = summary(&users[0]);
        let david = summary(&users[4]);
        assert_eq!(john.id, "1");
        assert_eq!(david.id, "5");

        let login_response = login(&client, BASE, "david@example.com", "password123").await?;
        assert!(login_response.success);
        assert_eq!(login_response.user.id, "5");
        assert!(login(&client, BASE, "david@example.com", "wrong").await.is_err());

        // profile edits merge shallowly
        let updated = update_user(
            &client,
            BASE,
            "1",
            &mockbook_common::UserUpdate {
                bio: Some(String::from("Updated bio")),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.bio, "Updated bio");
        assert_eq!(updated.name, "John Doe");
        assert_eq!(get_user(&client, BASE, "1").await?.bio, "Updated bio");

        // send 1 -> 5, then exercise every duplicate guard
        let before = friendship_status(&client, BASE, "1", "5").await?;
        assert!(!before.is_friend);
        assert!(!before.has_pending_request);

        let request = send_friend_request(
            &client,
            BASE,
            &NewFriendRequest {
                from_user: john.clone(),
                to_user: david.clone(),
            },
        )
        .await?;
        assert!(send_friend_request(
            &client,
            BASE,
            &NewFriendRequest {
                from_user: john.clone(),
                to_user: david.clone(),
            },
        )
        .await
        .is_err());
        assert!(send_friend_request(
            &client,
            BASE,
            &NewFriendRequest {
                from_user: david.clone(),
                to_user: john.clone(),
            },
        )
        .await
        .is_err());

        let inbound = get_friend_requests(&client, BASE, "5").await?;
        assert_eq!(inbound.len(), 1);
        assert_eq!(inbound[0].id, request.id);
        let outbound = get_sent_friend_requests(&client, BASE, "1").await?;
        assert_eq!(outbound.len(), 1);

        // seed leaves one unread for user 5, the request adds another
        assert_eq!(unread_count(&client, BASE, "5").await?.count, 2);

        accept_friend_request(&client, BASE, &request.id).await?;
        assert!(accept_friend_request(&client, BASE, &request.id).await.is_err());

        let johns_friends = get_friends(&client, BASE, "1").await?;
        assert!(johns_friends.iter().any(|f| f.friend_id == "5"));
        let davids_friends = get_friends(&client, BASE, "5").await?;
        assert!(davids_friends.iter().any(|f| f.friend_id == "1"));
        let after = friendship_status(&client, BASE, "1", "5").await?;
        assert!(after.is_friend);
        assert!(!after.has_pending_request);

        let notifications = get_notifications(&client, BASE, "5").await?;
        assert_eq!(notifications[0].kind, NotificationKind::FriendRequest);
        assert_eq!(notifications[0].actor_id, "1");

        mark_all_read(&client, BASE, "5").await?;
        assert_eq!(unread_count(&client, BASE, "5").await?.count, 0);
        mark_all_read(&client, BASE, "5").await?;
        assert_eq!(unread_count(&client, BASE, "5").await?.count, 0);

        // like fan-out against seed post 1, authored by user 5
        let like_by_john = LikeRequest {
            action: LikeAction::Like,
            user_id: john.id.clone(),
            user_name: john.name.clone(),
            user_avatar: john.avatar.clone(),
        };
        like_post(&client, BASE, "1", &like_by_john).await?;
        assert_eq!(unread_count(&client, BASE, "5").await?.count, 1);

        let like_by_author = LikeRequest {
            action: LikeAction::Like,
            user_id: david.id.clone(),
            user_name: david.name.clone(),
            user_avatar: david.avatar.clone(),
        };
        like_post(&client, BASE, "1", &like_by_author).await?;
        assert_eq!(unread_count(&client, BASE, "5").await?.count, 1);

        let long_comment = "z".repeat(60);
        let commented = comment_post(
            &client,
            BASE,
            "1",
            &NewComment {
                user_id: john.id.clone(),
                user_name: john.name.clone(),
                user_avatar: john.avatar.clone(),
                content: long_comment,
            },
        )
        .await?;
        assert_eq!(commented.comments.last().unwrap().user_id, "1");
        assert_eq!(unread_count(&client, BASE, "5").await?.count, 2);
        let notifications = get_notifications(&client, BASE, "5").await?;
        assert!(notifications[0].message.contains("..."));

        // unfriend removes both edges, and only once
        remove_friend(&client, BASE, "1", "5").await?;
        assert!(remove_friend(&client, BASE, "1", "5").await.is_err());
        assert!(!get_friends(&client, BASE, "1").await?.iter().any(|f| f.friend_id == "5"));
        assert!(!get_friends(&client, BASE, "5").await?.iter().any(|f| f.friend_id == "1"));

        // declined requests are terminal and never block a retry
        let second = send_friend_request(
            &client,
            BASE,
            &NewFriendRequest {
                from_user: david.clone(),
                to_user: john.clone(),
            },
        )
        .await?;
        decline_friend_request(&client, BASE, &second.id).await?;
        assert!(decline_friend_request(&client, BASE, &second.id).await.is_err());
        let status = friendship_status(&client, BASE, "5", "1").await?;
        assert!(!status.is_friend);
        assert!(!status.has_pending_request);
        send_friend_request(
            &client,
            BASE,
            &NewFriendRequest {
                from_user: david.clone(),
                to_user: john.clone(),
            },
        )
        .await?;

        // post lifecycle
        let post = create_post(
            &client,
            BASE,
            &NewPost {
                user_id: john.id.clone(),
                user_name: john.name.clone(),
                user_avatar: john.avatar.clone(),
                content: String::from("Hello from the demo client"),
                image: None,
            },
        )
        .await?;
        assert_eq!(post.likes, 0);
        let feed = get_posts(&client, BASE).await?;
        assert_eq!(feed[0].id, post.id);
        let ack = delete_post(&client, BASE, &post.id).await?;
        assert!(ack.success);
        assert!(delete_post(&client, BASE, &post.id).await.is_err());

        assert_eq!(get_stories(&client, BASE).await?.len(), 4);

        // upload accepts images and serves them back, rejects the rest
        let uploaded = upload_image(
            &client,
            BASE,
            "pixel.png",
            "image/png",
            vec![0x89, 0x50, 0x4e, 0x47],
        )
        .await?;
        assert!(uploaded.filename.ends_with(".png"));
        let served = client.get(&uploaded.url).send().await?;
        assert!(served.status().is_success());
        assert!(upload_image(&client, BASE, "notes.txt", "text/plain", b"hi".to_vec())
            .await
            .is_err());

        Ok(())
    }
}
