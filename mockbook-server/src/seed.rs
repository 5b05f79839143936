//! Demo data the store starts with. Mirrors the original mock data set:
//! ten users (every account logs in with `password123`), a feed of
//! posts with embedded comments, the symmetric friendship edges, a few
//! notifications and stories.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use mockbook_common::non_api_structs::UserRecord;
use mockbook_common::{
    Comment, FriendRequest, Friendship, Notification, NotificationKind, Post, PresenceStatus,
    RequestStatus, Story,
};

fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(hours)
}

fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

fn avatar(img: u32) -> String {
    format!("https://i.pravatar.cc/150?img={img}")
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    email: &str,
    name: &str,
    img: u32,
    cover: &str,
    bio: &str,
    location: &str,
    work: &str,
    education: &str,
) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        email: email.to_string(),
        password: String::from("password123"),
        name: name.to_string(),
        avatar: avatar(img),
        cover_photo: format!("https://images.unsplash.com/{cover}?w=1200&h=400&fit=crop"),
        bio: bio.to_string(),
        location: location.to_string(),
        work: work.to_string(),
        education: education.to_string(),
    }
}

pub fn users() -> HashMap<String, UserRecord> {
    let records = vec![
        user(
            "1",
            "john@example.com",
            "John Doe",
            12,
            "photo-1507525428034-b723cf961d3e",
            "Travel blogger chasing sunsets across the Caribbean 🌅",
            "Nassau, Bahamas",
            "Travel Blogger",
            "University of Miami",
        ),
        user(
            "2",
            "sarah@example.com",
            "Sarah Johnson",
            5,
            "photo-1469854523086-cc02fe5d8800",
            "Photographer. Coffee first, then the world ☕",
            "Miami, FL",
            "Freelance Photographer",
            "Florida State University",
        ),
        user(
            "3",
            "mike@example.com",
            "Mike Wilson",
            33,
            "photo-1534438327276-14e5300c3a48",
            "Gym rat and weekend sailor",
            "Fort Lauderdale, FL",
            "Personal Trainer",
            "University of Florida",
        ),
        user(
            "4",
            "emma@example.com",
            "Emma Brown",
            9,
            "photo-1513364776144-60967b0f800f",
            "Painting the ocean one canvas at a time 🎨",
            "Key West, FL",
            "Artist",
            "Rhode Island School of Design",
        ),
        user(
            "5",
            "david@example.com",
            "David Martinez",
            13,
            "photo-1559827260-dc66d52bef19",
            "Dive instructor. The reef is my office 🤿",
            "Exuma, Bahamas",
            "Dive Instructor",
            "Florida International University",
        ),
        user(
            "6",
            "lisa@example.com",
            "Lisa Chen",
            10,
            "photo-1583212292454-1fe6229603b7",
            "Marine biology grad student, turtle enthusiast 🐢",
            "Nassau, Bahamas",
            "Research Assistant",
            "University of the Bahamas",
        ),
        user(
            "7",
            "james@example.com",
            "James Thompson",
            15,
            "photo-1682687220742-aba13b6e50ba",
            "Documenting and protecting coral reefs 🪸",
            "Andros Island, Bahamas",
            "Conservation Photographer",
            "Duke University",
        ),
        user(
            "8",
            "sophia@example.com",
            "Sophia Rodriguez",
            47,
            "photo-1507525428034-b723cf961d3e",
            "Yoga teacher. Salt water cures everything 🧘‍♀️",
            "Exuma, Bahamas",
            "Yoga Instructor",
            "University of Texas",
        ),
        user(
            "9",
            "alex@example.com",
            "Alex Turner",
            14,
            "photo-1544551763-46a013bb70d5",
            "Snorkel tour guide, shark spotter 🦈",
            "Exuma Cays, Bahamas",
            "Tour Guide",
            "College of the Bahamas",
        ),
        user(
            "10",
            "maria@example.com",
            "Maria Santos",
            20,
            "photo-1517694712202-14dd9538aa97",
            "Running a little beachfront resort 🏖️",
            "Eleuthera, Bahamas",
            "Resort Manager",
            "Cornell University",
        ),
    ];
    records.into_iter().map(|u| (u.id.clone(), u)).collect()
}

fn comment(id: &str, user_id: &str, name: &str, img: u32, content: &str, ts: DateTime<Utc>) -> Comment {
    Comment {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: name.to_string(),
        user_avatar: avatar(img),
        content: content.to_string(),
        timestamp: ts,
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    user_id: &str,
    name: &str,
    img: u32,
    content: &str,
    image: Option<&str>,
    ts: DateTime<Utc>,
    likes: u32,
    comments: Vec<Comment>,
) -> Post {
    Post {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: name.to_string(),
        user_avatar: avatar(img),
        content: content.to_string(),
        image: image
            .map(|i| format!("https://images.unsplash.com/{i}?w=800&h=600&fit=crop")),
        timestamp: ts,
        likes,
        comments,
    }
}

pub fn posts() -> HashMap<String, Post> {
    let records = vec![
        post(
            "1",
            "5",
            "David Martinez",
            13,
            "Just finished an incredible snorkeling session at Thunderball Grotto! The marine life here is absolutely breathtaking 🐠🤿 #BahamasLife #Snorkeling",
            Some("photo-1559827260-dc66d52bef19"),
            hours_ago(1),
            234,
            vec![comment(
                "1",
                "6",
                "Lisa Chen",
                10,
                "This looks amazing! I need to visit soon! 😍",
                minutes_ago(30),
            )],
        ),
        post(
            "2",
            "6",
            "Lisa Chen",
            10,
            "Swimming with sea turtles in the crystal clear waters of the Bahamas! This is what paradise looks like 🐢💙 Best vacation ever!",
            Some("photo-1583212292454-1fe6229603b7"),
            hours_ago(2),
            456,
            vec![
                comment(
                    "2",
                    "5",
                    "David Martinez",
                    13,
                    "The sea turtles there are so friendly! Glad you got to experience it! 🐢",
                    minutes_ago(90),
                ),
                comment(
                    "3",
                    "9",
                    "Alex Turner",
                    14,
                    "I take tours there every week and it never gets old!",
                    minutes_ago(60),
                ),
            ],
        ),
        post(
            "3",
            "7",
            "James Thompson",
            15,
            "Documenting the beautiful coral reefs of Andros Island. The biodiversity here is incredible! Proud to be working on conservation efforts to protect these treasures 🪸🌊",
            Some("photo-1682687220742-aba13b6e50ba"),
            hours_ago(3),
            312,
            vec![comment(
                "4",
                "8",
                "Sophia Rodriguez",
                47,
                "Thank you for your amazing conservation work! 🙏",
                hours_ago(2),
            )],
        ),
        post(
            "4",
            "9",
            "Alex Turner",
            14,
            "Another day in paradise! Snorkeling at Exuma Cays was mind-blowing today. Spotted stingrays, tropical fish, and even a nurse shark! 🦈🐠 #SnorkelingLife #Bahamas",
            Some("photo-1544551763-46a013bb70d5"),
            hours_ago(4),
            523,
            vec![],
        ),
        post(
            "5",
            "8",
            "Sophia Rodriguez",
            47,
            "Morning yoga session on the beach followed by snorkeling in the turquoise waters... This is what dreams are made of! 🧘‍♀️🌊 Living my best life in Exuma!",
            Some("photo-1507525428034-b723cf961d3e"),
            hours_ago(5),
            389,
            vec![comment(
                "5",
                "10",
                "Maria Santos",
                20,
                "You should host a retreat at our resort! 🏖️",
                minutes_ago(270),
            )],
        ),
        post(
            "6",
            "1",
            "John Doe",
            12,
            "Island hopping through the Exumas this week. Every beach is better than the last! 🏝️ #TravelBlog",
            Some("photo-1517694712202-14dd9538aa97"),
            hours_ago(6),
            187,
            vec![],
        ),
        post(
            "7",
            "2",
            "Sarah Johnson",
            5,
            "Golden hour at the marina. Some shots are just gifts 📸",
            Some("photo-1469854523086-cc02fe5d8800"),
            hours_ago(8),
            98,
            vec![],
        ),
    ];
    records.into_iter().map(|p| (p.id.clone(), p)).collect()
}

fn edge(id: &str, user_id: &str, friend_id: &str, name: &str, img: u32, status: PresenceStatus) -> Friendship {
    Friendship {
        id: id.to_string(),
        user_id: user_id.to_string(),
        friend_id: friend_id.to_string(),
        friend_name: name.to_string(),
        friend_avatar: avatar(img),
        status,
    }
}

pub fn friendships() -> Vec<Friendship> {
    use PresenceStatus::{Offline, Online};
    vec![
        // John Doe's friends
        edge("1", "1", "2", "Sarah Johnson", 5, Online),
        edge("2", "1", "3", "Mike Wilson", 33, Online),
        edge("3", "1", "4", "Emma Brown", 9, Offline),
        // Sarah Johnson's friends
        edge("4", "2", "1", "John Doe", 12, Online),
        edge("5", "2", "4", "Emma Brown", 9, Offline),
        edge("6", "2", "3", "Mike Wilson", 33, Online),
        // Mike Wilson's friends
        edge("7", "3", "1", "John Doe", 12, Online),
        edge("8", "3", "2", "Sarah Johnson", 5, Online),
        // Emma Brown's friends
        edge("9", "4", "1", "John Doe", 12, Online),
        edge("10", "4", "2", "Sarah Johnson", 5, Online),
    ]
}

pub fn friend_requests() -> Vec<FriendRequest> {
    vec![
        FriendRequest {
            id: String::from("1"),
            from_user_id: String::from("7"),
            from_user_name: String::from("James Thompson"),
            from_user_avatar: avatar(15),
            to_user_id: String::from("1"),
            to_user_name: String::from("John Doe"),
            to_user_avatar: avatar(12),
            status: RequestStatus::Pending,
            timestamp: hours_ago(12),
        },
        FriendRequest {
            id: String::from("2"),
            from_user_id: String::from("10"),
            from_user_name: String::from("Maria Santos"),
            from_user_avatar: avatar(20),
            to_user_id: String::from("2"),
            to_user_name: String::from("Sarah Johnson"),
            to_user_avatar: avatar(5),
            status: RequestStatus::Pending,
            timestamp: hours_ago(20),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    user_id: &str,
    kind: NotificationKind,
    actor_id: &str,
    actor_name: &str,
    img: u32,
    post_id: Option<&str>,
    message: &str,
    ts: DateTime<Utc>,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: user_id.to_string(),
        kind,
        actor_id: actor_id.to_string(),
        actor_name: actor_name.to_string(),
        actor_avatar: avatar(img),
        post_id: post_id.map(str::to_string),
        message: message.to_string(),
        timestamp: ts,
        read,
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            "1",
            NotificationKind::Like,
            "2",
            "Sarah Johnson",
            5,
            Some("6"),
            "liked your post",
            minutes_ago(10),
            false,
        ),
        notification(
            "2",
            "1",
            NotificationKind::Comment,
            "3",
            "Mike Wilson",
            33,
            Some("6"),
            "commented on your post: \"This is awesome!\"",
            minutes_ago(30),
            false,
        ),
        notification(
            "3",
            "1",
            NotificationKind::Like,
            "4",
            "Emma Brown",
            9,
            Some("6"),
            "liked your post",
            hours_ago(2),
            true,
        ),
        notification(
            "4",
            "2",
            NotificationKind::Comment,
            "1",
            "John Doe",
            12,
            Some("7"),
            "commented on your post",
            hours_ago(1),
            false,
        ),
        notification(
            "5",
            "5",
            NotificationKind::Like,
            "6",
            "Lisa Chen",
            10,
            Some("1"),
            "liked your post",
            minutes_ago(15),
            false,
        ),
    ]
}

fn story(id: &str, user_id: &str, name: &str, img: u32, image: &str, ts: DateTime<Utc>) -> Story {
    Story {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: name.to_string(),
        user_avatar: avatar(img),
        image: format!("https://images.unsplash.com/{image}?w=600&h=900&fit=crop"),
        timestamp: ts,
    }
}

pub fn stories() -> Vec<Story> {
    vec![
        story("1", "2", "Sarah Johnson", 5, "photo-1469854523086-cc02fe5d8800", hours_ago(3)),
        story("2", "3", "Mike Wilson", 33, "photo-1534438327276-14e5300c3a48", hours_ago(5)),
        story("3", "4", "Emma Brown", 9, "photo-1513364776144-60967b0f800f", hours_ago(7)),
        story("4", "1", "John Doe", 12, "photo-1517694712202-14dd9538aa97", hours_ago(10)),
    ]
}
