use serde::{Deserialize, Serialize};

use crate::User;

/// Server-side user record. This is the only type that carries the
/// password; it never leaves the store unconverted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub avatar: String,
    pub cover_photo: String,
    pub bio: String,
    pub location: String,
    pub work: String,
    pub education: String,
}

impl UserRecord {
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            cover_photo: self.cover_photo.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            work: self.work.clone(),
            education: self.education.clone(),
        }
    }
}
