use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role attached to a session user. The backend stores these uppercase.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Reader,
    Author,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Role::Reader => "READER",
                Role::Author => "AUTHOR",
                Role::Admin => "ADMIN",
            }
        )
    }
}

/// The user attached to an authenticated session.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    pub email: String,

    pub name: String,

    #[serde(default)]
    pub email_verified: bool,

    pub role: Option<Role>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Public author profile returned by `GET /api/users/:id`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub id: String,

    pub name: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub bio: Option<String>,
}
