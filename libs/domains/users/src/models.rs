use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Instructor => write!(f, "instructor"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// User entity
///
/// `updated_at` stays `None` until the first successful update and is
/// omitted from JSON responses while absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (case-insensitively unique)
    pub email: String,
    /// User role
    pub role: Role,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, present iff the record has been updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Materialize a new record: fresh UUID v7 id, `created_at` stamped now.
    pub fn new(new: NewUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: new.name,
            email: new.email,
            role: new.role,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Merge a patch field-by-field and stamp `updated_at`.
    ///
    /// Fields absent from the patch are preserved; `id` and `created_at`
    /// are never touched.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Input for creating a record (already validated at the boundary)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Explicit patch for updates: only these fields are updatable.
///
/// A struct rather than a generic merge so nothing unvalidated can ride
/// along into the store.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    /// Defaults to `student` when omitted
    #[serde(default)]
    pub role: Option<Role>,
}

/// DTO for updating an existing user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 2, max = 50))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl From<UpdateUser> for UserPatch {
    fn from(update: UpdateUser) -> Self {
        Self {
            name: update.name,
            email: update.email,
            role: update.role,
        }
    }
}

/// Query-string parameters for listing users
///
/// `limit` and `offset` are signed so out-of-range values can be clamped
/// by the query engine instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub role: Option<Role>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
