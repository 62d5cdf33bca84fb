//! User domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ONLINE_THRESHOLD_HOURS, ROLE_ADMIN, ROLE_GUEST, ROLE_USER};
use crate::errors::AppError;
use crate::utils::time_ago;

use super::id::UserId;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    /// Position in the role hierarchy: admin > user > guest
    pub const fn rank(self) -> u8 {
        match self {
            UserRole::Admin => 3,
            UserRole::User => 2,
            UserRole::Guest => 1,
        }
    }

    /// Check if this role satisfies a required role
    pub fn can_access(self, required: UserRole) -> bool {
        self.rank() >= required.rank()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
            UserRole::Guest => ROLE_GUEST,
        }
    }
}

/// Labels outside the hierarchy are rejected here, so an unknown role can
/// never reach a permission check.
impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_USER => Ok(UserRole::User),
            ROLE_GUEST => Ok(UserRole::Guest),
            other => Err(AppError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Immutable after creation
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Build a user from a store-assigned id and a creation payload
    pub fn new(id: UserId, draft: CreateUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    /// Shallow-merge an update; `created_at` is never touched
    pub fn apply(&mut self, updates: UpdateUser) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(email) = updates.email {
            self.email = email;
        }
        if let Some(role) = updates.role {
            self.role = role;
        }
    }

    /// Stamp a successful authentication
    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }

    /// A user counts as online while their last login is within the threshold
    pub fn is_online(&self, now: DateTime<Utc>) -> bool {
        self.last_login.is_some_and(|at| {
            now.signed_duration_since(at).num_hours() < ONLINE_THRESHOLD_HOURS
        })
    }

    /// Human-readable account of the last login
    pub fn last_seen(&self, now: DateTime<Utc>) -> String {
        match self.last_login {
            Some(at) => time_ago(at, now),
            None => "never".to_string(),
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// User update data transfer object; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn sample() -> User {
        User::new(
            UserId::new(1),
            CreateUser {
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                role: UserRole::User,
            },
        )
    }

    #[test]
    fn roles_parse_and_display_as_lowercase_labels() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("guest".parse::<UserRole>().unwrap(), UserRole::Guest);
        assert_eq!(UserRole::Guest.to_string(), "guest");
    }

    #[test]
    fn unknown_role_labels_are_rejected() {
        let parsed = "superuser".parse::<UserRole>();
        assert_eq!(parsed, Err(AppError::UnknownRole("superuser".to_string())));
    }

    #[test]
    fn every_valid_role_label_parses() {
        for label in crate::config::VALID_ROLES {
            let role = label.parse::<UserRole>().unwrap();
            assert_eq!(role.as_str(), *label);
        }
    }

    #[test]
    fn role_ranks_follow_the_hierarchy() {
        assert!(UserRole::Admin.rank() > UserRole::User.rank());
        assert!(UserRole::User.rank() > UserRole::Guest.rank());
    }

    #[test]
    fn roles_serialize_as_lowercase_strings() {
        let user = sample();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "user");
    }

    #[test]
    fn apply_changes_only_the_given_fields() {
        let mut user = sample();
        let created_at = user.created_at;

        user.apply(UpdateUser {
            role: Some(UserRole::Admin),
            ..Default::default()
        });

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Test User");
        assert_eq!(user.created_at, created_at);
    }

    #[test]
    fn online_window_closes_after_the_threshold() {
        let now = Utc::now();
        let mut user = sample();
        assert!(!user.is_online(now));

        user.record_login(now - Duration::hours(2));
        assert!(user.is_online(now));

        user.record_login(now - Duration::hours(ONLINE_THRESHOLD_HOURS));
        assert!(!user.is_online(now));
    }

    #[test]
    fn last_seen_reports_never_before_any_login() {
        let now = Utc::now();
        let mut user = sample();
        assert_eq!(user.last_seen(now), "never");

        user.record_login(now - Duration::hours(3));
        assert_eq!(user.last_seen(now), "3 hours ago");
    }
}
