//! Role-based permission evaluation.
//!
//! Authorization is a total order over roles: an action is granted when the
//! user's role ranks at least as high as the required one. A missing user
//! ranks below every requirement.

use super::user::{User, UserRole};

/// Grant iff the user is present and their role satisfies `required`
pub fn has_permission(user: Option<&User>, required: UserRole) -> bool {
    user.is_some_and(|u| u.role.can_access(required))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::UserId;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: UserId::new(1),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn guests_cannot_reach_admin_areas() {
        let guest = user_with_role(UserRole::Guest);
        assert!(!has_permission(Some(&guest), UserRole::Admin));
    }

    #[test]
    fn admins_can_reach_everything() {
        let admin = user_with_role(UserRole::Admin);
        assert!(has_permission(Some(&admin), UserRole::Guest));
        assert!(has_permission(Some(&admin), UserRole::User));
        assert!(has_permission(Some(&admin), UserRole::Admin));
    }

    #[test]
    fn equal_rank_is_sufficient() {
        let user = user_with_role(UserRole::User);
        assert!(has_permission(Some(&user), UserRole::User));
        assert!(!has_permission(Some(&user), UserRole::Admin));
    }

    #[test]
    fn missing_user_is_always_denied() {
        assert!(!has_permission(None, UserRole::Guest));
    }
}
