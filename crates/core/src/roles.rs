//! Well-known role names stored in `users.role`.

use crate::error::CoreError;

/// Full access, including user management.
pub const ROLE_ADMIN: &str = "admin";

/// Content editing only.
pub const ROLE_EDITOR: &str = "editor";

pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];

pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(validate_role(ROLE_ADMIN).is_ok());
        assert!(validate_role(ROLE_EDITOR).is_ok());
    }

    #[test]
    fn unknown_role_lists_choices() {
        let err = validate_role("superuser").unwrap_err();
        assert!(err.to_string().contains("admin, editor"));
    }
}
