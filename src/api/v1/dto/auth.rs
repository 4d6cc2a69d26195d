/*
 * Responsibility
 * - login request DTO
 * - shape checks only (validate()); whether the credentials are right is the handler's job
 */
use std::fmt;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required");
        }
        if email.len() > 254 || !email.contains('@') {
            return Err("email is invalid");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        // bcrypt only looks at the first 72 bytes
        if self.password.len() > 72 {
            return Err("password must be <= 72 bytes");
        }

        Ok(())
    }

    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert_eq!(request("reader@library.test", "pw").validate(), Ok(()));
    }

    #[test]
    fn blank_email_is_rejected() {
        assert_eq!(request("  ", "pw").validate(), Err("email is required"));
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert_eq!(request("reader", "pw").validate(), Err("email is invalid"));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(
            request("reader@library.test", "").validate(),
            Err("password is required")
        );
    }

    #[test]
    fn overlong_password_is_rejected() {
        let long = "x".repeat(73);
        assert_eq!(
            request("reader@library.test", &long).validate(),
            Err("password must be <= 72 bytes")
        );
    }

    #[test]
    fn email_is_normalized_for_lookup() {
        assert_eq!(
            request("  Reader@Library.TEST ", "pw").normalized_email(),
            "reader@library.test"
        );
    }

    #[test]
    fn debug_output_omits_the_password() {
        let rendered = format!("{:?}", request("reader@library.test", "hunter2"));

        assert!(!rendered.contains("hunter2"));
    }
}
