//! Authentication-related Data Transfer Objects
//!
//! These DTOs pin down the wire shapes the auth route group accepts;
//! credential handling itself lives outside this service.

use serde::Deserialize;
use validator::Validate;

/// Sign-up request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Display name
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// User's password (plain text on the wire)
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,
}

/// Sign-in request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// User's password
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,
}
