//! Error codes for the storefront API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that appears
//! in problem+json bodies and in GraphQL `extensions.code`.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    ValidationError,
    BadRequest,

    // Resource Not Found
    CartNotFound,
    NotFound,

    // Business Logic Conflicts
    CartUsernameTaken,
    ProductTitleTaken,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::CartNotFound => "CART_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::CartUsernameTaken => "CART_USERNAME_TAKEN",
            Self::ProductTitleTaken => "PRODUCT_TITLE_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
