//! DTOs for carts_sea adapter.

/// DTO for creating a new cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub username: String,
}

impl CartCreate {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
