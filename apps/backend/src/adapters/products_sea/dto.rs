//! DTOs for products_sea adapter.

/// DTO for inserting a product. Only the seed CLI and tests create products.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub title: String,
    pub price: Option<f64>,
    pub inventory: Option<i32>,
    pub cart_id: Option<i32>,
}

impl ProductCreate {
    pub fn new(title: impl Into<String>, price: f64, inventory: i32) -> Self {
        Self {
            title: title.into(),
            price: Some(price),
            inventory: Some(inventory),
            cart_id: None,
        }
    }

    pub fn with_cart(mut self, cart_id: i32) -> Self {
        self.cart_id = Some(cart_id);
        self
    }
}
