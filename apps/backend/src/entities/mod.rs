pub mod carts;
pub mod products;

pub use carts::Entity as Carts;
pub use carts::Model as Cart;
pub use products::Entity as Products;
pub use products::Model as Product;
