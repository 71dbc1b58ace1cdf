pub mod auth;
pub mod cart;
pub mod products;
pub mod reviews;
pub mod users;
