pub mod auth_service;
pub mod cart_service;
pub mod product_service;
pub mod review_service;
pub mod shop_list_service;
pub mod user_service;
pub mod wishlist_service;
