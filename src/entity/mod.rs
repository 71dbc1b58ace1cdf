pub mod cart;
pub mod products;
pub mod reviews;
pub mod reviews_products;
pub mod shop_list;
pub mod shop_list_products;
pub mod users;
pub mod users_shop_list;
pub mod wishlist;

pub use cart::Entity as Cart;
pub use products::Entity as Products;
pub use reviews::Entity as Reviews;
pub use reviews_products::Entity as ReviewsProducts;
pub use shop_list::Entity as ShopList;
pub use shop_list_products::Entity as ShopListProducts;
pub use users::Entity as Users;
pub use users_shop_list::Entity as UsersShopList;
pub use wishlist::Entity as Wishlist;

use uuid::Uuid;

/// Fresh opaque identifier: 128 random bits as 32 lowercase hex chars.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_hex_and_unique() {
        let a = new_id();
        let b = new_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }
}
