use serde::{Deserialize, Serialize};

use crate::models::{CartItem, Product};

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub item: CartItem,
    pub product: Product,
}
