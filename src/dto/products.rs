use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub img_url: String,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub img_url: Option<String>,
    pub price: Option<f64>,
}
