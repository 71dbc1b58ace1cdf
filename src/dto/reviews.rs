use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub id: Option<String>,
    pub text: String,
    pub rating: f64,
    pub author: String,
}
