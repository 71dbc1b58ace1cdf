use serde::Deserialize;

#[derive(Deserialize)]
pub struct NewUser {
    /// Generated when absent.
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// `None` leaves the column untouched. The outer `Option` on the names lets
/// a caller clear them.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}
