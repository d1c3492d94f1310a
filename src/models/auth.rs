use serde::Serialize;

/// Form-encoded login request posted to `<base>/login`.
///
/// The legacy controller expects the literal field `login=login` alongside the
/// credentials.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub login: &'static str,
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: "login",
            username: username.into(),
            password: password.into(),
        }
    }
}
