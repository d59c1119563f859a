// src/routes/root.rs

pub const GREETING: &str = "Hello from Flask!";

/// GET /
pub async fn index() -> &'static str {
    GREETING
}
