mod ai;
mod health_check;
mod order;
mod products;

pub use ai::*;
pub use health_check::*;
pub use order::*;
pub use products::*;

use actix_web::{http::StatusCode, HttpResponse};

// Every error body has the shape {"detail": "..."}
pub fn detail_response(status: StatusCode, detail: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "detail": detail.to_string()
    }))
}
