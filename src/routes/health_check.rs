use actix_web::HttpResponse;

#[tracing::instrument(
    "Checking if api is online"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().body("Working")
}

#[tracing::instrument(
    "Serving root"
)]
pub async fn root() -> HttpResponse{
    HttpResponse::Ok().json(serde_json::json!({
        "message": "El Refugio API funcionando 🚀"
    }))
}
