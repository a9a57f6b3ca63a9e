use crate::helpers::TestApp;

#[actix_web::test]
async fn check_health_route(){
    let app = TestApp::spawn_app().await;
    let url = app.get_app_url();

    let response = reqwest::get(format!("{}/health", url))
                    .await
                    .expect("Failed to get response");

    assert_eq!(response.status().as_u16(), 200)
}

#[actix_web::test]
async fn root_returns_liveness_message(){
    let app = TestApp::spawn_app().await;

    let response = reqwest::get(app.get_app_url())
                    .await
                    .expect("Failed to get response");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("El Refugio"));
}

#[actix_web::test]
async fn cors_preflight_allows_configured_origin(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.request(reqwest::Method::OPTIONS, format!("{}/products/", app.get_app_url()))
                    .header("Origin", "http://localhost:5173")
                    .header("Access-Control-Request-Method", "POST")
                    .send()
                    .await
                    .expect("Failed to send preflight request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}

#[actix_web::test]
async fn cors_preflight_rejects_other_origins(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.request(reqwest::Method::OPTIONS, format!("{}/products/", app.get_app_url()))
                    .header("Origin", "http://evil.example")
                    .header("Access-Control-Request-Method", "POST")
                    .send()
                    .await
                    .expect("Failed to send preflight request");

    assert!(response.headers().get("access-control-allow-origin").is_none());
}
