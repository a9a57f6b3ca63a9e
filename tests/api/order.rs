use refugio::domain::{Order, OrderStatus};

use crate::helpers::TestApp;

fn two_item_order() -> serde_json::Value {
    serde_json::json!({
        "table_id": "Mesa 1",
        "items": [
            { "product_id": 1, "quantity": 2, "notes": "sin cebolla" },
            { "product_id": 2, "quantity": 1, "notes": null }
        ]
    })
}

#[actix_web::test]
async fn post_order_creates_pending_order(){
    let app = TestApp::spawn_app().await;

    let response = app.post_order(two_item_order()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["table_id"], "Mesa 1");
    assert_eq!(body["items"], two_item_order()["items"]);
    assert_eq!(body["total"], 100.0);
}

#[actix_web::test]
async fn post_order_does_not_check_products_exist(){
    let app = TestApp::spawn_app().await;

    let response = app.post_order(serde_json::json!({
        "table_id": "Domicilio",
        "items": [{ "product_id": 999, "quantity": 3 }]
    })).await;

    assert_eq!(response.status().as_u16(), 200);

    let order: Order = response.json().await.unwrap();
    assert_eq!(order.items[0].product_id, 999);
    assert_eq!(order.items[0].notes, None);
}

#[actix_web::test]
async fn post_order_rejects_invalid_bodies(){
    let app = TestApp::spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({ "table_id": "Mesa 1", "items": [{ "product_id": 1, "quantity": 0 }] }), "zero quantity"),
        (serde_json::json!({ "table_id": "", "items": [] }), "empty table"),
        (serde_json::json!({ "table_id": "Mesa 1" }), "missing items"),
        (serde_json::json!({ "table_id": "Mesa 1", "items": [{ "quantity": 1 }] }), "missing product id"),
    ];

    for (body, description) in test_cases {
        let response = app.post_order(body).await;

        assert_eq!(
            response.status().as_u16(),
            422,
            "The API did not reject an order with {}",
            description
        );
    }

    let orders: Vec<Order> = app.get_orders().await.json().await.unwrap();
    assert!(orders.is_empty());
}

#[actix_web::test]
async fn get_orders_lists_all_orders_in_creation_order(){
    let app = TestApp::spawn_app().await;

    for table in ["Mesa 1", "Mesa 2", "Domicilio"] {
        let response = app.post_order(serde_json::json!({
            "table_id": table,
            "items": [{ "product_id": 1, "quantity": 1 }]
        })).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let response = app.get_orders().await;
    assert_eq!(response.status().as_u16(), 200);

    let orders: Vec<Order> = response.json().await.unwrap();
    let tables: Vec<&str> = orders.iter().map(|o| o.table_id.as_str()).collect();
    assert_eq!(tables, ["Mesa 1", "Mesa 2", "Domicilio"]);
    assert!(orders.iter().all(|o| o.status == OrderStatus::Pending));
}

#[actix_web::test]
async fn patch_order_status_moves_order_through_kitchen(){
    let app = TestApp::spawn_app().await;

    let order: Order = app.post_order(two_item_order()).await.json().await.unwrap();

    let response = app.patch_order_status(order.id, serde_json::json!({ "status": "COOKING" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let updated: Order = response.json().await.unwrap();
    assert_eq!(updated.id, order.id);
    assert_eq!(updated.status, OrderStatus::Cooking);
    assert_eq!(updated.items, order.items);

    let orders: Vec<Order> = app.get_orders().await.json().await.unwrap();
    assert_eq!(orders[0].status, OrderStatus::Cooking);
}

#[actix_web::test]
async fn patch_order_status_for_unknown_order_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.patch_order_status(42, serde_json::json!({ "status": "READY" })).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn patch_order_status_rejects_non_numeric_id(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.patch(format!("{}/orders/abc/status", app.get_app_url()))
        .json(&serde_json::json!({ "status": "READY" }))
        .send()
        .await
        .expect("Failed to send request to order status endpoint");

    assert_eq!(response.status().as_u16(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn patch_order_status_rejects_unknown_status(){
    let app = TestApp::spawn_app().await;

    let order: Order = app.post_order(two_item_order()).await.json().await.unwrap();

    let response = app.patch_order_status(order.id, serde_json::json!({ "status": "BURNT" })).await;
    assert_eq!(response.status().as_u16(), 422);
}
