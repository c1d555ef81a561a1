//! Account, cart, wishlist, order, and review flows over HTTP.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use karigar_integration_tests::TestContext;

async fn product_ids(ctx: &TestContext) -> Vec<String> {
    let products: Vec<Value> = ctx.get_json("/api/products").await;
    products
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_register_login_round_trip() {
    let ctx = TestContext::seeded().await;
    let user = ctx.register("anika", "terracotta-horse").await;
    assert_eq!(user["role"], "customer");
    assert!(user.get("passwordHash").is_none());

    let response = ctx
        .post(
            "/api/auth/login",
            &json!({ "email": "anika@example.com", "password": "terracotta-horse" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], user["id"]);

    let response = ctx
        .post(
            "/api/auth/login",
            &json!({ "email": "anika@example.com", "password": "wrong-horse" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let ctx = TestContext::seeded().await;
    ctx.register("anika", "terracotta-horse").await;

    let response = ctx
        .post(
            "/api/auth/register",
            &json!({
                "username": "anika2",
                "email": "anika@example.com",
                "password": "terracotta-horse",
                "firstName": "Anika",
                "lastName": "Bose"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let ctx = TestContext::seeded().await;
    let response = ctx
        .client
        .post(ctx.url("/api/cart"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_checkout_flow() {
    let ctx = TestContext::seeded().await;
    let user = ctx.register("anika", "terracotta-horse").await;
    let user_id = user["id"].as_str().unwrap();
    let products = product_ids(&ctx).await;

    for product_id in &products[..2] {
        let response = ctx
            .post(
                "/api/cart",
                &json!({ "userId": user_id, "productId": product_id, "quantity": 1 }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let cart: Vec<Value> = ctx.get_json(&format!("/api/cart/{user_id}")).await;
    assert_eq!(cart.len(), 2);
    let first_item = cart[0]["id"].as_str().unwrap();
    let response = ctx
        .put(&format!("/api/cart/{first_item}"), &json!({ "quantity": 3 }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cart: Vec<Value> = ctx.get_json(&format!("/api/cart/{user_id}")).await;
    let items: Vec<Value> = cart
        .iter()
        .map(|row| {
            json!({
                "productId": row["productId"],
                "quantity": row["quantity"],
                "price": row["product"]["price"],
            })
        })
        .collect();
    assert_eq!(items[0]["quantity"], 3);

    let response = ctx
        .post(
            "/api/orders",
            &json!({
                "userId": user_id,
                "totalAmount": "20496.00",
                "shippingAddress": { "city": "Varanasi", "pin": "221001" },
                "items": items,
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let order: Value = response.json().await.unwrap();
    assert_eq!(order["items"].as_array().unwrap().len(), 2);

    let response = ctx.delete(&format!("/api/cart/user/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cart: Vec<Value> = ctx.get_json(&format!("/api/cart/{user_id}")).await;
    assert!(cart.is_empty());

    let orders: Vec<Value> = ctx.get_json(&format!("/api/orders/{user_id}")).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["status"], "pending");
    assert_eq!(orders[0]["items"][0]["price"], "2499.00");
}

#[tokio::test]
async fn test_concurrent_cart_adds_accumulate() {
    let ctx = TestContext::seeded().await;
    let user = ctx.register("anika", "terracotta-horse").await;
    let user_id = user["id"].as_str().unwrap().to_string();
    let product_id = product_ids(&ctx).await.remove(0);

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let client = ctx.client.clone();
        let url = ctx.url("/api/cart");
        let body = json!({ "userId": user_id, "productId": product_id, "quantity": 1 });
        tasks.push(tokio::spawn(async move {
            client.post(url).json(&body).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let cart: Vec<Value> = ctx.get_json(&format!("/api/cart/{user_id}")).await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["quantity"], 20);
}

#[tokio::test]
async fn test_wishlist_flow() {
    let ctx = TestContext::seeded().await;
    let user = ctx.register("anika", "terracotta-horse").await;
    let user_id = user["id"].as_str().unwrap();
    let products = product_ids(&ctx).await;

    for product_id in &products[1..3] {
        ctx.post(
            "/api/wishlist",
            &json!({ "userId": user_id, "productId": product_id }),
        )
        .await;
    }
    let wishlist: Vec<Value> = ctx.get_json(&format!("/api/wishlist/{user_id}")).await;
    assert_eq!(wishlist.len(), 2);
    assert_eq!(wishlist[0]["product"]["id"], products[1].as_str());

    let response = ctx
        .delete(&format!("/api/wishlist/{user_id}/{}", products[1]))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let wishlist: Vec<Value> = ctx.get_json(&format!("/api/wishlist/{user_id}")).await;
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0]["productId"], products[2].as_str());
}

#[tokio::test]
async fn test_review_flow() {
    let ctx = TestContext::seeded().await;
    let user = ctx.register("anika", "terracotta-horse").await;
    let products = product_ids(&ctx).await;
    let product_id = &products[3];

    let response = ctx
        .post(
            "/api/reviews",
            &json!({
                "userId": user["id"],
                "productId": product_id,
                "rating": 4,
                "comment": "Vivid colours, lovely fish motif"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let reviews: Vec<Value> = ctx
        .get_json(&format!("/api/products/{product_id}/reviews"))
        .await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 4);
    assert_eq!(reviews[0]["user"]["username"], "anika");

    let response = ctx
        .post(
            "/api/reviews",
            &json!({ "userId": user["id"], "productId": product_id, "rating": 9 }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
