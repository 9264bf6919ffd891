use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use ferrisfit_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

async fn test_server() -> TestServer {
    let args = Args::try_parse_from([
        "ferrisfit-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        "http://127.0.0.1:9",
        "--server-root-path",
        "",
        "--server-metrics",
        "false",
    ])
    .unwrap();

    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn profile_body() -> Value {
    json!({
        "age": 30,
        "gender": "Male",
        "feet": 5,
        "inches": 10,
        "weight_kg": 80.0,
        "target_weight_kg": 70.0,
        "diet": "Vegetarian"
    })
}

#[tokio::test]
async fn test_health() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_config_exposes_constants() {
    let server = test_server().await;

    let body: Value = server.get("/config").await.json();

    assert_eq!(body["gemini_model"], "gemini-2.5-flash");
    assert_eq!(body["daily_calorie_deficit"], 500.0);
    assert_eq!(body["kcal_per_kg"], 7700.0);
}

#[tokio::test]
async fn test_convert_height() {
    let server = test_server().await;

    let response = server
        .post("/plans/height")
        .json(&json!({ "feet": 5, "inches": 10 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let height_cm = body["height_cm"].as_f64().unwrap();
    assert!((height_cm - 177.8).abs() < 1e-9);
}

#[tokio::test]
async fn test_assess_bmi_boundary() {
    let server = test_server().await;

    let response = server
        .post("/plans/bmi")
        .json(&json!({ "feet": 5, "inches": 10, "weight_kg": 80.0 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["category"], "Overweight");
    assert_eq!(body["data"]["goal"], "Weight Loss");
}

#[tokio::test]
async fn test_create_plan() {
    let server = test_server().await;

    let response = server.post("/plans").json(&profile_body()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let data = &body["data"];
    assert_eq!(data["summary"], "Your BMI is: 25.31 → Overweight (Male)");
    assert_eq!(data["meals"].as_array().unwrap().len(), 4);
    assert_eq!(data["exercises"].as_array().unwrap().len(), 4);
    assert_eq!(data["projection"]["days"], 154);
    assert_eq!(data["projection"]["status"], "losing");
}

#[tokio::test]
async fn test_create_plan_rejects_out_of_range_fields() {
    let server = test_server().await;

    let mut body = profile_body();
    body["age"] = json!(4);
    body["inches"] = json!(12);

    let response = server.post("/plans").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_UNPROCESSABLE_ENTITY");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["age", "inches"]);
}

#[tokio::test]
async fn test_project_progress_at_target() {
    let server = test_server().await;

    let response = server
        .post("/plans/projection")
        .json(&json!({ "weight_kg": 70.0, "target_weight_kg": 70.0 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "at_target");
    assert_eq!(body["data"]["days"], 0);
}

#[tokio::test]
async fn test_meal_plan_query() {
    let server = test_server().await;

    let response = server
        .get("/recommendations/meals")
        .add_query_param("goal", "Weight Gain")
        .add_query_param("diet", "Vegetarian")
        .add_query_param("gender", "Male")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["Morning"]["calories"], 550);
    assert_eq!(body["data"]["Morning"]["protein"], 20);
}

#[tokio::test]
async fn test_exercises_query() {
    let server = test_server().await;

    let response = server
        .get("/recommendations/exercises")
        .add_query_param("goal", "Weight Loss")
        .add_query_param("gender", "Female")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let exercises = body["data"].as_array().unwrap();
    assert_eq!(exercises.len(), 4);
    assert!(exercises[3].as_str().unwrap().starts_with("⚡ For Female:"));
}

#[tokio::test]
async fn test_chat_session_keeps_history_when_model_is_unreachable() {
    let server = test_server().await;

    let created = server.post("/chat/sessions").await;
    created.assert_status(StatusCode::CREATED);
    let session_id = created.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .post(&format!("/chat/sessions/{session_id}/messages"))
        .json(&json!({ "text": "How much protein do I need?" }))
        .await;

    response.assert_status_ok();
    let turn: Value = response.json();
    assert_eq!(turn["data"]["user_message"]["content"], "How much protein do I need?");
    assert_eq!(turn["data"]["assistant_message"]["role"], "assistant");
    assert_eq!(turn["data"]["assistant_message"]["failed"], true);

    let session: Value = server
        .get(&format!("/chat/sessions/{session_id}"))
        .await
        .json();
    let messages = session["data"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");

    server
        .delete(&format!("/chat/sessions/{session_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/chat/sessions/{session_id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_chat_unknown_session() {
    let server = test_server().await;

    let response = server
        .post("/chat/sessions/0190f2a4-7c1e-7000-8000-000000000000/messages")
        .json(&json!({ "text": "hello" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_chat_rejects_empty_text() {
    let server = test_server().await;
    let session_id = server.post("/chat/sessions").await.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .post(&format!("/chat/sessions/{session_id}/messages"))
        .json(&json!({ "text": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_chat_image_rejects_unsupported_type() {
    let server = test_server().await;
    let session_id = server.post("/chat/sessions").await.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0x47, 0x49, 0x46, 0x38])
            .file_name("meal.gif")
            .mime_type("image/gif"),
    );

    let response = server
        .post(&format!("/chat/sessions/{session_id}/messages/image"))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let session: Value = server
        .get(&format!("/chat/sessions/{session_id}"))
        .await
        .json();
    assert!(session["data"]["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_image_without_text_uses_placeholder() {
    let server = test_server().await;
    let session_id = server.post("/chat/sessions").await.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
            .file_name("salad.png")
            .mime_type("image/png"),
    );

    let response = server
        .post(&format!("/chat/sessions/{session_id}/messages/image"))
        .multipart(form)
        .await;

    response.assert_status_ok();
    let turn: Value = response.json();
    assert_eq!(
        turn["data"]["user_message"]["content"],
        "📸 Analyzing uploaded image..."
    );
    assert_eq!(turn["data"]["assistant_message"]["failed"], true);
}

#[tokio::test]
async fn test_chat_image_rejects_overlong_text() {
    let server = test_server().await;
    let session_id = server.post("/chat/sessions").await.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let form = MultipartForm::new().add_text("text", "a".repeat(5001)).add_part(
        "image",
        Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
            .file_name("salad.png")
            .mime_type("image/png"),
    );

    let response = server
        .post(&format!("/chat/sessions/{session_id}/messages/image"))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "text");

    let session: Value = server
        .get(&format!("/chat/sessions/{session_id}"))
        .await
        .json();
    assert!(session["data"]["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_assess_bmi_between_bands_is_obese() {
    let server = test_server().await;

    let response = server
        .post("/plans/bmi")
        .json(&json!({ "feet": 5, "inches": 10, "weight_kg": 78.85 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["category"], "Obese");
    assert_eq!(body["data"]["goal"], "Weight Loss");
}
