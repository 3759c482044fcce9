mod common;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use serde_json::{json, Value};
use std::collections::HashSet;

use common::{TestApp, PAGE_SIZE};

fn assert_error(body: &Value, code: u16, message: &str) {
  assert_eq!(body["success"], false);
  assert_eq!(body["error"], code);
  assert_eq!(body["message"], message);
}

fn ids(body: &Value) -> Vec<i64> {
  body["questions"]
    .as_array()
    .unwrap()
    .iter()
    .map(|q| q["id"].as_i64().unwrap())
    .collect()
}

// ==================== Categories ====================

#[tokio::test]
async fn test_get_all_categories() {
  let app = TestApp::seeded();

  let response = app.server.get("/categories").await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["categories"]["1"], "Science");
  assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn test_404_when_no_categories() {
  let app = TestApp::empty();

  let response = app.server.get("/categories").await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
  assert_error(&response.json::<Value>(), 404, "resource not found");
}

#[tokio::test]
async fn test_get_questions_by_category() {
  let app = TestApp::seeded();

  let response = app.server.get("/categories/1/questions").await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["currentCategory"], 1);
  assert_eq!(body["totalQuestions"], 3);
  assert!(body["questions"]
    .as_array()
    .unwrap()
    .iter()
    .all(|q| q["category"] == 1));
}

#[tokio::test]
async fn test_404_get_requesting_beyond_valid_category() {
  let app = TestApp::seeded();

  let response = app.server.get("/categories/100000/questions").await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
  assert_error(&response.json::<Value>(), 404, "resource not found");
}

#[tokio::test]
async fn test_404_for_non_numeric_category() {
  let app = TestApp::seeded();

  let response = app.server.get("/categories/science/questions").await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
  assert_error(&response.json::<Value>(), 404, "resource not found");
}

// ==================== Listing ====================

#[tokio::test]
async fn test_get_paginated_questions() {
  let app = TestApp::seeded();

  let response = app.server.get("/questions").await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["total_questions"], app.question_count());
  assert!(body["currentCategory"].is_null());
  assert_eq!(ids(&body).len(), PAGE_SIZE as usize);
  assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_pages_are_disjoint_and_ordered() {
  let app = TestApp::seeded();

  let first = ids(&app.server.get("/questions?page=1").await.json::<Value>());
  let second = ids(&app.server.get("/questions?page=2").await.json::<Value>());

  assert!(first.windows(2).all(|w| w[0] < w[1]));
  assert!(second.windows(2).all(|w| w[0] < w[1]));
  assert!(first.last().unwrap() < second.first().unwrap());
  assert_eq!((first.len() + second.len()) as i64, app.question_count());
}

#[tokio::test]
async fn test_404_sent_requesting_beyond_valid_page() {
  let app = TestApp::seeded();

  let response = app.server.get("/questions?page=1000").await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
  assert_error(&response.json::<Value>(), 404, "resource not found");
}

#[tokio::test]
async fn test_400_for_unparseable_page() {
  let app = TestApp::seeded();

  let response = app.server.get("/questions?page=abc").await;
  assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
  assert_error(&response.json::<Value>(), 400, "bad request");
}

#[tokio::test]
async fn test_list_with_search_term() {
  let app = TestApp::seeded();

  let response = app.server.get("/questions?searchTerm=world").await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["total_questions"], 2);
  assert_eq!(ids(&body).len(), 2);
}

// ==================== Search ====================

#[tokio::test]
async fn test_get_question_search_with_results() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/questions")
    .json(&json!({ "searchTerm": "World" }))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["totalQuestions"], 2);
  assert!(body["currentCategory"].is_null());
  for q in body["questions"].as_array().unwrap() {
    assert!(q["question"].as_str().unwrap().contains("World"));
  }
}

#[tokio::test]
async fn test_get_question_search_without_results() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/questions")
    .json(&json!({ "searchTerm": "sgfgfgfgfgfg" }))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["totalQuestions"], 0);
  assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn test_dedicated_search_route() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/questions/search")
    .json(&json!({ "searchTerm": "title" }))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["totalQuestions"], 1);
  assert_eq!(ids(&body).len(), 1);
}

#[tokio::test]
async fn test_search_folds_case_of_accented_text() {
  let app = TestApp::seeded();

  let created = app
    .server
    .post("/questions")
    .json(&json!({
      "question": "Who painted the ÉCOLE D'ATHÈNES?",
      "answer": "Raphael",
      "difficulty": 3,
      "category": 2
    }))
    .await;
  assert_eq!(created.status_code(), StatusCode::OK);
  let id = created.json::<Value>()["created"].as_i64().unwrap();

  let response = app
    .server
    .post("/questions/search")
    .json(&json!({ "searchTerm": "école" }))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["totalQuestions"], 1);
  assert_eq!(ids(&body), vec![id]);
}

// ==================== Create ====================

#[tokio::test]
async fn test_create_new_question() {
  let app = TestApp::seeded();
  let before = app.question_count();

  let response = app
    .server
    .post("/questions")
    .json(&json!({
      "question": "Heres a new question string",
      "answer": "Heres a new answer string",
      "difficulty": 1,
      "category": 3
    }))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert!(body["created"].as_i64().unwrap() > 0);
  assert_eq!(body["total_questions"], before + 1);
  assert!(!ids(&body).is_empty());
  assert_eq!(app.question_count(), before + 1);
}

#[tokio::test]
async fn test_422_for_empty_question_text() {
  let app = TestApp::seeded();
  let before = app.question_count();

  let response = app
    .server
    .post("/questions")
    .json(&json!({ "question": "  ", "answer": "a", "difficulty": 1, "category": 1 }))
    .await;
  assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_error(&response.json::<Value>(), 422, "unprocessable");
  assert_eq!(app.question_count(), before);
}

#[tokio::test]
async fn test_422_for_bad_difficulty_and_category() {
  let app = TestApp::seeded();
  let before = app.question_count();

  let bodies = [
    json!({ "question": "q", "answer": "a", "difficulty": 6, "category": 1 }),
    json!({ "question": "q", "answer": "a", "difficulty": "hard", "category": 1 }),
    json!({ "question": "q", "answer": "a", "difficulty": 2, "category": 999 }),
    json!({ "question": "q", "answer": "a", "difficulty": 2 }),
    json!({}),
  ];
  for body in bodies {
    let response = app.server.post("/questions").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
  }
  assert_eq!(app.question_count(), before);
}

#[tokio::test]
async fn test_400_for_malformed_json() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/questions")
    .bytes(Bytes::from_static(b"{\"question\": "))
    .content_type("application/json")
    .await;
  assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
  assert_error(&response.json::<Value>(), 400, "bad request");
}

#[tokio::test]
async fn test_405_if_question_creation_not_allowed() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/questions/45")
    .json(&json!({ "question": "q", "answer": "a", "difficulty": 1, "category": 1 }))
    .await;
  assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
  assert_error(&response.json::<Value>(), 405, "method not allowed");
}

// ==================== Delete ====================

#[tokio::test]
async fn test_delete_question() {
  let app = TestApp::seeded();
  let before = app.question_count();

  let response = app.server.delete("/questions/6").await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["deleted"], 6);
  assert_eq!(body["totalQuestions"], before - 1);
  assert!(!ids(&body).contains(&6));
  assert_eq!(app.question_count(), before - 1);

  let again = app.server.delete("/questions/6").await;
  assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_404_if_question_does_not_exist() {
  let app = TestApp::seeded();
  let before = app.question_count();

  let response = app.server.delete("/questions/-1").await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
  assert_error(&response.json::<Value>(), 404, "resource not found");
  assert_eq!(app.question_count(), before);
}

// ==================== Quizzes ====================

#[tokio::test]
async fn test_request_one_question() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/quizzes")
    .json(&json!({
      "previous_questions": [1, 4, 20, 15],
      "quiz_category": { "id": "1", "type": "Science" }
    }))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);

  let body = response.json::<Value>();
  assert_eq!(body["success"], true);
  assert_eq!(body["question"]["category"], 1);
  let id = body["question"]["id"].as_i64().unwrap();
  assert!(![1, 4, 20, 15].contains(&id));
}

#[tokio::test]
async fn test_quiz_plays_through_all_categories() {
  let app = TestApp::seeded();
  let total = app.question_count() as usize;

  let mut previous: HashSet<i64> = HashSet::new();
  for _ in 0..total {
    let response = app
      .server
      .post("/quizzes")
      .json(&json!({
        "previous_questions": previous.iter().collect::<Vec<_>>(),
        "quiz_category": { "id": 0, "type": "click" }
      }))
      .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let id = response.json::<Value>()["question"]["id"].as_i64().unwrap();
    assert!(previous.insert(id), "question {} served twice", id);
  }

  let exhausted = app
    .server
    .post("/quizzes")
    .json(&json!({ "previous_questions": previous.iter().collect::<Vec<_>>() }))
    .await;
  assert_eq!(exhausted.status_code(), StatusCode::NOT_FOUND);
  assert_error(&exhausted.json::<Value>(), 404, "resource not found");
}

#[tokio::test]
async fn test_quiz_404_for_empty_category() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/quizzes")
    .json(&json!({ "previous_questions": [], "quiz_category": { "id": 42 } }))
    .await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quiz_422_for_non_numeric_category() {
  let app = TestApp::seeded();

  let response = app
    .server
    .post("/quizzes")
    .json(&json!({ "previous_questions": [], "quiz_category": { "id": "science" } }))
    .await;
  assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
  assert_error(&response.json::<Value>(), 422, "unprocessable");
}

// ==================== Misc ====================

#[tokio::test]
async fn test_unknown_route_is_json_404() {
  let app = TestApp::seeded();

  let response = app.server.get("/books").await;
  assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
  assert_error(&response.json::<Value>(), 404, "resource not found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
  let app = TestApp::seeded();

  let response = app
    .server
    .get("/categories")
    .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
    .await;
  assert_eq!(response.status_code(), StatusCode::OK);
  assert_eq!(
    response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
    "*"
  );
}
