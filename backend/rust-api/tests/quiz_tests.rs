mod common;

use axum::body::to_bytes;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

// Correct options, in question order.
const CORRECT_ANSWERS: [&str; 5] = ["32°F", "373.15K", "-40°", "-273.15°C", "37°C"];

async fn create_session(app: &axum::Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/quiz/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn submit(app: &axum::Router, session_id: &str, answer: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/quiz/sessions/{}/answers", session_id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({ "answer": answer })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_create_session_starts_at_question_zero() {
    let app = common::create_test_app().await;
    let json = create_session(&app).await;

    assert!(json["session_id"].as_str().is_some());
    assert_eq!(json["total_questions"], 5);
    assert_eq!(json["question"]["index"], 0);
    assert_eq!(json["question"]["prompt"], "What is 0°C in Fahrenheit?");
    assert_eq!(json["question"]["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_submit_correct_answer() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    let (status, json) = submit(&app, session_id, "32°F").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["correct"], true);
    assert_eq!(json["quiz_score"], 1);
    assert_eq!(json["current_question"], 1);
    assert_eq!(json["completed"], false);
    // correct_answer is only reported on wrong answers
    assert!(json.get("correct_answer").is_none() || json["correct_answer"].is_null());
    assert_eq!(json["next_question"]["index"], 1);
}

#[tokio::test]
async fn test_submit_incorrect_answer_reports_correct_option() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    let (status, json) = submit(&app, session_id, "100°F").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["correct"], false);
    assert_eq!(json["correct_answer"], "32°F");
    assert_eq!(json["quiz_score"], 0);
    assert_eq!(json["current_question"], 1);
}

#[tokio::test]
async fn test_five_submissions_complete_the_quiz() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    // Alternate right and wrong; completion is independent of correctness
    let answers = ["32°F", "100K", "-40°", "0°C", "50°C"];
    let mut last = serde_json::Value::Null;
    for (i, answer) in answers.iter().enumerate() {
        let (status, json) = submit(&app, session_id, answer).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["current_question"], i as i64 + 1);
        // Score can never exceed the number of questions answered
        assert!(json["quiz_score"].as_i64().unwrap() <= i as i64 + 1);
        last = json;
    }

    assert_eq!(last["completed"], true);
    assert_eq!(last["current_question"], 5);
    assert_eq!(last["quiz_score"], 2);
    assert!(last.get("next_question").is_none() || last["next_question"].is_null());
}

#[tokio::test]
async fn test_perfect_run_scores_five() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    let mut last = serde_json::Value::Null;
    for answer in CORRECT_ANSWERS {
        let (status, json) = submit(&app, session_id, answer).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["correct"], true);
        last = json;
    }

    assert_eq!(last["quiz_score"], 5);
    assert_eq!(last["completed"], true);
}

#[tokio::test]
async fn test_submit_after_completion_is_conflict() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    for answer in CORRECT_ANSWERS {
        let (status, _) = submit(&app, session_id, answer).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = submit(&app, session_id, "32°F").await;
    assert_eq!(status, StatusCode::CONFLICT);

    // State must be untouched by the rejected submission
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/quiz/sessions/{}", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["current_question"], 5);
    assert_eq!(json["quiz_score"], 5);
    assert_eq!(json["completed"], true);
}

#[tokio::test]
async fn test_restart_resets_session() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    // Restart works mid-quiz, not only from the completed state
    submit(&app, session_id, "32°F").await;
    submit(&app, session_id, "100K").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/quiz/sessions/{}/restart", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["current_question"], 0);
    assert_eq!(json["quiz_score"], 0);
    assert_eq!(json["completed"], false);
    assert_eq!(json["question"]["index"], 0);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = common::create_test_app().await;

    let (status, _) = submit(&app, "no-such-session", "32°F").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/quiz/sessions/no-such-session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/quiz/sessions/no-such-session/restart")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = common::create_test_app().await;
    let session = create_session(&app).await;
    let session_id = session["session_id"].as_str().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/quiz/sessions/{}/answers", session_id))
                .header("content-type", "application/json")
                .body(Body::from("{\"wrong_field\": 1}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 400);
}
