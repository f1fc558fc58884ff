use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use lexis_core::normalize::NOT_FOUND;
use lexis_core::types::LookupResponse;
use lexis_core::{Dictionary, Direction, Lexicon};
use tokio::time::timeout;
use tower::ServiceExt;

use crate::controller::AppController;
use crate::server::create_router;
use crate::state::AppState;

fn state(lemmatize: bool) -> AppState {
    let en_fr = Dictionary::from_lines(
        Direction::EnFr,
        [
            "eat {v} :: manger",
            "apple {n} :: SEE: fruit ::",
            "fruit {n} :: fruit /fʁɥi/",
            "dog {n} :: chien",
        ],
    );
    let fr_en = Dictionary::from_lines(
        Direction::FrEn,
        ["pomme {f} :: apple", "manger {v} :: to eat", "chien {m} :: dog"],
    );
    AppState::from_lexicon(Lexicon::new(en_fr, fr_en), lemmatize)
}

fn app() -> Router {
    create_router(state(true))
}

async fn post_word(router: Router, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/translate-word/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn translate(router: Router, word: &str) -> LookupResponse {
    let body = serde_json::json!({ "word": word }).to_string();
    let (status, bytes) = post_word(router, &body).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_translate_infinitive() {
    let response = translate(app(), "to eat").await;

    assert_eq!(response.input_word, "to eat");
    assert_eq!(response.cleaned_word, "eat");
    assert_eq!(response.translations, vec!["EN -> FR: eat {v} :: manger"]);
}

#[tokio::test]
async fn test_translate_french_plural_through_lemmatizer() {
    let response = translate(app(), "les pommes").await;

    assert_eq!(response.cleaned_word, "pommes");
    assert_eq!(response.translations, vec!["FR -> EN: pomme {f} :: apple"]);
}

#[tokio::test]
async fn test_english_plural_through_lemmatizer() {
    let response = translate(app(), "Dogs").await;

    assert_eq!(response.translations, vec!["EN -> FR: dog {n} :: chien"]);
}

#[tokio::test]
async fn test_disabled_lemmatizer_misses_plural() {
    let response = translate(create_router(state(false)), "les pommes").await;

    assert_eq!(response.translations, vec![NOT_FOUND.to_string()]);
}

#[tokio::test]
async fn test_redirect_resolved_and_phonetics_stripped() {
    let response = translate(app(), "apple").await;

    assert_eq!(response.translations, vec!["EN -> FR: fruit {n} :: fruit"]);
}

#[tokio::test]
async fn test_not_found_is_success_with_sentinel() {
    let response = translate(app(), "xylophone").await;

    assert_eq!(response.translations, vec![NOT_FOUND.to_string()]);
}

#[tokio::test]
async fn test_blank_word_is_bad_request() {
    let (status, bytes) = post_word(app(), r#"{"word": "   "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Query is empty");
}

#[tokio::test]
async fn test_missing_word_field_is_rejected() {
    let (status, _) = post_word(app(), r#"{"text": "eat"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_reports_dictionaries() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dictionaries"][0]["entries"], 4);
    assert_eq!(body["dictionaries"][1]["headwords"], 3);
}

#[tokio::test]
async fn test_concurrent_lookups_share_state() {
    let router = app();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let router = router.clone();
        handles.push(tokio::spawn(async move { translate(router, "to eat").await }));
    }

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.translations, vec!["EN -> FR: eat {v} :: manger"]);
    }
}

#[tokio::test]
async fn test_controller_stops_on_cancel() {
    let controller = Arc::new(AppController::new(state(true)));
    let server = controller.clone();
    let handle = tokio::spawn(async move { server.serve("127.0.0.1:0").await });

    controller.cancel_token().cancel();

    let result = timeout(Duration::from_secs(2), handle).await;
    match result {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => panic!("Server error: {}", e),
        Ok(Err(e)) => panic!("Server task panicked: {}", e),
        Err(_) => panic!("Timeout - server ignored cancellation"),
    }
}
