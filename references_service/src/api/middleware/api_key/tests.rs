use super::*;
use axum::{Router, body::Body, routing::get};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn make_app(allow_any: bool) -> Router {
    Router::new().route("/", get(|| async { "hello world" })).layer(
        axum::middleware::from_fn_with_state(
            ApiKeyPolicy::new(ApiKey::from_static("website-key"), allow_any),
            handler,
        ),
    )
}

async fn error_body(res: Response) -> OasstErrorResponse {
    let body = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn it_catches_missing_key() {
    let res = make_app(false)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(error_body(res).await.error_code, OasstErrorCode::ApiKeyMissing);
}

#[tokio::test]
async fn it_rejects_the_wrong_key() {
    let res = make_app(false)
        .oneshot(
            Request::builder()
                .uri("/")
                .header(API_KEY_HEADER, "guess")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = error_body(res).await;
    assert_eq!(body.error_code, OasstErrorCode::ApiKeyInvalid);
    assert_eq!(body.message, "Could not validate credentials");
}

#[tokio::test]
async fn it_accepts_the_header_key() {
    let res = make_app(false)
        .oneshot(
            Request::builder()
                .uri("/")
                .header(API_KEY_HEADER, "website-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"hello world");
}

#[tokio::test]
async fn query_key_wins_over_header() {
    let res = make_app(false)
        .oneshot(
            Request::builder()
                .uri("/?api_key=website-key")
                .header(API_KEY_HEADER, "guess")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn allow_any_still_requires_a_key() {
    let res = make_app(true)
        .oneshot(
            Request::builder()
                .uri("/")
                .header(API_KEY_HEADER, "anything")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = make_app(true)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
