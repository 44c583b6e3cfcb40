use std::time::Duration;

use chrono::{TimeZone, Utc};
use poster_feed::{FeedFailureKind, FeedProvider, FeedSettings, ReqwestFeedProvider};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FeedSettings {
    FeedSettings {
        endpoint: format!("{}/recent", server.uri()),
        ..FeedSettings::default()
    }
}

#[tokio::test]
async fn provider_parses_posts_in_feed_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"id": "30", "text": "third batch", "created_at": "2026-08-29T12:30:00Z"},
                {"id": "20", "text": "second batch", "created_at": "2026-08-29T12:20:00Z"}
            ]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let provider = ReqwestFeedProvider::new(settings_for(&server));
    let posts = provider.recent_posts().await.expect("fetch ok");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "30");
    assert_eq!(posts[0].text, "third batch");
    assert_eq!(
        posts[0].created_at,
        Utc.with_ymd_and_hms(2026, 8, 29, 12, 30, 0).unwrap()
    );
    assert_eq!(posts[1].id, "20");
}

#[tokio::test]
async fn provider_accepts_an_empty_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let provider = ReqwestFeedProvider::new(settings_for(&server));
    let posts = provider.recent_posts().await.expect("fetch ok");

    assert!(posts.is_empty());
}

#[tokio::test]
async fn provider_caps_oversized_feeds_to_max_items() {
    let server = MockServer::start().await;
    let entries: Vec<String> = (0..9)
        .map(|i| {
            format!(r#"{{"id": "{i}", "text": "post {i}", "created_at": "2026-08-29T12:00:00Z"}}"#)
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/recent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(format!("[{}]", entries.join(",")), "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FeedSettings {
        max_items: 5,
        ..settings_for(&server)
    };
    let provider = ReqwestFeedProvider::new(settings);
    let posts = provider.recent_posts().await.expect("fetch ok");

    assert_eq!(posts.len(), 5);
    assert_eq!(posts[0].id, "0");
}

#[tokio::test]
async fn provider_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recent"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = ReqwestFeedProvider::new(settings_for(&server));
    let err = provider.recent_posts().await.unwrap_err();

    assert_eq!(err.kind, FeedFailureKind::HttpStatus(503));
}

#[tokio::test]
async fn provider_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let provider = ReqwestFeedProvider::new(settings_for(&server));
    let err = provider.recent_posts().await.unwrap_err();

    assert_eq!(err.kind, FeedFailureKind::InvalidBody);
}

#[tokio::test]
async fn provider_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FeedSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let provider = ReqwestFeedProvider::new(settings);
    let err = provider.recent_posts().await.unwrap_err();

    assert_eq!(err.kind, FeedFailureKind::Timeout);
}

#[tokio::test]
async fn provider_rejects_invalid_endpoint() {
    let provider = ReqwestFeedProvider::new(FeedSettings {
        endpoint: "not a url".to_string(),
        ..FeedSettings::default()
    });

    let err = provider.recent_posts().await.unwrap_err();
    assert_eq!(err.kind, FeedFailureKind::InvalidEndpoint);
}
