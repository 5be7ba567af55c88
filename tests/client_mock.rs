//! End-to-end tests for AstrocastClient against a mock endpoint.

use std::time::Duration;

use astrocast::{AstrocastClient, Error, FailureClass, RetryPolicy, Timeframe, ZodiacSign};

fn completion_body(content: &serde_json::Value) -> String {
    serde_json::json!({
        "choices": [ { "message": { "role": "assistant", "content": content.to_string() } } ]
    })
    .to_string()
}

fn horoscope_content() -> serde_json::Value {
    serde_json::json!({
        "summary": "A good day to start things.",
        "love": "Warm and uncomplicated.",
        "career": "Steady progress.",
        "health": "Get some rest.",
        "lucky_number": 7,
        "lucky_color": "blue"
    })
}

fn client_against(server: &mockito::ServerGuard) -> AstrocastClient {
    AstrocastClient::builder()
        .api_key("test-key")
        .base_url(server.url())
        .retry_policy(RetryPolicy {
            max_retries: 1,
            initial_delay: Duration::from_millis(1),
            multiplier: 2.0,
            max_delay: Duration::from_millis(10),
        })
        .build()
        .expect("client")
}

#[tokio::test]
async fn daily_horoscope_is_fetched_once_then_served_from_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&horoscope_content()))
        .expect(1)
        .create_async()
        .await;

    let client = client_against(&server);

    let first = client
        .horoscope(ZodiacSign::Aries, Timeframe::Daily)
        .await
        .expect("first request");
    assert_eq!(first.lucky_number, 7);
    assert_eq!(first.lucky_color, "blue");

    // The identical request inside the TTL window never goes remote.
    let second = client
        .horoscope(ZodiacSign::Aries, Timeframe::Daily)
        .await
        .expect("second request");
    assert_eq!(second, first);

    mock.assert_async().await;

    let stats = client.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.sets, 1);
}

#[tokio::test]
async fn different_signs_do_not_share_cache_entries() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&horoscope_content()))
        .expect(2)
        .create_async()
        .await;

    let client = client_against(&server);

    client
        .horoscope(ZodiacSign::Aries, Timeframe::Weekly)
        .await
        .expect("aries");
    client
        .horoscope(ZodiacSign::Taurus, Timeframe::Weekly)
        .await
        .expect("taurus");

    mock.assert_async().await;
}

#[tokio::test]
async fn authentication_failures_are_not_retried_and_not_cached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"code":"invalid_api_key","message":"bad key"}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_against(&server);

    let result = client.horoscope(ZodiacSign::Leo, Timeframe::Daily).await;
    match result {
        Err(Error::Remote { status, class, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(class, FailureClass::Authentication);
        }
        other => panic!("expected a remote auth error, got {:?}", other.err()),
    }

    mock.assert_async().await;
    assert_eq!(client.cache_stats().sets, 0, "failures are never cached");
}

#[tokio::test]
async fn overload_burns_the_retry_budget_before_surfacing() {
    let mut server = mockito::Server::new_async().await;
    // max_retries = 1 in the test policy: one first attempt, one retry.
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body(r#"{"error":{"type":"overloaded_error"}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_against(&server);

    let result = client.horoscope(ZodiacSign::Virgo, Timeframe::Daily).await;
    assert!(matches!(
        result,
        Err(Error::Remote {
            status: 503,
            class: FailureClass::Overloaded,
            ..
        })
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_model_output_is_terminal() {
    let mut server = mockito::Server::new_async().await;
    let content = serde_json::json!("the stars are silent today");
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&content))
        .expect(1)
        .create_async()
        .await;

    let client = client_against(&server);

    let result = client.horoscope(ZodiacSign::Libra, Timeframe::Daily).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    // A single invocation: decode failures must not burn the retry budget.
    mock.assert_async().await;
    assert_eq!(client.cache_stats().sets, 0);
}

#[tokio::test]
async fn geocode_results_never_expire_and_normalize_their_query() {
    let mut server = mockito::Server::new_async().await;
    let content = serde_json::json!({
        "latitude": 18.5204,
        "longitude": 73.8567,
        "resolved_name": "Pune, Maharashtra, India",
        "timezone": "Asia/Kolkata"
    });
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&content))
        .expect(1)
        .create_async()
        .await;

    let client = client_against(&server);

    let first = client.geocode("  Pune,   Maharashtra ").await.expect("first");
    assert!((first.latitude - 18.5204).abs() < 1e-6);

    // Spelling noise normalizes to the same key; served from cache.
    let second = client.geocode("pune, maharashtra").await.expect("second");
    assert_eq!(second, first);

    mock.assert_async().await;
}
