mod common;

use common::{MockTransport, not_found, ok_json, respond};
use geniusing::http::{FetchError, Fetcher};
use serde::Deserialize;
use serde_json::json;

const URL: &str = "http://genius.test/songs/1";

#[tokio::test]
async fn test_fetch_recovers_after_transient_failures() {
    let transport = MockTransport::new(|_, seen| match seen {
        0 => respond(500, "oops"),
        1 => respond(200, "<html>not json</html>"),
        2 => Err("connection reset".into()),
        _ => ok_json(json!({"response": {"ok": true}})),
    });
    let fetcher = Fetcher::new(transport);

    let value = fetcher.fetch(URL, &[]).await.unwrap();

    assert_eq!(value["response"]["ok"], json!(true));
    assert_eq!(fetcher.transport().count(URL), 4);
}

#[tokio::test]
async fn test_fetch_gives_up_after_exactly_the_attempt_limit() {
    let fetcher = Fetcher::new(MockTransport::new(|_, _| respond(503, "busy"))).with_attempts(4);

    let err = fetcher.fetch(URL, &[]).await.unwrap_err();

    match err {
        FetchError::Exhausted {
            url,
            attempts,
            last,
        } => {
            assert_eq!(url, URL);
            assert_eq!(attempts, 4);
            assert!(last.contains("503"));
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert_eq!(fetcher.transport().count(URL), 4);
}

#[tokio::test]
async fn test_default_attempt_limit_is_ten() {
    let fetcher = Fetcher::new(MockTransport::new(|_, _| not_found()));

    assert!(fetcher.fetch(URL, &[]).await.is_err());
    assert_eq!(fetcher.transport().count(URL), 10);
}

#[tokio::test]
async fn test_last_attempt_may_succeed() {
    let fetcher = Fetcher::new(MockTransport::new(|_, seen| {
        if seen < 2 {
            not_found()
        } else {
            ok_json(json!({}))
        }
    }))
    .with_attempts(3);

    assert!(fetcher.fetch(URL, &[]).await.is_ok());
}

#[tokio::test]
async fn test_api_requests_carry_credentials_and_params() {
    let fetcher = Fetcher::new(MockTransport::new(|_, _| ok_json(json!({}))));

    fetcher
        .fetch("http://genius.test/search", &[("q", "Eve".to_string()), ("page", "2".to_string())])
        .await
        .unwrap();
    fetcher.fetch_page("http://genius.test/lyrics/1").await.unwrap();

    let requests = fetcher.transport().requests();
    assert!(requests[0].authenticated);
    assert_eq!(requests[0].param("q"), Some("Eve"));
    assert_eq!(requests[0].param("page"), Some("2"));
    assert!(!requests[1].authenticated);
    assert!(requests[1].params.is_empty());
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct NeedsTitle {
    title: String,
}

#[tokio::test]
async fn test_missing_keys_fail_without_retrying() {
    let fetcher = Fetcher::new(MockTransport::new(|_, _| ok_json(json!({"name": "x"}))));

    let err = fetcher.fetch_as::<NeedsTitle>(URL, &[]).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
    assert_eq!(fetcher.transport().count(URL), 1);
}

#[tokio::test]
async fn test_pages_need_no_json() {
    let fetcher = Fetcher::new(MockTransport::new(|_, seen| {
        if seen == 0 {
            respond(502, "")
        } else {
            respond(200, "<html></html>")
        }
    }));

    assert_eq!(fetcher.fetch_page(URL).await.unwrap(), "<html></html>");
}
