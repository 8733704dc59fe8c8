//! Lookup command handlers for the CLI.
//!
//! Each handler performs one request and returns the text to print. Errors
//! are propagated unchanged so the process exits non-zero with the cause.

use bibleapi_client::BibleApiClient;
use bibleapi_core::{ChapterRequest, VerseRequest};

/// Fetch a verse (or verse range) and render it for stdout.
///
/// # Errors
///
/// Returns an error on network failure, a non-JSON body, or a body without a
/// `verse` key.
pub(crate) async fn run_verse(
    client: &BibleApiClient,
    request: &VerseRequest,
    with_reference: bool,
) -> anyhow::Result<String> {
    let response = client.get_verse(request).await?;
    Ok(render(&response.verse, response.reference.as_deref(), with_reference))
}

/// Fetch a chapter (or chapter range) and render it for stdout.
///
/// # Errors
///
/// Returns an error on network failure, a non-JSON body, or a body without a
/// `verses` key.
pub(crate) async fn run_chapter(
    client: &BibleApiClient,
    request: &ChapterRequest,
    with_reference: bool,
) -> anyhow::Result<String> {
    let response = client.get_chapter(request).await?;
    Ok(render(&response.verses, response.reference.as_deref(), with_reference))
}

/// Prefix `text` with the reference line when asked and the service sent one.
fn render(text: &str, reference: Option<&str>, with_reference: bool) -> String {
    match reference {
        Some(reference) if with_reference => format!("{reference}\n{text}"),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn render_without_reference_is_plain_text() {
        assert_eq!(render("In the beginning", Some("Genesis 1:1"), false), "In the beginning");
    }

    #[test]
    fn render_with_reference_prefixes_line() {
        assert_eq!(
            render("In the beginning", Some("Genesis 1:1"), true),
            "Genesis 1:1\nIn the beginning"
        );
    }

    #[test]
    fn render_with_reference_but_none_sent() {
        assert_eq!(render("In the beginning", None, true), "In the beginning");
    }

    #[tokio::test]
    async fn run_verse_renders_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get_verse/genesis/1/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "verse": "The earth was without form, and void;",
                "reference": "Genesis 1:2",
            })))
            .mount(&server)
            .await;

        let client = BibleApiClient::with_base_url(&server.uri(), 5, "bibleapi-test/0.1").unwrap();
        let output = run_verse(&client, &VerseRequest::new("genesis", 1, 2), true)
            .await
            .unwrap();

        assert_eq!(output, "Genesis 1:2\nThe earth was without form, and void;");
    }

    #[tokio::test]
    async fn run_chapter_propagates_missing_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get_chapter/psalms/23"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = BibleApiClient::with_base_url(&server.uri(), 5, "bibleapi-test/0.1").unwrap();
        let err = run_chapter(&client, &ChapterRequest::new("psalms", 23), false)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("\"verses\""), "got: {err}");
    }
}
