mod client;
mod prompt;
mod response;

pub use client::GeminiClient;
pub use prompt::build_post_prompt;
pub use response::{parse_response, ParsedPost, DEFAULT_TITLE};

use crate::config::{self, Config};
use crate::error::Result;
use crate::post::{Post, PostRequest};
use tracing::{debug, warn};

/// Generate a post for the given request
pub async fn generate_post(config: &Config, request: &PostRequest) -> Result<Post> {
    let api_key = config::resolve_api_key(&config.gemini)?;
    let client = GeminiClient::new(&config.gemini, api_key)?;

    let prompt = build_post_prompt(request);
    debug!(prompt_length = prompt.len(), "sending generation request");

    let raw = match client.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            // The failure text becomes the raw response and the parser runs
            // over it; the result degrades to a visible status, never a crash
            warn!("generation request failed: {}", e);
            format!("Error: {}", e)
        }
    };

    build_post_from_response(&raw, request)
}

fn build_post_from_response(raw: &str, request: &PostRequest) -> Result<Post> {
    let parsed = parse_response(raw);

    let mut builder = Post::builder()
        .title(parsed.title)
        .content(parsed.content)
        .subreddit(&request.subreddit)
        .subreddit_description(&request.description)
        .intensity(request.intensity);

    if let Some(limitations) = request.limitations() {
        builder = builder.limitations(limitations);
    }
    if let Some(topic) = request.topic() {
        builder = builder.topic(topic);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostIntensity;

    fn request() -> PostRequest {
        PostRequest {
            subreddit: "testsubreddit".to_string(),
            description: "A test subreddit".to_string(),
            limitations: Some("No politics".to_string()),
            topic: Some("  ".to_string()),
            intensity: PostIntensity::High,
        }
    }

    #[test]
    fn test_build_post_from_structured_response() {
        let post =
            build_post_from_response("TITLE: Foo\n\nCONTENT:\nBar baz", &request()).unwrap();
        assert_eq!(post.title(), "Foo");
        assert_eq!(post.content(), "Bar baz");
        assert_eq!(post.subreddit(), "testsubreddit");
        assert_eq!(post.intensity(), PostIntensity::High);
        assert!(post.has_limitations());
        assert!(!post.has_topic());
    }

    #[test]
    fn test_build_post_from_error_payload() {
        // A failed network call degrades to an error string; the fallback
        // parse still produces a valid post carrying that text
        let post = build_post_from_response("Error: Request failed: connection refused", &request())
            .unwrap();
        assert!(post.content().contains("connection refused"));
        assert!(post.is_valid_for_submission());
    }
}
