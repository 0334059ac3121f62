use crate::error::{RagegenError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How strongly the generated content leans into controversy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PostIntensity {
    Mild,
    #[default]
    Moderate,
    High,
}

impl PostIntensity {
    pub fn label(&self) -> &'static str {
        match self {
            PostIntensity::Mild => "MILD",
            PostIntensity::Moderate => "MODERATE",
            PostIntensity::High => "HIGH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PostIntensity::Mild => "Subtle ragebait with light controversy",
            PostIntensity::Moderate => "Moderate controversy to drive engagement",
            PostIntensity::High => "Strong emotional triggers for maximum engagement",
        }
    }
}

impl std::fmt::Display for PostIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostIntensity::Mild => write!(f, "mild"),
            PostIntensity::Moderate => write!(f, "moderate"),
            PostIntensity::High => write!(f, "high"),
        }
    }
}

/// Input for a single generation run
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub subreddit: String,
    pub description: String,
    pub limitations: Option<String>,
    pub topic: Option<String>,
    pub intensity: PostIntensity,
}

impl PostRequest {
    /// Validate user input before any generation work happens
    pub fn validate(&self) -> Result<()> {
        if self.subreddit.trim().is_empty() {
            return Err(RagegenError::InvalidInput(
                "Subreddit name is required".to_string(),
            ));
        }
        if !self
            .subreddit
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(RagegenError::InvalidInput(
                "Subreddit name can only contain letters, numbers, and underscores".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(RagegenError::InvalidInput(
                "Subreddit description is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn limitations(&self) -> Option<&str> {
        self.limitations
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// A generated post; immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    title: String,
    content: String,
    subreddit: String,
    subreddit_description: String,
    #[serde(default)]
    limitations: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    intensity: PostIntensity,
}

impl Post {
    pub fn builder() -> PostBuilder {
        PostBuilder::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    pub fn subreddit_description(&self) -> &str {
        &self.subreddit_description
    }

    pub fn limitations(&self) -> Option<&str> {
        self.limitations
            .as_deref()
            .filter(|l| !l.trim().is_empty())
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn intensity(&self) -> PostIntensity {
        self.intensity
    }

    /// Content length in characters, internal whitespace included
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }

    /// Word count, splitting on runs of whitespace
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn has_limitations(&self) -> bool {
        self.limitations().is_some()
    }

    pub fn has_topic(&self) -> bool {
        self.topic().is_some()
    }

    pub fn is_valid_for_submission(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.content.trim().is_empty()
            && !self.subreddit.trim().is_empty()
    }
}

/// Builder for Post; build() validates the required fields
#[derive(Debug, Default)]
pub struct PostBuilder {
    title: Option<String>,
    content: Option<String>,
    subreddit: Option<String>,
    subreddit_description: Option<String>,
    limitations: Option<String>,
    topic: Option<String>,
    intensity: Option<PostIntensity>,
}

impl PostBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn subreddit(mut self, subreddit: impl Into<String>) -> Self {
        self.subreddit = Some(subreddit.into());
        self
    }

    pub fn subreddit_description(mut self, description: impl Into<String>) -> Self {
        self.subreddit_description = Some(description.into());
        self
    }

    pub fn limitations(mut self, limitations: impl Into<String>) -> Self {
        self.limitations = Some(limitations.into());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn intensity(mut self, intensity: PostIntensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn build(self) -> Result<Post> {
        let mut missing = Vec::new();
        if is_blank(self.title.as_deref()) {
            missing.push("title");
        }
        if is_blank(self.content.as_deref()) {
            missing.push("content");
        }
        if is_blank(self.subreddit.as_deref()) {
            missing.push("subreddit");
        }
        if !missing.is_empty() {
            return Err(RagegenError::PostValidation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Post {
            title: self.title.unwrap(),
            content: self.content.unwrap(),
            subreddit: self.subreddit.unwrap(),
            subreddit_description: self.subreddit_description.unwrap_or_default(),
            limitations: self.limitations,
            topic: self.topic,
            intensity: self.intensity.unwrap_or_default(),
        })
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> PostBuilder {
        Post::builder()
            .title("A perfectly reasonable title")
            .content("Some content here")
            .subreddit("AmItheAsshole")
            .subreddit_description("People ask if they were the asshole")
    }

    #[test]
    fn test_build_defaults_to_moderate_intensity() {
        let post = valid_builder().build().unwrap();
        assert_eq!(post.intensity(), PostIntensity::Moderate);
        assert!(post.is_valid_for_submission());
    }

    #[test]
    fn test_build_fails_without_title() {
        let result = Post::builder()
            .content("content")
            .subreddit("test")
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_build_fails_on_blank_content() {
        let result = Post::builder()
            .title("title")
            .content("   \n  ")
            .subreddit("test")
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("content"));
        assert!(!err.to_string().contains("title"));
    }

    #[test]
    fn test_build_lists_all_missing_fields() {
        let err = Post::builder().build().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("title"));
        assert!(message.contains("content"));
        assert!(message.contains("subreddit"));
    }

    #[test]
    fn test_word_count_splits_on_whitespace_runs() {
        let post = valid_builder().content("a b  c").build().unwrap();
        assert_eq!(post.word_count(), 3);
        assert_eq!(post.content_length(), 6);
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let post = valid_builder().limitations("   ").topic("").build().unwrap();
        assert!(!post.has_limitations());
        assert!(!post.has_topic());

        let post = valid_builder()
            .limitations("No violence")
            .topic("workplace drama")
            .build()
            .unwrap();
        assert!(post.has_limitations());
        assert!(post.has_topic());
    }

    #[test]
    fn test_request_validation() {
        let mut request = PostRequest {
            subreddit: "AmItheAsshole".to_string(),
            description: "A subreddit".to_string(),
            limitations: None,
            topic: None,
            intensity: PostIntensity::default(),
        };
        assert!(request.validate().is_ok());

        request.subreddit = "bad name!".to_string();
        assert!(request.validate().is_err());

        request.subreddit = "ok_name_123".to_string();
        request.description = "  ".to_string();
        assert!(request.validate().is_err());
    }
}
