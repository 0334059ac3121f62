mod types;

pub use types::*;

use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_TIMESTAMP: &str = "%Y-%m-%d_%H-%M-%S";
const BANNER: &str =
    "================================================================================";
const BLOCK_RULE: &str = "--------------------------------------------------";
const METADATA_RULE: &str = "==============================";

/// Save a post report into `dir`, creating the directory if needed.
/// Overwrites on filename collision (same-second regeneration).
pub fn save_post(post: &Post, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let now = Local::now();
    let filename = format!(
        "ragebait_r_{}_{}.txt",
        post.subreddit(),
        now.format(FILE_TIMESTAMP)
    );
    let path = dir.join(filename);

    fs::write(&path, format_post_report(post, now))?;
    Ok(path)
}

/// Format the post as a decorated text report
pub fn format_post_report(post: &Post, generated_at: DateTime<Local>) -> String {
    let limitations_line = post
        .limitations()
        .map(|l| format!("SUBREDDIT LIMITATIONS: {}\n", l))
        .unwrap_or_default();
    let topic_line = post
        .topic()
        .map(|t| format!("TOPIC FOCUS: {}\n", t))
        .unwrap_or_default();

    format!(
        r#"{banner}
REDDIT RAGEBAIT POST GENERATED
Generated at: {timestamp}
{banner}

SUBREDDIT: r/{subreddit}
SUBREDDIT DESCRIPTION: {description}
{limitations_line}{topic_line}INTENSITY LEVEL: {intensity} - {intensity_description}

TITLE:
{rule}
{title}
{rule}

CONTENT:
{rule}
{content}
{rule}

METADATA:
{metadata_rule}
Title Length: {title_length} characters
Content Length: {content_length} characters
Word Count: {word_count} words
Valid for Submission: {valid}


{banner}
END OF GENERATED POST
{banner}
"#,
        banner = BANNER,
        timestamp = generated_at.format("%Y-%m-%dT%H:%M:%S"),
        subreddit = post.subreddit(),
        description = post.subreddit_description(),
        limitations_line = limitations_line,
        topic_line = topic_line,
        intensity = post.intensity().label(),
        intensity_description = post.intensity().description(),
        rule = BLOCK_RULE,
        title = post.title(),
        content = post.content(),
        metadata_rule = METADATA_RULE,
        title_length = post.title().chars().count(),
        content_length = post.content_length(),
        word_count = post.word_count(),
        valid = if post.is_valid_for_submission() { "YES" } else { "NO" },
    )
}

/// List saved post reports in `dir`, newest first
pub fn list_saved_posts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut posts: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.starts_with("ragebait_") && n.ends_with(".txt"))
        })
        .collect();

    // Timestamped filenames sort chronologically; reverse for newest first
    posts.sort();
    posts.reverse();
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_post() -> Post {
        Post::builder()
            .title("My landlord did something outrageous")
            .content("First paragraph.\n\nSecond paragraph. What would you do?")
            .subreddit("AmItheAsshole")
            .subreddit_description("People ask if they were the asshole")
            .limitations("No violence")
            .build()
            .unwrap()
    }

    #[test]
    fn test_save_post_filename_shape() {
        let dir = tempdir().unwrap();
        let path = save_post(&sample_post(), dir.path()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ragebait_r_AmItheAsshole_"));
        assert!(name.ends_with(".txt"));
        // timestamp portion: yyyy-MM-dd_HH-mm-ss
        let timestamp = name
            .strip_prefix("ragebait_r_AmItheAsshole_")
            .unwrap()
            .strip_suffix(".txt")
            .unwrap();
        assert_eq!(timestamp.len(), 19);
        assert!(path.exists());
    }

    #[test]
    fn test_save_post_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports");
        assert!(!nested.exists());
        save_post(&sample_post(), &nested).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = format_post_report(&sample_post(), Local::now());

        assert!(report.contains("REDDIT RAGEBAIT POST GENERATED"));
        assert!(report.contains("SUBREDDIT: r/AmItheAsshole"));
        assert!(report.contains("SUBREDDIT LIMITATIONS: No violence"));
        assert!(!report.contains("TOPIC FOCUS:"));
        assert!(report.contains("INTENSITY LEVEL: MODERATE - Moderate controversy to drive engagement"));
        assert!(report.contains("My landlord did something outrageous"));
        assert!(report.contains("Word Count: 8 words"));
        assert!(report.contains("Valid for Submission: YES"));
        assert!(report.contains("END OF GENERATED POST"));
    }

    #[test]
    fn test_list_saved_posts_newest_first() {
        let dir = tempdir().unwrap();
        let old = dir.path().join("ragebait_r_test_2024-01-01_00-00-00.txt");
        let new = dir.path().join("ragebait_r_test_2025-06-01_12-30-00.txt");
        let other = dir.path().join("notes.md");
        fs::write(&old, "old").unwrap();
        fs::write(&new, "new").unwrap();
        fs::write(&other, "skip").unwrap();

        let posts = list_saved_posts(dir.path()).unwrap();
        assert_eq!(posts, vec![new, old]);
    }

    #[test]
    fn test_list_saved_posts_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_saved_posts(&missing).unwrap().is_empty());
    }
}
