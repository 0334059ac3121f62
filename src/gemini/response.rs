use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when nothing in the response looks like one
pub const DEFAULT_TITLE: &str = "Generated Ragebait Post";

/// Title and content recovered from a raw model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub title: String,
    pub content: String,
}

// First match wins; the ordering is observable on ambiguous input and must
// not be rearranged.
static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)TITLE:\s*([^\n]+)",
        r"(?i)\*\*TITLE:\*\*\s*([^\n]+)",
        r"(?i)TITLE\s*:\s*([^\n]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid title pattern"))
    .collect()
});

static CONTENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)CONTENT:\s*\n(.*?)(?:\n\n\*\*|$)",
        r"(?is)CONTENT:\s*\n(.*)",
        r"(?is)\*\*CONTENT:\*\*\s*\n(.*?)(?:\n\n\*\*|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid content pattern"))
    .collect()
});

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());
static TITLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"TITLE:.*?\n").unwrap());
static CONTENT_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"CONTENT:\s*\n").unwrap());

/// Best-effort extraction of a title/content pair from raw model output.
/// Never fails; unstructured input falls back to line scanning and cleaning.
pub fn parse_response(raw: &str) -> ParsedPost {
    let title = match extract_title(raw) {
        Some(title) if !title.is_empty() => title,
        _ => find_potential_title(raw),
    };

    let content = extract_content(raw).unwrap_or_else(|| clean_response_as_content(raw));

    ParsedPost { title, content }
}

/// First title pattern that matches wins, even if its capture is blank
fn extract_title(raw: &str) -> Option<String> {
    TITLE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(raw))
        .map(|caps| caps[1].trim().to_string())
}

/// Scan for the first line that could plausibly be a title
fn find_potential_title(raw: &str) -> String {
    for line in raw.lines() {
        let cleaned = line.trim();
        let length = cleaned.chars().count();
        if length > 10
            && length < 300
            && !cleaned.to_lowercase().contains("content")
            && !cleaned.starts_with("**")
            && !cleaned.starts_with('🔥')
        {
            return cleaned.to_string();
        }
    }

    DEFAULT_TITLE.to_string()
}

/// First content pattern with a non-blank capture wins
fn extract_content(raw: &str) -> Option<String> {
    for pattern in CONTENT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(raw) {
            let content = caps[1].trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }
    None
}

/// Strip markup and header lines so the whole response can serve as content
fn clean_response_as_content(raw: &str) -> String {
    let cleaned = BOLD_SPAN.replace_all(raw, "");
    let cleaned = cleaned.replace('🔥', "").replace('✅', "");
    let cleaned = TITLE_LINE.replace_all(&cleaned, "");
    let cleaned = CONTENT_HEADER.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}
