use crate::post::PostRequest;

/// Build the generation prompt for a post request
pub fn build_post_prompt(request: &PostRequest) -> String {
    let limitations_section = request
        .limitations()
        .map(|limitations| {
            format!(
                "\n**CRITICAL SUBREDDIT RESTRICTIONS:** {}\n\
                 **COMPLIANCE REQUIREMENT:** The generated post MUST strictly follow these limitations to avoid being removed or banned.\n",
                limitations
            )
        })
        .unwrap_or_default();

    let topic_section = request
        .topic()
        .map(|topic| format!("\n**SPECIFIC TOPIC TO FOCUS ON:** {}\n", topic))
        .unwrap_or_default();

    format!(
        r#"🔥 **REDDIT RAGEBAIT POST GENERATOR** 🔥

**YOUR MISSION:** Generate a highly engaging ragebait post for Reddit that will
maximize emotional response and drive comments and engagement.

**TARGET SUBREDDIT:** r/{subreddit}
**SUBREDDIT CONTEXT:** {description}
{limitations_section}{topic_section}
**PSYCHOLOGICAL TRIGGERS TO ACTIVATE:**
🎯 MORAL OUTRAGE - Present a clear injustice that violates basic fairness
🎯 SOCIAL PROOF - Make readers feel they're on the 'right' side
🎯 SUPERIORITY COMPLEX - Include obviously wrong behavior for readers to judge
🎯 PERSONAL INVESTMENT - Use highly relatable situations that readers can identify with
🎯 CONFIRMATION BIAS - Align with common frustrations and widely-held beliefs
🎯 MISSING CONTEXT - Leave strategic gaps for reader assumptions and speculation

**REQUIREMENTS:**
• Create a compelling, clickable title (under 300 characters)
• Write engaging content (300-800 words) that feels completely authentic
• Include realistic details, specific dialogue, and believable scenarios
• Build to a moral dilemma that seems obvious but includes doubt
• Use paragraph breaks for easy mobile reading
• End with a question that invites judgment, opinions, and discussion

**WRITING STYLE:**
• Casual, authentic Reddit voice with natural imperfections
• First-person perspective with emotional investment
• Include specific details that make the story believable
• Use quotation marks for realistic dialogue
• Show, don't tell - let readers draw their own conclusions
• Create multiple comment-worthy discussion points

**OUTPUT FORMAT (VERY IMPORTANT):**
Please format your response EXACTLY like this:

TITLE: [Your engaging title here]

CONTENT:
[Your complete post content here]

**QUALITY CHECKLIST:**
✅ Follows all subreddit restrictions
✅ Contains clear moral conflict
✅ Includes specific, believable details
✅ Ends with engagement-driving question
✅ Uses authentic Reddit voice
✅ Creates multiple discussion points

**GENERATE THE PERFECT RAGEBAIT POST NOW!**"#,
        subreddit = request.subreddit,
        description = request.description,
        limitations_section = limitations_section,
        topic_section = topic_section,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostIntensity;

    fn request(limitations: Option<&str>, topic: Option<&str>) -> PostRequest {
        PostRequest {
            subreddit: "AmItheAsshole".to_string(),
            description: "A subreddit for asking if you were the asshole".to_string(),
            limitations: limitations.map(String::from),
            topic: topic.map(String::from),
            intensity: PostIntensity::default(),
        }
    }

    #[test]
    fn test_prompt_contains_subreddit_verbatim() {
        let prompt = build_post_prompt(&request(None, None));
        assert!(prompt.contains("r/AmItheAsshole"));
        assert!(prompt.contains("A subreddit for asking if you were the asshole"));
    }

    #[test]
    fn test_limitations_block_present_iff_non_blank() {
        let without = build_post_prompt(&request(None, None));
        assert!(!without.contains("CRITICAL SUBREDDIT RESTRICTIONS"));

        let blank = build_post_prompt(&request(Some("   "), None));
        assert!(!blank.contains("CRITICAL SUBREDDIT RESTRICTIONS"));

        let with = build_post_prompt(&request(Some("No posts about relationships"), None));
        assert!(with.contains("**CRITICAL SUBREDDIT RESTRICTIONS:** No posts about relationships"));
        assert!(with.contains("COMPLIANCE REQUIREMENT"));
    }

    #[test]
    fn test_topic_block_present_iff_non_blank() {
        let without = build_post_prompt(&request(None, None));
        assert!(!without.contains("SPECIFIC TOPIC TO FOCUS ON"));

        let with = build_post_prompt(&request(None, Some("workplace drama")));
        assert!(with.contains("**SPECIFIC TOPIC TO FOCUS ON:** workplace drama"));
    }

    #[test]
    fn test_prompt_instructs_output_format() {
        let prompt = build_post_prompt(&request(None, None));
        assert!(prompt.contains("TITLE: [Your engaging title here]"));
        assert!(prompt.contains("CONTENT:\n[Your complete post content here]"));
    }
}
