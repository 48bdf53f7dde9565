//! Prompt text for the AI assist calls.

/// Copy-editing instruction. The model may fix language only; claims and
/// arguments must survive unchanged.
pub fn refine_prompt(title: &str, content: &str) -> String {
    format!(
        r#"You are a meticulous psychology copyeditor. Refine the provided blog post draft for clarity, professional word choice, and grammatical perfection.

CRITICAL INSTRUCTIONS:
1. Correct all grammar, punctuation, and spelling errors.
2. Improve vocabulary and word choice to be more precise and professional.
3. DO NOT change the main ideas, arguments, or the core message of the post.
4. DO NOT add new facts or delete existing scientific claims.
5. Maintain the author's original tone (e.g., if it is conversational, keep it conversational but polished).
6. Return ONLY the refined content as HTML.

Title: {}
Content: {}"#,
        title, content
    )
}

pub fn summarize_prompt(title: &str, content: &str) -> String {
    format!(
        "Generate a compelling, one-sentence summary for a psychology blog post.\nTitle: {}\nContent: {}",
        title, content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_carry_title_and_content() {
        let refine = refine_prompt("Habits", "<p>Loops</p>");
        assert!(refine.contains("Title: Habits"));
        assert!(refine.contains("Content: <p>Loops</p>"));
        assert!(refine.contains("Return ONLY the refined content as HTML"));

        let summary = summarize_prompt("Habits", "<p>Loops</p>");
        assert!(summary.contains("one-sentence summary"));
        assert!(summary.ends_with("Content: <p>Loops</p>"));
    }
}
