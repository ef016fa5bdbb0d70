//! Request assembly: turns resume text and a job description into the
//! ordered message sequence the completion service expects.

use crate::llm_client::ChatMessage;
use crate::matching::prompts::{MATCH_SYSTEM_PROMPT, MATCH_USER_TEMPLATE};

/// Builds the two-message sequence for a match analysis: the system message
/// carrying the output contract first, the user message carrying the resume
/// and job description second.
pub fn build_messages(resume_text: &str, job_description: &str) -> Vec<ChatMessage> {
    let user_content = MATCH_USER_TEMPLATE
        .replace("{resume}", resume_text)
        .replace("{jd}", job_description);

    vec![
        ChatMessage::system(MATCH_SYSTEM_PROMPT),
        ChatMessage::user(user_content),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;

    #[test]
    fn test_system_message_first_user_second() {
        let messages = build_messages("resume body", "jd body");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_user_content_carries_both_inputs_verbatim() {
        let messages = build_messages("5 years React experience", "Senior React Developer");
        let user = &messages[1].content;
        assert!(user.contains("5 years React experience"));
        assert!(user.contains("Senior React Developer"));
    }

    #[test]
    fn test_system_prompt_pins_both_score_tokens() {
        let messages = build_messages("r", "j");
        let system = &messages[0].content;
        assert!(system.contains("Match Score:"));
        assert!(system.contains("ATS Score:"));
    }
}
