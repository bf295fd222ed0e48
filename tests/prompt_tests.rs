use kakaobot::ai::client::build_chat_messages;
use kakaobot::ai::prompt_builder::{
    CHAT_MODEL_CONTEXT, MAX_USER_TEXT_CHARS, SUMMARY_INSTRUCTION, build_prompt,
    truncate_user_text,
};
use kakaobot::ai::estimate_tokens;
use serde_json::json;

#[test]
fn test_plain_prompt_has_tone_directive_then_user_text() {
    let messages = build_chat_messages(&build_prompt("hello", false));
    assert_eq!(
        messages,
        vec![
            json!({"role": "system", "content": CHAT_MODEL_CONTEXT}),
            json!({"role": "user", "content": "hello"}),
        ]
    );
}

#[test]
fn test_summary_prompt_inserts_second_system_message() {
    let messages = build_chat_messages(&build_prompt("page text", true));
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["content"], CHAT_MODEL_CONTEXT);
    assert_eq!(messages[1], json!({"role": "system", "content": SUMMARY_INSTRUCTION}));
    assert_eq!(messages[2], json!({"role": "user", "content": "page text"}));
}

#[test]
fn test_empty_user_text_is_kept() {
    let messages = build_chat_messages(&build_prompt("", true));
    assert_eq!(messages[2], json!({"role": "user", "content": ""}));
}

#[test]
fn test_truncate_user_text_respects_char_boundaries() {
    let long_korean = "가".repeat(MAX_USER_TEXT_CHARS + 10);
    let truncated = truncate_user_text(&long_korean);
    assert_eq!(truncated.chars().count(), MAX_USER_TEXT_CHARS);

    let short = "짧은 글";
    assert_eq!(truncate_user_text(short), short);
}

#[test]
fn test_estimate_tokens() {
    assert_eq!(estimate_tokens(""), 1);
    assert_eq!(estimate_tokens("hello"), 2);
}
