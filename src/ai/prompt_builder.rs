use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Tone directive sent with every completion.
pub const CHAT_MODEL_CONTEXT: &str = "친절한 말투를 사용해줘.";

/// Extra directive when the user text is a fetched web page.
pub const SUMMARY_INSTRUCTION: &str = "다음 웹 페이지의 내용을 요약해줘.";

/// Character budget for the user message; longer input is cut at a char boundary.
pub const MAX_USER_TEXT_CHARS: usize = 48_000;

/// Hard-truncate user text to `MAX_USER_TEXT_CHARS` characters.
#[must_use]
pub fn truncate_user_text(raw: &str) -> String {
    raw.chars().take(MAX_USER_TEXT_CHARS).collect()
}

fn text_message(role: MessageRole, text: &str) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(text.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// Build the ordered message sequence for a completion.
///
/// The tone directive always comes first, the summary directive second when
/// `summarize` is set, and the user text last.
#[must_use]
pub fn build_prompt(text: &str, summarize: bool) -> Vec<ChatCompletionMessage> {
    let mut chat = vec![text_message(MessageRole::system, CHAT_MODEL_CONTEXT)];

    if summarize {
        chat.push(text_message(MessageRole::system, SUMMARY_INSTRUCTION));
    }

    chat.push(text_message(MessageRole::user, &truncate_user_text(text)));
    chat
}
