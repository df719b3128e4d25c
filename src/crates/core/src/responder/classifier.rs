use serde::Serialize;

/// Question markers: both question-mark glyphs plus the common Chinese
/// interrogatives.
const QUESTION_TOKENS: [&str; 4] = ["?", "？", "吗", "什么"];

/// Localized greeting words checked verbatim; "hello" is matched
/// case-insensitively.
const GREETING_TOKENS: [&str; 2] = ["你好", "您好"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Question,
    General,
}

/// Classify an utterance, first match wins. Greeting takes priority over
/// question; empty input falls through to `General`.
pub fn classify(input: &str) -> Category {
    if input.to_lowercase().contains("hello")
        || GREETING_TOKENS.iter().any(|t| input.contains(t))
    {
        return Category::Greeting;
    }
    if QUESTION_TOKENS.iter().any(|t| input.contains(t)) {
        return Category::Question;
    }
    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_tokens_match() {
        assert_eq!(classify("你好"), Category::Greeting);
        assert_eq!(classify("您好，阿孝"), Category::Greeting);
        assert_eq!(classify("HELLO there"), Category::Greeting);
    }

    #[test]
    fn greeting_beats_question() {
        assert_eq!(classify("你好吗？"), Category::Greeting);
    }

    #[test]
    fn question_markers_match() {
        assert_eq!(classify("这个方案可行吗"), Category::Question);
        assert_eq!(classify("what?"), Category::Question);
        assert_eq!(classify("这是什么"), Category::Question);
        assert_eq!(classify("为何？"), Category::Question);
    }

    #[test]
    fn empty_and_plain_input_are_general() {
        assert_eq!(classify(""), Category::General);
        assert_eq!(classify("帮我写一段介绍"), Category::General);
    }
}
