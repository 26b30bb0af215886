use crate::board::Color;
use crate::game::GameEvent;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Player(Color),
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub author: Author,
    pub text: String,
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.author {
            Author::Player(c) => write!(f, "{c}: {}", self.text),
            Author::System => write!(f, "* {}", self.text),
        }
    }
}

/// Local chat echo. Nothing is persisted; reset does not clear it.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    lines: Vec<ChatLine>,
}

impl ChatLog {
    pub fn new() -> Self { Self::default() }

    /// Blank messages are dropped.
    pub fn say(&mut self, who: Color, text: &str) -> Option<ChatLine> {
        let text = text.trim();
        if text.is_empty() { return None; }
        Some(self.push(ChatLine { author: Author::Player(who), text: text.to_string() }))
    }

    pub fn record(&mut self, event: &GameEvent) -> ChatLine {
        let text = match event {
            GameEvent::Capture(c) => format!(
                "{} captured a {} on {} (+{})", c.by, c.captured.name(), c.to, c.value
            ),
            GameEvent::Reset => "new game".to_string(),
        };
        self.push(ChatLine { author: Author::System, text })
    }

    fn push(&mut self, line: ChatLine) -> ChatLine {
        self.lines.push(line.clone());
        line
    }

    pub fn lines(&self) -> &[ChatLine] { &self.lines }
}
