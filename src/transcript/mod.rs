use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tool name Claude Code uses when the assistant poses a multiple-choice
/// question to the user.
pub const ASK_USER_QUESTION: &str = "AskUserQuestion";

// ===================================================================
// Transcript line model — one JSON record per line, loosely shaped
// ===================================================================

/// A single line in a Claude Code `.jsonl` transcript file.
///
/// Discriminated by the `type` field. Only assistant lines can carry an
/// `AskUserQuestion` tool_use, so every other line type collapses to
/// `Other` rather than being modeled in full.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TranscriptEntry {
    #[serde(rename = "assistant")]
    Assistant(AssistantEntry),
    #[serde(other)]
    Other,
}

/// An assistant line. Transcripts in the wild carry many more fields
/// (uuid, timestamp, usage, ...); everything but the message is ignored,
/// and the message itself is optional so a bare `{"type": "assistant"}`
/// line still parses.
#[derive(Debug, Deserialize)]
pub struct AssistantEntry {
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// `message.content` can be a plain string or an array of content items.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Items(Vec<ContentItem>),
}

/// One item of `message.content`. Only tool_use-shaped blocks matter for
/// question extraction; anything else (text, thinking, blocks missing a
/// `type` or `name`) falls through to `Other` so a single odd item never
/// fails the enclosing line.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    ToolUse(ToolUseBlock),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
pub struct ToolUseBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub name: String,
    #[serde(default)]
    pub input: serde_json::Value,
}

// ===================================================================
// Scanning
// ===================================================================

impl AssistantEntry {
    /// The `input` of this entry's first `AskUserQuestion` tool_use item,
    /// checking content items in their given order.
    fn question_input(self) -> Option<serde_json::Value> {
        let items = match self.message?.content? {
            MessageContent::Items(items) => items,
            MessageContent::Text(_) => return None,
        };
        items.into_iter().find_map(|item| match item {
            ContentItem::ToolUse(tu)
                if tu.block_type == "tool_use" && tu.name == ASK_USER_QUESTION =>
            {
                Some(tu.input)
            }
            _ => None,
        })
    }
}

/// Scan transcript contents backwards (last line first) for the most recent
/// `AskUserQuestion` tool_use and return its `input`.
///
/// Blank and unparseable lines are skipped silently; transcripts routinely
/// contain line types and partial writes we don't model.
pub fn find_last_question(contents: &str) -> Option<serde_json::Value> {
    contents.lines().rev().find_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match serde_json::from_str::<TranscriptEntry>(line) {
            Ok(TranscriptEntry::Assistant(entry)) => entry.question_input(),
            Ok(TranscriptEntry::Other) | Err(_) => None,
        }
    })
}

/// Read the transcript at `path` and extract the most recent question input.
///
/// A read failure is reported on stderr and treated as "no question found";
/// the caller always gets a definite present/absent answer.
pub fn last_question(path: &Path) -> Option<serde_json::Value> {
    match fs::read_to_string(path) {
        Ok(contents) => find_last_question(&contents),
        Err(err) => {
            eprintln!(
                "asknotify: failed to read transcript {}: {err}",
                path.display()
            );
            None
        }
    }
}
