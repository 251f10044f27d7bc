use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::transcript;

/// Title used when the incoming notification has no `message` to promote.
pub const DEFAULT_TITLE: &str = "Claude väntar på svar";

/// A Notification-hook event, received on stdin and echoed (possibly
/// enriched) on stdout.
///
/// The hook payload has no fixed schema beyond the fields we touch, so
/// everything else is preserved verbatim through the flattened map and
/// absent optional fields are omitted on output.
#[derive(Debug, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_data: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Notification {
    /// Pull the most recent `AskUserQuestion` out of the transcript this
    /// notification points at and merge it into the outgoing fields.
    /// Without a usable `transcript_path` the notification passes through
    /// unchanged.
    pub fn enrich(&mut self) {
        let Some(path) = self.transcript_path.as_deref().filter(|p| !p.is_empty()) else {
            return;
        };
        if let Some(data) = transcript::last_question(Path::new(path)) {
            self.apply_question(data);
        }
    }

    /// Merge extracted question input into the notification.
    ///
    /// `data` is attached verbatim as `question_data`. If it carries a
    /// non-empty `questions` array, the first entry becomes the primary
    /// question: the original `message` is promoted to `title` (falling back
    /// to [`DEFAULT_TITLE`]), `message` is overwritten with the question
    /// text, and `options` is copied as-is. An absent or empty `questions`
    /// array still attaches `question_data` but leaves the display fields
    /// alone.
    pub fn apply_question(&mut self, data: serde_json::Value) {
        let primary = data
            .get("questions")
            .and_then(|q| q.as_array())
            .and_then(|q| q.first())
            .cloned();
        self.question_data = Some(data);

        let Some(primary) = primary else {
            return;
        };
        self.title = Some(
            self.message
                .take()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        );
        self.message = Some(
            primary
                .get("question")
                .and_then(|q| q.as_str())
                .unwrap_or_default()
                .to_string(),
        );
        self.options = Some(
            primary
                .get("options")
                .and_then(|o| o.as_array())
                .cloned()
                .unwrap_or_default(),
        );
    }
}
