use std::io::Write;
use std::process::{Command, Stdio};

pub fn run_cli(stdin_json: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_asknotify"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin_json.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// Write `lines` to a transcript file in a fresh temp dir and return the dir
/// and the file path. The `TempDir` must be kept alive for the test.
pub fn temp_transcript(lines: &[String]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.jsonl");
    std::fs::write(&path, lines.join("\n")).unwrap();
    (dir, path)
}

/// An assistant line with a single AskUserQuestion tool_use.
pub fn ask_question_line(question: &str, labels: &[&str]) -> String {
    let options: Vec<serde_json::Value> = labels
        .iter()
        .map(|l| serde_json::json!({ "label": l }))
        .collect();
    serde_json::to_string(&serde_json::json!({
        "type": "assistant",
        "message": {
            "role": "assistant",
            "content": [{
                "type": "tool_use",
                "id": "toolu_ask",
                "name": "AskUserQuestion",
                "input": { "questions": [{ "question": question, "options": options }] }
            }]
        }
    }))
    .unwrap()
}
