mod notification;
mod transcript;

use anyhow::Result;
use notification::Notification;
use std::io::{self, Read};

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn main() {
    let input = read_stdin().expect("Failed to read stdin");
    let mut notification: Notification =
        serde_json::from_str(&input).expect("Failed to parse notification input");

    notification.enrich();

    println!(
        "{}",
        serde_json::to_string(&notification).expect("Failed to serialize notification")
    );
}
