use serde_json::Value;

/// Pulls a JSON payload out of raw provider text. Providers are told to
/// return bare JSON but routinely wrap it in prose or a markdown fence,
/// so this tries a direct parse first and the first fenced block second.
/// `None` means no parseable payload anywhere.
pub fn extract_json(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }
    fenced_payload(trimmed).and_then(|inner| serde_json::from_str(inner).ok())
}

fn fenced_payload(text: &str) -> Option<&str> {
    let body = match text.find("```json") {
        Some(start) => &text[start + 7..],
        None => {
            let start = text.find("```")?;
            &text[start + 3..]
        }
    };
    let end = body.find("```")?;
    Some(body[..end].trim())
}
