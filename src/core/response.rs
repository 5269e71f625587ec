//! Reply formatting and Discord message chunking
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add titled list builder shared by the listing commands
//! - 1.0.0: Line-aware, UTF-8 safe chunking for long replies

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Chunk text into pieces no longer than `max_size` bytes
///
/// Splits on line boundaries when possible and never inside a UTF-8 character.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line_with_newline = format!("{line}\n");
        if current.len() + line_with_newline.len() > max_size {
            if !current.is_empty() {
                chunks.push(current.trim_end().to_string());
                current = String::new();
            }
            if line_with_newline.len() > max_size {
                chunks.extend(chunk_long_line(line, max_size));
            } else {
                current = line_with_newline;
            }
        } else {
            current.push_str(&line_with_newline);
        }
    }
    if !current.trim_end().is_empty() {
        chunks.push(current.trim_end().to_string());
    }
    chunks
}

fn chunk_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Chunk a reply for message content (2000 byte limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}

/// Build a bold title followed by one `- item` line per entry
///
/// Every line, including the last, ends with a newline.
pub fn titled_list<I>(title: &str, items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut msg = format!("**{title}:**\n");
    for item in items {
        msg.push_str("- ");
        msg.push_str(&item);
        msg.push('\n');
    }
    msg
}
