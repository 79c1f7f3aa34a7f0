//! Greedy paragraph fill.
//!
//! Whitespace handling follows the classic fill algorithm: tabs expand to
//! 8-column stops, every whitespace character becomes a space, and
//! whitespace at line edges is dropped (except leading whitespace on the
//! first line). Hyphenated words are not split.

/// Width used for description paragraphs; wide enough that nothing wraps.
pub const FILL_WIDTH: usize = 1000;

const TAB_SIZE: usize = 8;

/// Fill a paragraph to `width` columns, joining lines with `\n`.
pub fn fill(text: &str, width: usize) -> String {
    wrap(text, width).join("\n")
}

/// Wrap a paragraph into lines of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let normalized = normalize_whitespace(text);

    // Reversed so the next chunk is always at the end.
    let mut chunks = split_chunks(&normalized);
    chunks.reverse();

    let mut lines = Vec::new();

    while !chunks.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut line_width = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let chunk_width = chunk.chars().count();
            if line_width + chunk_width > width {
                break;
            }
            line_width += chunk_width;
            if let Some(chunk) = chunks.pop() {
                line.push(chunk);
            }
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.chars().count() > width {
                let space_left = width - line_width;
                let split = chunk
                    .char_indices()
                    .nth(space_left)
                    .map(|(i, _)| i)
                    .unwrap_or(chunk.len());
                let tail = chunk.split_off(split);
                line.push(std::mem::replace(chunk, tail));
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}

fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            '\x0b' | '\x0c' => {
                out.push(' ');
                column += 1;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }

    out
}

/// Split into alternating runs of spaces and non-spaces.
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();

    for ch in text.chars() {
        match chunks.last_mut() {
            Some(last) if last.starts_with(' ') == (ch == ' ') => last.push(ch),
            _ => chunks.push(ch.to_string()),
        }
    }

    chunks
}

fn is_blank(chunk: &str) -> bool {
    chunk.starts_with(' ')
}
