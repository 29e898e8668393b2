/// Separator written after every line.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Splits text into lines, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators. A trailing terminator does not yield an empty last line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(rest[..pos].to_string());
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }

    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}
