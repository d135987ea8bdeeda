use std::fs;
use std::io;
use std::path::Path;

/// Reads one token per line, keeping file order. Blank lines are skipped and
/// `\r\n` endings accepted; the last line may lack a newline.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
