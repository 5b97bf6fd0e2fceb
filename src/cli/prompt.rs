//! Interactive filter prompt

use std::io::{BufRead, Write};

use crate::error::AppError;

pub(crate) const PROMPT: &str = "Enter a filter (provider name/id, model name, or 'all'): ";

/// Print the prompt and read one line. Blank input or end of input yields
/// `None`.
pub(crate) fn prompt_filter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, AppError> {
    write!(output, "{PROMPT}").map_err(AppError::Prompt)?;
    output.flush().map_err(AppError::Prompt)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(AppError::Prompt)?;
    if read == 0 {
        // EOF leaves the cursor on the prompt line
        writeln!(output).map_err(AppError::Prompt)?;
    }

    let filter = line.trim();
    if filter.is_empty() {
        Ok(None)
    } else {
        Ok(Some(filter.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Option<String>, String) {
        let mut output = Vec::new();
        let filter = prompt_filter(&mut Cursor::new(input), &mut output).unwrap();
        (filter, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_trimmed_filter() {
        let (filter, output) = run("  claude \n");
        assert_eq!(filter.as_deref(), Some("claude"));
        assert_eq!(output, PROMPT);
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(run("   \n").0, None);
    }

    #[test]
    fn eof_is_none() {
        let (filter, output) = run("");
        assert_eq!(filter, None);
        assert_eq!(output, format!("{PROMPT}\n"));
    }

    #[test]
    fn only_first_line_is_read() {
        assert_eq!(run("openai\nanthropic\n").0.as_deref(), Some("openai"));
    }
}
