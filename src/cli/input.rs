use crate::cli::{args::TransformArgs, global::GlobalArgs};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::warn;

/// Input text from the positional argument, `--file`, or stdin, in that order.
///
/// File and stdin input lose one trailing newline, so `echo` and editors that
/// terminate the last line don't add a character to the transform.
pub fn read_input(
    args: &TransformArgs,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(text) = &args.input {
        check_size(text.len(), global)?;
        return Ok(text.clone());
    }

    let text = if let Some(file_path) = &args.file {
        // Check file size before reading it in
        let file_size = fs::metadata(file_path)?.len() as usize;
        check_size(file_size, global)?;
        fs::read_to_string(file_path)
            .map_err(|e| format!("Cannot read {}: {}", file_path.display(), e))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Cannot read stdin as UTF-8 text: {}", e))?;
        check_size(buffer.len(), global)?;
        buffer
    };

    Ok(strip_trailing_newline(text))
}

fn check_size(size: usize, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 || size <= global.max_size {
        return Ok(());
    }

    if global.force {
        warn!(
            size,
            limit = global.max_size,
            "processing input above size limit"
        );
        Ok(())
    } else {
        Err(format!(
            "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            size, global.max_size
        )
        .into())
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Writes the result to a file verbatim, or to stdout with a newline.
pub fn write_output(output: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(path) => fs::write(path, output.as_bytes())
            .map_err(|e| format!("Cannot write {}: {}", path.display(), e).into()),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)?;
            Ok(())
        }
    }
}
