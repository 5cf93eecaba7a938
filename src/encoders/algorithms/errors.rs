use std::fmt;

/// The four failure classes a transform can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownAlgorithm,
    InvalidFormat,
    MissingParameter,
    DecodeError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownAlgorithm => "unknown_algorithm",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::MissingParameter => "missing_parameter",
            ErrorKind::DecodeError => "decode_error",
        }
    }
}

/// Errors that can occur while transforming text.
///
/// Every failure is reported at the point it is detected; nothing is retried and
/// a failed call never yields partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The algorithm selector is not one of the known identifiers
    UnknownAlgorithm {
        name: String,
        suggestion: Option<String>,
    },
    /// Encoded input is malformed for the requested decode
    InvalidFormat { reason: String },
    /// A required parameter is absent or reduces to nothing
    MissingParameter { name: String },
    /// Decoded bytes are not valid UTF-8 text
    Decode { reason: String },
}

impl CodecError {
    /// Create an UnknownAlgorithm error, suggesting the closest known name.
    pub fn unknown_algorithm(name: &str, available: &[&str]) -> Self {
        CodecError::UnknownAlgorithm {
            name: name.to_string(),
            suggestion: find_closest_algorithm(name, available),
        }
    }

    pub fn invalid_format(reason: impl Into<String>) -> Self {
        CodecError::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        CodecError::MissingParameter { name: name.into() }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        CodecError::Decode {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::UnknownAlgorithm { .. } => ErrorKind::UnknownAlgorithm,
            CodecError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            CodecError::MissingParameter { .. } => ErrorKind::MissingParameter,
            CodecError::Decode { .. } => ErrorKind::DecodeError,
        }
    }

    /// One-line message without header or hint, suitable for a status line.
    pub fn message(&self) -> String {
        match self {
            CodecError::UnknownAlgorithm { name, .. } => format!("unknown algorithm '{}'", name),
            CodecError::InvalidFormat { reason } => format!("invalid format: {}", reason),
            CodecError::MissingParameter { name } => format!("missing parameter '{}'", name),
            CodecError::Decode { reason } => format!("decode error: {}", reason),
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            CodecError::UnknownAlgorithm { suggestion, .. } => Some(match suggestion {
                Some(s) => format!(
                    "did you mean '{}'?\n      run `decipher list` to see all algorithms",
                    s
                ),
                None => "run `decipher list` to see all algorithms".to_string(),
            }),
            CodecError::InvalidFormat { reason } if reason.contains("hex") => {
                Some("hex input needs exactly two digits per byte".to_string())
            }
            CodecError::InvalidFormat { reason } if reason.contains("base64") => Some(
                "check for stray characters or incorrect '=' padding at end of input".to_string(),
            ),
            CodecError::InvalidFormat { .. } => None,
            CodecError::MissingParameter { name } if name == "key" => {
                Some("the key must contain at least one letter A-Z".to_string())
            }
            CodecError::MissingParameter { name } if name == "mode" => {
                Some("choose a mode: encode or decode".to_string())
            }
            CodecError::MissingParameter { .. } => None,
            CodecError::Decode { .. } => {
                Some("the decoded bytes do not form valid UTF-8 text".to_string())
            }
        }
    }

    /// Full report with an `error:` header and optional `hint:` line.
    pub fn render(&self, use_color: bool) -> String {
        let mut out = String::new();
        if use_color {
            out.push_str("\x1b[1;31merror:\x1b[0m ");
        } else {
            out.push_str("error: ");
        }
        out.push_str(&self.message());

        if let Some(hint) = self.hint() {
            out.push_str("\n\n");
            if use_color {
                out.push_str("\x1b[1;36mhint:\x1b[0m ");
            } else {
                out.push_str("hint: ");
            }
            out.push_str(&hint);
        }
        out
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(should_use_color()))
    }
}

impl std::error::Error for CodecError {}

/// Check if colored output should be used
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching algorithm name
pub fn find_closest_algorithm(name: &str, available: &[&str]) -> Option<String> {
    let needle = name.to_ascii_lowercase();
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    // 1-2 edits for short names, up to 3 for longer ones
    let threshold = if needle.len() < 5 { 2 } else { 3 };

    for candidate in available {
        let distance = levenshtein_distance(&needle, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}
