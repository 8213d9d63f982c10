#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents misuse of the scanner's single-slot push-back.
pub enum ScanError {
    /// `push_back` was called before any token had been produced.
    NothingToPushBack,
    /// `push_back` was called twice without an intervening `next_token`.
    DoublePushBack {
        /// Byte offset of the cursor when the second push-back was attempted.
        offset: usize,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToPushBack => {
                write!(f, "Scan error: no token has been read, nothing to push back.")
            },
            Self::DoublePushBack { offset } => write!(f,
                                                      "Scan error at offset {offset}: only one token can be pushed back."),
        }
    }
}

impl std::error::Error for ScanError {}
