/// Sequence number handed out for every upload.
///
/// Tickets are ordered; a larger ticket belongs to a later upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecodeTicket(pub u64);

impl std::fmt::Display for DecodeTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened to a finished decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The image replaced the current one.
    Applied,
    /// A newer upload was started before this one finished; dropped.
    Stale,
}

/// Pick the file an upload acts on. Only the first entry of a multi-file
/// drop or paste is used.
pub fn first_file<I: IntoIterator>(files: I) -> Option<I::Item> {
    files.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_file_ignores_the_rest() {
        assert_eq!(first_file(vec!["a.png", "b.png"]), Some("a.png"));
        assert_eq!(first_file(Vec::<&str>::new()), None);
    }

    #[test]
    fn tickets_order_by_sequence() {
        assert!(DecodeTicket(2) > DecodeTicket(1));
    }
}
