/// A secret key as found in the key tool's listing.
///
/// Field order matters: the derived `Ord` sorts by identities first,
/// then by the summary line, then by the short id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyRecord {
    /// User ids bound to the key, in listing order.
    pub identities: Vec<String>,
    /// The raw `sec` line describing the key.
    pub summary_line: String,
    /// Short hexadecimal key id, e.g. `DAA011C5`.
    pub short_id: String,
}

impl std::fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.short_id, self.summary_line)
    }
}
