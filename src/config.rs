/// Controls what a tree does when it is asked to insert a key it already holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Inserting an existing key is a no-op.
    Reject,
    /// Inserting an existing key stores another occurrence of it. Removal deletes one occurrence
    /// at a time.
    Allow,
}

impl DuplicatePolicy {
    pub(crate) fn allows_duplicates(self) -> bool {
        self == DuplicatePolicy::Allow
    }
}
