/// Configuration shared by the batch replacer and the serialized patcher.
///
/// # Examples
///
/// ```rust
/// use serialsub::{ReplaceOptions, batch_replace_with};
///
/// let options = ReplaceOptions {
///     case_insensitive: true,
/// };
/// let out = batch_replace_with("Old OLD old", [("old", "new")], options).unwrap();
/// assert_eq!(out, b"new new new");
/// ```
///
/// # Default
///
/// All options default to `false`, which means byte-exact matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ReplaceOptions {
    /// Whether patterns match regardless of ASCII letter case.
    ///
    /// Only the 26 ASCII letters are folded; every other byte, including the
    /// bytes of multi-byte UTF-8 sequences, must match exactly. The emitted
    /// text is always the rule's literal replacement, never re-cased to follow
    /// the matched input.
    ///
    /// # Default
    ///
    /// `false`
    pub case_insensitive: bool,
}
