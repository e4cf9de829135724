use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Option outputs for log messages
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or "none" for the `None` variant. Mostly
    /// useful for things like card suffixes that may or may not be present.
    ///
    /// For example:
    ///
    /// ```rust
    /// # use ncards_utils::OptionExt;
    /// let suffix: Option<i64> = Some(104);
    /// assert_eq!(suffix.display(), "104");
    ///
    /// let suffix: Option<i64> = None;
    /// assert_eq!(suffix.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
