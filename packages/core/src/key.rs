//! Key path splitting and wildcard classification.

/// The default segment separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// The wildcard segment. Alone it addresses the whole document; as a
/// trailing segment it addresses everything held by the container at the
/// preceding path.
pub const WILDCARD: &str = "*";

/// Split a raw key into its segments.
///
/// Empty segments are preserved; `"a..b"` splits into three segments with
/// an empty one in the middle. Validation of the key and separator
/// themselves is the guard's job.
pub fn split_key(key: &str, separator: &str) -> Vec<String> {
    key.split(separator).map(str::to_string).collect()
}

/// How a raw key's wildcard (if any) is to be interpreted.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KeyForm<'a> {
    /// The key is exactly `"*"`: the whole document.
    Global,
    /// The key ends in `separator + "*"`: everything held by the
    /// container at `target`.
    Local {
        /// The key with the trailing wildcard segment stripped.
        target: &'a str,
    },
    /// No wildcard; an ordinary key path.
    Plain,
}

pub(crate) fn classify_key<'a>(key: &'a str, separator: &str) -> KeyForm<'a> {
    if key == WILDCARD {
        return KeyForm::Global;
    }
    let suffix = format!("{separator}{WILDCARD}");
    match key.strip_suffix(&suffix) {
        Some(target) => KeyForm::Local { target },
        None => KeyForm::Plain,
    }
}
