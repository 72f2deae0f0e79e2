//! The set of tag keys a run accepts.

use rustc_hash::FxHashSet;

/// Tag keys accepted by a run.
///
/// Built from configuration values that may each hold several
/// comma-joined keys (`--allow-key json,xml --allow-key yaml`). Empty
/// tokens are dropped, so the empty key is never allowed. Keys are taken
/// verbatim: no trimming, no case folding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedKeys {
    keys: FxHashSet<String>,
}

impl AllowedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from raw configuration values.
    pub fn build<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().collect()
    }

    /// Add every non-empty comma-separated token of `value`.
    pub fn add_value(&mut self, value: &str) {
        self.keys.extend(
            value
                .split(',')
                .filter(|token| !token.is_empty())
                .map(str::to_owned),
        );
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys.into_iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AllowedKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keys = AllowedKeys::new();
        keys.extend(iter);
        keys
    }
}

impl<S: AsRef<str>> Extend<S> for AllowedKeys {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add_value(value.as_ref());
        }
    }
}

#[cfg(test)]
mod tests;
