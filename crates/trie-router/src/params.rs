//! Path parameters captured by a route match.

use std::borrow::Cow;

/// Path parameters extracted from the URL.
///
/// Entries keep the left-to-right order of the dynamic segments that produced
/// them. Values are stored exactly as they appeared in the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    params: Vec<(String, String)>,
}

impl PathParams {
    /// Creates new empty path params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter. A repeated name replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Gets a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Gets a parameter value with `%XX` escapes decoded.
    #[must_use]
    pub fn decoded(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(percent_decode)
    }

    /// Gets a parameter value or returns an error.
    pub fn require(&self, key: &str) -> Result<&str, String> {
        self.get(key)
            .ok_or_else(|| format!("Missing path parameter: {key}"))
    }

    /// Parses a parameter as a specific type.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no parameters were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns an iterator over the parameters in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Decodes `%XX` escapes in a path segment.
///
/// Malformed or truncated escapes are kept as-is, and so is the whole input
/// when the decoded bytes are not valid UTF-8. `+` is left alone since it
/// only means space in query strings.
#[must_use]
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(byte) = bytes.get(i + 1..i + 3).and_then(hex_pair) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(decoded).map_or(Cow::Borrowed(input), Cow::Owned)
}

fn hex_pair(pair: &[u8]) -> Option<u8> {
    let hi = char::from(pair[0]).to_digit(16)?;
    let lo = char::from(pair[1]).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}
