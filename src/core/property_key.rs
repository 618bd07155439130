use crate::unicode::utf16_to_utf8;

/// Name of an own property. Only string keys exist in this object model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey(String);

impl PropertyKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey(s)
    }
}

impl From<&String> for PropertyKey {
    fn from(s: &String) -> Self {
        PropertyKey(s.clone())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(k: &PropertyKey) -> Self {
        k.clone()
    }
}

impl From<&[u16]> for PropertyKey {
    fn from(v: &[u16]) -> Self {
        PropertyKey(utf16_to_utf8(v))
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
