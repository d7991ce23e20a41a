//! Variant value type for stored settings.
//!
//! A [`SettingValue`] is what travels between the store facade and a
//! backend: plain text, an ordered string list (the recent-items shape),
//! an opaque binary blob (widget geometry or state), an integer, or a
//! boolean. The layer above never interprets blob contents; they are
//! round-tripped byte-for-byte.

/// A value stored at a settings path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// UTF-8 text.
    Str(String),
    /// Ordered list of strings; recent-item lists are stored in this shape.
    List(Vec<String>),
    /// Opaque byte blob. Owned and interpreted only by the widget that
    /// produced it.
    Bytes(Vec<u8>),
    /// Signed integer.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
}

impl SettingValue {
    /// Returns the contained text, if this is a [`SettingValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained list, if this is a [`SettingValue::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the contained blob, if this is a [`SettingValue::Bytes`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SettingValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the contained integer, if this is a [`SettingValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the contained flag, if this is a [`SettingValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Best-effort coercion to a single string.
    ///
    /// `Str` is returned as-is; `Int` and `Bool` stringify in their display
    /// form; a `List` yields its first element (or empty when the list is
    /// empty); `Bytes` is decoded as lossy UTF-8. Recent-list updates route
    /// through this, so callers are expected to hand string-like values to
    /// recent-list settings; the other arms exist to keep the operation
    /// total, not to be relied on.
    pub fn into_string_lossy(self) -> String {
        match self {
            SettingValue::Str(s) => s,
            SettingValue::List(l) => l.into_iter().next().unwrap_or_default(),
            SettingValue::Bytes(b) => String::from_utf8_lossy(&b).into_owned(),
            SettingValue::Int(i) => i.to_string(),
            SettingValue::Bool(b) => b.to_string(),
        }
    }

    /// Coercion to a string list.
    ///
    /// `List` is returned as-is and a `Str` becomes a one-element list; any
    /// other shape yields an empty list. The one-element promotion matters
    /// for recent-item updates: a path that previously held a plain string
    /// keeps that string as history instead of silently dropping it.
    pub fn into_string_list(self) -> Vec<String> {
        match self {
            SettingValue::List(l) => l,
            SettingValue::Str(s) => vec![s],
            _ => Vec::new(),
        }
    }

    /// Coercion to a byte blob; non-blob shapes yield an empty vector.
    ///
    /// Widget restore paths call this, so a missing or mistyped stored value
    /// degrades to the same "empty blob" a never-saved widget sees.
    pub fn into_blob(self) -> Vec<u8> {
        match self {
            SettingValue::Bytes(b) => b,
            _ => Vec::new(),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Str(s)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(l: Vec<String>) -> Self {
        SettingValue::List(l)
    }
}

impl From<Vec<u8>> for SettingValue {
    fn from(b: Vec<u8>) -> Self {
        SettingValue::Bytes(b)
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        SettingValue::Int(i)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}
