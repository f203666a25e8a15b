// Entry keys: array positions or object member names.
use std::fmt;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Key {
    Index(u64),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as u64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn accessors_match_variants() {
        assert_eq!(Key::Index(4).as_index(), Some(4));
        assert_eq!(Key::Index(4).as_name(), None);
        assert_eq!(Key::from("id").as_name(), Some("id"));
        assert_eq!(Key::from("id").as_index(), None);
    }

    #[test]
    fn display_is_bare() {
        assert_eq!(Key::Index(7).to_string(), "7");
        assert_eq!(Key::from("name").to_string(), "name");
    }
}
