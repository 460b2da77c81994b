use std::{borrow::Borrow, fmt, str::FromStr};

/// Portable public identifier with a string representation.
///
/// Record identifiers are authored together with the catalogue
/// and never generated at runtime.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

impl Id {
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Id> for String {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ();
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        Ok(s.into())
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_invalid() {
        assert!(!Id::default().is_valid());
        assert!(!Id::from("  ").is_valid());
        assert!(Id::from("koda-1").is_valid());
    }

    #[test]
    fn lookup_by_str() {
        let ids: std::collections::HashSet<Id> = ["koda-1".into(), "koda-2".into()].into();
        assert!(ids.contains("koda-2"));
        assert!(!ids.contains("koda-3"));
    }
}
