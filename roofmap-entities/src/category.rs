use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// The roofing-tile type of an installation.
///
/// This is the only filter dimension of the catalogue.
/// Consumers should iterate over [`Category::all`] instead of
/// naming variants so that new tile types only need to be added here.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Category {
    Koda,
    Titania,
    Premion,
}

impl Category {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Parses a category name, treating anything unknown as "no category".
    pub fn parse_lossy(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    pub fn try_from_name(name: &str) -> Result<Self, InvalidCategory> {
        name.parse().map_err(|_| InvalidCategory(name.to_owned()))
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid category: {0:?}")]
pub struct InvalidCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_upper_case() {
        let names: Vec<_> = Category::all().map(Category::name).collect();
        assert_eq!(names, ["KODA", "TITANIA", "PREMION"]);
        assert_eq!(Category::Titania.to_string(), "TITANIA");
        assert_eq!(Category::COUNT, 3);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!(Category::try_from_name("KODA"), Ok(Category::Koda));
        assert_eq!(Category::try_from_name("premion"), Ok(Category::Premion));
        assert_eq!(
            Category::try_from_name("SLATE"),
            Err(InvalidCategory("SLATE".into()))
        );
    }

    #[test]
    fn unknown_names_are_treated_as_unset() {
        assert_eq!(Category::parse_lossy(""), None);
        assert_eq!(Category::parse_lossy("foo"), None);
        assert_eq!(Category::parse_lossy(" TITANIA "), Some(Category::Titania));
    }
}
