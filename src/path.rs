use std::fmt;

/// A site-relative path, as used for feed destinations and static asset
/// directories.
#[derive(
    Default,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn new() -> Self {
        Self(relative_path::RelativePathBuf::new())
    }

    pub fn from_unchecked(value: &str) -> Self {
        Self(relative_path::RelativePathBuf::from(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_relative_path(&self) -> &relative_path::RelativePath {
        self.0.as_relative_path()
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for RelPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.starts_with('/') {
            Err("Site paths must be relative")
        } else if relative_path::RelativePath::new(value)
            .components()
            .any(|c| c == relative_path::Component::ParentDir)
        {
            Err("Site paths cannot refer outside of the site")
        } else {
            Ok(Self(relative_path::RelativePathBuf::from(value)))
        }
    }
}

impl TryFrom<String> for RelPath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl std::ops::Deref for RelPath {
    type Target = relative_path::RelativePath;

    #[inline]
    fn deref(&self) -> &relative_path::RelativePath {
        self.0.as_relative_path()
    }
}

impl AsRef<str> for RelPath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn relative_ok() {
        let actual = RelPath::try_from("feeds/all.atom.xml").unwrap();
        assert_eq!(actual.as_str(), "feeds/all.atom.xml");
    }

    #[test]
    fn absolute_rejected() {
        assert!(RelPath::try_from("/etc/passwd").is_err());
    }

    #[test]
    fn parent_rejected() {
        assert!(RelPath::try_from("../outside").is_err());
        assert!(RelPath::try_from("images/../../outside").is_err());
    }

    #[test]
    fn current_dir_ok() {
        let actual = RelPath::try_from("./images").unwrap();
        assert_eq!(actual.as_str(), "./images");
    }
}
