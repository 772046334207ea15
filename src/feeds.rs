/// Feed destinations, each relative to the site root.  A feed that is
/// not configured is not generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Feeds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_atom: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_atom: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_atom: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_atom: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_rss: Option<crate::RelPath>,
}

impl Feeds {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            all_atom,
            category_atom,
            translation_atom,
            author_atom,
            author_rss,
        } = self;
        Self {
            all_atom: all_atom.or_else(|| other.all_atom.clone()),
            category_atom: category_atom.or_else(|| other.category_atom.clone()),
            translation_atom: translation_atom.or_else(|| other.translation_atom.clone()),
            author_atom: author_atom.or_else(|| other.author_atom.clone()),
            author_rss: author_rss.or_else(|| other.author_rss.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unconfigured_feeds_are_disabled() {
        let feeds: Feeds = serde_yaml::from_str("{}").unwrap();
        assert_eq!(feeds, Feeds::default());
        assert_eq!(feeds.all_atom, None);
    }

    #[test]
    fn overlay_enables_feeds() {
        let overlay: Feeds = serde_yaml::from_str(
            "
all_atom: feeds/all.atom.xml
category_atom: feeds/{slug}.atom.xml
",
        )
        .unwrap();
        let merged = overlay.merge(&Feeds::default());
        assert_eq!(
            merged.all_atom,
            Some(crate::RelPath::from_unchecked("feeds/all.atom.xml"))
        );
        assert_eq!(merged.author_rss, None);
    }

    #[test]
    fn absolute_feed_path_rejected() {
        let result: Result<Feeds, _> = serde_yaml::from_str("all_atom: /feeds/all.atom.xml");
        assert!(result.is_err());
    }
}
