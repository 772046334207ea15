#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Assets {
    /// Directories copied into the site output without templating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_paths: Option<Vec<crate::RelPath>>,
}

impl Assets {
    pub fn merge(self, other: &Self) -> Self {
        let Self { static_paths } = self;
        Self {
            static_paths: static_paths.or_else(|| other.static_paths.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn static_paths_keep_declaration_order() {
        let assets: Assets = serde_yaml::from_str(
            "
static_paths:
  - images
  - extra/CNAME
",
        )
        .unwrap();
        let paths = assets.static_paths.unwrap();
        assert_eq!(paths[0].as_str(), "images");
        assert_eq!(paths[1].as_str(), "extra/CNAME");
    }
}
