/// A labeled external link, rendered in the order it was declared.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: liquid_core::model::KString,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blogroll: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_title: Option<liquid_core::model::KString>,
}

impl Links {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            blogroll,
            social,
            projects,
            projects_title,
        } = self;
        Self {
            blogroll: blogroll.or_else(|| other.blogroll.clone()),
            social: social.or_else(|| other.social.clone()),
            projects: projects.or_else(|| other.projects.clone()),
            projects_title: projects_title.or_else(|| other.projects_title.clone()),
        }
    }
}
