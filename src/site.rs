#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<liquid_core::model::KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<liquid_core::model::KString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<liquid_core::model::KString>,
}

impl Site {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            author,
            title,
            description,
            base_url,
            logo,
            timezone,
            default_language,
            date_format,
        } = self;
        Self {
            author: author.or_else(|| other.author.clone()),
            title: title.or_else(|| other.title.clone()),
            description: description.or_else(|| other.description.clone()),
            base_url: base_url.or_else(|| other.base_url.clone()),
            logo: logo.or_else(|| other.logo.clone()),
            timezone: timezone.or_else(|| other.timezone.clone()),
            default_language: default_language.or_else(|| other.default_language.clone()),
            date_format: date_format.or_else(|| other.date_format.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn merge_prefers_overlay() {
        let overlay = Site {
            base_url: Some("https://blog.example.com".to_owned()),
            ..Default::default()
        };
        let base = Site {
            author: Some("Benoît Godard".to_owned()),
            base_url: Some("".to_owned()),
            ..Default::default()
        };
        let merged = overlay.merge(&base);
        assert_eq!(merged.base_url.as_deref(), Some("https://blog.example.com"));
        assert_eq!(merged.author.as_deref(), Some("Benoît Godard"));
    }
}
