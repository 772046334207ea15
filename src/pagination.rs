#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i32>,
}

impl Pagination {
    pub fn merge(self, other: &Self) -> Self {
        let Self { per_page } = self;
        Self {
            per_page: per_page.or(other.per_page),
        }
    }
}

/// Limits applied when the generator derives listing excerpts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_paragraphs: Option<i32>,
}

impl Summary {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            max_length,
            max_paragraphs,
        } = self;
        Self {
            max_length: max_length.or(other.max_length),
            max_paragraphs: max_paragraphs.or(other.max_paragraphs),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn per_page_absent_stays_absent() {
        let pagination: Pagination = serde_yaml::from_str("{}").unwrap();
        assert_eq!(pagination.per_page, None);
    }

    #[test]
    fn per_page_type_mismatch_is_an_error() {
        let result: Result<Pagination, _> = serde_yaml::from_str("per_page: twenty");
        assert!(result.is_err());
    }

    #[test]
    fn merge_fills_summary_gaps() {
        let overlay = Summary {
            max_length: Some(80),
            ..Default::default()
        };
        let base = Summary {
            max_length: Some(50),
            max_paragraphs: Some(2),
        };
        let merged = overlay.merge(&base);
        assert_eq!(merged.max_length, Some(80));
        assert_eq!(merged.max_paragraphs, Some(2));
    }
}
