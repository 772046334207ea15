/// Switches forwarded to the generator's SEO enhancer.  The enhancer
/// itself defines what each toggle does.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Seo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_limit: Option<i32>,
}

impl Seo {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            enhancer,
            open_graph,
            twitter_cards,
            articles_limit,
            pages_limit,
        } = self;
        Self {
            enhancer: enhancer.or(other.enhancer),
            open_graph: open_graph.or(other.open_graph),
            twitter_cards: twitter_cards.or(other.twitter_cards),
            articles_limit: articles_limit.or(other.articles_limit),
            pages_limit: pages_limit.or(other.pages_limit),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn toggles_parse_as_booleans() {
        let seo: Seo = serde_yaml::from_str(
            "
enhancer: true
open_graph: true
articles_limit: 5
",
        )
        .unwrap();
        assert_eq!(seo.enhancer, Some(true));
        assert_eq!(seo.open_graph, Some(true));
        assert_eq!(seo.twitter_cards, None);
        assert_eq!(seo.articles_limit, Some(5));
    }
}
