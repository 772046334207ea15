/// A single navigation entry, rendered in the order it was declared.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    pub label: liquid_core::model::KString,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Menu {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_pages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_categories: Option<bool>,
}

impl Menu {
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            items,
            display_pages,
            display_categories,
        } = self;
        Self {
            items: items.or_else(|| other.items.clone()),
            display_pages: display_pages.or(other.display_pages),
            display_categories: display_categories.or(other.display_categories),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn items_keep_declaration_order() {
        let menu: Menu = serde_yaml::from_str(
            "
items:
  - label: Articles
    path: /category/articles.html
  - label: About
    path: /pages/about.html
",
        )
        .unwrap();
        let items = menu.items.unwrap();
        assert_eq!(items[0].label.as_str(), "Articles");
        assert_eq!(items[0].path, "/category/articles.html");
        assert_eq!(items[1].label.as_str(), "About");
    }

    #[test]
    fn merge_does_not_mix_item_lists() {
        let overlay = Menu {
            items: Some(vec![MenuItem {
                label: "Archive".into(),
                path: "/archives.html".to_owned(),
            }]),
            ..Default::default()
        };
        let base = Menu {
            items: Some(vec![MenuItem {
                label: "Articles".into(),
                path: "/category/articles.html".to_owned(),
            }]),
            display_pages: Some(false),
            ..Default::default()
        };
        let merged = overlay.merge(&base);
        assert_eq!(merged.items.unwrap().len(), 1);
        assert_eq!(merged.display_pages, Some(false));
    }
}
