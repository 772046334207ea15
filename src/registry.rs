use liquid_core::Value;

use super::*;

const DEFAULT_SOURCE: &str = "content";
const DEFAULT_TIMEZONE: &str = "UTC";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_DATE_FORMAT: &str = "%a %d %B %Y";
const DEFAULT_SUMMARY_MAX_LENGTH: i32 = 50;
const DEFAULT_SEO_LIMIT: i32 = 10;

/// The resolved settings record handed to the generator at startup.
/// Every absent key has been replaced by its documented default; the
/// record does not change for the duration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    pub source: RelPath,
    pub theme: Option<liquid_core::model::KString>,
    pub relative_urls: bool,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub base_url: Option<String>,
    pub logo: Option<String>,
    pub timezone: liquid_core::model::KString,
    pub default_language: liquid_core::model::KString,
    pub date_format: liquid_core::model::KString,
    pub feed_all_atom: Option<RelPath>,
    pub feed_category_atom: Option<RelPath>,
    pub feed_translation_atom: Option<RelPath>,
    pub feed_author_atom: Option<RelPath>,
    pub feed_author_rss: Option<RelPath>,
    pub menu_items: Vec<MenuItem>,
    pub display_pages_on_menu: bool,
    pub display_categories_on_menu: bool,
    pub blogroll: Vec<Link>,
    pub social: Vec<Link>,
    pub projects: Vec<Link>,
    pub projects_title: Option<liquid_core::model::KString>,
    pub per_page: Option<i32>,
    pub summary_max_length: i32,
    pub summary_max_paragraphs: Option<i32>,
    pub seo_enhancer: bool,
    pub seo_open_graph: bool,
    pub seo_twitter_cards: bool,
    pub seo_articles_limit: i32,
    pub seo_pages_limit: i32,
    pub static_paths: Vec<RelPath>,
    pub syntax_highlight: bool,
    pub line_numbers: LineNumbers,
}

impl Registry {
    pub fn from_config(config: Config) -> Self {
        let Config {
            root: _,
            source,
            theme,
            relative_urls,
            site,
            feeds,
            menu,
            links,
            pagination,
            summary,
            seo,
            assets,
            syntax_highlight,
        } = config;
        let Site {
            author,
            title,
            description,
            base_url,
            logo,
            timezone,
            default_language,
            date_format,
        } = site;
        let Feeds {
            all_atom,
            category_atom,
            translation_atom,
            author_atom,
            author_rss,
        } = feeds;
        let Menu {
            items,
            display_pages,
            display_categories,
        } = menu;
        let Links {
            blogroll,
            social,
            projects,
            projects_title,
        } = links;
        let Pagination { per_page } = pagination;
        let Summary {
            max_length,
            max_paragraphs,
        } = summary;
        let Seo {
            enhancer,
            open_graph,
            twitter_cards,
            articles_limit,
            pages_limit,
        } = seo;
        let Assets { static_paths } = assets;
        let SyntaxHighlight {
            enabled,
            line_numbers,
        } = syntax_highlight;

        let base_url = base_url.map(|mut l| {
            if l.ends_with('/') {
                l.pop();
            }
            l
        });

        Self {
            source: source.unwrap_or_else(|| RelPath::from_unchecked(DEFAULT_SOURCE)),
            theme,
            relative_urls: relative_urls.unwrap_or(false),
            author,
            title,
            description,
            base_url,
            logo,
            timezone: timezone.unwrap_or_else(|| DEFAULT_TIMEZONE.into()),
            default_language: default_language.unwrap_or_else(|| DEFAULT_LANGUAGE.into()),
            date_format: date_format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.into()),
            feed_all_atom: all_atom,
            feed_category_atom: category_atom,
            feed_translation_atom: translation_atom,
            feed_author_atom: author_atom,
            feed_author_rss: author_rss,
            menu_items: items.unwrap_or_default(),
            display_pages_on_menu: display_pages.unwrap_or(true),
            display_categories_on_menu: display_categories.unwrap_or(true),
            blogroll: blogroll.unwrap_or_default(),
            social: social.unwrap_or_default(),
            projects: projects.unwrap_or_default(),
            projects_title,
            per_page,
            summary_max_length: max_length.unwrap_or(DEFAULT_SUMMARY_MAX_LENGTH),
            summary_max_paragraphs: max_paragraphs,
            seo_enhancer: enhancer.unwrap_or(false),
            seo_open_graph: open_graph.unwrap_or(false),
            seo_twitter_cards: twitter_cards.unwrap_or(false),
            seo_articles_limit: articles_limit.unwrap_or(DEFAULT_SEO_LIMIT),
            seo_pages_limit: pages_limit.unwrap_or(DEFAULT_SEO_LIMIT),
            static_paths: static_paths.unwrap_or_default(),
            syntax_highlight: enabled.unwrap_or(true),
            line_numbers: line_numbers.unwrap_or_default(),
        }
    }

    /// The record in the shape templates consume it, one attribute per
    /// setting.  Absent optional settings are omitted rather than
    /// rendered as nil.
    pub fn to_object(&self) -> liquid_core::Object {
        let mut attributes = liquid_core::Object::new();

        insert_opt_str(&mut attributes, "author", self.author.as_deref());
        insert_opt_str(&mut attributes, "title", self.title.as_deref());
        insert_opt_str(&mut attributes, "description", self.description.as_deref());
        insert_opt_str(&mut attributes, "base_url", self.base_url.as_deref());
        insert_opt_str(&mut attributes, "logo", self.logo.as_deref());
        attributes.insert("timezone".into(), Value::scalar(self.timezone.clone()));
        attributes.insert(
            "default_language".into(),
            Value::scalar(self.default_language.clone()),
        );
        attributes.insert(
            "date_format".into(),
            Value::scalar(self.date_format.clone()),
        );
        insert_opt_str(&mut attributes, "theme", self.theme.as_deref());
        attributes.insert(
            "source".into(),
            Value::scalar(self.source.as_str().to_owned()),
        );
        attributes.insert("relative_urls".into(), Value::scalar(self.relative_urls));

        insert_opt_path(&mut attributes, "feed_all_atom", self.feed_all_atom.as_ref());
        insert_opt_path(
            &mut attributes,
            "feed_category_atom",
            self.feed_category_atom.as_ref(),
        );
        insert_opt_path(
            &mut attributes,
            "feed_translation_atom",
            self.feed_translation_atom.as_ref(),
        );
        insert_opt_path(
            &mut attributes,
            "feed_author_atom",
            self.feed_author_atom.as_ref(),
        );
        insert_opt_path(
            &mut attributes,
            "feed_author_rss",
            self.feed_author_rss.as_ref(),
        );

        attributes.insert("menu_items".into(), menu_array(&self.menu_items));
        attributes.insert(
            "display_pages_on_menu".into(),
            Value::scalar(self.display_pages_on_menu),
        );
        attributes.insert(
            "display_categories_on_menu".into(),
            Value::scalar(self.display_categories_on_menu),
        );

        attributes.insert("blogroll".into(), link_array(&self.blogroll));
        attributes.insert("social".into(), link_array(&self.social));
        attributes.insert("projects".into(), link_array(&self.projects));
        insert_opt_str(
            &mut attributes,
            "projects_title",
            self.projects_title.as_deref(),
        );

        if let Some(per_page) = self.per_page {
            attributes.insert("per_page".into(), Value::scalar(i64::from(per_page)));
        }
        attributes.insert(
            "summary_max_length".into(),
            Value::scalar(i64::from(self.summary_max_length)),
        );
        if let Some(max_paragraphs) = self.summary_max_paragraphs {
            attributes.insert(
                "summary_max_paragraphs".into(),
                Value::scalar(i64::from(max_paragraphs)),
            );
        }

        attributes.insert("seo_enhancer".into(), Value::scalar(self.seo_enhancer));
        attributes.insert("seo_open_graph".into(), Value::scalar(self.seo_open_graph));
        attributes.insert(
            "seo_twitter_cards".into(),
            Value::scalar(self.seo_twitter_cards),
        );
        attributes.insert(
            "seo_articles_limit".into(),
            Value::scalar(i64::from(self.seo_articles_limit)),
        );
        attributes.insert(
            "seo_pages_limit".into(),
            Value::scalar(i64::from(self.seo_pages_limit)),
        );

        attributes.insert(
            "static_paths".into(),
            Value::Array(
                self.static_paths
                    .iter()
                    .map(|p| Value::scalar(p.as_str().to_owned()))
                    .collect(),
            ),
        );

        attributes.insert(
            "syntax_highlight".into(),
            Value::scalar(self.syntax_highlight),
        );
        attributes.insert(
            "line_numbers".into(),
            Value::scalar(self.line_numbers.as_str()),
        );

        attributes
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::from_config(Config::default())
    }
}

fn insert_opt_str(attributes: &mut liquid_core::Object, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        attributes.insert(key.into(), Value::scalar(value.to_owned()));
    }
}

fn insert_opt_path(
    attributes: &mut liquid_core::Object,
    key: &'static str,
    value: Option<&RelPath>,
) {
    if let Some(value) = value {
        attributes.insert(key.into(), Value::scalar(value.as_str().to_owned()));
    }
}

fn menu_array(items: &[MenuItem]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| {
                let mut attributes = liquid_core::Object::new();
                attributes.insert("label".into(), Value::scalar(item.label.clone()));
                attributes.insert("path".into(), Value::scalar(item.path.clone()));
                Value::Object(attributes)
            })
            .collect(),
    )
}

fn link_array(links: &[Link]) -> Value {
    Value::Array(
        links
            .iter()
            .map(|link| {
                let mut attributes = liquid_core::Object::new();
                attributes.insert("label".into(), Value::scalar(link.label.clone()));
                attributes.insert("url".into(), Value::scalar(link.url.clone()));
                Value::Object(attributes)
            })
            .collect(),
    )
}
