//! Template support the generator wires in for every theme: the
//! `urljoin` filter.

use liquid_core::Expression;
use liquid_core::Result;
use liquid_core::Runtime;
use liquid_core::{
    Display_filter, Filter, FilterParameters, FilterReflection, FromFilterParameters, ParseFilter,
};
use liquid_core::{Value, ValueView};

#[derive(Debug, FilterParameters)]
struct UrlJoinArgs {
    #[parameter(description = "The path to join onto the URL.", arg_type = "str")]
    path: Expression,
}

/// `{{ site.base_url | urljoin: "feeds/all.atom.xml" }}`
#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "urljoin",
    description = "Joins a path onto a base URL.",
    parameters(UrlJoinArgs),
    parsed(UrlJoinFilter)
)]
pub struct UrlJoin;

#[derive(Debug, FromFilterParameters, Display_filter)]
#[name = "urljoin"]
struct UrlJoinFilter {
    #[parameters]
    args: UrlJoinArgs,
}

impl Filter for UrlJoinFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> Result<Value> {
        let args = self.args.evaluate(runtime)?;
        let base = input.to_kstr();
        let path = args.path.as_str();
        Ok(Value::scalar(join_url(&base, path)))
    }
}

// Mirrors posix path joining: an absolute segment replaces everything
// before it.
fn join_url(base: &str, path: &str) -> String {
    if path.contains("://") || path.starts_with('/') {
        return path.to_owned();
    }
    if path.is_empty() {
        return base.to_owned();
    }
    if base.is_empty() {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// A parser with the stdlib plus the filters themes expect.
pub fn parser() -> crate::Result<liquid::Parser> {
    liquid::ParserBuilder::with_stdlib()
        .filter(UrlJoin)
        .build()
        .map_err(|e| crate::Status::new("Failed to build template parser").with_source(e))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn join_url_plain() {
        assert_eq!(
            join_url("https://example.com", "feeds/all.atom.xml"),
            "https://example.com/feeds/all.atom.xml"
        );
    }

    #[test]
    fn join_url_trailing_slash() {
        assert_eq!(join_url("https://example.com/", "theme/css"), "https://example.com/theme/css");
    }

    #[test]
    fn join_url_absolute_path_resets() {
        assert_eq!(join_url("https://example.com", "/theme/css"), "/theme/css");
    }

    #[test]
    fn join_url_absolute_url_resets() {
        assert_eq!(
            join_url("https://example.com", "https://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn join_url_empty_base() {
        assert_eq!(join_url("", "theme/css"), "theme/css");
    }

    #[test]
    fn join_url_empty_path() {
        assert_eq!(join_url("https://example.com", ""), "https://example.com");
    }

    #[test]
    fn urljoin_renders() {
        let parser = parser().unwrap();
        let template = parser
            .parse(r#"{{ base | urljoin: "feeds/all.atom.xml" }}"#)
            .unwrap();
        let globals = liquid::object!({
            "base": "https://example.com/",
        });
        let output = template.render(&globals).unwrap();
        assert_eq!(output, "https://example.com/feeds/all.atom.xml");
    }

    #[test]
    fn urljoin_renders_site_object() {
        let config = crate::Config::from_file("tests/fixtures/config/_quill.yml").unwrap();
        let parser = parser().unwrap();
        let template = parser
            .parse(r#"{{ site.base_url | urljoin: "archives.html" }}"#)
            .unwrap();
        let mut globals = liquid_core::Object::new();
        globals.insert(
            "site".into(),
            liquid_core::Value::Object(config.build().to_object()),
        );
        let output = template.render(&globals).unwrap();
        assert_eq!(output, "archives.html");
    }
}
