//! Navigation targets: the catalog root and a per-name detail page.

/// Resolved navigation target. Unknown paths resolve to [`Route::Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Detail(String),
}

impl Route {
    /// `/` is the catalog, `/pokemon/<name>` a detail page. Query strings and
    /// fragments are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Catalog,
            ["pokemon", name] => Self::Detail((*name).to_owned()),
            _ => {
                tracing::debug!(path, "unknown route, redirecting to catalog");
                Self::Catalog
            },
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Catalog => "/".to_owned(),
            Self::Detail(name) => format!("/pokemon/{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_catalog() {
        assert_eq!(Route::parse("/"), Route::Catalog);
        assert_eq!(Route::parse(""), Route::Catalog);
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(Route::parse("/pokemon/pikachu"), Route::Detail("pikachu".to_owned()));
        assert_eq!(Route::parse("pokemon/eevee/"), Route::Detail("eevee".to_owned()));
        assert_eq!(Route::parse("/pokemon/mew?tab=stats#top"), Route::Detail("mew".to_owned()));
    }

    #[test]
    fn test_unknown_paths_redirect_to_catalog() {
        for path in ["/pokemon", "/pokemon/a/b", "/items/potion", "/admin"] {
            assert_eq!(Route::parse(path), Route::Catalog, "{path}");
        }
    }

    #[test]
    fn test_path_roundtrip() {
        assert_eq!(Route::Catalog.path(), "/");
        let detail = Route::Detail("pikachu".to_owned());
        assert_eq!(Route::parse(&detail.path()), detail);
    }
}
