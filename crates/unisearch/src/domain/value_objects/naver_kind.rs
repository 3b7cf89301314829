//! NaverKind - Naver Search sub-resource

use super::SearchSource;

/// Naver Search sub-resource.
///
/// Each kind carries its endpoint suffix and the source label attached to
/// its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaverKind {
    Blog,
    News,
}

impl NaverKind {
    /// Path appended to the Naver Search base URL.
    pub fn path_suffix(&self) -> &'static str {
        match self {
            NaverKind::Blog => "/blog.json",
            NaverKind::News => "/news.json",
        }
    }

    pub fn source(&self) -> SearchSource {
        match self {
            NaverKind::Blog => SearchSource::NaverBlog,
            NaverKind::News => SearchSource::NaverNews,
        }
    }
}

impl std::fmt::Display for NaverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NaverKind::Blog => write!(f, "blog"),
            NaverKind::News => write!(f, "news"),
        }
    }
}

impl std::str::FromStr for NaverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blog" => Ok(NaverKind::Blog),
            "news" => Ok(NaverKind::News),
            _ => Err(format!("Unknown Naver search kind: {}. Valid: blog, news", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_metadata() {
        assert_eq!(NaverKind::Blog.path_suffix(), "/blog.json");
        assert_eq!(NaverKind::News.path_suffix(), "/news.json");
        assert_eq!(NaverKind::Blog.source(), SearchSource::NaverBlog);
        assert_eq!(NaverKind::News.source(), SearchSource::NaverNews);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert_eq!("NEWS".parse::<NaverKind>(), Ok(NaverKind::News));
        assert!("image".parse::<NaverKind>().is_err());
    }
}
