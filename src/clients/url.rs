//! URL construction for API requests.

use crate::clients::Params;

/// Composes an absolute request URL.
///
/// The result is `{api_root}/{root}[/{path}][?{query}]`. An empty or absent
/// `path` omits the extra segment, and empty or absent `query` parameters
/// omit the `?`. Query parameters are percent-encoded in insertion order.
///
/// # Example
///
/// ```rust
/// use designer_news::clients::build_url;
/// use designer_news::Params;
///
/// let api_root = "https://api-news.layervault.com/api/v1";
///
/// assert_eq!(
///     build_url(api_root, "stories", Some("13627"), None),
///     "https://api-news.layervault.com/api/v1/stories/13627"
/// );
///
/// let params = Params::from([("page", 1)]);
/// assert_eq!(
///     build_url(api_root, "stories", None, Some(&params)),
///     "https://api-news.layervault.com/api/v1/stories?page=1"
/// );
/// ```
#[must_use]
pub fn build_url(api_root: &str, root: &str, path: Option<&str>, query: Option<&Params>) -> String {
    let mut url = format!("{api_root}/{root}");

    if let Some(path) = path.filter(|p| !p.is_empty()) {
        url.push('/');
        url.push_str(path);
    }

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(&query.to_query_string());
    }

    url
}
