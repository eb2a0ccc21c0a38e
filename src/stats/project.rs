use url::Url;

/// Derive the project name from a GitLab tab URL.
///
/// Returns `None` for anything that does not look like a GitLab project page:
/// unparseable URLs, non-GitLab hosts, or paths shorter than `group/project`.
/// GitLab marks sub-resources with a `/-/` delimiter
/// (`/group/project/-/tree/main`); when present, the project name is the last
/// path segment before the delimiter, so namespaced sub-groups resolve to the
/// project itself rather than e.g. `main`.
pub fn extract_project_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if !parsed.host_str()?.contains("gitlab") {
        return None;
    }

    let path = parsed.path();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return None;
    }

    let project_path = match path.find("/-/") {
        Some(delimiter) => &path[..delimiter],
        None => path,
    };

    project_path
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_project_url() {
        assert_eq!(
            extract_project_name("https://gitlab.com/group/project"),
            Some("project".to_string())
        );
    }

    #[test]
    fn test_sub_resource_url() {
        assert_eq!(
            extract_project_name("https://gitlab.com/group/sub/project/-/tree/main"),
            Some("project".to_string())
        );
    }

    #[test]
    fn test_nested_group() {
        assert_eq!(
            extract_project_name("https://gitlab.com/group/sub/project"),
            Some("project".to_string())
        );
    }

    #[test]
    fn test_self_hosted_instance() {
        assert_eq!(
            extract_project_name("https://gitlab.example.org/team/widget/-/merge_requests/7"),
            Some("widget".to_string())
        );
    }

    #[test]
    fn test_non_gitlab_host() {
        assert_eq!(extract_project_name("https://github.com/group/project"), None);
    }

    #[test]
    fn test_unparseable_url() {
        assert_eq!(extract_project_name("not a url"), None);
    }

    #[test]
    fn test_path_too_short() {
        assert_eq!(extract_project_name("https://gitlab.com/dashboard"), None);
        assert_eq!(extract_project_name("https://gitlab.com/"), None);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            extract_project_name("https://gitlab.com/group/project/"),
            Some("project".to_string())
        );
    }
}
