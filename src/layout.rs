//! Render mode selection for the admin area.
//!
//! Most admin pages are rendered inside the shared admin shell (nav bar,
//! footer, toast zone). A few routes need the whole viewport, the vector
//! drawing editor being the first of them: those are listed in
//! [`FULL_WIDTH_ROUTE_PREFIXES`] and rendered without any chrome.

/// Route prefixes rendered without the admin shell.
///
/// Matching is a raw case-sensitive `starts_with`, not a path-segment match:
/// a hypothetical `/admin/vector-draws` route would also render full width.
pub const FULL_WIDTH_ROUTE_PREFIXES: &[&str] = &["/admin/vector-draw"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeMode {
    /// Page content is nested inside the shared admin shell.
    Wrapped,
    /// Page content gets the whole viewport, no shell.
    FullWidth,
}

/// Selects the render mode for the given navigation path.
///
/// An absent path (before the router has settled on a location) keeps the
/// chrome visible.
pub fn chrome_mode(path: Option<&str>) -> ChromeMode {
    match path {
        Some(path)
            if FULL_WIDTH_ROUTE_PREFIXES
                .iter()
                .any(|prefix| path.starts_with(prefix)) =>
        {
            ChromeMode::FullWidth
        }
        _ => ChromeMode::Wrapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_chrome_mode_for_exact_full_width_route() {
        assert_eq!(
            chrome_mode(Some("/admin/vector-draw")),
            ChromeMode::FullWidth
        );
    }

    #[rstest]
    fn test_chrome_mode_for_nested_full_width_route() {
        assert_eq!(
            chrome_mode(Some("/admin/vector-draw/6787a97f-432e-43fb-8b67-b4f5b4142427")),
            ChromeMode::FullWidth
        );
        assert_eq!(
            chrome_mode(Some("/admin/vector-draw/edit")),
            ChromeMode::FullWidth
        );
    }

    #[rstest]
    fn test_chrome_mode_matches_on_raw_prefix_not_path_segment() {
        assert_eq!(
            chrome_mode(Some("/admin/vector-draws")),
            ChromeMode::FullWidth
        );
    }

    #[rstest]
    fn test_chrome_mode_for_regular_admin_routes() {
        assert_eq!(chrome_mode(Some("/admin")), ChromeMode::Wrapped);
        assert_eq!(chrome_mode(Some("/admin/drawings")), ChromeMode::Wrapped);
        assert_eq!(chrome_mode(Some("/admin/settings")), ChromeMode::Wrapped);
    }

    #[rstest]
    fn test_chrome_mode_is_case_sensitive() {
        assert_eq!(chrome_mode(Some("/Admin/Vector-Draw")), ChromeMode::Wrapped);
    }

    #[rstest]
    fn test_chrome_mode_without_a_path() {
        assert_eq!(chrome_mode(None), ChromeMode::Wrapped);
    }

    #[rstest]
    fn test_chrome_mode_is_stable_across_evaluations() {
        let path = Some("/admin/vector-draw/42");
        assert_eq!(chrome_mode(path), chrome_mode(path));
        assert_eq!(chrome_mode(Some("/admin")), chrome_mode(Some("/admin")));
    }
}
