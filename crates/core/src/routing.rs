//! Declarative route table and path resolution.

use std::collections::HashMap;

/// Identifier of a page the frontend can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Page {
    Library,
    GameDetail,
    GameNew,
    GameEdit,
    Players,
    PlayerDetail,
    Teams,
    TeamDetail,
    Stats,
    Tools,
    Account,
    NotFound,
}

/// Metadata attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// i18n key for the page title.
    pub title_key: &'static str,
    /// Whether the surrounding chrome (menu, header) is shown.
    pub chrome: bool,
}

struct RouteDef {
    template: &'static str,
    page: Page,
    meta: RouteMeta,
}

const fn route(template: &'static str, page: Page, title_key: &'static str) -> RouteDef {
    RouteDef {
        template,
        page,
        meta: RouteMeta {
            title_key,
            chrome: true,
        },
    }
}

// Resolution walks this table top to bottom, so static segments must be
// listed before parameter segments that would shadow them
// (`/library/new` before `/library/:id`).
const ROUTES: &[RouteDef] = &[
    route("/library", Page::Library, "pages.library"),
    route("/library/new", Page::GameNew, "pages.newGame"),
    route("/library/:id", Page::GameDetail, "pages.gameDetail"),
    route("/library/:id/edit", Page::GameEdit, "pages.editGame"),
    route("/players", Page::Players, "pages.players"),
    route("/players/:id", Page::PlayerDetail, "pages.playerDetail"),
    route("/teams", Page::Teams, "pages.teams"),
    route("/teams/:id", Page::TeamDetail, "pages.teamDetail"),
    route("/stats", Page::Stats, "pages.stats"),
    route("/tools", Page::Tools, "pages.tools"),
    route("/account", Page::Account, "pages.account"),
];

const NOT_FOUND_META: RouteMeta = RouteMeta {
    title_key: "pages.notFound",
    chrome: false,
};

/// Result of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Page to render.
    pub page: Page,
    /// Captured path parameters, keyed by segment name.
    pub params: HashMap<String, String>,
    /// Route metadata.
    pub meta: RouteMeta,
}

impl RouteMatch {
    /// The `id` parameter, when the route captured one.
    pub fn id(&self) -> Option<&str> {
        self.params.get("id").map(String::as_str)
    }
}

/// Resolve a path to a page. The root redirects to the library; any
/// unmatched path resolves to the catch-all not-found entry, which
/// hides the chrome.
pub fn resolve(path: &str) -> RouteMatch {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        // `/` redirects to the library.
        return resolve("/library");
    }

    for def in ROUTES {
        if let Some(params) = match_template(def.template, &segments) {
            return RouteMatch {
                page: def.page,
                params,
                meta: def.meta,
            };
        }
    }

    RouteMatch {
        page: Page::NotFound,
        params: HashMap::new(),
        meta: NOT_FOUND_META,
    }
}

fn match_template(template: &str, segments: &[&str]) -> Option<HashMap<String, String>> {
    let pattern: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();
    if pattern.len() != segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), (*actual).to_string());
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

/// Saved scroll offsets per path. Back/forward navigation restores the
/// offset recorded when the page was left; fresh navigation starts at
/// the top.
#[derive(Debug, Default)]
pub struct ScrollMemory {
    saved: HashMap<String, u16>,
}

impl ScrollMemory {
    /// Record the offset for the page being left.
    pub fn leave(&mut self, path: &str, offset: u16) {
        self.saved.insert(path.to_string(), offset);
    }

    /// Offset to apply when entering `path`. `from_history` marks a
    /// back/forward navigation.
    pub fn enter(&self, path: &str, from_history: bool) -> u16 {
        if from_history {
            self.saved.get(path).copied().unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_library() {
        let matched = resolve("/");
        assert_eq!(matched.page, Page::Library);
        assert!(matched.meta.chrome);
    }

    #[test]
    fn detail_route_captures_the_id() {
        let matched = resolve("/library/g1");
        assert_eq!(matched.page, Page::GameDetail);
        assert_eq!(matched.id(), Some("g1"));
        assert_eq!(matched.meta.title_key, "pages.gameDetail");

        let edit = resolve("/library/g1/edit");
        assert_eq!(edit.page, Page::GameEdit);
        assert_eq!(edit.id(), Some("g1"));
    }

    #[test]
    fn static_segment_wins_over_parameter() {
        assert_eq!(resolve("/library/new").page, Page::GameNew);
        assert!(resolve("/library/new").params.is_empty());
    }

    #[test]
    fn unmatched_paths_fall_through_to_not_found() {
        let matched = resolve("/no/such/page");
        assert_eq!(matched.page, Page::NotFound);
        assert!(!matched.meta.chrome);

        assert_eq!(resolve("/library/g1/extra/deep").page, Page::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(resolve("/players/").page, Page::Players);
        assert_eq!(resolve("/players/3").page, Page::PlayerDetail);
    }

    #[test]
    fn scroll_restores_only_for_history_navigation() {
        let mut memory = ScrollMemory::default();
        memory.leave("/library", 12);

        assert_eq!(memory.enter("/library", true), 12);
        assert_eq!(memory.enter("/library", false), 0);
        assert_eq!(memory.enter("/stats", true), 0);
    }
}
