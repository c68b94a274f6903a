//! Static menu configuration.

use once_cell::sync::Lazy;
use regex::Regex;

/// One entry of the persistent navigation menu.
pub struct MenuEntry {
    /// Glyph shown next to the label.
    pub icon: &'static str,
    /// i18n key for the label, e.g. `menu.library`.
    pub label_key: &'static str,
    /// Target path.
    pub to: &'static str,
    active_match: Regex,
}

impl MenuEntry {
    fn new(icon: &'static str, label_key: &'static str, to: &'static str, pattern: &str) -> Self {
        Self {
            icon,
            label_key,
            to,
            active_match: Regex::new(pattern).expect("invalid menu pattern"),
        }
    }

    /// Whether this entry should be highlighted for the given path.
    ///
    /// Patterns are prefix-anchored, so a detail page under a list path
    /// still highlights the list entry. A pattern additionally anchored
    /// to end-of-string (e.g. `^/library/?$`) restricts the highlight to
    /// the exact page and excludes its sub-routes.
    pub fn is_active(&self, path: &str) -> bool {
        self.active_match.is_match(path)
    }
}

/// The menu table consulted by the chrome.
pub static MENU_ITEMS: Lazy<Vec<MenuEntry>> = Lazy::new(|| {
    vec![
        MenuEntry::new("▦", "menu.library", "/library", "^/library"),
        MenuEntry::new("↗", "menu.stats", "/stats", "^/stats"),
        MenuEntry::new("⚅", "menu.tools", "/tools", "^/tools"),
        MenuEntry::new("◉", "menu.account", "/account", "^/account"),
        MenuEntry::new("♙", "menu.players", "/players", "^/players"),
        MenuEntry::new("♟", "menu.teams", "/teams", "^/teams"),
    ]
});

/// First menu entry active for the given path, if any.
pub fn active_entry(path: &str) -> Option<&'static MenuEntry> {
    MENU_ITEMS.iter().find(|entry| entry.is_active(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages_highlight_their_list_entry() {
        let library = &MENU_ITEMS[0];
        assert!(library.is_active("/library"));
        assert!(library.is_active("/library/g1"));
        assert!(library.is_active("/library/g1/edit"));
        assert!(!library.is_active("/stats"));
    }

    #[test]
    fn exact_anchored_pattern_excludes_sub_routes() {
        let entry = MenuEntry::new("▦", "menu.library", "/library", "^/library/?$");
        assert!(entry.is_active("/library"));
        assert!(entry.is_active("/library/"));
        assert!(!entry.is_active("/library/g1"));
        assert!(!entry.is_active("/library/new"));
    }

    #[test]
    fn active_entry_resolves_by_prefix() {
        assert_eq!(active_entry("/teams/t1").map(|e| e.to), Some("/teams"));
        assert!(active_entry("/nowhere").is_none());
    }
}
