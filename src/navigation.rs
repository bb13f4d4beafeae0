//! In-process navigation: named routes and the back stack behind them.
//!
//! Routes carry their positional parameters directly (deck title and card
//! count for the detail screen). The bottom navigation bar is only shown on
//! the three top-level tabs; the create wizard, deck detail and study flow
//! take the full screen.

/// Named screens of the app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Search,
    Create,
    DeckDetail {
        title: String,
        card_count: usize,
    },
    Study,
    More,
}

/// Bottom-navigation tabs, in display order.
pub const TABS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Search, "Search"),
    (Route::Create, "Create"),
    (Route::More, "More"),
];

impl Route {
    pub fn shows_bottom_nav(&self) -> bool {
        matches!(self, Route::Home | Route::Search | Route::More)
    }

    /// The tab a route belongs to, used to highlight the bottom bar.
    pub fn tab(&self) -> Route {
        match self {
            Route::Home | Route::DeckDetail { .. } | Route::Study => Route::Home,
            Route::Search => Route::Search,
            Route::Create => Route::Create,
            Route::More => Route::More,
        }
    }
}

/// Back stack of visited routes. Never empty: popping the last entry is a
/// no-op, so there is always a screen to render.
pub struct NavStack {
    stack: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }
}

impl NavStack {
    pub fn current(&self) -> &Route {
        // Every constructor and pop() keep at least one route on the stack.
        self.stack.last().expect("nav stack is never empty")
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pops back one screen; at the root this does nothing.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Switching tabs replaces the whole stack with the tab's root screen.
    pub fn switch_tab(&mut self, tab: Route) {
        self.stack.clear();
        self.stack.push(tab);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_starts_at_home() {
        let nav = NavStack::default();
        assert_eq!(*nav.current(), Route::Home);
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavStack::default();
        nav.push(Route::DeckDetail {
            title: "recursion".to_string(),
            card_count: 8,
        });
        nav.push(Route::Study);
        assert_eq!(*nav.current(), Route::Study);

        nav.pop();
        assert!(matches!(nav.current(), Route::DeckDetail { .. }));
    }

    #[test]
    fn test_pop_at_root_is_a_noop() {
        let mut nav = NavStack::default();
        nav.pop();
        nav.pop();
        assert_eq!(*nav.current(), Route::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_switch_tab_resets_the_stack() {
        let mut nav = NavStack::default();
        nav.push(Route::DeckDetail {
            title: "recursion".to_string(),
            card_count: 8,
        });
        nav.switch_tab(Route::Search);

        assert_eq!(*nav.current(), Route::Search);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_bottom_nav_visibility_per_route() {
        assert!(Route::Home.shows_bottom_nav());
        assert!(Route::Search.shows_bottom_nav());
        assert!(Route::More.shows_bottom_nav());

        assert!(!Route::Create.shows_bottom_nav());
        assert!(!Route::Study.shows_bottom_nav());
        assert!(
            !Route::DeckDetail {
                title: String::new(),
                card_count: 0
            }
            .shows_bottom_nav()
        );
    }

    #[test]
    fn test_detail_and_study_highlight_the_home_tab() {
        assert_eq!(Route::Study.tab(), Route::Home);
        assert_eq!(
            Route::DeckDetail {
                title: "x".to_string(),
                card_count: 1
            }
            .tab(),
            Route::Home
        );
    }
}
