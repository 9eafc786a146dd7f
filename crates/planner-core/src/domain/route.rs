//! Routes
//!
//! Fragment-based navigation: `#page` or `#page/<percent-encoded arg>`.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same character set `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A parsed navigation target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Appendix,
    Schedule,
    Day(String),
    Grocery,
    Supplements,
    Nutrition,
    Recipe(String),
    Workouts,
    Workout(String),
    More,
}

impl Route {
    /// Parse a location fragment (with or without the leading `#`).
    ///
    /// Returns `None` for unknown pages; callers redirect those to `#home`.
    pub fn parse(fragment: &str) -> Option<Route> {
        let hash = fragment.strip_prefix('#').unwrap_or(fragment);
        let hash = if hash.is_empty() { "home" } else { hash };
        let (page, arg) = match hash.split_once('/') {
            Some((page, arg)) => (page, arg),
            None => (hash, ""),
        };
        let arg = || percent_decode_str(arg).decode_utf8_lossy().into_owned();

        let route = match page {
            "home" => Route::Home,
            "appendix" => Route::Appendix,
            "schedule" => Route::Schedule,
            "day" => Route::Day(arg()),
            "grocery" => Route::Grocery,
            "supplements" => Route::Supplements,
            "nutrition" => Route::Nutrition,
            "recipe" => Route::Recipe(arg()),
            "workouts" => Route::Workouts,
            "workout" => Route::Workout(arg()),
            "more" => Route::More,
            _ => return None,
        };
        Some(route)
    }

    /// Page segment of the fragment
    pub fn page(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Appendix => "appendix",
            Route::Schedule => "schedule",
            Route::Day(_) => "day",
            Route::Grocery => "grocery",
            Route::Supplements => "supplements",
            Route::Nutrition => "nutrition",
            Route::Recipe(_) => "recipe",
            Route::Workouts => "workouts",
            Route::Workout(_) => "workout",
            Route::More => "more",
        }
    }

    fn arg(&self) -> Option<&str> {
        match self {
            Route::Day(arg) | Route::Recipe(arg) | Route::Workout(arg) => Some(arg),
            _ => None,
        }
    }

    /// Canonical fragment, e.g. `#recipe/Creamy%20Cheese%20%26%20Broccoli`
    pub fn href(&self) -> String {
        match self.arg() {
            Some(arg) => format!("#{}/{}", self.page(), utf8_percent_encode(arg, COMPONENT)),
            None => format!("#{}", self.page()),
        }
    }

    /// Listing page for entity routes, used when the entity is missing
    pub fn listing(&self) -> Option<Route> {
        match self {
            Route::Day(_) => Some(Route::Schedule),
            Route::Recipe(_) => Some(Route::Nutrition),
            Route::Workout(_) => Some(Route::Workouts),
            _ => None,
        }
    }

    pub fn tab(&self) -> NavTab {
        NavTab::for_page(self.page())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTab {
    Home,
    Appendix,
    Schedule,
    Grocery,
    More,
}

impl NavTab {
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Appendix,
        NavTab::Schedule,
        NavTab::Grocery,
        NavTab::More,
    ];

    /// Tab highlighted for a page name; unknown pages fall back to Home
    pub fn for_page(page: &str) -> NavTab {
        match page {
            "appendix" => NavTab::Appendix,
            "schedule" | "day" => NavTab::Schedule,
            "grocery" => NavTab::Grocery,
            "supplements" | "nutrition" | "recipe" | "workouts" | "workout" | "more" => NavTab::More,
            _ => NavTab::Home,
        }
    }

    pub fn dom_id(&self) -> &'static str {
        match self {
            NavTab::Home => "tab-home",
            NavTab::Appendix => "tab-appendix",
            NavTab::Schedule => "tab-schedule",
            NavTab::Grocery => "tab-grocery",
            NavTab::More => "tab-more",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Appendix => "Appendix",
            NavTab::Schedule => "Schedule",
            NavTab::Grocery => "Grocery",
            NavTab::More => "More",
        }
    }

    /// Where tapping the tab navigates to
    pub fn route(&self) -> Route {
        match self {
            NavTab::Home => Route::Home,
            NavTab::Appendix => Route::Appendix,
            NavTab::Schedule => Route::Schedule,
            NavTab::Grocery => Route::Grocery,
            NavTab::More => Route::More,
        }
    }
}
