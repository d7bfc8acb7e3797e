// Page model
// Content pages, paging policy and the settings overlay

use serde::{Deserialize, Serialize};

/// Content pages the widget pages through, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    /// Clock in/out times and the clock button
    #[default]
    Main,
    /// Mini calendar fed by the day-status feed
    History,
    /// Remaining and overtime hours
    Summary,
    /// Today's and this month's earnings
    Salary,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Main, Page::History, Page::Summary, Page::Salary];

    /// Number of content pages
    pub const COUNT: i64 = Self::ALL.len() as i64;

    /// Position of the page as persisted under the `current_tab` key
    pub fn index(self) -> i64 {
        match self {
            Page::Main => 0,
            Page::History => 1,
            Page::Summary => 2,
            Page::Salary => 3,
        }
    }

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Main => "Home Screen",
            Page::History => "History",
            Page::Summary => "Summary",
            Page::Salary => "Salary",
        }
    }

    pub fn previous(self, policy: PagingPolicy) -> Self {
        self.step(-1, policy)
    }

    pub fn next(self, policy: PagingPolicy) -> Self {
        self.step(1, policy)
    }

    fn step(self, delta: i64, policy: PagingPolicy) -> Self {
        let target = self.index() + delta;
        let index = match policy {
            PagingPolicy::Wrap => target.rem_euclid(Self::COUNT),
            PagingPolicy::Clamp => target.clamp(0, Self::COUNT - 1),
        };
        Self::from_index(index).unwrap_or_default()
    }
}

/// Boundary behaviour of `Previous`/`Next` at the first and last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagingPolicy {
    /// Last page wraps to the first and vice versa
    #[default]
    Wrap,
    /// Stops at the first and last page
    Clamp,
}

/// What the widget is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisiblePage {
    Content(Page),
    Settings,
}

impl VisiblePage {
    pub fn title(self) -> &'static str {
        match self {
            VisiblePage::Content(page) => page.title(),
            VisiblePage::Settings => "Settings",
        }
    }

    pub fn is_settings(self) -> bool {
        matches!(self, VisiblePage::Settings)
    }
}
