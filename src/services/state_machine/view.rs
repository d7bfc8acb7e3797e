use crate::models::page::{Page, VisiblePage};
use crate::models::settings::WidgetState;

/// Page-level visibility derived from a state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub visible_page: VisiblePage,
    pub title: &'static str,
    /// Previous/Next are hidden while the settings overlay is open
    pub nav_buttons_enabled: bool,
}

impl PageView {
    pub fn for_state(state: &WidgetState) -> Self {
        let visible_page = state.visible_page();
        Self {
            visible_page,
            title: visible_page.title(),
            nav_buttons_enabled: !visible_page.is_settings(),
        }
    }

    /// Whether the content of `page` is on screen
    pub fn shows(&self, page: Page) -> bool {
        self.visible_page == VisiblePage::Content(page)
    }

    pub fn shows_settings(&self) -> bool {
        self.visible_page.is_settings()
    }
}
