/// Top-level page sections, in nav-bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Transactions,
    Planned,
    Reports,
    Settings,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Transactions,
        Section::Planned,
        Section::Reports,
        Section::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Transactions => "transactions",
            Section::Planned => "planned",
            Section::Reports => "reports",
            Section::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Transactions => "Transactions",
            Section::Planned => "Planned",
            Section::Reports => "Reports",
            Section::Settings => "Settings",
        }
    }

    /// DOM id of the section container, e.g. `dashboard-section`
    pub fn container_id(self) -> String {
        format!("{}-section", self.name())
    }

    /// DOM id of the nav button, e.g. `nav-dashboard`
    pub fn nav_id(self) -> String {
        format!("nav-{}", self.name())
    }
}

/// Which section is on screen.
///
/// Nothing is shown until bootstrap finishes its first load; after that
/// exactly one section is visible and its nav button is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Booting,
    Showing(Section),
}

impl NavState {
    /// Transition to `section`; valid from any state
    pub fn show(self, section: Section) -> NavState {
        NavState::Showing(section)
    }

    pub fn current(self) -> Option<Section> {
        match self {
            NavState::Booting => None,
            NavState::Showing(section) => Some(section),
        }
    }

    pub fn is_visible(self, section: Section) -> bool {
        self.current() == Some(section)
    }

    /// Nav buttons carry the active marker exactly when their section is visible
    pub fn is_active(self, section: Section) -> bool {
        self.is_visible(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booting_shows_nothing() {
        let state = NavState::default();
        assert_eq!(state.current(), None);
        assert!(Section::ALL.iter().all(|section| !state.is_visible(*section)));
    }

    #[test]
    fn test_show_makes_exactly_one_section_visible_and_active() {
        let mut state = NavState::Booting;
        for target in Section::ALL {
            state = state.show(target);
            for section in Section::ALL {
                assert_eq!(state.is_visible(section), section == target);
                assert_eq!(state.is_active(section), section == target);
            }
        }
    }

    #[test]
    fn test_dom_ids() {
        assert_eq!(Section::Planned.container_id(), "planned-section");
        assert_eq!(Section::Planned.nav_id(), "nav-planned");
    }
}
