use std::fmt;

/// The pages the embedding shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Analyze,
    History,
    HealthLog,
    Education,
    Profile,
}

impl Page {
    /// Pages that read or write the record store. Anonymous identities are
    /// gated away from these; analyze and education work without records.
    pub fn record_bearing(&self) -> bool {
        match self {
            Page::Dashboard | Page::History | Page::HealthLog | Page::Profile => true,
            Page::Analyze | Page::Education => false,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Page::Dashboard => "Dashboard",
            Page::Analyze => "Analyze",
            Page::History => "History",
            Page::HealthLog => "Health Log",
            Page::Education => "Education",
            Page::Profile => "Profile",
        };
        write!(f, "{label}")
    }
}
