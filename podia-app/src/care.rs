/// A map-search link for finding nearby foot-care providers.
///
/// Produced when an analysis result carries the consultation conclusion.
/// With device coordinates the search is centered on the user; without them
/// it falls back to a generic "near me" query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareLookup {
    pub url: String,
}

impl CareLookup {
    pub fn new(coords: Option<(f64, f64)>) -> Self {
        let url = match coords {
            Some((lat, lng)) => {
                format!("https://www.google.com/maps/search/podiatrist/@{lat},{lng},14z")
            }
            None => "https://www.google.com/maps/search/podiatrist+near+me".to_string(),
        };

        Self { url }
    }
}
