use serde::Deserialize;

/// One element of a Nominatim `/search?format=json` response. Coordinates
/// arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
