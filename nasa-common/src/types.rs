use serde::{Deserialize, Serialize};

/// One reduced hit from the image search: its first title and first link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub image_url: String,
}

/// A rover photograph as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub source_url: String,
    pub rover_name: String,
    #[serde(default)]
    pub is_mosaic: bool,
}

impl Photo {
    pub fn new(source_url: impl Into<String>, rover_name: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            rover_name: rover_name.into(),
            is_mosaic: false,
        }
    }

    pub fn mosaic(mut self) -> Self {
        self.is_mosaic = true;
        self
    }
}

/// The panel currently shown in a view session. Only one can be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePanel {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "mars")]
    Mars,
    #[serde(rename = "spacex")]
    SpaceX,
    #[serde(rename = "hubble")]
    Hubble,
    #[serde(rename = "nebula")]
    Nebula,
}

impl ActivePanel {
    /// Fixed search query behind a search panel. `None` for panels not backed by search.
    pub fn preset_query(&self) -> Option<&'static str> {
        match self {
            ActivePanel::SpaceX => Some("falcon 9 launch"),
            ActivePanel::Hubble => Some("hubble galaxy"),
            ActivePanel::Nebula => Some("hubble nebula"),
            ActivePanel::None | ActivePanel::Mars => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivePanel::None => "none",
            ActivePanel::Mars => "mars",
            ActivePanel::SpaceX => "spacex",
            ActivePanel::Hubble => "hubble",
            ActivePanel::Nebula => "nebula",
        }
    }
}

impl std::fmt::Display for ActivePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivePanel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ActivePanel::None),
            "mars" => Ok(ActivePanel::Mars),
            "spacex" | "space-x" => Ok(ActivePanel::SpaceX),
            "hubble" => Ok(ActivePanel::Hubble),
            "nebula" => Ok(ActivePanel::Nebula),
            _ => Err(format!("Unknown panel: {}", s)),
        }
    }
}
