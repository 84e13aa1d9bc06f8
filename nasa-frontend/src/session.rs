//! View session: which panel is open, what it shows, and which in-flight
//! responses are still wanted.
//!
//! Starting a request (or clearing an area's content) bumps that area's
//! generation. A response is applied only if it carries the current
//! generation, so a slow answer can never overwrite a newer one.

use nasa_common::{ActivePanel, Photo, SearchResult};
use std::fmt;

use crate::backend::GalleryBackend;

/// Independently guarded kinds of content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureArea {
    Search,
    Photos,
}

/// Identifies one request so its response can be checked for staleness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub area: FeatureArea,
    pub generation: u64,
}

/// A request the session wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Search { ticket: RequestTicket, query: String },
    Photos { ticket: RequestTicket },
}

/// The outcome of a [`PendingRequest`], fed back through [`ViewSession::apply`].
#[derive(Debug)]
pub enum Completion {
    Search {
        ticket: RequestTicket,
        result: anyhow::Result<Vec<SearchResult>>,
    },
    Photos {
        ticket: RequestTicket,
        result: anyhow::Result<Vec<Photo>>,
    },
}

impl PendingRequest {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            PendingRequest::Search { ticket, .. } | PendingRequest::Photos { ticket } => *ticket,
        }
    }

    /// Issue the request against a backend.
    pub async fn run<B: GalleryBackend + ?Sized>(self, backend: &B) -> Completion {
        match self {
            PendingRequest::Search { ticket, query } => Completion::Search {
                ticket,
                result: backend.search(&query).await,
            },
            PendingRequest::Photos { ticket } => Completion::Photos {
                ticket,
                result: backend.mars_photos().await,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewSession {
    panel: ActivePanel,
    search_items: Vec<SearchResult>,
    mars_photos: Vec<Photo>,
    search_generation: u64,
    photos_generation: u64,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> ActivePanel {
        self.panel
    }

    pub fn search_items(&self) -> &[SearchResult] {
        &self.search_items
    }

    pub fn mars_photos(&self) -> &[Photo] {
        &self.mars_photos
    }

    /// Clear an area's content and retire every outstanding request for it.
    fn invalidate(&mut self, area: FeatureArea) -> RequestTicket {
        let generation = match area {
            FeatureArea::Search => {
                self.search_items.clear();
                self.search_generation += 1;
                self.search_generation
            }
            FeatureArea::Photos => {
                self.mars_photos.clear();
                self.photos_generation += 1;
                self.photos_generation
            }
        };
        RequestTicket { area, generation }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        let current = match ticket.area {
            FeatureArea::Search => self.search_generation,
            FeatureArea::Photos => self.photos_generation,
        };
        ticket.generation == current
    }

    /// Press a panel button: close it if it is open, otherwise open it.
    ///
    /// Returns the request to issue, if any. Search panels open right away;
    /// the Mars panel opens once its photos arrive.
    pub fn toggle(&mut self, panel: ActivePanel) -> Option<PendingRequest> {
        let search_ticket = self.invalidate(FeatureArea::Search);

        if panel == ActivePanel::None || self.panel == panel {
            self.invalidate(FeatureArea::Photos);
            self.panel = ActivePanel::None;
            return None;
        }

        let photos_ticket = self.invalidate(FeatureArea::Photos);
        match panel.preset_query() {
            Some(query) => {
                self.panel = panel;
                Some(PendingRequest::Search {
                    ticket: search_ticket,
                    query: query.to_string(),
                })
            }
            None => {
                self.panel = ActivePanel::None;
                Some(PendingRequest::Photos { ticket: photos_ticket })
            }
        }
    }

    /// Free-text search outside any preset panel.
    pub fn search(&mut self, query: &str) -> PendingRequest {
        self.invalidate(FeatureArea::Photos);
        self.panel = ActivePanel::None;
        let ticket = self.invalidate(FeatureArea::Search);
        PendingRequest::Search {
            ticket,
            query: query.trim().to_string(),
        }
    }

    /// Apply a finished request. Returns `false` when it was stale and dropped.
    pub fn apply(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Search { ticket, result } => {
                if !self.is_current(ticket) {
                    tracing::debug!("Dropping stale search response (generation {})", ticket.generation);
                    return false;
                }
                match result {
                    Ok(items) => self.search_items = items,
                    Err(e) => {
                        tracing::error!("Error fetching NASA data: {:#}", e);
                        self.search_items.clear();
                    }
                }
            }
            Completion::Photos { ticket, result } => {
                if !self.is_current(ticket) {
                    tracing::debug!("Dropping stale photo response (generation {})", ticket.generation);
                    return false;
                }
                match result {
                    Ok(photos) => {
                        self.mars_photos = photos;
                        self.panel = ActivePanel::Mars;
                    }
                    Err(e) => {
                        tracing::error!("Error fetching Mars photos: {:#}", e);
                        self.mars_photos.clear();
                    }
                }
            }
        }
        true
    }

    /// Toggle and wait for the resulting request, if any.
    pub async fn toggle_and_wait<B: GalleryBackend + ?Sized>(&mut self, panel: ActivePanel, backend: &B) {
        if let Some(pending) = self.toggle(panel) {
            let completion = pending.run(backend).await;
            self.apply(completion);
        }
    }
}

impl fmt::Display for ViewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[panel: {}]", self.panel)?;

        if self.panel == ActivePanel::Mars {
            if self.mars_photos.is_empty() {
                writeln!(f, "  (no photos)")?;
            }
            for (index, photo) in self.mars_photos.iter().enumerate() {
                writeln!(f, "  {:>2}. {}", index, photo.source_url)?;
                writeln!(f, "      Taken by rover: {}", photo.rover_name)?;
            }
        }

        for item in &self.search_items {
            writeln!(f, "  * {}", item.title)?;
            writeln!(f, "    {}", item.image_url)?;
        }
        Ok(())
    }
}
