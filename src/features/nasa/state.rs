use crate::{
    app_lib::{errors::ApiError, fetch::Ticket},
    features::nasa::types::{AssetDetails, SearchItem},
};
use std::collections::BTreeMap;

/// Per-asset drill-down state, keyed by `nasa_id` in [`NasaState::Results`].
#[derive(Clone, Debug)]
pub enum DetailState {
    /// Waiting for the request identified by the ticket.
    Loading(Ticket),
    Failed(ApiError),
    Ready(AssetDetails),
}

/// Everything the NASA view renders from.
#[derive(Clone, Debug, Default)]
pub enum NasaState {
    #[default]
    Idle,
    Searching,
    Failed(ApiError),
    Results {
        items: Vec<SearchItem>,
        details: BTreeMap<String, DetailState>,
    },
}

impl NasaState {
    /// Starts a new search, discarding previous results and every detail.
    pub fn begin_search(&mut self) {
        *self = NasaState::Searching;
    }

    pub fn finish_search(&mut self, result: Result<Vec<SearchItem>, ApiError>) {
        *self = match result {
            Ok(items) => NasaState::Results {
                items,
                details: BTreeMap::new(),
            },
            Err(err) => NasaState::Failed(err),
        };
    }

    /// Marks `nasa_id` as loading under `ticket`. Returns false when there are
    /// no results or the asset is already loading, in which case nothing
    /// should be sent. Tickets must be unique for the lifetime of the view.
    pub fn begin_details(&mut self, nasa_id: &str, ticket: Ticket) -> bool {
        let NasaState::Results { details, .. } = self else {
            return false;
        };
        if matches!(details.get(nasa_id), Some(DetailState::Loading(_))) {
            return false;
        }
        details.insert(nasa_id.to_string(), DetailState::Loading(ticket));
        true
    }

    /// Stores a drill-down outcome if `ticket` still owns the entry. Results
    /// of a superseded load, including one started before the current
    /// search, are dropped. Returns whether the result was stored.
    pub fn finish_details(
        &mut self,
        nasa_id: &str,
        ticket: Ticket,
        result: Result<AssetDetails, ApiError>,
    ) -> bool {
        let NasaState::Results { details, .. } = self else {
            return false;
        };
        let Some(entry) = details
            .get_mut(nasa_id)
            .filter(|entry| matches!(entry, DetailState::Loading(owner) if *owner == ticket))
        else {
            return false;
        };
        *entry = match result {
            Ok(ready) => DetailState::Ready(ready),
            Err(err) => DetailState::Failed(err),
        };
        true
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, NasaState::Searching)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            NasaState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn items(&self) -> &[SearchItem] {
        match self {
            NasaState::Results { items, .. } => items,
            _ => &[],
        }
    }

    pub fn detail(&self, nasa_id: &str) -> Option<&DetailState> {
        match self {
            NasaState::Results { details, .. } => details.get(nasa_id),
            _ => None,
        }
    }

    pub fn is_detail_loading(&self, nasa_id: &str) -> bool {
        matches!(self.detail(nasa_id), Some(DetailState::Loading(_)))
    }

    /// Nothing to show yet: no search running, no error, no hits.
    pub fn is_empty(&self) -> bool {
        !self.is_searching() && self.error().is_none() && self.items().is_empty()
    }
}
