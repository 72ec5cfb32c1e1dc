use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::application::dto::MovieView;
use crate::modules::watchlist::domain::WatchList;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchListView {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub movies: Vec<MovieView>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WatchList> for WatchListView {
    fn from(watchlist: &WatchList) -> Self {
        Self {
            id: watchlist.id(),
            owner: watchlist.owner().to_string(),
            name: watchlist.name().to_string(),
            movies: watchlist.iter().map(MovieView::from).collect(),
            updated_at: watchlist.updated_at(),
        }
    }
}
