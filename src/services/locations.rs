//! Locations service

use crate::{error::AppResult, models::location::Location, repository::Repository};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }
}
