//! Chemicals service

use crate::{
    error::AppResult,
    models::chemical::{Chemical, SaveChemical},
    repository::Repository,
};

#[derive(Clone)]
pub struct ChemicalsService {
    repository: Repository,
}

impl ChemicalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Chemical>> {
        self.repository.chemicals.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Chemical> {
        self.repository.chemicals.get_by_id(id).await
    }

    /// Insert or update depending on whether the payload carries an id.
    /// Returns the id of the saved row.
    pub async fn save(&self, data: &SaveChemical) -> AppResult<i32> {
        data.check()?;
        match data.id {
            Some(id) => {
                let id = self.repository.chemicals.update(id, data).await?;
                tracing::info!("Updated chemical {}", id);
                Ok(id)
            }
            None => {
                let id = self.repository.chemicals.create(data).await?;
                tracing::info!("Created chemical {} ({})", id, data.name);
                Ok(id)
            }
        }
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self.repository.chemicals.delete(id).await?;
        tracing::debug!("Delete chemical {}: {} row(s)", id, deleted);
        Ok(())
    }
}
