//! Equipment service

use crate::{
    error::AppResult,
    models::equipment::{Equipment, SaveEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Insert or update depending on whether the payload carries an id
    pub async fn save(&self, data: &SaveEquipment) -> AppResult<i32> {
        match data.id {
            Some(id) => {
                let id = self.repository.equipment.update(id, data).await?;
                tracing::info!("Updated equipment {}", id);
                Ok(id)
            }
            None => {
                let id = self.repository.equipment.create(data).await?;
                tracing::info!("Created equipment {} ({})", id, data.name);
                Ok(id)
            }
        }
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self.repository.equipment.delete(id).await?;
        tracing::debug!("Delete equipment {}: {} row(s)", id, deleted);
        Ok(())
    }
}
