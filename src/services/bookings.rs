//! Bookings service

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    pub async fn create(&self, data: &CreateBooking) -> AppResult<i32> {
        let id = self.repository.bookings.create(data).await?;
        tracing::info!(
            "Booked {} for {} on {} (id {})",
            data.resource_name,
            data.researcher_name,
            data.date,
            id
        );
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.bookings.delete(id).await?;
        Ok(())
    }
}
