//! Business logic services

pub mod ai;
pub mod auth;
pub mod bookings;
pub mod chemicals;
pub mod equipment;
pub mod llm;
pub mod locations;
pub mod orders;
pub mod pages;
pub mod redis;
pub mod sessions;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub sessions: Arc<dyn sessions::SessionStore>,
    pub locations: locations::LocationsService,
    pub chemicals: chemicals::ChemicalsService,
    pub equipment: equipment::EquipmentService,
    pub bookings: bookings::BookingsService,
    pub orders: orders::OrdersService,
    pub ai: ai::AiService,
    pub pages: pages::PageRenderer,
}

impl Services {
    /// Create all services with the given repository and injected backends
    pub fn new(
        repository: Repository,
        sessions: Arc<dyn sessions::SessionStore>,
        model: Option<Arc<dyn llm::LanguageModel>>,
        pages: pages::PageRenderer,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            sessions,
            locations: locations::LocationsService::new(repository.clone()),
            chemicals: chemicals::ChemicalsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            orders: orders::OrdersService::new(repository.clone()),
            ai: ai::AiService::new(repository.clone(), model),
            pages,
            repository,
        }
    }
}
