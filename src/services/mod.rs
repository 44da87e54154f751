//! Business logic services

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod properties;
pub mod reviews;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub properties: properties::PropertiesService,
    pub catalog: catalog::CatalogService,
    pub bookings: bookings::BookingsService,
    pub reviews: reviews::ReviewsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            properties: properties::PropertiesService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            repository,
        }
    }
}
