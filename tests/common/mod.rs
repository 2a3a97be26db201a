#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use business_snapshot::api;
use business_snapshot::application::services::BusinessService;
use business_snapshot::domain::entities::{Business, BusinessKey, NewBusiness, Upserted};
use business_snapshot::domain::generator::SnapshotGenerator;
use business_snapshot::domain::repositories::BusinessRepository;
use business_snapshot::error::StoreError;
use business_snapshot::infrastructure::persistence::InMemoryBusinessRepository;
use business_snapshot::state::AppState;
use business_snapshot::utils::random::SequenceRandom;
use std::sync::Arc;

/// A store whose every call fails as if the database were down.
pub struct UnavailableRepository;

fn refused() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl BusinessRepository for UnavailableRepository {
    async fn find_one(&self, _key: &BusinessKey) -> Result<Option<Business>, StoreError> {
        Err(refused())
    }

    async fn create(&self, _new_business: NewBusiness) -> Result<Upserted, StoreError> {
        Err(refused())
    }

    async fn save(&self, _business: &Business) -> Result<Business, StoreError> {
        Err(refused())
    }

    async fn list_all(&self) -> Result<Vec<Business>, StoreError> {
        Err(refused())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(refused())
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

pub fn create_service(repo: Arc<dyn BusinessRepository>, values: &[f64]) -> BusinessService {
    let generator = SnapshotGenerator::new(Arc::new(SequenceRandom::new(values.to_vec())));
    BusinessService::new(repo, generator)
}

pub fn create_test_state(repo: Arc<dyn BusinessRepository>, values: &[f64]) -> AppState {
    AppState::new(Arc::new(create_service(repo, values)))
}

pub fn server_with_state(state: AppState) -> TestServer {
    TestServer::new(api::routes::routes().with_state(state)).unwrap()
}

/// Server over a fresh in-memory store; the store handle is returned for inspection.
pub fn memory_server(values: &[f64]) -> (TestServer, InMemoryBusinessRepository) {
    let repo = InMemoryBusinessRepository::new();
    let state = create_test_state(Arc::new(repo.clone()), values);
    (server_with_state(state), repo)
}

pub fn unavailable_server() -> TestServer {
    server_with_state(create_test_state(Arc::new(UnavailableRepository), &[0.5]))
}
