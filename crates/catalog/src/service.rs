use std::sync::Arc;
use tracing::instrument;

use models::{project, service, team_member, testimonial};

use crate::errors::CatalogError;
use crate::repository::CatalogStorage;

/// Stateless accessor over the four content collections.
///
/// Holds nothing but a handle to the configured backend; every call
/// delegates to it verbatim. Which backend sits behind the handle is decided
/// once, at process startup.
#[derive(Clone)]
pub struct Catalog {
    storage: Arc<dyn CatalogStorage>,
}

impl Catalog {
    pub fn new(storage: Arc<dyn CatalogStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_services(&self) -> Result<Vec<service::Model>, CatalogError> {
        self.storage.list_services().await
    }

    pub async fn get_service(&self, id: i32) -> Result<Option<service::Model>, CatalogError> {
        self.storage.get_service(id).await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_service(&self, input: service::NewService) -> Result<service::Model, CatalogError> {
        self.storage.create_service(input).await
    }

    pub async fn list_team_members(&self) -> Result<Vec<team_member::Model>, CatalogError> {
        self.storage.list_team_members().await
    }

    pub async fn get_team_member(&self, id: i32) -> Result<Option<team_member::Model>, CatalogError> {
        self.storage.get_team_member(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_team_member(&self, input: team_member::NewTeamMember) -> Result<team_member::Model, CatalogError> {
        self.storage.create_team_member(input).await
    }

    pub async fn list_projects(&self) -> Result<Vec<project::Model>, CatalogError> {
        self.storage.list_projects().await
    }

    pub async fn get_project(&self, id: i32) -> Result<Option<project::Model>, CatalogError> {
        self.storage.get_project(id).await
    }

    pub async fn list_projects_by_category(&self, category: &str) -> Result<Vec<project::Model>, CatalogError> {
        self.storage.list_projects_by_category(category).await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_project(&self, input: project::NewProject) -> Result<project::Model, CatalogError> {
        self.storage.create_project(input).await
    }

    pub async fn list_testimonials(&self) -> Result<Vec<testimonial::Model>, CatalogError> {
        self.storage.list_testimonials().await
    }

    pub async fn get_testimonial(&self, id: i32) -> Result<Option<testimonial::Model>, CatalogError> {
        self.storage.get_testimonial(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_testimonial(&self, input: testimonial::NewTestimonial) -> Result<testimonial::Model, CatalogError> {
        self.storage.create_testimonial(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemCatalog;

    #[tokio::test]
    async fn catalog_delegates_to_backend() -> Result<(), anyhow::Error> {
        let catalog = Catalog::new(Arc::new(MemCatalog::seeded().await));
        assert_eq!(catalog.list_team_members().await?.len(), 3);
        assert!(catalog.get_project(999).await?.is_none());
        Ok(())
    }
}
