use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{project, service, team_member, testimonial};

use crate::errors::CatalogError;

/// Storage contract for the four content collections.
///
/// Both backends satisfy the same signatures; the choice between them is a
/// deployment decision, invisible to callers. Lookups return `None` for an
/// unknown id — absence is a normal outcome, not an error.
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    async fn list_services(&self) -> Result<Vec<service::Model>, CatalogError>;
    async fn get_service(&self, id: i32) -> Result<Option<service::Model>, CatalogError>;
    async fn create_service(&self, input: service::NewService) -> Result<service::Model, CatalogError>;

    async fn list_team_members(&self) -> Result<Vec<team_member::Model>, CatalogError>;
    async fn get_team_member(&self, id: i32) -> Result<Option<team_member::Model>, CatalogError>;
    async fn create_team_member(&self, input: team_member::NewTeamMember) -> Result<team_member::Model, CatalogError>;

    async fn list_projects(&self) -> Result<Vec<project::Model>, CatalogError>;
    async fn get_project(&self, id: i32) -> Result<Option<project::Model>, CatalogError>;
    /// Exact, case-sensitive category match. An unmatched category yields an
    /// empty list.
    async fn list_projects_by_category(&self, category: &str) -> Result<Vec<project::Model>, CatalogError>;
    async fn create_project(&self, input: project::NewProject) -> Result<project::Model, CatalogError>;

    async fn list_testimonials(&self) -> Result<Vec<testimonial::Model>, CatalogError>;
    async fn get_testimonial(&self, id: i32) -> Result<Option<testimonial::Model>, CatalogError>;
    async fn create_testimonial(&self, input: testimonial::NewTestimonial) -> Result<testimonial::Model, CatalogError>;
}

/// SeaORM-backed storage implementation.
pub struct SeaOrmCatalog {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CatalogStorage for SeaOrmCatalog {
    async fn list_services(&self) -> Result<Vec<service::Model>, CatalogError> {
        crate::db::services::list_services(&self.db).await
    }

    async fn get_service(&self, id: i32) -> Result<Option<service::Model>, CatalogError> {
        crate::db::services::get_service(&self.db, id).await
    }

    async fn create_service(&self, input: service::NewService) -> Result<service::Model, CatalogError> {
        crate::db::services::create_service(&self.db, input).await
    }

    async fn list_team_members(&self) -> Result<Vec<team_member::Model>, CatalogError> {
        crate::db::team_members::list_team_members(&self.db).await
    }

    async fn get_team_member(&self, id: i32) -> Result<Option<team_member::Model>, CatalogError> {
        crate::db::team_members::get_team_member(&self.db, id).await
    }

    async fn create_team_member(&self, input: team_member::NewTeamMember) -> Result<team_member::Model, CatalogError> {
        crate::db::team_members::create_team_member(&self.db, input).await
    }

    async fn list_projects(&self) -> Result<Vec<project::Model>, CatalogError> {
        crate::db::projects::list_projects(&self.db).await
    }

    async fn get_project(&self, id: i32) -> Result<Option<project::Model>, CatalogError> {
        crate::db::projects::get_project(&self.db, id).await
    }

    async fn list_projects_by_category(&self, category: &str) -> Result<Vec<project::Model>, CatalogError> {
        crate::db::projects::list_projects_by_category(&self.db, category).await
    }

    async fn create_project(&self, input: project::NewProject) -> Result<project::Model, CatalogError> {
        crate::db::projects::create_project(&self.db, input).await
    }

    async fn list_testimonials(&self) -> Result<Vec<testimonial::Model>, CatalogError> {
        crate::db::testimonials::list_testimonials(&self.db).await
    }

    async fn get_testimonial(&self, id: i32) -> Result<Option<testimonial::Model>, CatalogError> {
        crate::db::testimonials::get_testimonial(&self.db, id).await
    }

    async fn create_testimonial(&self, input: testimonial::NewTestimonial) -> Result<testimonial::Model, CatalogError> {
        crate::db::testimonials::create_testimonial(&self.db, input).await
    }
}
