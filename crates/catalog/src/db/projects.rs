use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use models::project;

use crate::errors::CatalogError;

pub async fn list_projects(db: &DatabaseConnection) -> Result<Vec<project::Model>, CatalogError> {
    project::Entity::find()
        .order_by_asc(project::Column::Id)
        .all(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn get_project(db: &DatabaseConnection, id: i32) -> Result<Option<project::Model>, CatalogError> {
    project::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

/// Exact equality on the category column; matching is case-sensitive.
pub async fn list_projects_by_category(db: &DatabaseConnection, category: &str) -> Result<Vec<project::Model>, CatalogError> {
    project::Entity::find()
        .filter(project::Column::Category.eq(category))
        .order_by_asc(project::Column::Id)
        .all(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn create_project(db: &DatabaseConnection, input: project::NewProject) -> Result<project::Model, CatalogError> {
    let am = project::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        image: Set(input.image),
        category: Set(input.category),
        technologies: Set(input.technologies),
        live_url: Set(input.live_url),
        github_url: Set(input.github_url),
        color: Set(input.color),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| CatalogError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    #[tokio::test]
    async fn project_category_filter_and_create() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let url = match models::db::database_url() {
            Ok(u) => u,
            Err(_) => return Ok(()),
        };
        let db = models::db::connect(&url).await?;
        migration::Migrator::up(&db, None).await?;

        let marker = format!("category-{}", std::process::id());
        let created = create_project(&db, project::NewProject {
            title: "Filter Probe".into(),
            description: "row for the category filter test".into(),
            image: "https://example.com/p.jpg".into(),
            category: marker.clone(),
            technologies: vec!["Rust".into()],
            live_url: None,
            github_url: None,
            color: "from-blue-500 to-indigo-600".into(),
        }).await?;
        assert!(created.id >= 1);

        let matched = list_projects_by_category(&db, &marker).await?;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, created.id);

        // case-sensitive: the uppercased marker must not match
        let missed = list_projects_by_category(&db, &marker.to_uppercase()).await?;
        assert!(missed.is_empty());

        project::Entity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }
}
