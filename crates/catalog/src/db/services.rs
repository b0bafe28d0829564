use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::service;

use crate::errors::CatalogError;

pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>, CatalogError> {
    service::Entity::find()
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn get_service(db: &DatabaseConnection, id: i32) -> Result<Option<service::Model>, CatalogError> {
    service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn create_service(db: &DatabaseConnection, input: service::NewService) -> Result<service::Model, CatalogError> {
    let am = service::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        features: Set(input.features),
        gradient: Set(input.gradient),
        bg_pattern: Set(input.bg_pattern),
        icon: Set(input.icon),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| CatalogError::Db(e.to_string()))
}
