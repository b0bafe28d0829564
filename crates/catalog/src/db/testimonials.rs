use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::testimonial;

use crate::errors::CatalogError;

pub async fn list_testimonials(db: &DatabaseConnection) -> Result<Vec<testimonial::Model>, CatalogError> {
    testimonial::Entity::find()
        .order_by_asc(testimonial::Column::Id)
        .all(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn get_testimonial(db: &DatabaseConnection, id: i32) -> Result<Option<testimonial::Model>, CatalogError> {
    testimonial::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn create_testimonial(db: &DatabaseConnection, input: testimonial::NewTestimonial) -> Result<testimonial::Model, CatalogError> {
    let am = testimonial::ActiveModel {
        name: Set(input.name),
        role: Set(input.role),
        content: Set(input.content),
        rating: Set(input.rating),
        image: Set(input.image),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| CatalogError::Db(e.to_string()))
}
