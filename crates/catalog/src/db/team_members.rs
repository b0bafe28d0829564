use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::team_member;

use crate::errors::CatalogError;

pub async fn list_team_members(db: &DatabaseConnection) -> Result<Vec<team_member::Model>, CatalogError> {
    team_member::Entity::find()
        .order_by_asc(team_member::Column::Id)
        .all(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn get_team_member(db: &DatabaseConnection, id: i32) -> Result<Option<team_member::Model>, CatalogError> {
    team_member::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| CatalogError::Db(e.to_string()))
}

pub async fn create_team_member(db: &DatabaseConnection, input: team_member::NewTeamMember) -> Result<team_member::Model, CatalogError> {
    let am = team_member::ActiveModel {
        name: Set(input.name),
        role: Set(input.role),
        bio: Set(input.bio),
        image: Set(input.image),
        skills: Set(input.skills),
        linkedin_url: Set(input.linkedin_url),
        github_url: Set(input.github_url),
        twitter_url: Set(input.twitter_url),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| CatalogError::Db(e.to_string()))
}
