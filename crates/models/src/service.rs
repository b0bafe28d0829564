use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub gradient: String,
    pub bg_pattern: String,
    pub icon: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert shape: every field except the id, which the backend assigns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub gradient: String,
    pub bg_pattern: String,
    pub icon: String,
}

impl NewService {
    pub fn into_model(self, id: i32) -> Model {
        Model {
            id,
            title: self.title,
            description: self.description,
            features: self.features,
            gradient: self.gradient,
            bg_pattern: self.bg_pattern,
            icon: self.icon,
        }
    }
}
