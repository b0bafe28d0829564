use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(text(Projects::Title).not_null())
                    .col(text(Projects::Description).not_null())
                    .col(text(Projects::Image).not_null())
                    .col(text(Projects::Category).not_null())
                    .col(ColumnDef::new(Projects::Technologies).array(ColumnType::Text).not_null())
                    .col(text_null(Projects::LiveUrl))
                    .col(text_null(Projects::GithubUrl))
                    .col(text(Projects::Color).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Image,
    Category,
    Technologies,
    LiveUrl,
    GithubUrl,
    Color,
}
