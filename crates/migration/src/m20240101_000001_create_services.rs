use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(text(Services::Title).not_null())
                    .col(text(Services::Description).not_null())
                    .col(ColumnDef::new(Services::Features).array(ColumnType::Text).not_null())
                    .col(text(Services::Gradient).not_null())
                    .col(text(Services::BgPattern).not_null())
                    .col(text(Services::Icon).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Features,
    Gradient,
    BgPattern,
    Icon,
}
