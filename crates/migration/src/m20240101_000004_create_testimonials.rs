use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonials::Id))
                    .col(text(Testimonials::Name).not_null())
                    .col(text(Testimonials::Role).not_null())
                    .col(text(Testimonials::Content).not_null())
                    .col(integer(Testimonials::Rating).not_null())
                    .col(text(Testimonials::Image).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonials::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Role,
    Content,
    Rating,
    Image,
}
