use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMembers::Id))
                    .col(text(TeamMembers::Name).not_null())
                    .col(text(TeamMembers::Role).not_null())
                    .col(text(TeamMembers::Bio).not_null())
                    .col(text(TeamMembers::Image).not_null())
                    .col(ColumnDef::new(TeamMembers::Skills).array(ColumnType::Text).not_null())
                    .col(text_null(TeamMembers::LinkedinUrl))
                    .col(text_null(TeamMembers::GithubUrl))
                    .col(text_null(TeamMembers::TwitterUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TeamMembers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    Id,
    Name,
    Role,
    Bio,
    Image,
    Skills,
    LinkedinUrl,
    GithubUrl,
    TwitterUrl,
}
