use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeetingRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(MeetingRoom::Id))
                    .col(string_len_uniq(MeetingRoom::Name, 100))
                    .col(text_null(MeetingRoom::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MeetingRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MeetingRoom {
    Table,
    Id,
    Name,
    Description,
}
