use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000001_create_user_table::User,
    m20240101_000002_create_meeting_room_table::MeetingRoom,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::MeetingRoomId))
                    .col(integer(Reservation::UserId))
                    .col(timestamp_with_time_zone(Reservation::FromReserve))
                    .col(timestamp_with_time_zone(Reservation::ToReserve))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_meeting_room_id")
                            .from(Reservation::Table, Reservation::MeetingRoomId)
                            .to(MeetingRoom::Table, MeetingRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Range lookups always filter by room first
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_range")
                    .table(Reservation::Table)
                    .col(Reservation::MeetingRoomId)
                    .col(Reservation::FromReserve)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    MeetingRoomId,
    UserId,
    FromReserve,
    ToReserve,
}
