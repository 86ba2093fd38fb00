use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub meeting_room_id: i32,
    pub user_id: i32,
    pub from_reserve: DateTimeUtc,
    pub to_reserve: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meeting_room::Entity",
        from = "Column::MeetingRoomId",
        to = "super::meeting_room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MeetingRoom,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::meeting_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingRoom.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
