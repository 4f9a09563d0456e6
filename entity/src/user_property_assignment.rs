use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_property_assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub workspace_id: String,
    pub user_property_id: String,
    pub user_id: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workspace::Entity",
        from = "Column::WorkspaceId",
        to = "super::workspace::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Workspace,
    #[sea_orm(
        belongs_to = "super::user_property::Entity",
        from = "Column::UserPropertyId",
        to = "super::user_property::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserProperty,
}

impl Related<super::workspace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workspace.def()
    }
}

impl Related<super::user_property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProperty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
