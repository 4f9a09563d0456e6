use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "segment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    #[sea_orm(column_type = "Json")]
    pub definition: Json,
    pub resource_type: String,
    pub subscription_group_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
        belongs_to = "super::subscription_group::Entity",
        from = "Column::SubscriptionGroupId",
        to = "super::subscription_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SubscriptionGroup,
}

impl Related<super::workspace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workspace.def()
    }
}

impl Related<super::subscription_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubscriptionGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
