use sea_orm::entity::prelude::*;

/// A submitted piece of text plus its derived analysis. `summary` and
/// `sentiment` stay NULL until enrichment succeeds; `sentiment` holds one of
/// the canonical labels `POSITIVE` / `NEGATIVE` / `NEUTRAL`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    #[sea_orm(column_type = "Text")]
    pub raw_content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub sentiment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
