use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "canvas-ai_art")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_email: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[sea_orm(column_name = "estimated_price")]
    pub estimate_price: Option<f32>,
    pub real_price: Option<f32>,
    /// Self-created artwork; feeds the price estimate.
    pub self_art: Option<bool>,
    pub on_sale: Option<bool>,
    pub created_at: DateTime,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserEmail",
        to = "super::user::Column::Email"
    )]
    Artist,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
