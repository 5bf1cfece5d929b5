//! Certification entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub profile_id: String,

    pub name: String,

    pub issuing_organization: String,

    #[sea_orm(nullable)]
    pub issue_date: Option<Date>,

    #[sea_orm(nullable)]
    pub expiration_date: Option<Date>,

    #[sea_orm(nullable)]
    pub credential_id: Option<String>,

    #[sea_orm(nullable)]
    pub credential_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub skills: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfileId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
