//! Profile entity (public-facing identity, one per user).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub user_id: String,

    #[sea_orm(nullable)]
    pub headline: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    #[sea_orm(nullable)]
    pub industry: Option<String>,

    #[sea_orm(nullable)]
    pub website: Option<String>,

    #[sea_orm(nullable)]
    pub phone_number: Option<String>,

    #[sea_orm(nullable)]
    pub birth_date: Option<Date>,

    pub gender: Gender,

    /// Storage path provided by the platform file-storage collaborator
    #[sea_orm(nullable)]
    pub profile_pic_path: Option<String>,

    #[sea_orm(nullable)]
    pub cover_pic_path: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(has_many = "super::post::Entity")]
    Posts,

    #[sea_orm(has_many = "super::experience::Entity")]
    Experiences,

    #[sea_orm(has_many = "super::education::Entity")]
    Educations,

    #[sea_orm(has_many = "super::certification::Entity")]
    Certifications,

    #[sea_orm(has_many = "super::course::Entity")]
    Courses,

    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
