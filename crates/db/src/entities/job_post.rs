//! Job post entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// The recruiter profile that posted the job
    pub recruiter_id: String,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::RecruiterId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Recruiter,

    #[sea_orm(has_many = "super::job_application::Entity")]
    Applications,

    #[sea_orm(has_many = "super::job_post_tag::Entity")]
    Tags,
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::job_post_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::job_post_tag::Relation::JobPost.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
