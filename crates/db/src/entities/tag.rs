//! Tag entity (job post tag vocabulary).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub name: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_post_tag::Entity")]
    JobPosts,
}

impl Related<super::job_post::Entity> for Entity {
    fn to() -> RelationDef {
        super::job_post_tag::Relation::JobPost.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::job_post_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
