//! Job application entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_application")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub job_post_id: String,

    /// The profile that applied
    pub applicant_id: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,

    /// Storage path provided by the platform file-storage collaborator
    #[sea_orm(nullable)]
    pub resume_path: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_post::Entity",
        from = "Column::JobPostId",
        to = "super::job_post::Column::Id",
        on_delete = "Cascade"
    )]
    JobPost,

    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ApplicantId",
        to = "super::profile::Column::Id",
        on_delete = "Cascade"
    )]
    Applicant,
}

impl Related<super::job_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
