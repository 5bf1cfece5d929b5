//! Reaction vocabulary shared by post, comment and reply reactions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Closed set of reaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "camelCase")]
pub enum ReactionKind {
    #[sea_orm(string_value = "like")]
    Like,
    #[sea_orm(string_value = "celebrate")]
    Celebrate,
    #[sea_orm(string_value = "support")]
    Support,
    #[sea_orm(string_value = "love")]
    Love,
    #[sea_orm(string_value = "insightful")]
    Insightful,
    #[sea_orm(string_value = "funny")]
    Funny,
}
