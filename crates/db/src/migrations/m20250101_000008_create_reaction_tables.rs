//! Create reaction tables migration.
//!
//! Posts, comments and replies each carry their own reaction table. Every
//! table enforces at most one row per (target, profile) pair so a repeated
//! reaction becomes an update of the kind.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostReaction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostReaction::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PostReaction::PostId).string_len(32).not_null())
                    .col(ColumnDef::new(PostReaction::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(PostReaction::Kind).string_len(16).not_null())
                    .col(
                        ColumnDef::new(PostReaction::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(PostReaction::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_reaction_post")
                            .from(PostReaction::Table, PostReaction::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_reaction_profile")
                            .from(PostReaction::Table, PostReaction::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_reaction_post_profile")
                    .table(PostReaction::Table)
                    .col(PostReaction::PostId)
                    .col(PostReaction::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CommentReaction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommentReaction::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CommentReaction::CommentId).string_len(32).not_null())
                    .col(ColumnDef::new(CommentReaction::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(CommentReaction::Kind).string_len(16).not_null())
                    .col(
                        ColumnDef::new(CommentReaction::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CommentReaction::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_reaction_comment")
                            .from(CommentReaction::Table, CommentReaction::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_reaction_profile")
                            .from(CommentReaction::Table, CommentReaction::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_reaction_comment_profile")
                    .table(CommentReaction::Table)
                    .col(CommentReaction::CommentId)
                    .col(CommentReaction::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReplyReaction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReplyReaction::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReplyReaction::ReplyId).string_len(32).not_null())
                    .col(ColumnDef::new(ReplyReaction::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(ReplyReaction::Kind).string_len(16).not_null())
                    .col(
                        ColumnDef::new(ReplyReaction::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(ReplyReaction::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reply_reaction_reply")
                            .from(ReplyReaction::Table, ReplyReaction::ReplyId)
                            .to(CommentReply::Table, CommentReply::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reply_reaction_profile")
                            .from(ReplyReaction::Table, ReplyReaction::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reply_reaction_reply_profile")
                    .table(ReplyReaction::Table)
                    .col(ReplyReaction::ReplyId)
                    .col(ReplyReaction::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReplyReaction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CommentReaction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostReaction::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PostReaction {
    Table,
    Id,
    PostId,
    ProfileId,
    Kind,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CommentReaction {
    Table,
    Id,
    CommentId,
    ProfileId,
    Kind,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ReplyReaction {
    Table,
    Id,
    ReplyId,
    ProfileId,
    Kind,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Post {
    Table,
    Id,
}

#[derive(Iden)]
enum Comment {
    Table,
    Id,
}

#[derive(Iden)]
enum CommentReply {
    Table,
    Id,
}

#[derive(Iden)]
enum Profile {
    Table,
    Id,
}
