//! Create post table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Post::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Post::OwnerId).string_len(32).not_null())
                    .col(ColumnDef::new(Post::ParentPostId).string_len(32))
                    .col(ColumnDef::new(Post::TextBody).text().not_null())
                    .col(ColumnDef::new(Post::MediaPath).string_len(1024))
                    .col(ColumnDef::new(Post::Edited).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Post::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Post::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_owner")
                            .from(Post::Table, Post::OwnerId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_parent")
                            .from(Post::Table, Post::ParentPostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: owner_id (for profile feeds)
        manager
            .create_index(
                Index::create()
                    .name("idx_post_owner_id")
                    .table(Post::Table)
                    .col(Post::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Index: parent_post_id (for listing shares)
        manager
            .create_index(
                Index::create()
                    .name("idx_post_parent_post_id")
                    .table(Post::Table)
                    .col(Post::ParentPostId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Post {
    Table,
    Id,
    OwnerId,
    ParentPostId,
    TextBody,
    MediaPath,
    Edited,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Profile {
    Table,
    Id,
}
