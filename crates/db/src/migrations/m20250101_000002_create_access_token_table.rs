//! Create access token table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessToken::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessToken::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessToken::UserId).string_len(32).not_null())
                    .col(ColumnDef::new(AccessToken::Token).string_len(64).not_null())
                    .col(
                        ColumnDef::new(AccessToken::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_token_user")
                            .from(AccessToken::Table, AccessToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: token (for bearer lookup)
        manager
            .create_index(
                Index::create()
                    .name("idx_access_token_token")
                    .table(AccessToken::Table)
                    .col(AccessToken::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for logout-all)
        manager
            .create_index(
                Index::create()
                    .name("idx_access_token_user_id")
                    .table(AccessToken::Table)
                    .col(AccessToken::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessToken::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AccessToken {
    Table,
    Id,
    UserId,
    Token,
    CreatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
