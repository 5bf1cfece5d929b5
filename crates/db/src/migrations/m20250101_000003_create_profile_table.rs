//! Create profile table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profile::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Profile::UserId).string_len(32).not_null())
                    .col(ColumnDef::new(Profile::Headline).string_len(256))
                    .col(ColumnDef::new(Profile::Summary).text())
                    .col(ColumnDef::new(Profile::Location).string_len(256))
                    .col(ColumnDef::new(Profile::Industry).string_len(256))
                    .col(ColumnDef::new(Profile::Website).string_len(1024))
                    .col(ColumnDef::new(Profile::PhoneNumber).string_len(64))
                    .col(ColumnDef::new(Profile::BirthDate).date())
                    .col(ColumnDef::new(Profile::Gender).string_len(16).not_null())
                    .col(ColumnDef::new(Profile::ProfilePicPath).string_len(1024))
                    .col(ColumnDef::new(Profile::CoverPicPath).string_len(1024))
                    .col(
                        ColumnDef::new(Profile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Profile::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user")
                            .from(Profile::Table, Profile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: user_id - one profile per user
        manager
            .create_index(
                Index::create()
                    .name("idx_profile_user_id")
                    .table(Profile::Table)
                    .col(Profile::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profile {
    Table,
    Id,
    UserId,
    Headline,
    Summary,
    Location,
    Industry,
    Website,
    PhoneNumber,
    BirthDate,
    Gender,
    ProfilePicPath,
    CoverPicPath,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
