//! Create job board tables migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobPost::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(JobPost::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(JobPost::RecruiterId).string_len(32).not_null())
                    .col(ColumnDef::new(JobPost::Title).string_len(256).not_null())
                    .col(ColumnDef::new(JobPost::Description).text().not_null())
                    .col(
                        ColumnDef::new(JobPost::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(JobPost::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_recruiter")
                            .from(JobPost::Table, JobPost::RecruiterId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_post_recruiter_id")
                    .table(JobPost::Table)
                    .col(JobPost::RecruiterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tag::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Tag::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Tag::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: name - tags are a shared vocabulary
        manager
            .create_index(
                Index::create()
                    .name("idx_tag_name")
                    .table(Tag::Table)
                    .col(Tag::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobPostTag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(JobPostTag::JobPostId).string_len(32).not_null())
                    .col(ColumnDef::new(JobPostTag::TagId).string_len(32).not_null())
                    .primary_key(
                        Index::create()
                            .col(JobPostTag::JobPostId)
                            .col(JobPostTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_tag_job_post")
                            .from(JobPostTag::Table, JobPostTag::JobPostId)
                            .to(JobPost::Table, JobPost::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_tag_tag")
                            .from(JobPostTag::Table, JobPostTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobApplication::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobApplication::JobPostId).string_len(32).not_null())
                    .col(ColumnDef::new(JobApplication::ApplicantId).string_len(32).not_null())
                    .col(ColumnDef::new(JobApplication::CoverLetter).text())
                    .col(ColumnDef::new(JobApplication::ResumePath).string_len(1024))
                    .col(
                        ColumnDef::new(JobApplication::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(JobApplication::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_job_post")
                            .from(JobApplication::Table, JobApplication::JobPostId)
                            .to(JobPost::Table, JobPost::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_applicant")
                            .from(JobApplication::Table, JobApplication::ApplicantId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_application_job_post_id")
                    .table(JobApplication::Table)
                    .col(JobApplication::JobPostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_application_applicant_id")
                    .table(JobApplication::Table)
                    .col(JobApplication::ApplicantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPostTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPost::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum JobPost {
    Table,
    Id,
    RecruiterId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tag {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum JobPostTag {
    Table,
    JobPostId,
    TagId,
}

#[derive(Iden)]
enum JobApplication {
    Table,
    Id,
    JobPostId,
    ApplicantId,
    CoverLetter,
    ResumePath,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Profile {
    Table,
    Id,
}
