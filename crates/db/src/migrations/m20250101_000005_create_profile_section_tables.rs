//! Create profile section tables migration.
//!
//! Experience, education, certification and course rows all hang off a
//! profile and share the same ownership rules.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experience::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(Experience::Title).string_len(256).not_null())
                    .col(ColumnDef::new(Experience::CompanyName).string_len(256).not_null())
                    .col(ColumnDef::new(Experience::Location).string_len(256).not_null())
                    .col(ColumnDef::new(Experience::LocationType).string_len(16).not_null())
                    .col(ColumnDef::new(Experience::EmploymentType).string_len(16).not_null())
                    .col(ColumnDef::new(Experience::StartDate).date())
                    .col(ColumnDef::new(Experience::Description).text())
                    .col(ColumnDef::new(Experience::Skills).text())
                    .col(ColumnDef::new(Experience::MediaPath).string_len(1024))
                    .col(
                        ColumnDef::new(Experience::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Experience::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_profile")
                            .from(Experience::Table, Experience::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_experience_profile_id")
                    .table(Experience::Table)
                    .col(Experience::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Education::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(Education::School).string_len(256).not_null())
                    .col(ColumnDef::new(Education::Degree).string_len(256).not_null())
                    .col(ColumnDef::new(Education::FieldOfStudy).string_len(256).not_null())
                    .col(ColumnDef::new(Education::StartDate).date())
                    .col(ColumnDef::new(Education::EndDate).date())
                    .col(ColumnDef::new(Education::Grade).string_len(64))
                    .col(ColumnDef::new(Education::Description).text())
                    .col(ColumnDef::new(Education::Skills).text())
                    .col(ColumnDef::new(Education::MediaPath).string_len(1024))
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Education::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_education_profile")
                            .from(Education::Table, Education::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_education_profile_id")
                    .table(Education::Table)
                    .col(Education::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Certification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certification::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certification::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(Certification::Name).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Certification::IssuingOrganization)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certification::IssueDate).date())
                    .col(ColumnDef::new(Certification::ExpirationDate).date())
                    .col(ColumnDef::new(Certification::CredentialId).string_len(256))
                    .col(ColumnDef::new(Certification::CredentialUrl).string_len(1024))
                    .col(ColumnDef::new(Certification::Skills).text())
                    .col(
                        ColumnDef::new(Certification::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Certification::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certification_profile")
                            .from(Certification::Table, Certification::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certification_profile_id")
                    .table(Certification::Table)
                    .col(Certification::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Course::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Course::ProfileId).string_len(32).not_null())
                    .col(ColumnDef::new(Course::CourseName).string_len(256).not_null())
                    .col(ColumnDef::new(Course::CourseCode).string_len(64))
                    .col(ColumnDef::new(Course::AssociatedWith).string_len(256))
                    .col(
                        ColumnDef::new(Course::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Course::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_profile")
                            .from(Course::Table, Course::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_profile_id")
                    .table(Course::Table)
                    .col(Course::ProfileId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Experience {
    Table,
    Id,
    ProfileId,
    Title,
    CompanyName,
    Location,
    LocationType,
    EmploymentType,
    StartDate,
    Description,
    Skills,
    MediaPath,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Education {
    Table,
    Id,
    ProfileId,
    School,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Grade,
    Description,
    Skills,
    MediaPath,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Certification {
    Table,
    Id,
    ProfileId,
    Name,
    IssuingOrganization,
    IssueDate,
    ExpirationDate,
    CredentialId,
    CredentialUrl,
    Skills,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Course {
    Table,
    Id,
    ProfileId,
    CourseName,
    CourseCode,
    AssociatedWith,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Profile {
    Table,
    Id,
}
