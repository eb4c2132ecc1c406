use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `projects` table and its columns.
#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    ProjectUrl,
    GithubUrl,
    TechStack,
    Color,
    ProfileId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Description).text().null())
                    .col(ColumnDef::new(Projects::ImageUrl).string().null())
                    .col(ColumnDef::new(Projects::ProjectUrl).string().null())
                    .col(ColumnDef::new(Projects::GithubUrl).string().null())
                    .col(ColumnDef::new(Projects::TechStack).string().null())
                    .col(ColumnDef::new(Projects::Color).string().null())
                    .col(ColumnDef::new(Projects::ProfileId).integer().null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // `profile_id` is a soft link: no constraint, only an index.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_projects_profile_id")
                    .table(Projects::Table)
                    .col(Projects::ProfileId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}
