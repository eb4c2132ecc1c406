use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `profile` table and its columns.
#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Title,
    Description,
    PhotoUrl,
    Email,
    LinkedinUrl,
    GithubUrl,
    CvUrl,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profile::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Profile::Title).string().null())
                    .col(ColumnDef::new(Profile::Description).text().null())
                    .col(ColumnDef::new(Profile::PhotoUrl).string().null())
                    .col(ColumnDef::new(Profile::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Profile::LinkedinUrl).string().null())
                    .col(ColumnDef::new(Profile::GithubUrl).string().null())
                    .col(ColumnDef::new(Profile::CvUrl).string().null())
                    .col(
                        ColumnDef::new(Profile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profile::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}
