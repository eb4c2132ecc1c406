use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    Title,
    Authors,
    Journal,
    Year,
    Description,
    ImageUrl,
    PublicationUrl,
    Color,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Publications::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Publications::Authors).string().null())
                    .col(ColumnDef::new(Publications::Journal).string().null())
                    .col(ColumnDef::new(Publications::Year).integer().null())
                    .col(ColumnDef::new(Publications::Description).text().null())
                    .col(ColumnDef::new(Publications::ImageUrl).string().null())
                    .col(ColumnDef::new(Publications::PublicationUrl).string().null())
                    .col(ColumnDef::new(Publications::Color).string().null())
                    .col(
                        ColumnDef::new(Publications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await
    }
}
