use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(License::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(License::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(License::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(License::Url)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(License::TextUrl).string())
                    .col(ColumnDef::new(License::FedoraAbbreviation).string())
                    .col(ColumnDef::new(License::FedoraName).string())
                    .col(ColumnDef::new(License::SpdxName).string())
                    .col(ColumnDef::new(License::SpdxAbbreviation).string())
                    .col(ColumnDef::new(License::SpdxUrl).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(License::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum License {
    Table,
    Id,
    // --
    Name,
    Url,
    TextUrl,
    FedoraAbbreviation,
    FedoraName,
    SpdxName,
    SpdxAbbreviation,
    SpdxUrl,
}
