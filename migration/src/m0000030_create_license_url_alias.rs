use sea_orm_migration::prelude::*;

use crate::m0000010_create_license::License;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LicenseUrlAlias::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LicenseUrlAlias::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LicenseUrlAlias::LicenseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LicenseUrlAlias::Url)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LicenseUrlAlias::Table, LicenseUrlAlias::LicenseId)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LicenseUrlAlias::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LicenseUrlAlias {
    Table,
    Id,
    // --
    LicenseId,
    Url,
}
