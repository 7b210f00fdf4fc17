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
                    .table(LicenseNameAlias::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LicenseNameAlias::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LicenseNameAlias::LicenseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LicenseNameAlias::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LicenseNameAlias::Table, LicenseNameAlias::LicenseId)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LicenseNameAlias::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LicenseNameAlias {
    Table,
    Id,
    // --
    LicenseId,
    Name,
}
