pub use sea_orm_migration::prelude::*;

mod m0000010_create_license;
mod m0000020_create_license_name_alias;
mod m0000030_create_license_url_alias;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m0000010_create_license::Migration),
            Box::new(m0000020_create_license_name_alias::Migration),
            Box::new(m0000030_create_license_url_alias::Migration),
        ]
    }
}
