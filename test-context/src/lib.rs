#![allow(clippy::expect_used)]

use postgresql_embedded::PostgreSQL;
use std::env;
use test_context::AsyncTestContext;

use license_dictionary_common as common;
use license_dictionary_common::db;

pub mod call;

/// A test context providing a migrated database: an embedded instance by
/// default, or an external one when `EXTERNAL_TEST_DB` is set.
#[allow(dead_code)]
pub struct LicenseDictContext {
    pub db: common::db::Database,
    postgresql: Option<PostgreSQL>,
}

impl AsyncTestContext for LicenseDictContext {
    async fn setup() -> LicenseDictContext {
        if env::var("EXTERNAL_TEST_DB").is_ok() {
            log::warn!("Using external database from 'DB_*' env vars");
            let config = common::config::Database::from_env().expect("DB config from env");

            let db = if env::var("EXTERNAL_TEST_DB_BOOTSTRAP").is_ok() {
                common::db::Database::bootstrap(&config).await
            } else {
                common::db::Database::new(&config).await
            }
            .expect("Configuring the database");

            return LicenseDictContext {
                db,
                postgresql: None,
            };
        }

        let (db, postgresql) = db::embedded::create()
            .await
            .expect("Create an embedded database");

        LicenseDictContext {
            db,
            postgresql: Some(postgresql),
        }
    }
}
