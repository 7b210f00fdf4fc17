use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::LicenseHead;
use crate::Error;
use license_dictionary_entity::license;

/// The "limited" response shape, used for list views and update responses.
/// Omits the Fedora/SPDX metadata.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct LicenseSummary {
    #[serde(flatten)]
    pub head: LicenseHead,
}

impl LicenseSummary {
    pub async fn from_entity<C: ConnectionTrait>(
        license: &license::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        Ok(LicenseSummary {
            head: LicenseHead::from_entity(license, connection).await?,
        })
    }

    pub async fn from_entities<C: ConnectionTrait>(
        licenses: &[license::Model],
        connection: &C,
    ) -> Result<Vec<Self>, Error> {
        let mut summaries = Vec::new();

        for license in licenses {
            summaries.push(Self::from_entity(license, connection).await?);
        }

        Ok(summaries)
    }
}
