use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::LicenseHead;
use crate::Error;
use license_dictionary_entity::license;

/// The "full" response shape, carrying the Fedora/SPDX metadata in addition
/// to the common fields. Used for get-by-id and create responses.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDetails {
    #[serde(flatten)]
    pub head: LicenseHead,

    #[schema(required)]
    pub fedora_abbreviation: Option<String>,
    #[schema(required)]
    pub fedora_name: Option<String>,
    #[schema(required)]
    pub spdx_name: Option<String>,
    #[schema(required)]
    pub spdx_abbreviation: Option<String>,
    #[schema(required)]
    pub spdx_url: Option<String>,
}

impl LicenseDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        license: &license::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        Ok(LicenseDetails {
            head: LicenseHead::from_entity(license, connection).await?,
            fedora_abbreviation: license.fedora_abbreviation.clone(),
            fedora_name: license.fedora_name.clone(),
            spdx_name: license.spdx_name.clone(),
            spdx_abbreviation: license.spdx_abbreviation.clone(),
            spdx_url: license.spdx_url.clone(),
        })
    }
}
