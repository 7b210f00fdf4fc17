use sea_orm::{ConnectionTrait, ModelTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;
mod summary;

pub use details::*;
pub use summary::*;

use crate::Error;
use license_dictionary_entity::{license, license_name_alias, license_url_alias};

/// The common, display fields of a license, shared by the limited and the
/// full response shape.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LicenseHead {
    /// The surrogate id of the license, assigned by the store.
    pub id: i32,

    /// The primary name of the license.
    pub name: String,

    /// The primary URL of the license.
    pub url: String,

    /// A URL pointing to the license text, if known.
    #[schema(required)]
    pub text_url: Option<String>,

    /// Alternate names also identifying this license.
    pub name_aliases: Vec<String>,

    /// Alternate URLs also identifying this license.
    pub url_aliases: Vec<String>,
}

impl LicenseHead {
    pub async fn from_entity<C: ConnectionTrait>(
        license: &license::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        let name_aliases = license
            .find_related(license_name_alias::Entity)
            .all(connection)
            .await?
            .into_iter()
            .map(|alias| alias.name)
            .collect();

        let url_aliases = license
            .find_related(license_url_alias::Entity)
            .all(connection)
            .await?
            .into_iter()
            .map(|alias| alias.url)
            .collect();

        Ok(LicenseHead {
            id: license.id,
            name: license.name.clone(),
            url: license.url.clone(),
            text_url: license.text_url.clone(),
            name_aliases,
            url_aliases,
        })
    }
}

/// The full write shape of a license, as supplied by create and update
/// payloads. Absent optional fields are treated as explicitly cleared.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FullLicenseData {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub text_url: Option<String>,
    #[serde(default)]
    pub name_aliases: Vec<String>,
    #[serde(default)]
    pub url_aliases: Vec<String>,
    #[serde(default)]
    pub fedora_abbreviation: Option<String>,
    #[serde(default)]
    pub fedora_name: Option<String>,
    #[serde(default)]
    pub spdx_name: Option<String>,
    #[serde(default)]
    pub spdx_abbreviation: Option<String>,
    #[serde(default)]
    pub spdx_url: Option<String>,
}
