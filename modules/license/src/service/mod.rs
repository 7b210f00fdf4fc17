use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Set,
};

use crate::{
    model::{FullLicenseData, LicenseDetails, LicenseSummary},
    Error,
};
use license_dictionary_common::error::ErrorInformation;
use license_dictionary_entity::{license, license_name_alias, license_url_alias};


#[derive(Default)]
pub struct LicenseService {}

impl LicenseService {
    pub fn new() -> Self {
        Self {}
    }

    /// All stored licenses, in the limited shape.
    pub async fn fetch_licenses<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<LicenseSummary>, Error> {
        let licenses = license::Entity::find().all(connection).await?;
        LicenseSummary::from_entities(&licenses, connection).await
    }

    /// Free-text search: case-insensitive substring match over the primary
    /// name and url, the Fedora/SPDX names, and both alias tables.
    pub async fn search_licenses<C: ConnectionTrait>(
        &self,
        search_term: &str,
        connection: &C,
    ) -> Result<Vec<LicenseSummary>, Error> {
        let pattern = format!(
            "%{}%",
            search_term.replace('%', r"\%").replace('_', r"\_")
        );

        let licenses = license::Entity::find()
            .join(JoinType::LeftJoin, license::Relation::NameAlias.def())
            .join(JoinType::LeftJoin, license::Relation::UrlAlias.def())
            .filter(
                Condition::any()
                    .add(license::Column::Name.into_expr().ilike(pattern.as_str()))
                    .add(license::Column::Url.into_expr().ilike(pattern.as_str()))
                    .add(license::Column::FedoraName.into_expr().ilike(pattern.as_str()))
                    .add(license::Column::SpdxName.into_expr().ilike(pattern.as_str()))
                    .add(
                        license_name_alias::Column::Name
                            .into_expr()
                            .ilike(pattern.as_str()),
                    )
                    .add(
                        license_url_alias::Column::Url
                            .into_expr()
                            .ilike(pattern.as_str()),
                    ),
            )
            .distinct()
            .all(connection)
            .await?;

        LicenseSummary::from_entities(&licenses, connection).await
    }

    pub async fn fetch_license<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<LicenseDetails>, Error> {
        if let Some(license) = license::Entity::find_by_id(id).one(connection).await? {
            Ok(Some(LicenseDetails::from_entity(&license, connection).await?))
        } else {
            Ok(None)
        }
    }

    pub async fn license_for_name<C: ConnectionTrait>(
        &self,
        name: &str,
        connection: &C,
    ) -> Result<Option<license::Model>, Error> {
        Ok(license::Entity::find()
            .filter(license::Column::Name.eq(name))
            .one(connection)
            .await?)
    }

    pub async fn license_for_url<C: ConnectionTrait>(
        &self,
        url: &str,
        connection: &C,
    ) -> Result<Option<license::Model>, Error> {
        Ok(license::Entity::find()
            .filter(license::Column::Url.eq(url))
            .one(connection)
            .await?)
    }

    pub async fn license_for_name_alias<C: ConnectionTrait>(
        &self,
        alias: &str,
        connection: &C,
    ) -> Result<Option<license::Model>, Error> {
        Ok(license::Entity::find()
            .join(JoinType::InnerJoin, license::Relation::NameAlias.def())
            .filter(license_name_alias::Column::Name.eq(alias))
            .one(connection)
            .await?)
    }

    pub async fn license_for_url_alias<C: ConnectionTrait>(
        &self,
        alias: &str,
        connection: &C,
    ) -> Result<Option<license::Model>, Error> {
        Ok(license::Entity::find()
            .join(JoinType::InnerJoin, license::Relation::UrlAlias.def())
            .filter(license_url_alias::Column::Url.eq(alias))
            .one(connection)
            .await?)
    }

    /// Advisory pre-insert uniqueness check. Collects every applicable
    /// conflict instead of failing fast; the unique constraints of the store
    /// remain the authoritative guard.
    pub async fn validate<C: ConnectionTrait>(
        &self,
        license: &FullLicenseData,
        connection: &C,
    ) -> Result<Vec<ErrorInformation>, Error> {
        let mut errors = Vec::new();

        if let Some(found) = self.license_for_name(&license.name, connection).await? {
            errors.push(ErrorInformation::new(
                "DuplicateLicense",
                format!(
                    "License with the same name found. Conflicting license id: {}",
                    found.id
                ),
            ));
        }

        if let Some(found) = self.license_for_url(&license.url, connection).await? {
            errors.push(ErrorInformation::new(
                "DuplicateLicense",
                format!(
                    "License with the same url found. Conflicting license id: {}",
                    found.id
                ),
            ));
        }

        // aliases must be distinct from other aliases and from primary
        // names/urls alike
        for alias in &license.name_aliases {
            let found = match self.license_for_name_alias(alias, connection).await? {
                Some(found) => Some(found),
                None => self.license_for_name(alias, connection).await?,
            };
            if let Some(found) = found {
                errors.push(ErrorInformation::new(
                    "DuplicateLicense",
                    format!(
                        "License with the same name alias found. Conflicting license id: {}",
                        found.id
                    ),
                ));
            }
        }

        for alias in &license.url_aliases {
            let found = match self.license_for_url_alias(alias, connection).await? {
                Some(found) => Some(found),
                None => self.license_for_url(alias, connection).await?,
            };
            if let Some(found) = found {
                errors.push(ErrorInformation::new(
                    "DuplicateLicense",
                    format!(
                        "License with the same url alias found. Conflicting license id: {}",
                        found.id
                    ),
                ));
            }
        }

        Ok(errors)
    }

    /// Validate and insert a new license, including its aliases. Any conflict
    /// aborts the insert with the full conflict collection.
    pub async fn create_license<C: ConnectionTrait>(
        &self,
        license: FullLicenseData,
        connection: &C,
    ) -> Result<LicenseDetails, Error> {
        let conflicts = self.validate(&license, connection).await?;
        if !conflicts.is_empty() {
            log::debug!(
                "rejecting license '{}', {} conflict(s)",
                license.name,
                conflicts.len()
            );
            return Err(Error::Duplicate(conflicts));
        }

        let entity = license::ActiveModel {
            name: Set(license.name.clone()),
            url: Set(license.url.clone()),
            text_url: Set(license.text_url.clone()),
            fedora_abbreviation: Set(license.fedora_abbreviation.clone()),
            fedora_name: Set(license.fedora_name.clone()),
            spdx_name: Set(license.spdx_name.clone()),
            spdx_abbreviation: Set(license.spdx_abbreviation.clone()),
            spdx_url: Set(license.spdx_url.clone()),
            ..Default::default()
        };

        let model = entity.insert(connection).await?;
        self.insert_aliases(model.id, &license, connection).await?;

        LicenseDetails::from_entity(&model, connection).await
    }

    /// Full overwrite of an existing license: every field takes the supplied
    /// value and the aliases are replaced wholesale. Returns `None` if the id
    /// is unknown.
    pub async fn update_license<C: ConnectionTrait>(
        &self,
        id: i32,
        license: FullLicenseData,
        connection: &C,
    ) -> Result<Option<LicenseSummary>, Error> {
        let Some(current) = license::Entity::find_by_id(id).one(connection).await? else {
            return Ok(None);
        };

        let mut entity: license::ActiveModel = current.into();
        entity.name = Set(license.name.clone());
        entity.url = Set(license.url.clone());
        entity.text_url = Set(license.text_url.clone());
        entity.fedora_abbreviation = Set(license.fedora_abbreviation.clone());
        entity.fedora_name = Set(license.fedora_name.clone());
        entity.spdx_name = Set(license.spdx_name.clone());
        entity.spdx_abbreviation = Set(license.spdx_abbreviation.clone());
        entity.spdx_url = Set(license.spdx_url.clone());
        let model = entity.update(connection).await?;

        license_name_alias::Entity::delete_many()
            .filter(license_name_alias::Column::LicenseId.eq(id))
            .exec(connection)
            .await?;
        license_url_alias::Entity::delete_many()
            .filter(license_url_alias::Column::LicenseId.eq(id))
            .exec(connection)
            .await?;
        self.insert_aliases(id, &license, connection).await?;

        Ok(Some(LicenseSummary::from_entity(&model, connection).await?))
    }

    /// Delete by id, reporting whether a row was removed. Aliases go away
    /// through the cascade.
    pub async fn delete_license<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<bool, Error> {
        let result = license::Entity::delete_by_id(id).exec(connection).await?;
        Ok(result.rows_affected > 0)
    }

    async fn insert_aliases<C: ConnectionTrait>(
        &self,
        license_id: i32,
        license: &FullLicenseData,
        connection: &C,
    ) -> Result<(), Error> {
        license_name_alias::Entity::insert_many(license.name_aliases.iter().map(|alias| {
            license_name_alias::ActiveModel {
                license_id: Set(license_id),
                name: Set(alias.clone()),
                ..Default::default()
            }
        }))
        .on_empty_do_nothing()
        .exec(connection)
        .await?;

        license_url_alias::Entity::insert_many(license.url_aliases.iter().map(|alias| {
            license_url_alias::ActiveModel {
                license_id: Set(license_id),
                url: Set(alias.clone()),
                ..Default::default()
            }
        }))
        .on_empty_do_nothing()
        .exec(connection)
        .await?;

        Ok(())
    }
}
