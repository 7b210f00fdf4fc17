use actix_web::{delete, get, post, put, web, web::Json, HttpResponse, Responder};
use sea_orm::TransactionTrait;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use crate::{
    model::{FullLicenseData, LicenseDetails, LicenseSummary},
    service::LicenseService,
    Error,
};
use license_dictionary_common::{db::Database, error::ErrorInformation};

#[cfg(test)]
mod test;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = LicenseService::new();
    config
        .app_data(web::Data::new(service))
        .app_data(web::Data::new(db))
        .service(
            web::scope("/api/v1")
                .service(all)
                .service(get)
                .service(create)
                .service(update)
                .service(delete),
        );
}

#[derive(OpenApi)]
#[openapi(
    paths(all, get, create, update, delete),
    components(schemas(
        crate::model::LicenseHead,
        crate::model::LicenseSummary,
        crate::model::LicenseDetails,
        crate::model::FullLicenseData,
        license_dictionary_common::error::ErrorInformation,
    ))
)]
pub struct ApiDoc;

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Exact primary name to look up
    pub name: Option<String>,
    /// Exact primary URL to look up
    pub url: Option<String>,
    /// Exact name alias to look up
    pub name_alias: Option<String>,
    /// Exact URL alias to look up
    pub url_alias: Option<String>,
    /// Free-text search term, cannot be combined with the exact filters
    pub search_term: Option<String>,
}

#[utoipa::path(
    tag = "license",
    context_path = "/api/v1",
    params(ListParams),
    responses(
        (status = 200, description = "Matching licenses", body = [LicenseSummary]),
        (status = 400, description = "Conflicting query parameters"),
        (status = 404, description = "No license matched the given filter"),
    ),
)]
#[get("/licenses")]
/// List licenses, or look one up by an exact filter
pub async fn all(
    state: web::Data<LicenseService>,
    db: web::Data<Database>,
    web::Query(params): web::Query<ListParams>,
) -> Result<impl Responder, Error> {
    let ListParams {
        name,
        url,
        name_alias,
        url_alias,
        search_term,
    } = params;

    let singular_filters = [&name, &url, &name_alias, &url_alias]
        .into_iter()
        .filter(|filter| filter.is_some())
        .count();

    if singular_filters > 1 {
        return Err(Error::BadRequest {
            msg: "Not more than one query parameter {name, url, nameAlias, urlAlias} should be provided"
                .into(),
        });
    }

    if singular_filters > 0 {
        if search_term.is_some() {
            return Err(Error::BadRequest {
                msg: "searchTerm cannot be mixed with neither of {name, url, nameAlias, urlAlias} query parameters"
                    .into(),
            });
        }

        let entity = if let Some(name) = &name {
            state
                .license_for_name(name, db.get_ref())
                .await?
                .ok_or_else(|| Error::NotFound(format!("No license was found for name {name}")))?
        } else if let Some(url) = &url {
            state
                .license_for_url(url, db.get_ref())
                .await?
                .ok_or_else(|| Error::NotFound(format!("No license was found for url {url}")))?
        } else if let Some(alias) = &name_alias {
            state
                .license_for_name_alias(alias, db.get_ref())
                .await?
                .ok_or_else(|| {
                    Error::NotFound(format!("Could not find license for nameAlias {alias}"))
                })?
        } else if let Some(alias) = &url_alias {
            state
                .license_for_url_alias(alias, db.get_ref())
                .await?
                .ok_or_else(|| {
                    Error::NotFound(format!("Could not find license for urlAlias {alias}"))
                })?
        } else {
            unreachable!()
        };

        let summary = LicenseSummary::from_entity(&entity, db.get_ref()).await?;
        return Ok(Json(vec![summary]));
    }

    let results = match &search_term {
        Some(search_term) => state.search_licenses(search_term, db.get_ref()).await?,
        None => state.fetch_licenses(db.get_ref()).await?,
    };

    Ok(Json(results))
}

#[utoipa::path(
    tag = "license",
    context_path = "/api/v1",
    params(
        ("id", Path, description = "Id of the license")
    ),
    responses(
        (status = 200, description = "The matching license", body = LicenseDetails),
        (status = 404, description = "The license could not be found"),
    ),
)]
#[get("/licenses/{id}")]
/// Retrieve a license by id, in the full shape
pub async fn get(
    state: web::Data<LicenseService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> Result<impl Responder, Error> {
    let id = id.into_inner();

    match state.fetch_license(id, db.get_ref()).await? {
        Some(license) => Ok(Json(license)),
        None => Err(Error::NotFound(format!("No license found for id {id}"))),
    }
}

#[utoipa::path(
    tag = "license",
    context_path = "/api/v1",
    request_body = FullLicenseData,
    responses(
        (status = 201, description = "The stored license", body = LicenseDetails),
        (status = 400, description = "Uniqueness conflicts", body = [ErrorInformation]),
    ),
)]
#[post("/licenses")]
/// Create a license
pub async fn create(
    state: web::Data<LicenseService>,
    db: web::Data<Database>,
    Json(license): Json<FullLicenseData>,
) -> Result<impl Responder, Error> {
    let tx = db.begin().await?;
    let created = state.create_license(license, &tx).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    tag = "license",
    context_path = "/api/v1",
    request_body = FullLicenseData,
    params(
        ("id", Path, description = "Id of the license")
    ),
    responses(
        (status = 200, description = "The updated license", body = LicenseSummary),
        (status = 404, description = "The license could not be found"),
    ),
)]
#[put("/licenses/{id}")]
/// Overwrite all fields of a license
pub async fn update(
    state: web::Data<LicenseService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
    Json(license): Json<FullLicenseData>,
) -> Result<impl Responder, Error> {
    let id = id.into_inner();

    let tx = db.begin().await?;
    let updated = state
        .update_license(id, license, &tx)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No license found for id {id}")))?;
    tx.commit().await?;

    Ok(Json(updated))
}

#[utoipa::path(
    tag = "license",
    context_path = "/api/v1",
    params(
        ("id", Path, description = "Id of the license")
    ),
    responses(
        (status = 204, description = "The license was deleted"),
        (status = 404, description = "The license could not be found"),
    ),
)]
#[delete("/licenses/{id}")]
/// Delete a license by id
pub async fn delete(
    state: web::Data<LicenseService>,
    db: web::Data<Database>,
    id: web::Path<i32>,
) -> Result<impl Responder, Error> {
    let id = id.into_inner();

    if !state.delete_license(id, db.get_ref()).await? {
        return Err(Error::NotFound(format!("No license found for id {id}")));
    }

    Ok(HttpResponse::NoContent().finish())
}
