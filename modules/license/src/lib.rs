use actix_web::body::BoxBody;
use actix_web::{HttpResponse, ResponseError};
use license_dictionary_common::db::DatabaseErrors;
use license_dictionary_common::error::ErrorInformation;
use sea_orm::DbErr;

pub mod endpoints;
pub mod model;
pub mod service;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("Invalid request {msg}")]
    BadRequest { msg: String },
    #[error("{0}")]
    NotFound(String),
    /// All uniqueness conflicts of a rejected insert, one entry per conflict.
    #[error("conflicting license data")]
    Duplicate(Vec<ErrorInformation>),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            // a concurrent writer won the race against the advisory pre-check,
            // the unique constraint is the authoritative guard
            Self::Database(err) if err.is_duplicate() => {
                HttpResponse::BadRequest().json(ErrorInformation::new("DuplicateKey", err))
            }
            Self::Database(err) => HttpResponse::InternalServerError()
                .json(ErrorInformation::new("Database error", err)),
            Self::BadRequest { msg } => {
                HttpResponse::BadRequest().json(ErrorInformation::new("Bad request", msg))
            }
            Self::NotFound(msg) => {
                HttpResponse::NotFound().json(ErrorInformation::new("NotFound", msg))
            }
            Self::Duplicate(errors) => HttpResponse::BadRequest().json(errors),
            Self::Any(err) => HttpResponse::InternalServerError()
                .json(ErrorInformation::new("System unknown", err)),
        }
    }
}
