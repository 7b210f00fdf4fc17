use std::process::ExitCode;

use actix_web::{error, get, web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;

use license_dictionary_common::{config, db::Database};

pub mod openapi;

/// Run the API server
#[derive(clap::Args, Debug, Clone)]
pub struct Run {
    /// Drop and re-create the database on startup
    #[arg(long, env)]
    pub bootstrap: bool,

    /// The address to listen on
    #[arg(long, env = "HTTP_SERVER_BIND_ADDR", default_value = "::1")]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(long, env = "HTTP_SERVER_BIND_PORT", default_value_t = 8080)]
    pub bind_port: u16,

    #[command(flatten)]
    pub database: config::Database,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = if self.bootstrap {
            Database::bootstrap(&self.database).await?
        } else {
            Database::new(&self.database).await?
        };

        self.run_with_database(db).await
    }

    /// Run the server against an already established database, e.g. a managed
    /// (embedded) instance in devmode.
    pub async fn run_with_database(self, db: Database) -> anyhow::Result<ExitCode> {
        log::info!("listening on {}:{}", self.bind_addr, self.bind_port);

        HttpServer::new(move || App::new().configure(|svc| configure(svc, db.clone())))
            .bind((self.bind_addr.as_str(), self.bind_port))?
            .run()
            .await?;

        Ok(ExitCode::SUCCESS)
    }
}

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    license_dictionary_module_license::endpoints::configure(config, db);
    config.service(health).service(openapi_json);
}

#[get("/health")]
async fn health(db: web::Data<Database>) -> actix_web::Result<impl Responder> {
    db.ping().await.map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(json!({"status": "up"})))
}

#[get("/openapi.json")]
async fn openapi_json() -> impl Responder {
    web::Json(openapi::openapi())
}
