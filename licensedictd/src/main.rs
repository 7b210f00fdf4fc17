use std::env;
use std::process::{ExitCode, Termination};

use clap::Parser;

use license_dictionary_common::db;

mod openapi;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Export the OpenAPI document
    Openapi(openapi::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "licensedictd",
    long_about = None
)]
pub struct Licensedictd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Run against a managed, embedded database instance
    #[arg(long, env)]
    pub devmode: bool,

    #[command(flatten)]
    pub run: license_dictionary_server::Run,
}

impl Licensedictd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        if let Some(command) = self.command {
            return match command {
                Command::Openapi(run) => run.run().await,
            };
        }

        if self.devmode {
            let work_dir = env::current_dir()?.join(".licensedict");

            // keep in scope while running
            let (db, postgresql) = db::embedded::create_in(work_dir.join("postgres")).await?;
            log::info!(
                "managed database running on port {}",
                postgresql.settings().port
            );

            return self.run.run_with_database(db).await;
        }

        self.run.run().await
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    env_logger::init();
    Licensedictd::parse().run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Licensedictd::command().debug_assert();
    }
}
