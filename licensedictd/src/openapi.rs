use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

#[derive(clap::Args, Debug)]
pub struct Run {
    /// The file the openapi spec should be exported to, stdout if absent
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl Run {
    pub async fn run(self) -> Result<ExitCode> {
        let doc = license_dictionary_server::openapi::openapi().to_pretty_json()?;

        match self.file {
            Some(file) => fs::write(file, doc)?,
            None => println!("{doc}"),
        }

        Ok(ExitCode::SUCCESS)
    }
}
