use anyhow::{Result, bail};
use pokedex_service::{DetailService, Route, ServiceError};

use crate::Settings;
use crate::commands::catalog;
use crate::render;

pub(crate) async fn run_show(settings: &Settings, name: &str, json: bool) -> Result<()> {
    let detail = DetailService::new(settings.client()?);
    let record = match detail.load(name).await {
        Ok(record) => record,
        Err(ServiceError::NotFound(name)) => bail!("Pokémon not found: {name}"),
        Err(e) => return Err(e.into()),
    };
    if json {
        render::print_json(&record)?;
    } else {
        println!("{}", render::record_detail(&record));
    }
    Ok(())
}

pub(crate) async fn run_open(settings: &Settings, path: &str, json: bool) -> Result<()> {
    let route = Route::parse(path);
    tracing::debug!(path, resolved = %route.path(), "opening route");
    match route {
        Route::Catalog => catalog::run(settings, 1, json).await,
        Route::Detail(name) => run_show(settings, &name, json).await,
    }
}
