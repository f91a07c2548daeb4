use anyhow::Result;
use pokedex_core::PageRequest;

use crate::Settings;
use crate::render;

pub(crate) async fn run(settings: &Settings, limit: &str, offset: &str, json: bool) -> Result<()> {
    let client = settings.client()?;
    let request = PageRequest::from_raw(limit, offset);
    tracing::debug!(limit = request.limit, offset = request.offset, "fetching list page");
    let page = client.fetch_page(request).await?;
    if json {
        render::print_json(&page)?;
    } else {
        println!("{}", render::list_page(&page));
    }
    Ok(())
}
