//! Async helper functions used by the application tasks

use anyhow::Context;
use iced::widget::image;
use std::time::Duration;

/// Unsplash delivers the raw photo page size by default; request a bounded
/// width so a gallery of twelve does not pull tens of megabytes.
const PHOTO_WIDTH: u32 = 1080;

/// Sleep helper for the loading gate and the jump settle timer
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Download one gallery photo and hand it to iced as an image handle
pub async fn fetch_photo(url: &'static str) -> anyhow::Result<image::Handle> {
    let sized = format!("{url}?w={PHOTO_WIDTH}&fit=crop");
    let response = reqwest::get(&sized)
        .await
        .with_context(|| format!("requesting {sized}"))?
        .error_for_status()
        .with_context(|| format!("fetching {sized}"))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("reading body of {sized}"))?;
    Ok(image::Handle::from_bytes(bytes))
}
