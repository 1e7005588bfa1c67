use tremr_feed::{check_connection, PhivolcsFeed};
use tremr_store::Paths;

pub async fn run(paths: &Paths) -> anyhow::Result<()> {
    let config = super::load_config(paths)?;
    let feed = PhivolcsFeed::new(config.feed_url.clone(), config.accept_invalid_certs)?;

    let status = check_connection(&feed).await;
    println!("{}", serde_json::to_string_pretty(&status)?);

    if !status.connected {
        anyhow::bail!("{} is unreachable: {}", feed.url(), status.message);
    }
    Ok(())
}
