//! Minimal end-to-end usage: build a client, fetch a horoscope twice, and
//! watch the second request come out of the cache.
//!
//! Requires `ASTROCAST_API_KEY` (or a keyring entry) to be set.

use astrocast::{AstrocastClient, Timeframe, ZodiacSign};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "astrocast=debug".into()),
        )
        .init();

    let client = AstrocastClient::builder().build()?;

    let reading = client.horoscope(ZodiacSign::Leo, Timeframe::Daily).await?;
    println!("Leo, daily: {}", reading.summary);
    println!("  love:   {}", reading.love);
    println!("  career: {}", reading.career);
    println!("  lucky:  {} / {}", reading.lucky_number, reading.lucky_color);

    // Same request again: answered locally.
    let _ = client.horoscope(ZodiacSign::Leo, Timeframe::Daily).await?;
    let stats = client.cache_stats();
    println!(
        "cache: {} hit(s), {} miss(es), hit ratio {:.0}%",
        stats.hits,
        stats.misses,
        stats.hit_ratio() * 100.0
    );

    Ok(())
}
