use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{TimeDelta, Utc};
use tracing_subscriber::EnvFilter;

use staybook::adapters::memory::auth::FixedAuth;
use staybook::adapters::memory::store::MemoryStore;
use staybook::adapters::rest::recommendation::RestRecommendationClient;
use staybook::app::booking::BookingFlow;
use staybook::app::explore::CatalogScreen;
use staybook::app::profile::ProfileScreen;
use staybook::config::load_config;
use staybook::domain::filter::SortKey;
use staybook::domain::profile::UserProfile;
use staybook::ports::store::ProfileStore as _;

fn find_config_path() -> PathBuf {
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = load_config(&find_config_path())?;

    // Collaborators: live recommendation feed, in-memory document store,
    // fixed demo identity.
    let feed = RestRecommendationClient::new(&config.api)?;
    let store = MemoryStore::new();
    let auth = FixedAuth::signed_in("demo-user", Some("Demo User".into()));
    store
        .create_profile(
            "demo-user",
            &UserProfile {
                name: "Demo User".into(),
                email: "demo@example.com".into(),
                created_at: Utc::now().to_rfc3339(),
                updated_at: Utc::now().to_rfc3339(),
            },
        )
        .await?;

    // Browse: merge the feed ahead of the static catalog, sort by price.
    let mut catalog = CatalogScreen::with_config(&config.catalog);
    catalog.load_recommended(&feed).await;
    catalog.toggle_sort(SortKey::Price);

    println!("Catalog ({} hotels, price ascending):", catalog.visible().len());
    for hotel in catalog.visible() {
        println!("  {hotel}");
    }

    // Book the cheapest listing for a three-night stay.
    let Some(pick) = catalog.visible().into_iter().next() else {
        tracing::warn!("Catalog is empty, nothing to book");
        return Ok(());
    };
    let now = Utc::now();
    let mut flow = BookingFlow::new(pick, now);
    flow.set_check_in(now + TimeDelta::days(7));
    flow.set_check_out(now + TimeDelta::days(10));
    flow.add_room();

    let booking_id = flow.submit(&auth, &store).await?;
    println!(
        "\nBooked {} for {} nights x {} rooms = ${:.0} (id {booking_id})",
        flow.hotel().name,
        flow.nights(),
        flow.rooms(),
        flow.total_cost()
    );

    let profile = ProfileScreen::load(&auth, &store, &store).await?;
    println!("\nBooking history for {}:", profile.uid());
    for booking in profile.bookings() {
        println!("{booking}\n");
    }

    Ok(())
}
