use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway::{names_or_default, CachedGateway, GatewayConfig, StatsGateway, TtlCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env()?;
    let gateway = StatsGateway::connect(&config).await?;

    gateway.ping().await?;
    tracing::info!("Graph store reachable");

    let gateway = CachedGateway::new(gateway, TtlCache::new(), config.cache_ttl);

    let schema = gateway.get_schema().await?;
    for entry in &schema {
        tracing::info!("{}: {}", entry.node_label, entry.properties.join(", "));
    }

    let competitions = names_or_default(
        gateway.list_competitions().await,
        &config.default_competitions,
    );
    let seasons = names_or_default(gateway.list_seasons().await, &config.default_seasons);
    let teams = gateway.list_teams().await?;

    tracing::info!(
        "{} competitions ({}), {} seasons ({}), {} teams",
        competitions.len(),
        competitions.join(", "),
        seasons.len(),
        seasons.join(", "),
        teams.len()
    );

    if let (Some(competition), Some(season)) = (competitions.first(), seasons.first()) {
        let standings = gateway.get_standings(competition, season).await?;
        let overview = gateway::analytics::LeagueOverview::from_standings(&standings);
        match overview.leader {
            Some(leader) => tracing::info!(
                "{} {}: {} teams, {} games, {} leads",
                competition,
                season,
                overview.teams,
                overview.games_played,
                leader
            ),
            None => tracing::warn!("No standings for {} {}", competition, season),
        }

        let scorers = gateway
            .get_top_scorers(competition, season, config.default_limit)
            .await?;
        if let Some(top) = scorers.first() {
            tracing::info!("Top scorer: {} ({}), {} goals", top.player, top.team, top.goals);
        }
    }

    Ok(())
}
