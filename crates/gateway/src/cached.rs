use infra::models::{
    AssistRow, FormRow, GameRow, PenaltyRow, SchemaEntryRow, ScorerRow, StandingRow, TeamRow,
    TeamStatsRow,
};

use crate::analytics;
use crate::cache::{CacheKey, TtlCache};
use crate::config::CacheTtl;
use crate::error::{GatewayError, GatewayResult};
use crate::service::StatsGateway;

/// `StatsGateway` behind a `TtlCache`. Same operations, same errors; only
/// successful results are memoized. Ad-hoc queries and `ping` are never
/// cached.
pub struct CachedGateway {
    inner: StatsGateway,
    cache: TtlCache,
    ttl: CacheTtl,
}

impl CachedGateway {
    pub fn new(inner: StatsGateway, cache: TtlCache, ttl: CacheTtl) -> Self {
        Self { inner, cache, ttl }
    }

    pub fn inner(&self) -> &StatsGateway {
        &self.inner
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// Forget everything, e.g. after the data was re-ingested.
    pub fn refresh(&self) {
        self.cache.clear();
    }

    pub async fn get_schema(&self) -> GatewayResult<Vec<SchemaEntryRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("schema", Vec::<String>::new()),
                self.ttl.schema,
                || self.inner.get_schema(),
            )
            .await
    }

    pub async fn list_competitions(&self) -> GatewayResult<Vec<String>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("list_competitions", Vec::<String>::new()),
                self.ttl.catalog,
                || self.inner.list_competitions(),
            )
            .await
    }

    pub async fn list_seasons(&self) -> GatewayResult<Vec<String>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("list_seasons", Vec::<String>::new()),
                self.ttl.catalog,
                || self.inner.list_seasons(),
            )
            .await
    }

    pub async fn list_teams(&self) -> GatewayResult<Vec<TeamRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("list_teams", Vec::<String>::new()),
                self.ttl.catalog,
                || self.inner.list_teams(),
            )
            .await
    }

    pub async fn get_standings(
        &self,
        competition: &str,
        season: &str,
    ) -> GatewayResult<Vec<StandingRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("standings", [competition, season]),
                self.ttl.default,
                || self.inner.get_standings(competition, season),
            )
            .await
    }

    pub async fn get_top_scorers(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<ScorerRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("top_scorers", leader_key(competition, season, limit)),
                self.ttl.default,
                || self.inner.get_top_scorers(competition, season, limit),
            )
            .await
    }

    pub async fn get_top_assists(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<AssistRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("top_assists", leader_key(competition, season, limit)),
                self.ttl.default,
                || self.inner.get_top_assists(competition, season, limit),
            )
            .await
    }

    pub async fn get_penalty_leaders(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<PenaltyRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("penalty_leaders", leader_key(competition, season, limit)),
                self.ttl.default,
                || self.inner.get_penalty_leaders(competition, season, limit),
            )
            .await
    }

    pub async fn get_recent_games(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<GameRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("recent_games", leader_key(competition, season, limit)),
                self.ttl.default,
                || self.inner.get_recent_games(competition, season, limit),
            )
            .await
    }

    pub async fn get_team_stats(
        &self,
        team_name: &str,
        competition: &str,
        season: &str,
    ) -> GatewayResult<TeamStatsRow> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new("team_stats", [team_name, competition, season]),
                self.ttl.default,
                || self.inner.get_team_stats(team_name, competition, season),
            )
            .await
    }

    pub async fn get_recent_form(
        &self,
        team_name: &str,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<FormRow>> {
        self.cache
            .get_or_try_insert_with(
                CacheKey::new(
                    "recent_form",
                    [
                        team_name.to_string(),
                        competition.to_string(),
                        season.to_string(),
                        limit.to_string(),
                    ],
                ),
                self.ttl.default,
                || self.inner.get_recent_form(team_name, competition, season, limit),
            )
            .await
    }

    /// Derived from the cached standings, so it shares their entry.
    pub async fn get_team_position(
        &self,
        team_name: &str,
        competition: &str,
        season: &str,
    ) -> GatewayResult<Option<usize>> {
        if team_name.trim().is_empty() {
            return Err(GatewayError::InvalidInput("team name must not be empty".into()));
        }
        let standings = self.get_standings(competition, season).await?;
        Ok(analytics::position(&standings, team_name))
    }
}

fn leader_key(competition: &str, season: &str, limit: i64) -> [String; 3] {
    [competition.to_string(), season.to_string(), limit.to_string()]
}
