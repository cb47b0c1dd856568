use std::future::Future;
use std::sync::Arc;

use infra::models::{
    AssistRow, FormRow, GameRow, PenaltyRow, SchemaEntryRow, ScorerRow, StandingRow, TeamRow,
    TeamStatsRow,
};
use infra::repos::{ad_hoc, catalog, games, player_stats, schema, standings, team_stats};
use infra::{Db, GraphStore, Neo4jStore, ParamValue, Record, StoreResult};
use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::analytics;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::ordering;
use crate::read_only::ensure_read_only;

/// Read-only query interface over the hockey graph.
///
/// "No data" is never an error: list operations return an empty `Vec` and
/// `get_team_stats` returns a zero record. Errors are reserved for connection
/// problems, rejected queries and bad input.
///
/// The first connection failure is latched: later calls fail fast with the
/// same error without touching the store until `reset_session` is called.
pub struct StatsGateway {
    db: Db,
    session_error: Mutex<Option<String>>,
}

impl StatsGateway {
    pub fn new(db: Db) -> Self {
        Self {
            db,
            session_error: Mutex::new(None),
        }
    }

    pub async fn connect(config: &GatewayConfig) -> GatewayResult<Self> {
        let store = Neo4jStore::connect(&config.store).await?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn session_error(&self) -> Option<String> {
        self.session_error.lock().clone()
    }

    /// Clear a latched connection failure so the next call reaches the store.
    pub fn reset_session(&self) {
        self.session_error.lock().take();
    }

    fn store(&self) -> &dyn GraphStore {
        &*self.db
    }

    async fn run<T>(
        &self,
        operation: &'static str,
        query: impl Future<Output = StoreResult<T>>,
    ) -> GatewayResult<T> {
        if let Some(detail) = self.session_error() {
            return Err(GatewayError::Connection(detail));
        }

        match query.await {
            Ok(value) => Ok(value),
            Err(e) => {
                let err = GatewayError::from(e);
                if let GatewayError::Connection(detail) = &err {
                    let mut latched = self.session_error.lock();
                    if latched.is_none() {
                        tracing::error!("Graph store unavailable during {}: {}", operation, detail);
                        *latched = Some(detail.clone());
                    }
                } else {
                    tracing::warn!("{} failed: {}", operation, err);
                }
                Err(err)
            }
        }
    }

    pub async fn ping(&self) -> GatewayResult<()> {
        self.run("ping", schema::ping(self.store())).await
    }

    pub async fn get_schema(&self) -> GatewayResult<Vec<SchemaEntryRow>> {
        self.run("schema", schema::get_schema(self.store())).await
    }

    pub async fn list_competitions(&self) -> GatewayResult<Vec<String>> {
        self.run("list_competitions", catalog::list_competitions(self.store()))
            .await
    }

    pub async fn list_seasons(&self) -> GatewayResult<Vec<String>> {
        self.run("list_seasons", catalog::list_seasons(self.store()))
            .await
    }

    pub async fn list_teams(&self) -> GatewayResult<Vec<TeamRow>> {
        self.run("list_teams", catalog::list_teams(self.store()))
            .await
    }

    pub async fn get_standings(
        &self,
        competition: &str,
        season: &str,
    ) -> GatewayResult<Vec<StandingRow>> {
        require_name("competition", competition)?;
        require_name("season", season)?;

        let mut rows = self
            .run(
                "standings",
                standings::get_standings(self.store(), competition, season),
            )
            .await?;
        ordering::sort_standings(&mut rows);
        Ok(rows)
    }

    pub async fn get_top_scorers(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<ScorerRow>> {
        let limit = leader_args(competition, season, limit)?;

        let mut rows = self
            .run(
                "top_scorers",
                player_stats::top_scorers(self.store(), competition, season, limit),
            )
            .await?;
        ordering::sort_scorers(&mut rows);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    pub async fn get_top_assists(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<AssistRow>> {
        let limit = leader_args(competition, season, limit)?;

        let mut rows = self
            .run(
                "top_assists",
                player_stats::top_assists(self.store(), competition, season, limit),
            )
            .await?;
        ordering::sort_assists(&mut rows);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    pub async fn get_penalty_leaders(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<PenaltyRow>> {
        let limit = leader_args(competition, season, limit)?;

        let mut rows = self
            .run(
                "penalty_leaders",
                player_stats::penalty_leaders(self.store(), competition, season, limit),
            )
            .await?;
        ordering::sort_penalties(&mut rows);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    pub async fn get_recent_games(
        &self,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<GameRow>> {
        let limit = leader_args(competition, season, limit)?;

        let mut rows = self
            .run(
                "recent_games",
                games::list_recent(self.store(), competition, season, limit),
            )
            .await?;
        ordering::sort_games(&mut rows);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    pub async fn get_team_stats(
        &self,
        team_name: &str,
        competition: &str,
        season: &str,
    ) -> GatewayResult<TeamStatsRow> {
        require_name("team name", team_name)?;
        require_name("competition", competition)?;
        require_name("season", season)?;

        self.run(
            "team_stats",
            team_stats::get_team_stats(self.store(), team_name, competition, season),
        )
        .await
    }

    /// The team's last `limit` results in the season, most recent first.
    pub async fn get_recent_form(
        &self,
        team_name: &str,
        competition: &str,
        season: &str,
        limit: i64,
    ) -> GatewayResult<Vec<FormRow>> {
        require_name("team name", team_name)?;
        let limit = leader_args(competition, season, limit)?;

        let mut rows = self
            .run(
                "recent_form",
                team_stats::recent_form(self.store(), team_name, competition, season, limit),
            )
            .await?;
        ordering::sort_form(&mut rows);
        rows.truncate(limit as usize);
        Ok(rows)
    }

    /// Table position (1-based) of the team, `None` when it has no decided
    /// games in the season.
    pub async fn get_team_position(
        &self,
        team_name: &str,
        competition: &str,
        season: &str,
    ) -> GatewayResult<Option<usize>> {
        require_name("team name", team_name)?;
        let standings = self.get_standings(competition, season).await?;
        Ok(analytics::position(&standings, team_name))
    }

    /// Power-user escape hatch. Queries that could write are rejected with
    /// `GatewayError::Validation`.
    pub async fn run_ad_hoc_query(
        &self,
        query_text: &str,
        parameters: &Map<String, Value>,
    ) -> GatewayResult<Vec<Record>> {
        if query_text.trim().is_empty() {
            return Err(GatewayError::InvalidInput("query text is empty".into()));
        }
        ensure_read_only(query_text)?;

        let params = parameters
            .iter()
            .map(|(key, value)| {
                ParamValue::from_json(value)
                    .map(|v| (key.clone(), v))
                    .ok_or_else(|| {
                        GatewayError::InvalidInput(format!(
                            "parameter `{key}` holds a number that cannot be bound"
                        ))
                    })
            })
            .collect::<GatewayResult<Vec<_>>>()?;

        self.run("ad_hoc", ad_hoc::run(self.store(), query_text, params))
            .await
    }
}

/// Use `defaults` when a name listing failed or came back empty. The
/// gateway itself never invents names.
pub fn names_or_default(result: GatewayResult<Vec<String>>, defaults: &[String]) -> Vec<String> {
    match result {
        Ok(names) if !names.is_empty() => names,
        Ok(_) => defaults.to_vec(),
        Err(e) => {
            tracing::warn!("Falling back to default names: {}", e);
            defaults.to_vec()
        }
    }
}

fn require_name(field: &str, value: &str) -> GatewayResult<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

fn leader_args(competition: &str, season: &str, limit: i64) -> GatewayResult<i64> {
    require_name("competition", competition)?;
    require_name("season", season)?;
    if limit <= 0 {
        return Err(GatewayError::InvalidInput(format!(
            "limit must be positive, got {limit}"
        )));
    }
    Ok(limit)
}
