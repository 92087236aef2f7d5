//! Facade over the Stats API: one method per endpoint, returning typed records.
//!
//! Every call is a single GET through [`Transport`]. A 4xx response or an
//! empty body means "no result" (`None` or an empty collection), never an
//! error. Payloads that do not match a record's field contract surface as
//! [`MlbError::Shape`](crate::error::MlbError::Shape).

use crate::{
    core::{ApiConfig, MlbResult, Transport},
    error::Result,
    models::{
        decode::{normalize_keys, Decode, Fields, Object},
        League, Person, Plays, Sport, Team,
    },
    stats::{DecodePolicy, GroupedStats, StatGroup},
};
use serde_json::Value;
use tracing::debug;

#[cfg(test)]
mod tests;

/// MLB's own sport id; the default for people and team listings.
pub const MLB_SPORT_ID: i64 = 1;

/// Which stat types and groups to ask for, plus any extra query parameters
/// (`season`, `startDate`, `opposingTeamId`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub stat_types: Vec<String>,
    pub groups: Vec<StatGroup>,
    pub params: Vec<(String, String)>,
    pub policy: DecodePolicy,
}

impl StatsQuery {
    pub fn new<I, S>(stat_types: I, groups: impl IntoIterator<Item = StatGroup>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stat_types: stat_types.into_iter().map(Into::into).collect(),
            groups: groups.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn season(self, season: u16) -> Self {
        self.param("season", season)
    }

    pub fn policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `stats=a,b&group=x,y` followed by the extra parameters, in order.
    pub fn to_query(&self) -> Vec<(&str, String)> {
        let mut query = Vec::with_capacity(self.params.len() + 2);
        if !self.stat_types.is_empty() {
            query.push(("stats", self.stat_types.join(",")));
        }
        if !self.groups.is_empty() {
            let groups: Vec<&str> = self.groups.iter().map(|g| g.as_str()).collect();
            query.push(("group", groups.join(",")));
        }
        query.extend(self.params.iter().map(|(k, v)| (k.as_str(), v.clone())));
        query
    }
}

#[derive(Debug, Clone)]
pub struct Mlb {
    transport: Transport,
}

impl Mlb {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(&config)?,
        })
    }

    /// Client configured from `MLB_STATS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    async fn fetch(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Option<Object>> {
        let result = self.transport.get(endpoint, query).await?;
        Ok(body_of(result))
    }

    async fn fetch_list<T: Decode>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        key: &str,
    ) -> Result<Vec<T>> {
        match self.fetch(endpoint, query).await? {
            Some(body) => Ok(Fields::new("Response", &body).list(key)?),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_one<T: Decode>(&self, endpoint: &str, key: &str) -> Result<Option<T>> {
        Ok(self.fetch_list(endpoint, &[], key).await?.into_iter().next())
    }

    async fn fetch_stats(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        policy: DecodePolicy,
    ) -> Result<GroupedStats> {
        match self.fetch(endpoint, query).await? {
            Some(body) => Ok(GroupedStats::from_response(&Value::Object(body), policy)?),
            None => Ok(GroupedStats::default()),
        }
    }

    pub async fn get_person(&self, person_id: i64) -> Result<Option<Person>> {
        self.fetch_one(&format!("people/{person_id}"), "people").await
    }

    /// Every player on the rosters of a sport.
    pub async fn get_people(&self, sport_id: i64) -> Result<Vec<Person>> {
        self.fetch_list(&format!("sports/{sport_id}/players"), &[], "people")
            .await
    }

    /// Ids of the players whose full name matches, ignoring case.
    pub async fn get_people_id(&self, full_name: &str, sport_id: i64) -> Result<Vec<i64>> {
        let people = self.get_people(sport_id).await?;
        Ok(people
            .iter()
            .filter(|p| p.is_named(full_name))
            .map(|p| p.id)
            .collect())
    }

    pub async fn get_team(&self, team_id: i64) -> Result<Option<Team>> {
        self.fetch_one(&format!("teams/{team_id}"), "teams").await
    }

    pub async fn get_teams(&self, sport_id: i64) -> Result<Vec<Team>> {
        let query = [("sportId", sport_id.to_string())];
        self.fetch_list("teams", &query, "teams").await
    }

    /// Ids of the MLB teams whose name matches, ignoring case.
    pub async fn get_team_id(&self, team_name: &str) -> Result<Vec<i64>> {
        let teams = self.get_teams(MLB_SPORT_ID).await?;
        Ok(teams
            .iter()
            .filter(|t| matches_name(t.name.as_deref(), team_name))
            .map(|t| t.id)
            .collect())
    }

    pub async fn get_sport(&self, sport_id: i64) -> Result<Option<Sport>> {
        self.fetch_one(&format!("sports/{sport_id}"), "sports").await
    }

    pub async fn get_sports(&self) -> Result<Vec<Sport>> {
        self.fetch_list("sports", &[], "sports").await
    }

    pub async fn get_sport_id(&self, sport_name: &str) -> Result<Vec<i64>> {
        let sports = self.get_sports().await?;
        Ok(sports
            .iter()
            .filter(|s| matches_name(s.name.as_deref(), sport_name))
            .map(|s| s.id)
            .collect())
    }

    pub async fn get_league(&self, league_id: i64) -> Result<Option<League>> {
        self.fetch_one(&format!("leagues/{league_id}"), "leagues").await
    }

    pub async fn get_leagues(&self) -> Result<Vec<League>> {
        self.fetch_list("leagues", &[], "leagues").await
    }

    pub async fn get_player_stats(
        &self,
        person_id: i64,
        query: &StatsQuery,
    ) -> Result<GroupedStats> {
        let endpoint = format!("people/{person_id}/stats");
        self.fetch_stats(&endpoint, &query.to_query(), query.policy)
            .await
    }

    pub async fn get_team_stats(
        &self,
        team_id: i64,
        query: &StatsQuery,
    ) -> Result<GroupedStats> {
        let endpoint = format!("teams/{team_id}/stats");
        self.fetch_stats(&endpoint, &query.to_query(), query.policy)
            .await
    }

    /// One player's stats for one game, across every group they appeared in.
    pub async fn get_players_stats_for_game(
        &self,
        person_id: i64,
        game_pk: i64,
    ) -> Result<GroupedStats> {
        let endpoint = format!("people/{person_id}/stats/game/{game_pk}");
        self.fetch_stats(&endpoint, &[], DecodePolicy::Strict).await
    }

    pub async fn get_game_play_by_play(&self, game_pk: i64) -> Result<Option<Plays>> {
        match self.fetch(&format!("game/{game_pk}/playByPlay"), &[]).await? {
            Some(body) => Ok(Some(Plays::decode_object(&body)?)),
            None => Ok(None),
        }
    }
}

/// The normalized response mapping, or `None` when there is nothing to decode.
fn body_of(result: MlbResult) -> Option<Object> {
    if result.is_empty() {
        debug!(status = result.status_code, "empty response body");
        return None;
    }
    match normalize_keys(result.data) {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn matches_name(candidate: Option<&str>, wanted: &str) -> bool {
    candidate.is_some_and(|name| name.to_lowercase() == wanted.trim().to_lowercase())
}
