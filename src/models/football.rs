// src/models/football.rs
//
// Raw store documents and the nested response shapes the front end expects.
// The nesting (team.name, score.fullTime.home/away, playedGames, utcDate)
// mirrors the football-data API the dashboard was originally written against
// and must stay stable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CompetitionDocument {
    pub code: String,
    pub name: String,
    pub area_name: String,
}

#[derive(Debug, Deserialize)]
pub struct StandingDocument {
    pub position: i64,
    pub team_name: String,
    pub points: i64,
    pub played_games: i64,
}

#[derive(Debug, Deserialize)]
pub struct MatchDocument {
    pub match_id: i64,
    pub home_team_name: String,
    pub away_team_name: String,
    pub score_home: Option<i64>,
    pub score_away: Option<i64>,
    pub status: String,
    pub utc_date: String,
}

#[derive(Debug, Serialize)]
pub struct TeamName {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AreaName {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CompetitionResponse {
    pub id: String,
    pub name: String,
    pub area: AreaName,
}

impl From<CompetitionDocument> for CompetitionResponse {
    fn from(doc: CompetitionDocument) -> Self {
        CompetitionResponse {
            id: doc.code,
            name: doc.name,
            area: AreaName {
                name: doc.area_name,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TableRow {
    pub position: i64,
    pub team: TeamName,
    pub points: i64,
    #[serde(rename = "playedGames")]
    pub played_games: i64,
}

#[derive(Debug, Serialize)]
pub struct StandingsGroup {
    pub table: Vec<TableRow>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingsGroup>,
}

impl StandingsResponse {
    pub fn from_rows(rows: Vec<StandingDocument>) -> Self {
        let table = rows
            .into_iter()
            .map(|doc| TableRow {
                position: doc.position,
                team: TeamName {
                    name: doc.team_name,
                },
                points: doc.points,
                played_games: doc.played_games,
            })
            .collect();
        StandingsResponse {
            standings: vec![StandingsGroup { table }],
        }
    }
}

// Unplayed legs keep explicit nulls, so no skip_serializing_if here.
#[derive(Debug, Serialize)]
pub struct FullTimeScore {
    pub home: Option<i64>,
    pub away: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MatchScore {
    #[serde(rename = "fullTime")]
    pub full_time: FullTimeScore,
}

#[derive(Debug, Serialize)]
pub struct MatchEntry {
    pub id: i64,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamName,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamName,
    pub score: MatchScore,
    pub status: String,
    #[serde(rename = "utcDate")]
    pub utc_date: String,
}

impl From<MatchDocument> for MatchEntry {
    fn from(doc: MatchDocument) -> Self {
        MatchEntry {
            id: doc.match_id,
            home_team: TeamName {
                name: doc.home_team_name,
            },
            away_team: TeamName {
                name: doc.away_team_name,
            },
            score: MatchScore {
                full_time: FullTimeScore {
                    home: doc.score_home,
                    away: doc.score_away,
                },
            },
            status: doc.status,
            utc_date: doc.utc_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchEntry>,
}

/// Deserializes each raw document, dropping the ones that fail the shape
/// contract (same log-and-drop policy as articles).
pub fn shape_documents<T>(documents: Vec<Value>) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
{
    documents
        .into_iter()
        .filter_map(|doc| match serde_json::from_value::<T>(doc) {
            Ok(shaped) => Some(shaped),
            Err(e) => {
                tracing::warn!("Dropping malformed document: {}", e);
                None
            }
        })
        .collect()
}
