// src/handlers/football.rs
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};

use crate::errors::{AppError, Result};
use crate::models::football::{
    shape_documents, CompetitionDocument, CompetitionResponse, MatchDocument, MatchEntry,
    MatchesResponse, StandingDocument, StandingsResponse,
};
use crate::queries;
use crate::services::appwrite::AppwriteClient;
use crate::state::AppState;

/// The three sub-contracts behind the football facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FootballEndpoint {
    Standings { code: String },
    Matches { code: String },
    Competition { code: String },
}

impl FootballEndpoint {
    /// Parses the trailing path in fixed precedence order: the `/standings`
    /// suffix wins, then a `/matches` segment, then the bare competition
    /// lookup. Anything outside the competition prefix is unsupported.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_start_matches('/');
        if !path.starts_with("competitions/") {
            return None;
        }

        // An empty code is kept: the lookup then finds nothing and answers
        // 404 naming it, rather than 400.
        let code = path.split('/').nth(1)?.to_string();

        if path.ends_with("/standings") {
            Some(FootballEndpoint::Standings { code })
        } else if path.contains("/matches") {
            Some(FootballEndpoint::Matches { code })
        } else {
            Some(FootballEndpoint::Competition { code })
        }
    }
}

pub async fn dispatch(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
) -> Result<Response> {
    tracing::debug!("Processing football endpoint: {}", endpoint);
    let client = state.appwrite()?;

    match FootballEndpoint::parse(&endpoint).ok_or_else(|| {
        tracing::warn!("Unsupported football endpoint: {}", endpoint);
        AppError::UnsupportedEndpoint
    })? {
        FootballEndpoint::Standings { code } => {
            Ok(Json(get_standings(client, &code).await?).into_response())
        }
        FootballEndpoint::Matches { code } => {
            Ok(Json(get_matches(client, &code).await?).into_response())
        }
        FootballEndpoint::Competition { code } => {
            Ok(Json(get_competition(client, &code).await?).into_response())
        }
    }
}

async fn get_competition(client: &AppwriteClient, code: &str) -> Result<CompetitionResponse> {
    tracing::debug!("Fetching competition {}", code);
    let response = client
        .list_documents(
            &client.collections().competitions,
            &queries::competition_lookup(code),
        )
        .await?;

    let mut competitions: Vec<CompetitionDocument> = shape_documents(response.documents);
    match competitions.pop() {
        Some(doc) => Ok(doc.into()),
        None => {
            tracing::warn!("Competition {} not found", code);
            Err(AppError::CompetitionNotFound(code.to_string()))
        }
    }
}

async fn get_standings(client: &AppwriteClient, code: &str) -> Result<StandingsResponse> {
    tracing::debug!("Fetching standings for {}", code);
    let response = client
        .list_documents(&client.collections().standings, &queries::standings_for(code))
        .await?;

    let rows: Vec<StandingDocument> = shape_documents(response.documents);
    Ok(StandingsResponse::from_rows(rows))
}

async fn get_matches(client: &AppwriteClient, code: &str) -> Result<MatchesResponse> {
    tracing::debug!("Fetching matches for {}", code);
    let response = client
        .list_documents(
            &client.collections().matches,
            &queries::finished_matches_for(code),
        )
        .await?;

    let matches: Vec<MatchDocument> = shape_documents(response.documents);
    Ok(MatchesResponse {
        matches: matches.into_iter().map(MatchEntry::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standings_suffix_wins_over_competition_prefix() {
        assert_eq!(
            FootballEndpoint::parse("competitions/PL/standings"),
            Some(FootballEndpoint::Standings {
                code: "PL".to_string()
            })
        );
    }

    #[test]
    fn matches_segment_is_checked_after_standings() {
        assert_eq!(
            FootballEndpoint::parse("competitions/SA/matches"),
            Some(FootballEndpoint::Matches {
                code: "SA".to_string()
            })
        );
        // Trailing segments after /matches still route to matches.
        assert_eq!(
            FootballEndpoint::parse("competitions/SA/matches/extra"),
            Some(FootballEndpoint::Matches {
                code: "SA".to_string()
            })
        );
    }

    #[test]
    fn bare_competition_path_routes_to_metadata_lookup() {
        assert_eq!(
            FootballEndpoint::parse("competitions/BL1"),
            Some(FootballEndpoint::Competition {
                code: "BL1".to_string()
            })
        );
        // Unknown trailing segments fall through to the metadata branch.
        assert_eq!(
            FootballEndpoint::parse("competitions/BL1/scorers"),
            Some(FootballEndpoint::Competition {
                code: "BL1".to_string()
            })
        );
    }

    #[test]
    fn non_competition_paths_are_unsupported() {
        assert_eq!(FootballEndpoint::parse("unknown"), None);
        assert_eq!(FootballEndpoint::parse("competition/PL"), None);
        assert_eq!(FootballEndpoint::parse(""), None);
    }

    #[test]
    fn empty_code_routes_to_metadata_lookup_for_a_404() {
        assert_eq!(
            FootballEndpoint::parse("competitions/"),
            Some(FootballEndpoint::Competition {
                code: String::new()
            })
        );
    }

    #[test]
    fn leading_slash_is_tolerated() {
        assert_eq!(
            FootballEndpoint::parse("/competitions/PL/standings"),
            Some(FootballEndpoint::Standings {
                code: "PL".to_string()
            })
        );
    }
}
