//! `swc-ffl get ...`: call the API through [`SwcClient`] and print the result

use super::resolve_base_url;
use crate::{
    cli::{ClientArgs, GetCmd},
    client::{SwcClient, SwcConfig},
    Counts, League, LeagueFilter, Performance, PerformanceFilter, Player, PlayerFilter, Result,
    Team, TeamFilter,
};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Text form of a response, one line per record
pub(crate) trait TextLines {
    fn text_lines(&self) -> Vec<String>;
}

impl<T: TextLines> TextLines for Vec<T> {
    fn text_lines(&self) -> Vec<String> {
        self.iter().flat_map(TextLines::text_lines).collect()
    }
}

impl TextLines for Value {
    fn text_lines(&self) -> Vec<String> {
        match self.get("message").and_then(Value::as_str) {
            Some(message) => vec![message.to_string()],
            None => vec![self.to_string()],
        }
    }
}

impl TextLines for Counts {
    fn text_lines(&self) -> Vec<String> {
        vec![
            format!("Leagues: {}", self.league_count),
            format!("Teams: {}", self.team_count),
            format!("Players: {}", self.player_count),
        ]
    }
}

impl TextLines for Player {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: {} ({})",
            self.player_id,
            self.full_name(),
            self.position
        )];
        lines.extend(
            self.performances
                .iter()
                .map(|p| format!("  week {}: {} pts", p.week_number, p.fantasy_points)),
        );
        lines
    }
}

impl TextLines for Performance {
    fn text_lines(&self) -> Vec<String> {
        vec![format!(
            "{}: player {} week {} {} pts",
            self.performance_id, self.player_id, self.week_number, self.fantasy_points
        )]
    }
}

impl TextLines for League {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: {} ({})",
            self.league_id, self.league_name, self.scoring_type
        )];
        lines.extend(
            self.teams
                .iter()
                .map(|t| format!("  {}: {}", t.team_id, t.team_name)),
        );
        lines
    }
}

impl TextLines for Team {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{}: {} (league {})",
            self.team_id, self.team_name, self.league_id
        )];
        lines.extend(self.players.iter().map(|p| {
            format!(
                "  {}: {} {} ({})",
                p.player_id, p.first_name, p.last_name, p.position
            )
        }));
        lines
    }
}

/// Build a client from the command line options
pub fn build_client(args: &ClientArgs) -> Result<SwcClient> {
    let base_url = resolve_base_url(args.base_url.clone())?;
    let config = SwcConfig::new(base_url)
        .retry_enabled(!args.no_retry)
        .retry_max_elapsed(Duration::from_secs(args.max_retry_secs));
    SwcClient::new(config)
}

pub(crate) fn render<T: Serialize + TextLines>(value: &T, as_json: bool) -> Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(value.text_lines().join("\n"))
    }
}

fn emit<T: Serialize + TextLines>(value: &T, as_json: bool) -> Result<()> {
    let output = render(value, as_json)?;
    if !output.is_empty() {
        println!("{}", output); // tarpaulin::skip
    }
    Ok(())
}

/// Handle the get command
pub async fn handle_get(args: ClientArgs, cmd: GetCmd) -> Result<()> {
    let client = build_client(&args)?;
    let json = args.json;

    match cmd {
        GetCmd::Health => emit(&client.get_health_check().await?, json),
        GetCmd::Counts => emit(&client.get_counts().await?, json),
        GetCmd::Players {
            page,
            first_name,
            last_name,
        } => {
            let filter = PlayerFilter {
                min_last_changed_date: page.since,
                first_name,
                last_name,
            };
            emit(&client.list_players(&filter, page.page()).await?, json)
        }
        GetCmd::Player { player_id } => emit(&client.get_player(player_id).await?, json),
        GetCmd::Performances { page } => {
            let filter = PerformanceFilter {
                min_last_changed_date: page.since,
            };
            emit(&client.list_performances(&filter, page.page()).await?, json)
        }
        GetCmd::Performance { performance_id } => {
            emit(&client.get_performance(performance_id).await?, json)
        }
        GetCmd::Leagues { page, league_name } => {
            let filter = LeagueFilter {
                min_last_changed_date: page.since,
                league_name,
            };
            emit(&client.list_leagues(&filter, page.page()).await?, json)
        }
        GetCmd::League { league_id } => emit(&client.get_league(league_id).await?, json),
        GetCmd::Teams {
            page,
            team_name,
            league_id,
        } => {
            let filter = TeamFilter {
                min_last_changed_date: page.since,
                team_name,
                league_id,
            };
            emit(&client.list_teams(&filter, page.page()).await?, json)
        }
        GetCmd::Team { team_id } => emit(&client.get_team(team_id).await?, json),
    }
}
