//! Heroes command - list every hero

use anyhow::{Context, Result};
use colored::Colorize;
use dragonball_lib::{Hero, SessionToken};

use super::Client;
use crate::ui;

pub async fn run(client: &Client, token: &SessionToken, json: bool) -> Result<()> {
    let spinner = ui::spinner("Fetching heroes...");
    let heroes = match client.heroes_list(token).await {
        Ok(heroes) => {
            spinner.finish_and_clear();
            tracing::debug!(count = heroes.len(), "heroes fetched");
            heroes
        }
        Err(e) => {
            spinner.finish_and_clear();
            ui::error(&format!("Failed to fetch heroes: {}", e));
            return Err(e).context("Failed to fetch heroes");
        }
    };

    if json {
        ui::json(&serde_json::to_value(&heroes)?);
        return Ok(());
    }

    ui::header(&format!("Heroes ({})", heroes.len()));
    if heroes.is_empty() {
        ui::info("No heroes returned");
    }
    for hero in &heroes {
        println!("{}", format_hero(hero));
    }

    Ok(())
}

/// One table row: favorite marker, name and id.
pub fn format_hero(hero: &Hero) -> String {
    let marker = if hero.favorite {
        "★".yellow().to_string()
    } else {
        " ".to_string()
    };
    format!("  {} {} {}", marker, hero.name.bold(), hero.id.dimmed())
}
