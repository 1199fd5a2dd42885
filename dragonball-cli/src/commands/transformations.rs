//! Transformations command - list the transformations of one hero

use anyhow::{Context, Result};
use colored::Colorize;
use dragonball_lib::{SessionToken, Transformation};

use super::Client;
use crate::ui;

pub async fn run(client: &Client, token: &SessionToken, hero_id: &str, json: bool) -> Result<()> {
    let spinner = ui::spinner("Fetching transformations...");
    let transformations = match client.transformation_heroes_list(token, hero_id).await {
        Ok(transformations) => {
            spinner.finish_and_clear();
            transformations
        }
        Err(e) => {
            spinner.finish_and_clear();
            ui::error(&format!("Failed to fetch transformations: {}", e));
            return Err(e).context("Failed to fetch transformations");
        }
    };

    if json {
        ui::json(&serde_json::to_value(&transformations)?);
        return Ok(());
    }

    ui::header(&format!("Transformations of {}", hero_id));
    if transformations.is_empty() {
        ui::info("This hero has no transformations");
        return Ok(());
    }
    for transformation in &transformations {
        println!("{}", format_transformation(transformation));
        ui::key_value("  Photo", &transformation.photo);
    }
    ui::separator();

    Ok(())
}

pub fn format_transformation(transformation: &Transformation) -> String {
    format!("  {}", transformation.name.bold())
}
