//! Login command - exchange credentials for a session token

use anyhow::{Context, Result};

use super::Client;
use crate::ui;

pub async fn run(client: &Client, user: Option<String>, password: Option<String>) -> Result<()> {
    let user = match user {
        Some(user) => user,
        None => ui::input("User")?,
    };
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ").context("Failed to read password")?,
    };

    let spinner = ui::spinner("Logging in...");
    let token = match client.login(&user, &password).await {
        Ok(token) => {
            spinner.finish_and_clear();
            tracing::info!(user = %user, "login succeeded");
            token
        }
        Err(e) => {
            spinner.finish_and_clear();
            ui::error(&format!("Login failed: {}", e));
            return Err(e).context("Failed to log in");
        }
    };

    ui::success(&format!("Logged in as {}", user));
    ui::info("Pass the token with --token or export DRAGONBALL_TOKEN");
    println!("{}", token);

    Ok(())
}
