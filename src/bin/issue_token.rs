// src/bin/issue_token.rs
//
// Mint a signed bearer token for a user id, for curl-level testing against a
// deployment sharing the same TOKEN_SIGNING_KEY.
use anyhow::{Context, Result};
use kiji_core::application::{dto::TokenSubject, ports::security::TokenManager};
use kiji_core::config::AppConfig;
use kiji_core::domain::user::UserId;
use kiji_core::infrastructure::security::HmacTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let user_id: i64 = std::env::args()
        .nth(1)
        .context("usage: issue_token <user-id>")?
        .parse()
        .context("user id must be an integer")?;

    let config = AppConfig::from_env()?;
    let manager = HmacTokenManager::new(config.token_signing_key(), config.token_ttl())?;

    let issued = manager
        .issue(TokenSubject {
            user_id: UserId::new(user_id)?,
        })
        .await?;

    eprintln!("expires at {}", issued.expires_at);
    println!("{}", issued.token);
    Ok(())
}
