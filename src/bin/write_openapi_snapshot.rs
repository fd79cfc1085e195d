// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use std::{env, path::Path};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string());
    kiji_core::presentation::http::openapi::write_snapshot(Path::new(&output_path))?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
