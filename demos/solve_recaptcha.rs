//! Example: solving a reCAPTCHA v2 through YesCaptcha.
//!
//! Run with: cargo run --example solve_recaptcha

use std::time::Duration;

use yescaptcha::{Solver, TaskType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let client_key = std::env::var("YESCAPTCHA_CLIENT_KEY")
        .expect("set YESCAPTCHA_CLIENT_KEY to your account key");

    let mut solver = Solver::builder(
        client_key,
        "https://www.google.com/recaptcha/api2/demo",
        "6Le-wvkSAAAAAPBMRTvw0Q4Muexq9bi0DJwx_mJ-",
        TaskType::NoCaptchaTaskProxyless,
    )
    .timeout(Duration::from_secs(120))
    .interval(Duration::from_secs(3))
    // Optionally route through a proxy:
    // .proxy("http://127.0.0.1:8080")
    .build()?;

    let balance = solver.fetch_balance().await?;
    println!("balance: {balance}");

    match solver.solve().await {
        Ok(token) => {
            println!("Success!");
            println!("  task_id: {}", solver.task_id());
            println!("  token: {}...", &token[..50.min(token.len())]);
        }
        Err(e) => {
            println!("Failed ({}): {}", e.code(), e);
        }
    }

    Ok(())
}
