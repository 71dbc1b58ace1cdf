use shop_schema::{
    config::AppConfig, db::run_migrations, seed, state::AppState, telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;

    let state = AppState::connect(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&state.orm).await?;

    let seeded = seed::run(&state).await?;

    tracing::info!(admin_id = %seeded.admin_id, user_id = %seeded.user_id, "seed completed");
    Ok(())
}
