use employee_management::shell::config::AppConfig;
use employee_management::shell::http::router;
use employee_management::shell::state::AppState;
use employee_management::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let state = AppState::in_memory(&config)?;
    state.employee_service.subscribe_to_absence(|_, event| {
        tracing::info!(
            employee_id = %event.employee_id,
            occurred_at = %event.occurred_at,
            "employee reported absent"
        );
    });

    let app = router(state);

    let addr = config.server.socket_addr()?;
    tracing::info!(
        eligibility_url = %config.promotion_eligibility.base_url,
        "HTTP endpoint: http://{}/api/internalemployees",
        addr
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
