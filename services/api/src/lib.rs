mod classify;
mod cli;
mod infra;
mod routes;
mod server;

use claim_status::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
