mod cli;
mod commands;

use aqar_portal::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
