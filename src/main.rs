use sheetforge::cli::cli;
use sheetforge::services::files::create_necessary_directories;
use sheetforge::services::shared::logger::init_logger;

async fn run_sheetforge() -> anyhow::Result<()> {
    init_logger();
    create_necessary_directories()?;
    cli().await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    run_sheetforge().await?;
    Ok(())
}
