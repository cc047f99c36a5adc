use clap::Parser;

use traveljournal_app::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    traveljournal_observability::init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    cli::run(cli, &mut stdout).await
}
