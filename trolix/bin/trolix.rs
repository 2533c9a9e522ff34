use clap::{CommandFactory, Parser};
use trolix::{
    cli::{TrolixArgs, TrolixSubcommand},
    server::SandboxServer,
};

//--------------------------------------------------------------------------------------------------
// Functions: main
//--------------------------------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args = TrolixArgs::parse();
    match args.subcommand {
        Some(subcommand @ TrolixSubcommand::Serve { .. }) => {
            let config = subcommand.server_config()?;
            let _guard = trolix::init_tracing(args.verbose, config.get_log_dir().as_deref())?;

            tracing::info!(
                "starting {} with {} store",
                trolix::config::SERVICE_NAME,
                config.get_store()
            );
            SandboxServer::new(config).serve().await?;
        }
        None => {
            TrolixArgs::command().print_help()?;
        }
    }

    Ok(())
}
