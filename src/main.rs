mod cli;
mod logging;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use of_api::{ApiServers, MojangApi, OnlineFixConfig, discover_api_location};
use of_legacy::{Interception, LegacyAuthTranslator};
use tracing::info;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level, cli.json_logs)?;

    let mut config = OnlineFixConfig::from_env();
    if let Some(url) = &cli.authlib_injector {
        let root = discover_api_location(&reqwest::Client::new(), url)
            .await
            .context("failed to query authlib-injector server")?;
        info!(%root, "Using authlib-injector API");
        config.servers = ApiServers::authlib_injector(root.as_str());
    }

    let api = MojangApi::new(config)?;

    match cli.command {
        Command::Join { url, proxy } => {
            let proxy = proxy.map(|p| reqwest::Proxy::all(p.as_str())).transpose()?;
            let translator = LegacyAuthTranslator::new(Arc::new(api));

            match translator.intercept(&url, proxy.as_ref()).await? {
                Interception::Handled(response) => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(response.body())?;
                    writeln!(stdout)?;
                }
                Interception::NotApplicable => println!("not applicable"),
            }
        }
        Command::Texture { player, kind } => match api.get_texture(&player, kind.into()).await? {
            Some(texture) => println!("{} slim={}", texture.url, texture.slim),
            None => println!("no texture"),
        },
        Command::Discover { url } => {
            let root = discover_api_location(&reqwest::Client::new(), &url).await?;
            println!("{root}");
        }
    }

    Ok(())
}
