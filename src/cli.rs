use clap::{Parser, Subcommand, ValueEnum};
use of_api::TextureKind;
use url::Url;

/// Bridges legacy Minecraft join requests to the modern session service
#[derive(Debug, Parser)]
#[command(name = "onlinefix", version, about)]
pub struct Cli {
    /// Route every API call to an authlib-injector server (API root or any URL advertising it)
    #[arg(long, global = true, value_name = "URL")]
    pub authlib_injector: Option<Url>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a legacy joinserver.jsp URL and print the synthesized body
    Join {
        url: Url,

        /// Proxy for the outbound API calls
        #[arg(long, value_name = "URL")]
        proxy: Option<Url>,
    },

    /// Print a player's texture URL
    Texture {
        /// Profile id (UUID without dashes)
        player: String,

        #[arg(long, value_enum, default_value = "skin")]
        kind: KindArg,
    },

    /// Print the authlib-injector API root advertised by a URL
    Discover { url: Url },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Skin,
    Cape,
    Elytra,
}

impl From<KindArg> for TextureKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Skin => Self::Skin,
            KindArg::Cape => Self::Cape,
            KindArg::Elytra => Self::Elytra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join() {
        let cli = Cli::try_parse_from([
            "onlinefix",
            "join",
            "http://www.minecraft.net/game/joinserver.jsp?user=Steve",
            "--proxy",
            "http://127.0.0.1:3128",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "info");
        match cli.command {
            Command::Join { url, proxy } => {
                assert_eq!(url.host_str(), Some("www.minecraft.net"));
                assert_eq!(proxy.unwrap().as_str(), "http://127.0.0.1:3128/");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_texture_with_global_flags() {
        let cli = Cli::try_parse_from([
            "onlinefix",
            "texture",
            "069a79f444e94726a5befca90e38aaf5",
            "--kind",
            "cape",
            "--authlib-injector",
            "https://skins.example.net/api/yggdrasil",
            "--json-logs",
        ])
        .unwrap();

        assert!(cli.json_logs);
        assert!(cli.authlib_injector.is_some());
        match cli.command {
            Command::Texture { kind, .. } => assert_eq!(TextureKind::from(kind), TextureKind::Cape),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
