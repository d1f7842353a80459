use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crosslink_types::Platform;

#[derive(Parser)]
#[command(
    name = "crosslink",
    about = "Crosslink — cross-platform account linking toolkit",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with link settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Mint a new link code
    Generate(GenerateArgs),
    /// Normalize and validate a link code
    Check(CheckArgs),
    /// Extract a link code from a request body and/or start parameter
    Resolve(ResolveArgs),
    /// Build a deep link into a platform's Mini App carrying a code
    SwitchUrl(SwitchUrlArgs),
    /// Convert a t.me link into a native tg:// link
    Native(NativeArgs),
    /// Preview the outcome of merging two accounts
    Merge(MergeArgs),
    /// Report the result of a link operation
    LinkResult(LinkResultArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Characters after the LINK_ prefix (overrides config)
    #[arg(short, long)]
    pub length: Option<usize>,
}

#[derive(Args)]
pub struct CheckArgs {
    pub code: String,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[arg(long)]
    pub body: Option<String>,
    #[arg(long)]
    pub start_param: Option<String>,
}

#[derive(Args)]
pub struct SwitchUrlArgs {
    pub platform: Platform,
    pub code: String,
    /// Mini App URL to extend instead of the configured fallback
    #[arg(long)]
    pub base: Option<String>,
}

#[derive(Args)]
pub struct NativeArgs {
    pub url: String,
}

#[derive(Args)]
pub struct MergeArgs {
    /// JSON file with both candidates and their primary-identity flags
    pub input: PathBuf,
}

#[derive(Args)]
pub struct LinkResultArgs {
    #[arg(long)]
    pub target: Option<Platform>,
    #[arg(long)]
    pub merged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate() {
        let cli = Cli::try_parse_from(["crosslink", "generate"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.length, None);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_generate_length() {
        let cli = Cli::try_parse_from(["crosslink", "generate", "-l", "20"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.length, Some(20));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["crosslink", "check", "link_a1b2c3d4"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.code, "link_a1b2c3d4");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_resolve_both_channels() {
        let cli = Cli::try_parse_from([
            "crosslink", "resolve", "--body", "x", "--start-param", "link_y",
        ])
        .unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.body, Some("x".into()));
            assert_eq!(args.start_param, Some("link_y".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_switch_url() {
        let cli = Cli::try_parse_from([
            "crosslink", "switch-url", "vk", "LINK_A1B2C3D4", "--base", "https://vk.com/app1",
        ])
        .unwrap();
        if let Command::SwitchUrl(args) = cli.command {
            assert_eq!(args.platform, Platform::Vk);
            assert_eq!(args.base, Some("https://vk.com/app1".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_switch_url_rejects_unknown_platform() {
        assert!(Cli::try_parse_from(["crosslink", "switch-url", "icq", "LINK_A1B2C3D4"]).is_err());
    }

    #[test]
    fn parse_native() {
        let cli = Cli::try_parse_from(["crosslink", "native", "https://t.me/bot/app"]).unwrap();
        assert!(matches!(cli.command, Command::Native(_)));
    }

    #[test]
    fn parse_merge() {
        let cli = Cli::try_parse_from(["crosslink", "merge", "pair.json"]).unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("pair.json"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_link_result() {
        let cli = Cli::try_parse_from(["crosslink", "link-result", "--target", "tg", "--merged"]).unwrap();
        if let Command::LinkResult(args) = cli.command {
            assert_eq!(args.target, Some(Platform::Telegram));
            assert!(args.merged);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "crosslink", "--format", "json", "--config", "link.toml", "-v", "generate",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("link.toml")));
    }
}
