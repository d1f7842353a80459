use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crosslink_code::{
    build_switch_url_with, generate_link_code, normalize_link_code, resolve_link_code,
    to_native_deep_link, LinkCodeSources, LinkConfig,
};
use crosslink_merge::{build_account_link_result, resolve_merge};
use crosslink_types::CandidateIdentity;

use crate::cli::*;

/// Two accounts to merge, as read from a `merge` input file.
#[derive(Debug, Deserialize)]
pub struct MergeInput {
    pub a: CandidateIdentity,
    pub b: CandidateIdentity,
    #[serde(default)]
    pub a_has_primary: bool,
    #[serde(default)]
    pub b_has_primary: bool,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");
    let format = cli.format;
    match cli.command {
        Command::Generate(args) => cmd_generate(&config, args, &format),
        Command::Check(args) => cmd_check(args, &format),
        Command::Resolve(args) => cmd_resolve(args, &format),
        Command::SwitchUrl(args) => cmd_switch_url(&config, args, &format),
        Command::Native(args) => cmd_native(args, &format),
        Command::Merge(args) => cmd_merge(args, &format),
        Command::LinkResult(args) => cmd_link_result(args, &format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LinkConfig> {
    match path {
        Some(path) => LinkConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(LinkConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_generate(config: &LinkConfig, args: GenerateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let length = args.length.unwrap_or(config.code_length);
    let code = generate_link_code(&mut rand::thread_rng(), length)?;
    match format {
        OutputFormat::Json => print_json(&json!({ "link_code": code })),
        OutputFormat::Text => {
            println!("{} {}", "✓".green().bold(), code.yellow().bold());
            Ok(())
        }
    }
}

fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let normalized = normalize_link_code(&args.code);
    if let OutputFormat::Json = format {
        print_json(&json!({ "input": args.code, "link_code": normalized }))?;
    }
    match normalized {
        Some(code) => {
            if let OutputFormat::Text = format {
                println!("{} {}", "✓ valid".green().bold(), code.yellow());
            }
            Ok(())
        }
        None => bail!("not a link code: {:?}", args.code),
    }
}

fn cmd_resolve(args: ResolveArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let resolution = resolve_link_code(LinkCodeSources {
        body_code: args.body.as_deref(),
        start_param: args.start_param.as_deref(),
    });
    match format {
        OutputFormat::Json => print_json(&resolution),
        OutputFormat::Text => {
            if resolution.is_resolved() {
                println!("Link code: {}", resolution.link_code.yellow().bold());
            } else if resolution.body_code_invalid {
                println!("{} invalid body code supplied", "✗".red().bold());
            } else {
                println!("{} no link code found", "✗".red().bold());
            }
            println!("  body code:        {}", flag(resolution.has_body_code));
            println!("  body invalid:     {}", flag(resolution.body_code_invalid));
            println!("  start-param code: {}", flag(resolution.has_start_param_code));
            Ok(())
        }
    }
}

fn cmd_switch_url(config: &LinkConfig, args: SwitchUrlArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let url = build_switch_url_with(config, args.platform, &args.code, args.base.as_deref());
    match format {
        OutputFormat::Json => print_json(&json!({ "platform": args.platform, "url": url })),
        OutputFormat::Text => {
            println!("{}", url.blue());
            Ok(())
        }
    }
}

fn cmd_native(args: NativeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let native = to_native_deep_link(&args.url);
    match format {
        OutputFormat::Json => print_json(&json!({ "url": args.url, "native": native })),
        OutputFormat::Text if native.is_empty() => {
            println!("{} no native link for {}", "✗".red().bold(), args.url);
            Ok(())
        }
        OutputFormat::Text => {
            println!("{}", native.blue());
            Ok(())
        }
    }
}

fn load_merge_input(path: &Path) -> anyhow::Result<MergeInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid merge input in {}", path.display()))
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let input = load_merge_input(&args.input)?;
    let plan = resolve_merge(&input.a, &input.b, input.a_has_primary, input.b_has_primary);
    match format {
        OutputFormat::Json => print_json(&plan),
        OutputFormat::Text => {
            println!("Master:    {} ({})", plan.master_id.to_string().green().bold(), plan.rule);
            println!("Secondary: {}", plan.secondary_id.to_string().yellow());
            match &plan.block_state {
                None => println!("Block:     {}", "none".green()),
                Some(state) => {
                    let until = state
                        .blocked_until
                        .map(|t| t.to_rfc3339())
                        .unwrap_or_else(|| "permanent".into());
                    println!("Block:     {} until {}", "blocked".red().bold(), until);
                    if let Some(reason) = &state.block_reason {
                        println!("  Reason: {reason}");
                    }
                }
            }
            Ok(())
        }
    }
}

fn cmd_link_result(args: LinkResultArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let result = build_account_link_result(args.target, args.merged);
    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            match (result.source_platform, result.target_platform) {
                (Some(source), Some(target)) => println!(
                    "{} linked {} → {} (merged: {})",
                    "✓".green().bold(),
                    source.to_string().bold(),
                    target.to_string().bold(),
                    flag(result.merged)
                ),
                _ => println!("Nothing performed."),
            }
            Ok(())
        }
    }
}

fn flag(value: bool) -> colored::ColoredString {
    if value { "yes".green() } else { "no".dimmed() }
}
