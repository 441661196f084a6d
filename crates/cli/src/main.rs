mod args;
mod logger;
mod output;

use args::Cli;
use args::Command;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use colored::Colorize;
use vs_core::init::{generate_project, InitOptions};
use vs_core::plan::load_plan;
use vs_core::plan::load_project;
use vs_core::plan::resolve_plan;
use vs_core::runner::BundlerRunner;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logger::init(&cli.log_level)?;

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().wrap_err("Failed to determine current directory")?,
    };

    match cli.command {
        Command::Version { tag } => {
            let plan = load_plan(&root, cli.config.as_deref(), cli.strict)?;
            if tag {
                println!("{}", plan.version.tag());
            } else {
                println!("{}", plan.version);
            }
        }
        Command::Env { format } => {
            let plan = load_plan(&root, cli.config.as_deref(), cli.strict)?;
            println!("{}", output::render_env(&plan.env, format)?);
        }
        Command::Plan => {
            let plan = load_plan(&root, cli.config.as_deref(), cli.strict)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Build => {
            let config = load_project(&root, cli.config.as_deref(), cli.strict)?;
            let plan = resolve_plan(&config)?;
            BundlerRunner::run(&plan, &config.settings.bundler).await?;
            println!(
                "{} {} -> {}",
                "built".green().bold(),
                plan.version.tag().cyan(),
                plan.output_dir
            );
        }
        Command::Init {
            force,
            seed_version,
        } => {
            let written = generate_project(InitOptions {
                target_dir: root,
                force,
                seed_version,
            })?;
            for path in written {
                println!("{} {}", "created".green(), path.display());
            }
        }
    }

    Ok(())
}
