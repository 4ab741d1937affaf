//! rh6_view_launch CLI

use clap::{Parser, Subcommand};
use rh6_view_launch::{generate_launch_plan, options};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "rh6_view_launch")]
#[command(about = "Launch plan generator for viewing RH6 hand URDF models", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the robot description and write the launch plan
    Generate {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_launch_arg)]
        args: Vec<(String, String)>,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// List the launch arguments this plan declares
    ShowArgs,
}

fn parse_launch_arg(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split(":=").collect();
    if parts.len() != 2 {
        return Err(format!("Invalid launch argument format: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Generate { args, output } => {
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            generate_and_write(cli_args, &output)
        }
        Commands::ShowArgs => {
            show_args();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate_and_write(
    cli_args: HashMap<String, String>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = generate_launch_plan(cli_args)?;

    let json = plan.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Generated launch plan: {}", output.display());
    log::info!(
        "  {} nodes, {} declared arguments",
        plan.node.len(),
        plan.arguments.len()
    );

    Ok(())
}

fn show_args() {
    println!("Declared arguments:");
    for argument in options::DECLARED_ARGUMENTS {
        if argument.default.is_empty() {
            println!("  {} (default: unset)", argument.name);
        } else {
            println!("  {} (default: {})", argument.name, argument.default);
        }
        println!("      {}", argument.description);
        if let Some(choices) = argument.choices {
            println!("      choices: {}", choices.join(", "));
        }
    }
}
