//! Point d'entrée CLI pour lane-osm

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use lane_osm::cli::{self, Commands, ConvertArgs};

/// Convertir les relevés de voies en chemins OSM fermés
#[derive(Parser)]
#[command(name = "lane-osm")]
#[command(version)]
#[command(about = "Convertir les relevés de voies (centres + marquages) en chemins OSM fermés")]
#[command(
    long_about = "Convertit les fichiers de points d'un relevé routier en fichier OSM: un chemin fermé par voie, avec un tag 'width' par nœud calculé par projection sur les deux marquages.\n\nPar défaut, conversion complète avec largeurs. Utilisez 'centers' pour les centres seuls."
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Niveau de détail des logs (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// N'afficher que les avertissements
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sous-commande (sans sous-commande: conversion avec largeurs)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments de la conversion complète (commande par défaut)
    #[command(flatten)]
    convert: Option<ConvertArgs>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Centers {
            destination,
            centers,
            config,
            axis_order,
        }) => {
            info!(destination = %destination.display(), "Centers-only conversion");
            cli::cmd_centers(&destination, &centers, &config, axis_order.into())?;
        }
        None => {
            let args = cli.convert.expect("Destination path required");
            info!(destination = %args.destination.display(), "Full conversion with widths");
            cli::cmd_convert(
                &args.destination,
                &args.centers,
                &args.stripes,
                &args.config,
                args.axis_order.into(),
            )?;
        }
    }

    Ok(())
}

/// Initialise tracing; `--quiet` l'emporte sur `--verbose`
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::WARN
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());
    fmt().with_env_filter(filter).with_target(true).init();
}
