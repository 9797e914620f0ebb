mod vrs;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "aiva-vrs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("AIVA")
        .about("Generate, parse and route content-derived variant identifiers.")
        .subcommand_required(true)
        .subcommand(vrs::cli::create_generate_cli())
        .subcommand(vrs::cli::create_parse_cli())
        .subcommand(vrs::cli::create_chrom_cli())
        .subcommand(vrs::cli::create_table_cli())
        .subcommand(vrs::cli::create_query_cli())
        .subcommand(vrs::cli::create_assemblies_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        Some((vrs::cli::GENERATE_CMD, matches)) => vrs::handlers::run_generate(matches)?,
        Some((vrs::cli::PARSE_CMD, matches)) => vrs::handlers::run_parse(matches)?,
        Some((vrs::cli::CHROM_CMD, matches)) => vrs::handlers::run_chrom(matches)?,
        Some((vrs::cli::TABLE_CMD, matches)) => vrs::handlers::run_table(matches)?,
        Some((vrs::cli::QUERY_CMD, matches)) => vrs::handlers::run_query(matches)?,
        Some((vrs::cli::ASSEMBLIES_CMD, matches)) => vrs::handlers::run_assemblies(matches)?,
        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
