use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use aiva_vrs::assembly::ASSEMBLY_ALIASES;
use aiva_vrs::{Router, RoutingConfig, generate, get_chromosome_from_vrs_id, parse_vrs_id};

use super::cli::DEFAULT_ASSEMBLY;

/// `-` and `.` are the usual placeholders for an empty allele.
fn allele_arg(value: &str) -> &str {
    match value {
        "-" | "." => "",
        other => other,
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .with_context(|| format!("Missing required argument <{}>", name))
}

fn load_router(matches: &ArgMatches) -> Result<Router> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => RoutingConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load routing config: {}", path))?,
        None => RoutingConfig::default(),
    };
    Ok(Router::new(config)?)
}

pub fn run_generate(matches: &ArgMatches) -> Result<()> {
    let chromosome = required(matches, "chromosome")?;
    let position = required(matches, "position")?;
    let reference = allele_arg(required(matches, "reference")?);
    let alternate = allele_arg(required(matches, "alternate")?);

    let default_assembly = DEFAULT_ASSEMBLY.to_string();
    let assembly = matches
        .get_one::<String>("assembly")
        .unwrap_or(&default_assembly);

    let id = generate(chromosome, position, reference, alternate, assembly)?;
    log::debug!(
        "{}:{} {}>{} ({}) -> {}",
        chromosome,
        position,
        reference,
        alternate,
        assembly,
        id
    );
    println!("{}", id);

    Ok(())
}

pub fn run_parse(matches: &ArgMatches) -> Result<()> {
    let identifier = required(matches, "identifier")?;
    let parsed = parse_vrs_id(identifier)?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

pub fn run_chrom(matches: &ArgMatches) -> Result<()> {
    let identifier = required(matches, "identifier")?;
    println!("{}", get_chromosome_from_vrs_id(identifier)?);
    Ok(())
}

pub fn run_table(matches: &ArgMatches) -> Result<()> {
    let identifier = required(matches, "identifier")?;
    let router = load_router(matches)?;
    println!("{}", router.table_for(identifier)?);
    Ok(())
}

pub fn run_query(matches: &ArgMatches) -> Result<()> {
    let identifier = required(matches, "identifier")?;
    let router = load_router(matches)?;
    let query = router.build_lookup_query(identifier)?;
    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}

pub fn run_assemblies(_matches: &ArgMatches) -> Result<()> {
    for (assembly, aliases) in ASSEMBLY_ALIASES {
        println!("{}\t{}", assembly, aliases.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allele_placeholders() {
        assert_eq!(allele_arg("-"), "");
        assert_eq!(allele_arg("."), "");
        assert_eq!(allele_arg("ACGT"), "ACGT");
    }
}
