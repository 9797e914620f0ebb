use clap::{Arg, Command, arg};

pub const GENERATE_CMD: &str = "generate";
pub const PARSE_CMD: &str = "parse";
pub const CHROM_CMD: &str = "chrom";
pub const TABLE_CMD: &str = "table";
pub const QUERY_CMD: &str = "query";
pub const ASSEMBLIES_CMD: &str = "assemblies";

pub const DEFAULT_ASSEMBLY: &str = "GRCh38";

fn identifier_arg() -> Arg {
    Arg::new("identifier")
        .required(true)
        .help("Variant identifier, e.g. ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP")
}

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Compute the identifier for a variant.")
        .arg_required_else_help(true)
        .arg(Arg::new("chromosome").required(true).help("Chromosome, e.g. chr7 or 7"))
        .arg(Arg::new("position").required(true).help("1-based position"))
        .arg(
            Arg::new("reference")
                .required(true)
                .help("Reference allele ('-' or '.' for empty)"),
        )
        .arg(
            Arg::new("alternate")
                .required(true)
                .help("Alternate allele ('-' or '.' for empty)"),
        )
        .arg(arg!(-a --assembly <assembly> "Genome assembly or alias (default: GRCh38)"))
}

pub fn create_parse_cli() -> Command {
    Command::new(PARSE_CMD)
        .about("Split an identifier into type, chromosome and digest (JSON).")
        .arg_required_else_help(true)
        .arg(identifier_arg())
}

pub fn create_chrom_cli() -> Command {
    Command::new(CHROM_CMD)
        .about("Print the chromosome field of an identifier.")
        .arg_required_else_help(true)
        .arg(identifier_arg())
}

pub fn create_table_cli() -> Command {
    Command::new(TABLE_CMD)
        .about("Print the storage table an identifier routes to.")
        .arg_required_else_help(true)
        .arg(identifier_arg())
        .arg(arg!(-c --config <config> "Routing config (TOML)"))
}

pub fn create_query_cli() -> Command {
    Command::new(QUERY_CMD)
        .about("Build the parameterized lookup query for an identifier (JSON).")
        .arg_required_else_help(true)
        .arg(identifier_arg())
        .arg(arg!(-c --config <config> "Routing config (TOML)"))
}

pub fn create_assemblies_cli() -> Command {
    Command::new(ASSEMBLIES_CMD).about("List supported assemblies and their aliases.")
}
