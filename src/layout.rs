use super::{resolve_reference, VERSION};
use chrono::NaiveDate;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the layout run.
pub fn parse_cli() -> (PathBuf, PathBuf, NaiveDate, bool) {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name for the csv file with the skill intervals")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .required(true)
        .default_value("skills.csv");
    let arg_csvout = Arg::with_name("output_csvfile")
        .help("name of the output csv file with the derived fields")
        .short("o")
        .long("outfile")
        .takes_value(true);
    let arg_reference = Arg::with_name("reference_date")
        .help("reference date anchoring the time axis, %Y-%m-%d, defaults to today")
        .short("r")
        .long("reference")
        .takes_value(true);
    let arg_verbose = Arg::with_name("verbose")
        .help("print the laid-out entries")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    let cli_args = App::new("skills_layout")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to lay out the skills timeline and export the derived fields")
        .arg(arg_csvin)
        .arg(arg_csvout)
        .arg(arg_reference)
        .arg(arg_verbose)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let csvout = match cli_args.value_of("output_csvfile") {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(csvin.to_str().unwrap().replace(".csv", "_layout.csv")),
    };
    let reference = resolve_reference(cli_args.value_of("reference_date"));
    let verbose = cli_args.is_present("verbose");
    return (csvin, csvout, reference, verbose);
}
