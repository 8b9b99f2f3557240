use super::{resolve_reference, VERSION};
use chrono::NaiveDate;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the skills timeline.
pub fn parse_cli() -> (PathBuf, PathBuf, Option<PathBuf>, NaiveDate) {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name for the csv file with the skill intervals")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .required(true)
        .default_value("skills.csv");
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_pngout = Arg::with_name("output_pngfile")
        .help("optionally export the chart to a png file too")
        .short("p")
        .long("pngfile")
        .takes_value(true);
    let arg_reference = Arg::with_name("reference_date")
        .help("reference date anchoring the time axis, %Y-%m-%d, defaults to today")
        .short("r")
        .long("reference")
        .takes_value(true);
    let cli_args = App::new("skills_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the skills timeline")
        .arg(arg_csvin)
        .arg(arg_svgout)
        .arg(arg_pngout)
        .arg(arg_reference)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let svgout = match cli_args.value_of("output_svgfile") {
        Some(p) => PathBuf::from(p),
        None => {
            let mut svgout = csvin.clone();
            svgout.set_extension("svg");
            svgout
        }
    };
    let pngout = cli_args.value_of("output_pngfile").map(PathBuf::from);
    let reference = resolve_reference(cli_args.value_of("reference_date"));
    return (csvin, svgout, pngout, reference);
}
