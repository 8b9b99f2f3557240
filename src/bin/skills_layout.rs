use skills_lpp::layout::parse_cli;
use skills_lpp::Timeline;

fn main() {
    let (csvin, csvout, reference, verbose) = parse_cli();
    println!(
        "read data from {} and save the layout to {}",
        csvin.to_str().unwrap(),
        csvout.to_str().unwrap()
    );
    let timeline = Timeline::from_csv(csvin, reference).unwrap_or_else(|e| {
        eprintln!("could not build the timeline: {}", e);
        std::process::exit(1);
    });
    if verbose {
        println!("{}", timeline);
    }
    timeline.to_csv(csvout).unwrap_or_else(|e| {
        eprintln!("could not write the layout: {}", e);
        std::process::exit(1);
    });
}
