use skills_lpp::plot::parse_cli;
use skills_lpp::Timeline;

fn main() {
    let (csvin, svgout, pngout, reference) = parse_cli();
    println!(
        "read data from {} and plot to {}",
        csvin.to_str().unwrap(),
        svgout.to_str().unwrap()
    );
    let timeline = Timeline::from_csv(csvin, reference).unwrap_or_else(|e| {
        eprintln!("could not build the timeline: {}", e);
        std::process::exit(1);
    });
    timeline.plot_svg(svgout).unwrap();
    if let Some(pngout) = pngout {
        println!("also exporting png to {}", pngout.to_str().unwrap());
        timeline.plot_png(pngout).unwrap();
    }
}
