use chrono::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub mod category;
pub mod layout;
pub mod plot;
pub mod transform;

use category::{categorize, Category};
use transform::{axis_ticks, log_position, years_between};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const BASE_LINE_WIDTH: f64 = 8.0;
pub const MIN_LINE_WIDTH: f64 = 2.0;
pub const WIDTH_DECAY_YEARS: f64 = 5.0;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("date {date} is after the reference date {reference}")]
    Domain {
        date: NaiveDate,
        reference: NaiveDate,
    },
    #[error("record {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },
    #[error("no skill records found in the input")]
    Empty,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of the input table: a named interval with start and end dates.
/// The name may carry a leading ordinal prefix, e.g. "3 Docker".
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A skill interval annotated with the derived fields used for drawing.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub name: String,
    pub display_name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: Category,
    pub start_pos: f64,
    pub end_pos: f64,
    pub line_width: f64,
    pub display_order: usize,
}

/// The main struct for the skills timeline
#[derive(Debug, Clone)]
pub struct Timeline {
    pub entries: Vec<SkillEntry>,
    pub reference: NaiveDate,
}

impl Timeline {
    /// Init a Timeline from csv,
    /// aborting on the first row that cannot be read or parsed.
    /// The whole file is validated and laid out before anything is drawn,
    /// a partially loaded table would silently corrupt the chart.
    pub fn from_csv(fin: PathBuf, reference: NaiveDate) -> Result<Timeline, TimelineError> {
        let mut rdr = csv::Reader::from_path(&fin)?;
        let mut records: Vec<SkillRecord> = Vec::new();
        for (i, row) in rdr.deserialize().enumerate() {
            let record: SkillRecord = row.map_err(|e| TimelineError::MalformedRecord {
                row: i + 1,
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        Timeline::from_records(records, reference)
    }

    /// Lays out the records: categorize, transform the dates to axis
    /// positions, sort by category rank and start date, and assign the
    /// row order and line widths. All positions share the one reference
    /// date so the chart stays internally consistent.
    pub fn from_records(
        records: Vec<SkillRecord>,
        reference: NaiveDate,
    ) -> Result<Timeline, TimelineError> {
        if records.is_empty() {
            return Err(TimelineError::Empty);
        }
        let mut entries: Vec<SkillEntry> = Vec::with_capacity(records.len());
        for (i, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(TimelineError::MalformedRecord {
                    row: i + 1,
                    reason: String::from("missing name"),
                });
            }
            if record.end < record.start {
                return Err(TimelineError::MalformedRecord {
                    row: i + 1,
                    reason: format!("end {} is before start {}", record.end, record.start),
                });
            }
            let category = categorize(&record.name);
            let start_pos = log_position(record.start, reference)?;
            let end_pos = log_position(record.end, reference)?;
            entries.push(SkillEntry {
                display_name: display_name(&record.name),
                line_width: line_width(record.start, reference),
                name: record.name,
                start: record.start,
                end: record.end,
                category,
                start_pos,
                end_pos,
                display_order: 0,
            });
        }
        entries.sort_by(|a, b| {
            a.category
                .sort_rank()
                .cmp(&b.category.sort_rank())
                .then(a.start.cmp(&b.start))
        });
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.display_order = i;
        }
        Ok(Timeline { entries, reference })
    }

    /// writes the laid-out entries and their derived fields as a csv at the given path
    pub fn to_csv(&self, fout: PathBuf) -> Result<(), TimelineError> {
        let mut wtr = csv::Writer::from_path(fout)?;
        wtr.write_record(&[
            "name",
            "category",
            "start",
            "end",
            "start_pos",
            "end_pos",
            "line_width",
        ])?;
        for e in &self.entries {
            wtr.write_record(&[
                e.name.clone(),
                e.category.to_string(),
                e.start.to_string(),
                e.end.to_string(),
                e.start_pos.to_string(),
                e.end_pos.to_string(),
                e.line_width.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// plots the skills timeline to svg
    pub fn plot_svg(&self, fout: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let root = SVGBackend::new(&fout, (1200, 800)).into_drawing_area();
        self.render_on(&root)
    }

    /// plots the skills timeline to png, for embedding where svg is not an option
    pub fn plot_png(&self, fout: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(&fout, (1200, 800)).into_drawing_area();
        self.render_on(&root)
    }

    /// Draws one horizontal segment per entry, row order running from the
    /// top down, with the year labels rebuilt from the same transform as
    /// the data positions.
    fn render_on<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        DB::ErrorType: 'static,
    {
        let (mut xmin, mut xmax) = (f64::INFINITY, f64::NEG_INFINITY);
        for e in &self.entries {
            xmin = xmin.min(e.start_pos);
            xmax = xmax.max(e.end_pos);
        }
        let xmargin = (xmax - xmin) / 20.0;
        let xmin = xmin - xmargin;
        let xmax = xmax + xmargin;
        let nrows = self.entries.len() as f64;

        let ticks = axis_ticks(self.reference)?;
        let tick_positions: Vec<f64> = ticks
            .iter()
            .map(|t| t.position)
            .filter(|p| *p >= xmin && *p <= xmax)
            .collect();
        let year_label = |x: &f64| -> String {
            ticks
                .iter()
                .min_by(|a, b| (a.position - x).abs().total_cmp(&(b.position - x).abs()))
                .map(|t| t.year.to_string())
                .unwrap_or_default()
        };

        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .caption(
                format!(
                    "Skills Timeline - updated {}",
                    self.reference.format("%B %Y")
                ),
                ("sans-serif", 28).into_font().color(&RGBColor(44, 62, 80)),
            )
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(40)
            .build_cartesian_2d((xmin..xmax).with_key_points(tick_positions), -nrows..1.0)?;
        chart
            .configure_mesh()
            .disable_y_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(236, 240, 241).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 16).into_font().color(&RGBColor(52, 73, 94)))
            .y_labels(0)
            .x_label_formatter(&year_label)
            .draw()?;

        for e in &self.entries {
            let y = -(e.display_order as f64);
            chart.draw_series(LineSeries::new(
                vec![(e.start_pos, y), (e.end_pos, y)],
                e.category.color().stroke_width(e.line_width.round() as u32),
            ))?;
            let mid = (e.start_pos + e.end_pos) / 2.0;
            let label_style = ("sans-serif", 11)
                .into_font()
                .color(&WHITE)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(std::iter::once(Text::new(
                e.display_name.clone(),
                (mid, y),
                label_style,
            )))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "name, category, start, end\n")?;
        for e in &self.entries {
            write!(
                f,
                "{}, {}, {}, {}\n",
                e.display_name, e.category, e.start, e.end
            )?
        }
        Ok(())
    }
}

/// Line thickness decays with the age of the start date, floored at
/// MIN_LINE_WIDTH so the oldest entries stay visible.
pub fn line_width(start: NaiveDate, reference: NaiveDate) -> f64 {
    let age = years_between(start, reference);
    (BASE_LINE_WIDTH - age / WIDTH_DECAY_YEARS).max(MIN_LINE_WIDTH)
}

/// Strips the leading ordinal token from a skill name, "3 Docker" -> "Docker".
/// Only for label rendering, the full name stays the data key and the
/// categorizer input.
pub fn display_name(name: &str) -> String {
    match name.split_once(' ') {
        Some((_, rest)) => rest.to_string(),
        None => name.to_string(),
    }
}

/// Resolves the reference date for one run: parsed from the CLI argument
/// when given, today otherwise. Captured once and passed through every
/// transform call, never re-read from the clock mid-run.
pub fn resolve_reference(arg: Option<&str>) -> NaiveDate {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .expect("reference date is not a valid %Y-%m-%d date"),
        None => Local::now().naive_local().date(),
    }
}
