use plotters::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use thiserror::Error;
pub mod plot;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Errors raised while reading the detector output file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file {path:?} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// The main struct for the detector time series:
/// RMS level in dB and the on/off switch status, one row per sample.
#[derive(Debug, Clone)]
pub struct RmsSwitch {
    pub rms_db: Vec<f64>,
    pub switch: Vec<f64>,
}

impl RmsSwitch {
    pub fn new(capacity: usize) -> RmsSwitch {
        let rms_db: Vec<f64> = Vec::with_capacity(capacity);
        let switch: Vec<f64> = Vec::with_capacity(capacity);
        RmsSwitch { rms_db, switch }
    }

    pub fn len(&self) -> usize {
        self.rms_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rms_db.is_empty()
    }

    /// Init an RmsSwitch from the whitespace-delimited file written by the detector.
    /// Every line must carry at least two numeric fields, level then status;
    /// fields past the second are ignored.
    /// Values are kept as read, no scaling or unit conversion.
    pub fn from_dat(fin: PathBuf) -> Result<RmsSwitch, InputError> {
        let file = File::open(&fin).map_err(|e| InputError::Unavailable {
            path: fin.clone(),
            source: e,
        })?;
        let buf = BufReader::new(file);
        let mut rs = RmsSwitch::new(10000);
        for (i, l) in buf.lines().enumerate() {
            let line = i + 1;
            let l = l.map_err(|e| InputError::Unavailable {
                path: fin.clone(),
                source: e,
            })?;
            let mut fields = l.split_whitespace();
            let rms_db = parse_field(fields.next(), line, 1)?;
            let switch = parse_field(fields.next(), line, 2)?;
            rs.rms_db.push(rms_db);
            rs.switch.push(switch);
        }
        Ok(rs)
    }

    /// Plots both series against the 1-based sample index and saves to svg.
    /// A threshold, when given, is drawn as a flat marker line so that the
    /// switch transitions can be read against the level that caused them.
    pub fn plot_svg(
        self,
        fout: PathBuf,
        threshold: Option<f64>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.is_empty() {
            return Err("no samples to plot".into());
        }
        let n = self.len();
        let xspan = (n - 1) as f64;
        let xmargin = (xspan / 20f64).max(1.);
        let xmin = 1. - xmargin;
        let xmax = n as f64 + xmargin;
        let (rms_min, rms_max) = min_and_max(&self.rms_db[..]);
        let (sw_min, sw_max) = min_and_max(&self.switch[..]);
        let mut ymin = rms_min.min(sw_min);
        let mut ymax = rms_max.max(sw_max);
        if let Some(t) = threshold {
            ymin = ymin.min(t);
            ymax = ymax.max(t);
        }
        let yspan = ((ymax - ymin) / 10f64).max(0.5);
        let ymin = ymin - yspan;
        let ymax = ymax + yspan;
        let root = SVGBackend::new(&fout, (1600, 800)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .y_desc("level [dB] / status")
            .x_labels(14) // max number of labels
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .y_label_formatter(&|y: &f64| format!("{:5}", y))
            .x_desc("sample")
            .draw()?;

        let rms = LineSeries::new(
            self.rms_db
                .iter()
                .enumerate()
                .map(|(i, y)| ((i + 1) as f64, *y)),
            RED.stroke_width(2),
        );
        chart
            .draw_series(rms)?
            .label("RMS (dB)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        let switch = LineSeries::new(
            self.switch
                .iter()
                .enumerate()
                .map(|(i, y)| ((i + 1) as f64, *y)),
            BLUE.stroke_width(2),
        );
        chart
            .draw_series(switch)?
            .label("Switch Status")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

        if let Some(t) = threshold {
            let marker = LineSeries::new(
                vec![(xmin, t), (xmax, t)],
                RGBColor(20, 130, 20).stroke_width(1),
            );
            chart
                .draw_series(marker)?
                .label("Threshold (dB)")
                .legend(|(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        RGBColor(20, 130, 20).stroke_width(1),
                    )
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.filled())
            .border_style(BLACK.stroke_width(1))
            .label_font(("sans-serif", 24))
            .draw()?;
        Ok(())
    }
}

impl std::fmt::Display for RmsSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sample rms_db switch_status\n")?;
        for (i, (r, s)) in self.rms_db.iter().zip(self.switch.iter()).enumerate() {
            write!(f, "{} {} {}\n", i + 1, r, s)?
        }
        Ok(())
    }
}

fn parse_field(field: Option<&str>, line: usize, column: usize) -> Result<f64, InputError> {
    let s = match field {
        Some(s) => s,
        None => {
            return Err(InputError::Malformed {
                line,
                reason: format!("expected two fields, found {}", column - 1),
            })
        }
    };
    s.parse::<f64>().map_err(|_| InputError::Malformed {
        line,
        reason: format!("could not parse field {} {:?} as a number", column, s),
    })
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}
