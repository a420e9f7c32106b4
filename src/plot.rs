use super::VERSION;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

fn cli() -> App<'static, 'static> {
    let arg_datin = Arg::with_name("input_datfile")
        .help("name of the two-column file written by the detector")
        .short("f")
        .long("datfile")
        .takes_value(true)
        .required(true)
        .default_value("/tmp/silentcmd.dat");
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_threshold = Arg::with_name("threshold")
        .help("detector threshold in dB, drawn as a marker line")
        .short("t")
        .long("threshold")
        .takes_value(true)
        .allow_hyphen_values(true);
    App::new("silentcmd_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the RMS level and switch status time series")
        .arg(arg_datin)
        .arg(arg_svgout)
        .arg(arg_threshold)
}

fn args_from_matches(cli_args: &ArgMatches) -> (PathBuf, PathBuf, Option<f64>) {
    let datin = PathBuf::from(cli_args.value_of("input_datfile").unwrap_or_default());
    let svgout = match cli_args.value_of("output_svgfile") {
        Some(p) => PathBuf::from(p),
        None => {
            let mut svgout = datin.clone();
            svgout.set_extension("svg");
            svgout
        }
    };
    let threshold = match cli_args.value_of("threshold") {
        Some(t) => match t.parse::<f64>() {
            Ok(t) => Some(t),
            Err(_) => {
                eprintln!("could not parse threshold {:?} as a number", t);
                std::process::exit(1);
            }
        },
        None => None,
    };
    return (datin, svgout, threshold);
}

/// Takes the CLI arguments that control the plotting of the detector time series.
pub fn parse_cli() -> (PathBuf, PathBuf, Option<f64>) {
    let cli_args = cli().get_matches();
    args_from_matches(&cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_threshold_parses_in_space_separated_form() {
        let cli_args = cli()
            .get_matches_from_safe(vec!["silentcmd_plot", "-t", "-60.0"])
            .unwrap();
        let (_, _, threshold) = args_from_matches(&cli_args);
        assert_eq!(threshold, Some(-60.0));
    }

    #[test]
    fn negative_threshold_parses_in_equals_form() {
        let cli_args = cli()
            .get_matches_from_safe(vec!["silentcmd_plot", "--threshold=-42.5"])
            .unwrap();
        let (_, _, threshold) = args_from_matches(&cli_args);
        assert_eq!(threshold, Some(-42.5));
    }

    #[test]
    fn svgfile_defaults_to_datfile_with_svg_extension() {
        let cli_args = cli()
            .get_matches_from_safe(vec!["silentcmd_plot", "-f", "/tmp/detect.dat"])
            .unwrap();
        let (datin, svgout, threshold) = args_from_matches(&cli_args);
        assert_eq!(datin, PathBuf::from("/tmp/detect.dat"));
        assert_eq!(svgout, PathBuf::from("/tmp/detect.svg"));
        assert_eq!(threshold, None);
    }
}
