use silentcmd_plot::plot::parse_cli;
use silentcmd_plot::RmsSwitch;

fn main() {
    let (datin, svgout, threshold) = parse_cli();
    println!(
        "read data from {} and plot to {}",
        datin.display(),
        svgout.display()
    );
    let rs = match RmsSwitch::from_dat(datin) {
        Ok(rs) => rs,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = rs.plot_svg(svgout, threshold) {
        eprintln!("could not plot: {}", e);
        std::process::exit(1);
    }
}
