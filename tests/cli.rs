use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn plot_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_silentcmd_plot"))
}

#[test]
fn missing_input_exits_nonzero_without_an_svg() {
    let dir = tempdir().unwrap();
    let datin = dir.path().join("nonexistent.dat");
    let svgout = dir.path().join("nonexistent.svg");
    let out = plot_bin()
        .arg("-f")
        .arg(&datin)
        .arg("-o")
        .arg(&svgout)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unavailable"));
    assert!(!Path::new(&svgout).exists());
}

#[test]
fn malformed_input_exits_nonzero_without_an_svg() {
    let dir = tempdir().unwrap();
    let datin = dir.path().join("detect.dat");
    let svgout = dir.path().join("detect.svg");
    std::fs::write(&datin, "-12.3 1\n-10.0\n").unwrap();
    let out = plot_bin()
        .arg("-f")
        .arg(&datin)
        .arg("-o")
        .arg(&svgout)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
    assert!(!Path::new(&svgout).exists());
}

#[test]
fn well_formed_input_with_negative_threshold_exits_zero() {
    let dir = tempdir().unwrap();
    let datin = dir.path().join("detect.dat");
    let svgout = dir.path().join("detect.svg");
    std::fs::write(&datin, "-12.3 1\n-10.0 1\n-40.5 0\n").unwrap();
    let out = plot_bin()
        .arg("-f")
        .arg(&datin)
        .arg("-o")
        .arg(&svgout)
        .arg("-t")
        .arg("-60.0")
        .output()
        .unwrap();
    assert!(out.status.success());
    let svg = std::fs::read_to_string(&svgout).unwrap();
    assert!(svg.contains("Threshold (dB)"));
}
