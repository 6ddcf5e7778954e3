//! Print the graduation of a speed gauge and what the gauge paints.
//!
//! `cargo run --example dial_sweep --features tracing`

use navgauge::render::RecordingCanvas;
use navgauge::{InstrumentWidget, MajorMode, TickConfig, build_tick_angles, compute_sweep, parse_props};
use tracing_subscriber::EnvFilter;

const PROPS: &str = r#"
cluster = "speed"
kind = "sogRadial"
sog = 7.4
caption_sogRadial = "SOG"
unit_sogRadial = "kn"
speedMin = 0
speedMax = 12
speedTickMajor = 2
speedTickMinor = 0.5
speedWarningEnabled = true
speedWarningFrom = 9
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let sweep = compute_sweep(-120.0, 120.0);
    println!("sweep {:.0}° direction {:+.0}", sweep.sweep, sweep.direction);

    let config = TickConfig::sweep(-120.0, 120.0)
        .steps(40.0, 10.0)
        .include_end(true)
        .major_mode(MajorMode::Relative);
    let ticks = build_tick_angles(&config);
    println!("majors: {:?}", ticks.majors);
    println!("minors: {} ticks", ticks.minors.len());

    let props = match parse_props(PROPS) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };
    let mut widget = InstrumentWidget::builtin();
    let mut canvas = RecordingCanvas::new(240.0, 240.0);
    let instruction = widget.update(&mut canvas, &props);
    println!("\n=== Instruction ===\n{instruction}");
    println!("=== Canvas ({} commands) ===", canvas.commands().len());
    print!("{}", canvas.transcript());
    println!("labels: {:?}", canvas.texts_with_role(navgauge::render::TextRole::Label));

    let report = widget.finalize();
    println!("\nteardown: {} hooks, clean = {}", report.attempted, report.is_clean());
}
