//! Feed an anchor widget a drifting distance and watch it repaint.
//!
//! `RUST_LOG=navgauge=debug cargo run --example anchor_watch --features tracing`

use navgauge::render::RecordingCanvas;
use navgauge::{InstrumentWidget, RawProps, Value, parse_props_named};
use tracing_subscriber::EnvFilter;

const SETTINGS: &str = r#"
# anchor watch widget
cluster = "anchor"
kind = "distance"
caption_distance = "ANCHOR"
unit_distance = "m"
anchorWatch = 40
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = match parse_props_named("anchor_watch.props", SETTINGS) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    let mut widget = InstrumentWidget::builtin();
    let mut canvas = RecordingCanvas::new(160.0, 80.0);
    for distance in [12.0, 18.5, 27.25, 41.0, f64::NAN] {
        let props = settings_with(&settings, "anchorDistance", distance);
        canvas.reset();
        widget.update(&mut canvas, &props);
        let alarm = distance > settings.number("anchorWatch").unwrap_or(f64::INFINITY);
        println!("{:>8} -> {:?}{}", distance, canvas.texts(), if alarm { "  DRAGGING" } else { "" });
    }

    // the same widget with an unknown kind paints nothing
    let bogus = settings_with(&settings, "kind", "bogus");
    canvas.reset();
    widget.update(&mut canvas, &bogus);
    println!("bogus kind -> {:?}", canvas.texts());

    widget.finalize();
}

fn settings_with(settings: &RawProps, key: &str, value: impl Into<Value>) -> RawProps {
    let mut props = settings.clone();
    props.insert(key, value);
    props
}
