mod colorbar;
mod load;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use huemap_engine::logging::{LoggingConfig, init_logging};
use huemap_engine::{Colormap, Event, EventBus, Observer, Preset};

/// Build a colormap, then print samples and/or export a colorbar.
///
/// Steps run in this order: base map (preset, file, or empty), `--add`,
/// `--resolution`, `--rescale`.
#[derive(Debug, Parser)]
#[command(name = "huemap-studio", version)]
struct Args {
    /// Start from a built-in colormap (grey, hot, ice_and_fire).
    #[arg(long, conflicts_with = "file")]
    preset: Option<Preset>,

    /// Start from a `.cmap` definition file.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Add a control point, e.g. `--add 0.5:1,0,0` or `--add=-1:0,0,1,0.5`.
    #[arg(long = "add", value_name = "VALUE:R,G,B[,A]", allow_hyphen_values = true)]
    add: Vec<String>,

    /// Number of cache buckets.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    resolution: Option<u32>,

    /// Remap the domain onto [MIN, MAX].
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    rescale: Option<Vec<f32>>,

    /// Print this many evenly spaced lookups (0 to skip).
    #[arg(long, default_value_t = 11)]
    samples: usize,

    /// Write a horizontal colorbar PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Log filter in `env_logger` syntax (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..Default::default() });

    let map = build(&args)?;

    let mut bus: EventBus<Colormap> = EventBus::new();
    bus.attach(Rc::new(|e: &Event<'_, Colormap>| {
        let (inf, sup) = e.subject.bounds();
        log::info!(
            "colormap ready: {} control point(s) over [{}, {}], {} buckets",
            e.subject.len(),
            inf,
            sup,
            e.subject.resolution()
        );
    }));
    if args.samples > 0 {
        let table: Rc<dyn Observer<Colormap>> = Rc::new(SampleTable { rows: args.samples });
        bus.attach(table);
    }
    bus.notify(&map);

    if let Some(path) = &args.png {
        colorbar::write_png(&map, args.width, args.height, path)?;
    }
    Ok(())
}

fn build(args: &Args) -> Result<Colormap> {
    let mut map = match (&args.preset, &args.file) {
        (Some(preset), _) => preset.build(),
        (None, Some(path)) => load::from_file(path)?,
        (None, None) => Colormap::new(),
    };

    for arg in &args.add {
        let (value, channels) = load::split_add_arg(arg)?;
        // Malformed channels are logged by the engine and skipped.
        map.add(value, channels.as_slice());
    }

    if let Some(n) = args.resolution {
        map.set_resolution(n as usize)?;
    }

    if let Some(bounds) = &args.rescale {
        if let [min, max] = bounds.as_slice() {
            map.rescale(*min, *max).context("--rescale")?;
        }
    }

    Ok(map)
}

/// Prints the control points and a table of cached lookups to stdout.
struct SampleTable {
    rows: usize,
}

impl Observer<Colormap> for SampleTable {
    fn on_event(&self, event: &Event<'_, Colormap>) {
        let map = event.subject;

        println!("{}", map);
        println!();
        println!("  {:>12}   {:>6} {:>6} {:>6} {:>6}   hex", "value", "r", "g", "b", "a");
        for i in 0..self.rows {
            let t = if self.rows > 1 { i as f32 / (self.rows - 1) as f32 } else { 0.0 };
            let value = map.position(t);
            let [r, g, b, a] = map.rgba(value);
            println!(
                "  {:>12.4}   {:>6.3} {:>6.3} {:>6.3} {:>6.3}   #{:02x}{:02x}{:02x}{:02x}",
                value,
                r,
                g,
                b,
                a,
                colorbar::to_u8(r),
                colorbar::to_u8(g),
                colorbar::to_u8(b),
                colorbar::to_u8(a),
            );
        }
    }
}
