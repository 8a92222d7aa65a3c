use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use pcb_pack::config::{OutputSpec, PlaceConfig};
use pcb_pack::engine::run_with_stream;
use pcb_pack::error::{PlaceError, PlaceResult};
use pcb_pack::streaming::StreamEmitter;
use pcb_pack::{export, svg};

#[derive(Parser)]
#[command(name = "pcb-pack", version, about = "Constraint-driven board placement")]
struct Cli {
    #[arg(short, long)]
    config: PathBuf,
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    format: Option<String>,
    /// Emit NDJSON progress events to stderr.
    #[arg(long)]
    events: bool,
}

fn main() -> Result<(), String> {
    if let Err(err) = run_cli() {
        return Err(err.to_string());
    }
    Ok(())
}

fn run_cli() -> PlaceResult<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;
    let output = if let Some(path) = cli.output {
        Some(OutputSpec {
            path: path.to_string_lossy().to_string(),
            format: cli.format.unwrap_or_else(|| "layout".to_string()),
        })
    } else {
        cfg.output.clone()
    };
    let result = run_with_stream(&cfg, StreamEmitter::new(cli.events))?;
    for rec in &result.unplaced {
        eprintln!(
            "unplaced: {} (input {}): {}",
            rec.kind.label(),
            rec.input_index,
            rec.cause.as_str()
        );
    }
    if let Some(spec) = output {
        let path = Path::new(&spec.path);
        match spec.format.as_str() {
            "svg" => svg::write_svg(&result, path)?,
            _ => export::write_layout(&result, path)?,
        }
    } else {
        print!("{}", export::layout_lines(&result));
    }
    Ok(())
}

fn load_config(path: &PathBuf) -> PlaceResult<PlaceConfig> {
    let content = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext == "yaml" || ext == "yml" {
        serde_yaml::from_str(&content)
            .map_err(|e| PlaceError::Parse(format!("yaml parse error: {e}")))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| PlaceError::Parse(format!("json parse error: {e}")))
    }
}
