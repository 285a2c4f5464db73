use anyhow::Context;
use chcore::station::RadarStation;
use clap::Parser;
use display::console::ConsolePresenter;
use display::model::ScopeFrame;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::RunConfig;
use workflow::runner::{GoniometerPan, Runner, RunSummary};

mod display;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Chain Home RDF station driver")]
struct Args {
    /// Run a scripted pass in simulated time and emit a summary report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a run config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 30.0)]
    duration_s: f32,
    /// Initial goniometer bearing in degrees
    #[arg(long, default_value_t = 160.0)]
    goniometer: f32,
    /// Drive the station on real timers until Ctrl+C
    #[arg(long, default_value_t = false)]
    live: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let run_config = if let Some(path) = args.config {
        RunConfig::load(path)?
    } else {
        RunConfig::from_args(args.seed, args.duration_s, args.goniometer)
    };

    let presenter = ConsolePresenter::new(64);

    if args.offline {
        let runner = Runner::new(run_config.clone());
        let summary = runner.execute()?;

        println!(
            "Offline run -> sweeps {}, spawned {}, retired {}, peak deflection {:.1}",
            summary.sweeps_completed, summary.spawned, summary.retired, summary.peak_deflection
        );
        let frame =
            ScopeFrame::from_snapshot(&summary.final_snapshot, &summary.final_snapshot.trace);
        presenter.publish(&frame);
        presenter.publish_status("Offline run complete.");

        write_report(&summary)?;
    }

    if args.live {
        presenter.publish_status("Station live (Ctrl+C to shut down)...");
        run_live(run_config, presenter)?;
    }

    Ok(())
}

fn write_report(summary: &RunSummary) -> anyhow::Result<()> {
    let report = format!(
        "sweeps={} spawned={} retired={} trace_rms={:.3} contacts={}\n",
        summary.sweeps_completed,
        summary.spawned,
        summary.retired,
        summary.trace_rms,
        summary.final_snapshot.contacts.len()
    );
    let report_path = PathBuf::from("tools/data/offline_station.log");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&report_path)
        .with_context(|| format!("opening report {}", report_path.display()))?;
    file.write_all(report.as_bytes())?;

    let snapshot_path = PathBuf::from("tools/data/last_snapshot.json");
    let encoded = serde_json::to_string_pretty(&summary.final_snapshot)
        .context("encoding final snapshot")?;
    fs::write(&snapshot_path, encoded)
        .with_context(|| format!("writing snapshot {}", snapshot_path.display()))?;
    Ok(())
}

fn run_live(config: RunConfig, presenter: ConsolePresenter) -> anyhow::Result<()> {
    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating live runtime")?;

    runtime.block_on(async move {
        let mut station =
            RadarStation::new(config.station.clone(), config.seed).context("building station")?;
        station.power_on();
        station.set_goniometer(config.goniometer_deg);

        let motion_period = Duration::from_millis(config.motion_tick_ms);
        let sweep_period = Duration::from_millis(config.sweep_tick_ms);
        let mut motion_timer = tokio::time::interval(motion_period);
        let mut sweep_timer = tokio::time::interval(sweep_period);
        let mut frame_timer = tokio::time::interval(Duration::from_millis(500));
        let mut pan = GoniometerPan::new(config.pan_rate_deg_s);

        loop {
            tokio::select! {
                _ = motion_timer.tick() => {
                    station.motion_tick(motion_period.as_secs_f32());
                }
                _ = sweep_timer.tick() => {
                    if pan.is_active() {
                        let next = pan.step(
                            station.goniometer_deg(),
                            sweep_period.as_secs_f32(),
                            &config.station.sector,
                        );
                        station.set_goniometer(next);
                    }
                    station.sweep_tick(sweep_period.as_secs_f32());
                }
                _ = frame_timer.tick() => {
                    let trace = station.render_trace();
                    let frame = ScopeFrame::from_snapshot(&station.snapshot(), &trace.samples);
                    presenter.publish(&frame);
                }
                _ = signal::ctrl_c() => {
                    station.power_off();
                    presenter.publish_status("Shutdown: station powered off.");
                    break;
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}
