use clap::{Parser, Subcommand};
use scenario_pipeline::config::Config;
use scenario_pipeline::error::Result;
use scenario_pipeline::import::ScenarioImporter;
use scenario_pipeline::tables;
use scenario_pipeline::voice::{SpeakerTable, VoiceGenerator};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "scenario-pipeline")]
#[command(about = "Scenario import and VOICEVOX voice generation for narrated videos", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert config/scenario.csv into config/script.yaml and config/scenes.yaml
    Import,
    /// Synthesize one voice file per script line and write durations.json
    Voices,
    /// Validate the static script tables and print them as renderer JSON
    Tables,
    /// Print VOICEVOX synthesis jobs for the static script tables
    Jobs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    let args = Args::parse();

    // 所有路径都相对当前工作目录
    let config = Config::from_root(std::env::current_dir()?);
    info!("Working directory: {}", config.root.display());

    if let Err(e) = run(args.command, config).await {
        error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Import => {
            ScenarioImporter::new(config).run().await?;
        }
        Command::Voices => {
            let generator = VoiceGenerator::new(config, SpeakerTable::builtin())?;
            let report = generator.run().await?;
            info!(
                "Generated {} voices ({} skipped, {} failed)",
                report.clips.len(),
                report.skipped.len(),
                report.failed.len()
            );
            if !report.failed.is_empty() {
                warn!("Failed voices: {}", report.failed.join(", "));
            }
        }
        Command::Tables => {
            println!("{}", tables::render_json()?);
        }
        Command::Jobs => {
            let jobs = tables::voice_jobs(tables::SCRIPT, &SpeakerTable::builtin());
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
    }
    Ok(())
}
