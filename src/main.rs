mod cli;

use thpforge::{pipeline, probe};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use thp_av::ToolRegistry;
use thp_core::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "thpforge=trace,thp_av=trace,thp_core=debug".to_string()
        } else {
            "thpforge=info,thp_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Convert { input, output } => {
            convert_file(&input, output, cli.config.as_deref())
        }
        Commands::Probe { file, json } => probe_file(&file, json, cli.config.as_deref()),
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Version => {
            println!("thpforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Config {
    let config = Config::load_or_default(config_path);
    for warning in config.validate() {
        tracing::warn!("{warning}");
    }
    config
}

fn convert_file(
    input: &Path,
    output: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path);

    // Verify input file exists
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let output = output.unwrap_or_else(|| PathBuf::from(&config.conversion.default_output));
    let tools = ToolRegistry::discover(&config.tools);

    println!("Converting video...");
    println!("Note: this process may take some time.\n");

    let converter = pipeline::Converter::new(config.conversion.clone(), tools);
    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(converter.convert(input, &output))?;

    println!("\nConversion complete!");
    println!("Output: {}", report.output.display());
    println!("Resolution: {}", report.resolution);
    println!("Frames: {}", report.frame_count);

    Ok(())
}

fn probe_file(file: &Path, json: bool, config_path: Option<&Path>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let config = load_config(config_path);
    let tools = ToolRegistry::discover(&config.tools);

    let rt = tokio::runtime::Runtime::new()?;
    let media_info = rt.block_on(probe::probe_file(file, &tools))?;

    if json {
        let json_str = serde_json::to_string_pretty(&media_info)?;
        println!("{}", json_str);
    } else {
        println!("File: {}", media_info.file_path.display());
        if let Some(ref duration) = media_info.duration {
            let secs = duration.as_secs();
            let mins = secs / 60;
            println!("Duration: {:02}:{:02}:{:02}", mins / 60, mins % 60, secs % 60);
        }

        println!("\nVideo Tracks: {}", media_info.video_tracks.len());
        for (i, track) in media_info.video_tracks.iter().enumerate() {
            print!("  [{}] {} {}x{}", i, track.codec, track.width, track.height);
            if let Some(fps) = track.frame_rate {
                print!(", {:.3} fps", fps);
            }
            if track.default {
                print!(" [default]");
            }
            println!();
        }

        println!("\nAudio Tracks: {}", media_info.audio_tracks.len());
        for (i, track) in media_info.audio_tracks.iter().enumerate() {
            print!("  [{}] {} {}ch", i, track.codec, track.channels);
            if let Some(rate) = track.sample_rate {
                print!(", {} Hz", rate);
            }
            if track.default {
                print!(" [default]");
            }
            println!();
        }
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    println!("Checking external tools...\n");

    let config = load_config(config_path);
    let tools = ToolRegistry::discover(&config.tools);

    let infos = probe::check_tools(&tools);
    let mut all_ok = true;

    for tool in &infos {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them to enable conversion.");
    }

    Ok(())
}
