// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Netweave CLI entrypoint.
//!
//! Each invocation builds the app context from configuration, optionally auto-loads a project,
//! runs one command against the workspace, applies visual mappings, and can export SVG.

use std::error::Error;
use std::path::{Path, PathBuf};

use netweave::app::{App, DEFAULT_SVG_FILE};
use netweave::config::Config;
use netweave::render::{Easing, LayoutName};
use netweave::samples::SAMPLES;
use netweave::style::Channel;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [options] import <file.graphml|file.gexf>\n  {program} [options] sample <key>\n  {program} [options] samples\n  {program} [options] list\n  {program} [options] save <name> [<file>]\n  {program} [options] load <id>\n  {program} [options] delete <id>\n\nOptions:\n  --color <attr>    map node color from an attribute\n  --size <attr>     map node size from a numeric attribute\n  --label <attr>    map node labels from an attribute\n  --layout <name>   grid, random, circle, concentric, breadthfirst, cose, preset\n  --easing <name>   linear, ease, ease-in, ease-out, ease-in-out\n  --svg [<path>]    write the rendered view as SVG (default {DEFAULT_SVG_FILE})\n  --id <id>         save updates this project instead of creating one\n  --project <id>    try to load this project first (failures are only logged)\n  --config <path>   configuration file (default netweave.toml)\n\nWithout a command the seed graph is rendered.\nLog verbosity follows RUST_LOG (default netweave=info)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Import(String),
    Sample(String),
    Samples,
    List,
    Save { name: String, file: Option<String> },
    Load(String),
    Delete(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Option<Command>,
    color: Option<String>,
    size: Option<String>,
    label: Option<String>,
    layout: Option<String>,
    easing: Option<String>,
    svg: Option<String>,
    project_id: Option<String>,
    auto_load: Option<String>,
    config: Option<String>,
}

fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value.ok_or(())?);
    Ok(())
}

fn parse_command(mut words: Vec<String>) -> Result<Option<Command>, ()> {
    if words.is_empty() {
        return Ok(None);
    }
    let verb = words.remove(0);
    let mut words = words.into_iter();
    let mut next = || words.next().ok_or(());

    let command = match verb.as_str() {
        "import" => Command::Import(next()?),
        "sample" => Command::Sample(next()?),
        "samples" => Command::Samples,
        "list" => Command::List,
        "save" => {
            let name = next()?;
            let file = next().ok();
            Command::Save { name, file }
        }
        "load" => Command::Load(next()?),
        "delete" => Command::Delete(next()?),
        _ => return Err(()),
    };
    if words.next().is_some() {
        return Err(());
    }
    Ok(Some(command))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut words = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--color" => set_once(&mut options.color, args.next())?,
            "--size" => set_once(&mut options.size, args.next())?,
            "--label" => set_once(&mut options.label, args.next())?,
            "--layout" => set_once(&mut options.layout, args.next())?,
            "--easing" => set_once(&mut options.easing, args.next())?,
            "--id" => set_once(&mut options.project_id, args.next())?,
            "--project" => set_once(&mut options.auto_load, args.next())?,
            "--config" => set_once(&mut options.config, args.next())?,
            "--svg" => set_once(&mut options.svg, Some(DEFAULT_SVG_FILE.to_owned()))?,
            _ if arg.starts_with("--svg=") => {
                set_once(&mut options.svg, Some(arg["--svg=".len()..].to_owned()))?;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => words.push(arg),
        }
    }

    options.command = parse_command(words)?;

    let saving = matches!(options.command, Some(Command::Save { .. }));
    if options.project_id.is_some() && !saving {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("netweave=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(app: &mut App, options: &CliOptions) -> Result<(), Box<dyn Error>> {
    if let Some(project_id) = &options.auto_load {
        app.auto_load(project_id).await;
    }

    if let Some(layout) = &options.layout {
        app.set_layout(layout.parse::<LayoutName>()?)?;
    }
    if let Some(easing) = &options.easing {
        app.set_easing(easing.parse::<Easing>()?)?;
    }

    match &options.command {
        None | Some(Command::Save { file: None, .. }) => {}
        Some(Command::Import(path) | Command::Save { file: Some(path), .. }) => {
            app.import_file(Path::new(path))?;
        }
        Some(Command::Sample(key)) => app.load_sample(key)?,
        Some(Command::Samples) => {
            for sample in SAMPLES {
                println!("{}\t{}\t{}", sample.key, sample.file_name, sample.title);
            }
            return Ok(());
        }
        Some(Command::List) => {
            for entry in app.list().await? {
                let summary = entry.summary;
                println!(
                    "{}\t{}\t{}",
                    summary.project_id,
                    summary.name,
                    summary.timestamp().unwrap_or("-")
                );
            }
            return Ok(());
        }
        Some(Command::Load(project_id)) => app.load(project_id).await?,
        Some(Command::Delete(project_id)) => {
            app.delete(project_id).await?;
            println!("deleted {project_id}");
            return Ok(());
        }
    }

    for (channel, key) in [
        (Channel::Color, &options.color),
        (Channel::Size, &options.size),
        (Channel::Label, &options.label),
    ] {
        if let Some(key) = key {
            app.select(channel, Some(key.as_str()))?;
        }
    }

    if let Some(Command::Save { name, .. }) = &options.command {
        if let Some(project_id) = &options.project_id {
            app.resume(project_id)?;
        }
        let project_id = app.save(name).await?;
        println!("{project_id}");
    }

    if let Some(path) = &options.svg {
        app.write_svg(Path::new(path))?;
    }

    let document = app.workspace().document();
    tracing::info!(
        nodes = document.nodes().len(),
        edges = document.edges().len(),
        attributes = app.workspace().registry().len(),
        "done"
    );
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "netweave".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let config_path = options.config.as_deref().map(PathBuf::from);
        let config = Config::load(config_path.as_deref())?.with_env_overrides()?;
        let mut app = App::from_config(config)?;

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(&mut app, &options))
    })();

    if let Err(err) = result {
        eprintln!("netweave: {err}");
        std::process::exit(1);
    }
}
