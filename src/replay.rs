use anyhow::{Context, Result};
use dsvis::script::{self, Pacing};
use dsvis::{Command, Controller, ListController, ListKind, Node, TraversalController, TreeController, VisualizerConfig};
use serde::Serialize;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StructureArg {
    Singly,
    Doubly,
    Tree,
    Traversal,
}

impl std::str::FromStr for StructureArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "singly" => Ok(StructureArg::Singly),
            "doubly" => Ok(StructureArg::Doubly),
            "tree" => Ok(StructureArg::Tree),
            "traversal" => Ok(StructureArg::Traversal),
            other => anyhow::bail!("unknown structure '{other}' (expected singly, doubly, tree or traversal)"),
        }
    }
}

struct Config {
    structure: StructureArg,
    delay_ms: Option<u64>,
    speed: f32,
    gap_ms: Option<u64>,
    json: bool,
    quiet: bool,
    commands: Vec<Command>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            structure: StructureArg::Singly,
            delay_ms: None,
            speed: 1.0,
            gap_ms: None,
            json: false,
            quiet: false,
            commands: Vec::new(),
        }
    }
}

/// Final state printed after the script ran.
#[derive(Serialize)]
struct Summary<'a> {
    structure: &'static str,
    clock_ms: u64,
    nodes: &'a [Node],
    finished_sequences: usize,
    rejected: Vec<String>,
    path_log: Vec<&'a str>,
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-structure" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-structure requires an argument");
                }
                config.structure = args[i].parse()?;
            }
            "-delay" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-delay requires a duration in milliseconds");
                }
                config.delay_ms = Some(args[i].parse().context("-delay expects milliseconds")?);
            }
            "-speed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-speed requires a factor");
                }
                config.speed = args[i].parse().context("-speed expects a number")?;
            }
            "-gap" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-gap requires a duration in milliseconds");
                }
                config.gap_ms = Some(args[i].parse().context("-gap expects milliseconds")?);
            }
            "-json" => {
                config.json = true;
            }
            "-quiet" => {
                config.quiet = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                eprintln!("Warning: Unknown argument: {}", flag);
            }
            command => {
                let command: Command = command
                    .parse()
                    .with_context(|| format!("argument {i} is not a command"))?;
                config.commands.push(command);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Data structure animation replay");
    println!("Usage: dsvis-replay [OPTIONS] COMMAND...");
    println!();
    println!("OPTIONS:");
    println!("  -structure <NAME>      singly, doubly, tree or traversal (default: singly)");
    println!("  -delay <MS>            Delay between traversal highlights (default: 1000)");
    println!("  -speed <F>             Multiply list and tree animation durations by F (default: 1)");
    println!("  -gap <MS>              Apply command i at i*MS instead of waiting for idle");
    println!("  -json                  Print the final state as JSON");
    println!("  -quiet                 Do not print individual effects");
    println!("  -h, -help, --help      Show this help message");
    println!();
    println!("COMMANDS:");
    println!("  add-end, remove-end, add-after:<ID>, remove:<ID>, clear,");
    println!("  preorder, inorder, postorder, levelorder");
}

fn build_controller(config: &Config) -> Box<dyn Controller> {
    let mut cfg = VisualizerConfig::default().with_speed(config.speed);
    if let Some(delay) = config.delay_ms {
        cfg.traversal_delay_ms = delay;
    }
    let cfg = cfg.sanitized();

    match config.structure {
        StructureArg::Singly => Box::new(ListController::new(ListKind::Singly, cfg)),
        StructureArg::Doubly => Box::new(ListController::new(ListKind::Doubly, cfg)),
        StructureArg::Tree => Box::new(TreeController::new(cfg)),
        StructureArg::Traversal => Box::new(TraversalController::new(cfg)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = parse_args()?;
    if config.commands.is_empty() {
        print_help();
        anyhow::bail!("no commands given");
    }

    let mut controller = build_controller(&config);
    let pacing = config.gap_ms.map_or(Pacing::UntilIdle, Pacing::Every);
    let transcript = script::run(controller.as_mut(), &config.commands, pacing)?;

    if !config.quiet && !config.json {
        for entry in &transcript.entries {
            println!("{entry}");
        }
    }

    let summary = Summary {
        structure: controller.name(),
        clock_ms: transcript.clock_ms,
        nodes: controller.model_nodes(),
        finished_sequences: transcript.finished_count(),
        rejected: transcript
            .rejected()
            .map(|(command, error)| format!("{command}: {error}"))
            .collect(),
        path_log: transcript.log_lines(),
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let ids: Vec<String> = summary.nodes.iter().map(|n| n.id.to_string()).collect();
        println!(
            "{} after {} ms: [{}] ({} sequences, {} rejected)",
            summary.structure,
            summary.clock_ms,
            ids.join(", "),
            summary.finished_sequences,
            summary.rejected.len()
        );
    }

    Ok(())
}
