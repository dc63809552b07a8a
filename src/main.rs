use clap::Parser;
use colored::Colorize;
use log::{error, info};

use quicktodo::cli::args::{Cli, Commands};
use quicktodo::cli::commands;
use quicktodo::config::{Config, Paths};
use quicktodo::core::local_today;
use quicktodo::error::TodoError;
use quicktodo::logging::init_logging;
use quicktodo::tasks::TaskStore;

fn main() {
    if let Err(e) = run() {
        error!("event=command status=error error={e}");
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), TodoError> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.home.clone())?;
    let config = Config::load(&paths)?;

    config.general.color.apply();

    if config.logging.enabled {
        let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
        if let Err(e) = init_logging(level, &paths.logs) {
            eprintln!("{}: logging disabled: {e}", "warning".yellow().bold());
        }
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let today = local_today();

    let output = match cli.command {
        None if cli.words.is_empty() => {
            let store = TaskStore::open(&paths)?;
            commands::list_open(&store, format, today)?
        },
        None => {
            let mut store = TaskStore::open(&paths)?;
            commands::quick_add(&mut store, &cli.words.join(" "), None, format, today)?
        },
        Some(Commands::Add(args)) => {
            let text = args.words.join(" ");
            if args.parse_only {
                commands::parse_only(&text, format, today)?
            } else {
                let mut store = TaskStore::open(&paths)?;
                commands::quick_add(&mut store, &text, args.description, format, today)?
            }
        },
        Some(Commands::List(args)) => {
            let store = TaskStore::open(&paths)?;
            commands::list(&store, &args, format, today)?
        },
        Some(Commands::Done { ids }) => {
            let mut store = TaskStore::open(&paths)?;
            commands::done(&mut store, &ids, format)?
        },
        Some(Commands::Show { id }) => {
            let store = TaskStore::open(&paths)?;
            commands::show(&store, id, format, today)?
        },
        Some(Commands::Config(args)) => commands::config(&args.command, &config, &paths, format)?,
        Some(Commands::Completions { shell }) => commands::generate_completions(shell)?,
    };

    info!("event=command status=ok");
    if !output.is_empty() {
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
