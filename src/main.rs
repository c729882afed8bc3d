use caltrack::application::{init, ConfigService, EntryPatch, EntryRef, TrackerService};
use caltrack::cli::{format_entry_list, format_totals, format_week, Cli, Commands};
use caltrack::domain::{DateReference, EntryDraft};
use caltrack::error::TrackerError;
use caltrack::infrastructure::FileSystemRepository;
use caltrack::logging::init_logging;
use chrono::{Local, NaiveDate};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TrackerError> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => {
            init::init(&path)?;
            println!("Initialized caltrack at {}", path.display());
            Ok(())
        }
        Some(Commands::Add {
            date,
            intake,
            burned,
            description,
        }) => {
            let mut service = open_tracker()?;
            let draft = EntryDraft {
                date,
                calories_intake: intake,
                calories_burned: burned,
                description,
            };
            service.add(&draft, today)?;
            println!("Data added successfully!");
            Ok(())
        }
        Some(Commands::Edit {
            target,
            date,
            intake,
            burned,
            description,
        }) => {
            let mut service = open_tracker()?;
            let patch = EntryPatch {
                date,
                calories_intake: intake,
                calories_burned: burned,
                description,
            };
            service.edit(target.parse::<EntryRef>()?, patch, today)?;
            println!("Entry updated!");
            Ok(())
        }
        Some(Commands::Delete { target }) => {
            let mut service = open_tracker()?;
            service.delete(target.parse::<EntryRef>()?)?;
            println!("Entry deleted!");
            Ok(())
        }
        Some(Commands::List { ids }) => {
            let service = open_tracker()?;
            print!("{}", ensure_newline(format_entry_list(&service.list(), ids)));
            Ok(())
        }
        Some(Commands::Week { today: reference }) => {
            let service = open_tracker()?;
            let reference = resolve_reference(reference.as_deref(), today)?;
            let days = service.config().recent_days;
            print!(
                "{}",
                ensure_newline(format_week(&service.week(reference), days))
            );
            Ok(())
        }
        Some(Commands::Totals) => {
            let service = open_tracker()?;
            print!("{}", format_totals(&service.totals()));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("recent_days = {}", config.recent_days);
                println!("exclude_future = {}", config.exclude_future);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: caltrack config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, recent_days, exclude_future, created");
                Ok(())
            }
        }
        None => {
            println!("caltrack - Terminal calorie tracker");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_tracker() -> Result<TrackerService, TrackerError> {
    let repo = FileSystemRepository::discover()?;
    TrackerService::open(&repo)
}

fn resolve_reference(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate, TrackerError> {
    match input {
        Some(raw) => Ok(DateReference::parse(raw)?.resolve(today)),
        None => Ok(today),
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
