use bodylog::application::{
    init, ConfigService, ListEntriesService, PartsService, SaveEntryService, SuggestService,
};
use bodylog::cli::{format_entry_list, format_part_list, Cli, Commands};
use bodylog::domain::PainScore;
use bodylog::error::BodylogError;
use bodylog::infrastructure::FileSystemRepository;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BodylogError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("videos_file = {}", config.videos_file);
                println!("journal_file = {}", config.journal_file);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: bodylog config [--list | <key> [<value>]]");
                println!("Valid keys: videos_file, journal_file, created");
                Ok(())
            }
        }
        Some(Commands::Parts) => {
            let repo = FileSystemRepository::discover()?;
            let mut service = PartsService::new(repo)?;
            print!("{}", ensure_newline(format_part_list(&service.execute())));
            Ok(())
        }
        Some(Commands::Suggest { part, reroll }) => {
            let repo = FileSystemRepository::discover()?;
            let mut service = SuggestService::new(repo)?;

            match service.execute(&part, reroll)? {
                Some(url) => println!("{}", url),
                None => println!(
                    "No videos registered for '{}' yet. \
                    Add links under its heading in the catalog file.",
                    part
                ),
            }
            Ok(())
        }
        Some(Commands::Log {
            time_ref,
            part,
            pain,
            note,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = SaveEntryService::new(repo);

            let pain_score = PainScore::new(pain)?;
            let record = service.execute(
                &time_ref,
                part.as_deref(),
                pain_score,
                note.as_deref().unwrap_or(""),
            )?;

            println!("Saved entry for {}", record.date.format("%Y-%m-%d"));
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListEntriesService::new(repo);
            print!("{}", ensure_newline(format_entry_list(&service.execute(limit)?)));
            Ok(())
        }
        None => {
            println!("bodylog - Terminal body-condition journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
