use clap::Parser;
use snapshelf::application::{
    init::init, AddImageService, ConfigService, DeleteImageService, ExportImageService,
    ListImagesService, MoveImageService,
};
use snapshelf::cli::{format_image_list, format_size, Cli, Commands};
use snapshelf::domain::ImageSelector;
use snapshelf::error::ShelfError;
use snapshelf::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn selector(index: Option<usize>, id: Option<String>) -> ImageSelector {
    match id {
        Some(id) => ImageSelector::Id(id),
        None => ImageSelector::Index(index.unwrap_or_default()),
    }
}

fn run(cli: Cli) -> Result<(), ShelfError> {
    match cli.command {
        Commands::Init { path } => {
            let config = init(&path)?;
            println!("Initialized snapshelf at {}", path.display());
            println!("Collection: {}", config.collection);
            Ok(())
        }
        Commands::Add { files } => {
            let repo = FileSystemRepository::discover()?;
            let ids = AddImageService::new(repo).execute(&files)?;
            for id in ids {
                println!("Added {}", id);
            }
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let images = ListImagesService::new(repo).execute()?;
            print!("{}", format_image_list(&images));
            if images.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Delete { index, id } => {
            let repo = FileSystemRepository::discover()?;
            let removed = DeleteImageService::new(repo).execute(&selector(index, id))?;
            println!("Deleted {}", removed.id);
            Ok(())
        }
        Commands::Move { from, to } => {
            let repo = FileSystemRepository::discover()?;
            MoveImageService::new(repo).execute(from, to)?;
            println!("Moved image {} to position {}", from, to);
            Ok(())
        }
        Commands::Export { output, index, id } => {
            let repo = FileSystemRepository::discover()?;
            let record = ExportImageService::new(repo).execute(&selector(index, id), &output)?;
            println!(
                "Exported {} ({}) to {}",
                record.id,
                format_size(record.size()),
                output.display()
            );
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("collection = {}", config.collection);
                println!("durability = {}", config.durability.as_str());
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
                println!("Usage: snapshelf config [--list | <key> [<value>]]");
                println!("Valid keys: collection, durability, created");
                Ok(())
            }
        }
    }
}
