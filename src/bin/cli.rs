//! rosterview CLI
//!
//! A thin presentation adapter over the listing core: renders one page of the
//! roster as a text table. All list logic lives in the library; this binary
//! only translates arguments into actions and prints the derived view.

use clap::{Parser, Subcommand};
use time::macros::format_description;
use tracing_subscriber::EnvFilter;

use rosterview::store::FileStore;
use rosterview::{Config, DerivedView, ListController, Result, SortColumn, SortDirection};

/// rosterview CLI
#[derive(Parser, Debug)]
#[command(name = "rosterview")]
#[command(about = "Searchable, sortable, paginated user listing")]
#[command(version = rosterview::VERSION)]
struct Args {
    /// Data directory for persisted rosters
    #[arg(short, long, default_value = "./rosterview_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of the roster
    List {
        /// Free-text search over first name, last name and email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort column: firstName, lastName, email or registrationDate
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();
    let kv = FileStore::open(&config.data_dir)?;
    let mut controller = ListController::open(config, kv)?;

    match args.command {
        Commands::List {
            search,
            sort,
            desc,
            page,
            page_size,
        } => {
            controller.set_page_size(page_size);
            controller.search(&search);
            if let Some(name) = sort.as_deref() {
                if let Some(column) = SortColumn::parse(name) {
                    let direction = if desc {
                        SortDirection::Descending
                    } else {
                        SortDirection::Ascending
                    };
                    controller.set_sort(column, direction);
                } else {
                    eprintln!("note: `{name}` is not a sortable column, keeping default order");
                }
            }
            let view = controller.go_to_page(page);
            render(&view, page_size);
        }
    }

    Ok(())
}

fn render(view: &DerivedView, page_size: usize) {
    if view.rows.is_empty() {
        println!("No users found.");
        return;
    }

    // Calendar-date precision only for the display column
    let date_format = format_description!("[year]-[month]-[day]");
    let offset = (view.current_page - 1) * page_size;

    println!(
        "{:>4}  {:<14} {:<14} {:<34} {}",
        "#", "First name", "Last name", "Email", "Registered"
    );
    for (i, row) in view.rows.iter().enumerate() {
        let date = row
            .registration_date
            .date()
            .format(date_format)
            .unwrap_or_else(|_| row.registration_date.date().to_string());
        println!(
            "{:>4}  {:<14} {:<14} {:<34} {}",
            offset + i + 1,
            row.first_name,
            row.last_name,
            row.email,
            date
        );
    }

    println!();
    println!("Found users: {}", view.filtered_count);
    println!("Page {} of {}", view.current_page, view.page_count);
}
