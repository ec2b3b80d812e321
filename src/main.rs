use anyhow::{bail, Context, Result};
use pet_adoption::{render, Catalog, Config, Route, Screen};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env();
    config.init_tracing("warn");

    let catalog = config
        .load_catalog()
        .context("failed to load pet catalog")?;

    match args.get(1).map(String::as_str) {
        Some("list") => print_screen(&render(&Route::Overview, &catalog)),
        Some("show") => {
            let raw_id = args.get(2).context("usage: pets show <id>")?;
            let route = Route::parse(&format!("/pet/{}", raw_id))?;
            let screen = render(&route, &catalog);
            print_screen(&screen);
            if screen.is_not_found() {
                std::process::exit(1);
            }
        }
        // A route path opens the TUI on that screen, e.g. `pets /pet/1`
        Some(path) if path.starts_with('/') => run_ui_mode(catalog, Route::parse(path)?)?,
        Some(other) => bail!("unknown command: {}", other),
        None => run_ui_mode(catalog, Route::Overview)?,
    }

    Ok(())
}

fn print_screen(screen: &Screen) {
    match screen {
        Screen::Overview { rows } => {
            for row in rows {
                println!(
                    "{:>3}  {}  {:<12} {:<16} {}",
                    row.id, row.icon, row.name, row.species, row.gender
                );
            }
        }
        Screen::Detail(detail) => {
            println!("{}  {} (#{})", detail.icon, detail.name, detail.id);
            println!("Species: {}", detail.species);
            if let Some(breed) = &detail.breed {
                println!("Breed:   {}", breed);
            }
            println!("Gender:  {}", detail.gender);
            println!("Born:    {}", detail.year_of_birth);
            println!();
            println!("{}", detail.history);
        }
        Screen::NotFound { pet_id } => eprintln!("❌ Pet #{} not found", pet_id),
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(catalog: Catalog, route: Route) -> Result<()> {
    tracing::info!(pets = catalog.len(), %route, "starting TUI");

    let mut app = pet_adoption::ui::App::at(std::sync::Arc::new(catalog), route);
    pet_adoption::ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_catalog: Catalog, _route: Route) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin pets-server --features server");
    std::process::exit(1);
}
