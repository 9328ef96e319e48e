use anyhow::Context;
use inventory_views::shared::config;
use inventory_views::shared::data::db;
use inventory_views::system;
use inventory_views::views::{self, ViewCatalog, ViewPhase};

const USAGE: &str = "\
Usage: inventory-views <command> [options]

Commands:
  create [--keep-existing] [VIEW ...]   Create all or the named views
  drop [VIEW ...]                       Drop all or the named views
  list [--json]                         List the view catalog
  show VIEW                             Print the CREATE statement of a view

The database path and default view options come from config.toml
(next to the executable, or INVENTORY_VIEWS_CONFIG).";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Create {
        keep_existing: bool,
        names: Vec<String>,
    },
    Drop {
        names: Vec<String>,
    },
    List {
        json: bool,
    },
    Show {
        name: String,
    },
    Help,
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let (flags, names): (Vec<&String>, Vec<&String>) =
        rest.iter().partition(|a| a.starts_with("--"));
    let names: Vec<String> = names.into_iter().cloned().collect();

    let allow_flags = |allowed: &[&str]| -> anyhow::Result<()> {
        match flags.iter().find(|f| !allowed.contains(&f.as_str())) {
            Some(flag) => anyhow::bail!("unexpected option '{}' for '{}'", flag, command),
            None => Ok(()),
        }
    };

    match command.as_str() {
        "create" => {
            allow_flags(&["--keep-existing"])?;
            Ok(Command::Create {
                keep_existing: !flags.is_empty(),
                names,
            })
        }
        "drop" => {
            allow_flags(&[])?;
            Ok(Command::Drop { names })
        }
        "list" => {
            allow_flags(&["--json"])?;
            if !names.is_empty() {
                anyhow::bail!("'list' takes no view names");
            }
            Ok(Command::List {
                json: !flags.is_empty(),
            })
        }
        "show" => {
            allow_flags(&[])?;
            match names.as_slice() {
                [name] => Ok(Command::Show { name: name.clone() }),
                _ => anyhow::bail!("'show' takes exactly one view name"),
            }
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => anyhow::bail!("unknown command '{}'\n\n{}", other, USAGE),
    }
}

fn print_catalog(catalog: &ViewCatalog, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.infos())?);
        return Ok(());
    }

    let width = catalog.names().iter().map(|n| n.len()).max().unwrap_or(0);
    for phase in ViewPhase::ALL {
        println!("{}", phase);
        for def in catalog.phase(phase) {
            println!("  {:<width$}  {}", def.name, def.description, width = width);
        }
        println!();
    }
    Ok(())
}

fn non_empty(names: Vec<String>) -> Option<Vec<String>> {
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let catalog = ViewCatalog::new();

    match command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::List { json } => print_catalog(&catalog, json),
        Command::Show { name } => {
            println!("{}", catalog.sql_for(&name)?);
            Ok(())
        }
        Command::Create {
            keep_existing,
            names,
        } => {
            system::tracing::initialize()?;
            let cfg = config::load_config()?;

            let mut options = cfg.views.clone();
            if let Some(only) = non_empty(names) {
                options.only = Some(only);
            }
            if keep_existing {
                options.drop_existing = false;
            }

            let db_path = config::get_database_path(&cfg);
            let conn = db::connect(&db_path)
                .await
                .with_context(|| format!("cannot open database {}", db_path.display()))?;

            views::create_views(&conn, &catalog, &options).await?;
            Ok(())
        }
        Command::Drop { names } => {
            system::tracing::initialize()?;
            let cfg = config::load_config()?;

            let db_path = config::get_database_path(&cfg);
            let conn = db::connect(&db_path)
                .await
                .with_context(|| format!("cannot open database {}", db_path.display()))?;

            let only = non_empty(names);
            views::drop_views(&conn, &catalog, only.as_deref()).await?;
            Ok(())
        }
    }
}
