//! InvestMate - Main Entry Point
//!
//! Command-line front end for the investment calculator: derive the
//! missing one of average price / quantity / total price, compute profit,
//! and manage the stored holding list.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use investmate::calculator::{compute_profit, numeric, DerivationEngine, StockCalculator};
use investmate::common::types::{ChangeEvent, FieldId, Holding};
use investmate::config::load_config;
use investmate::stocks::{JsonFileStore, StockStore};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the
    /// configured default
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the missing figure from any two of the three
    Calc {
        /// Average cost basis per unit
        #[arg(long)]
        average: Option<String>,
        /// Units held
        #[arg(long)]
        quantity: Option<String>,
        /// Total position cost
        #[arg(long)]
        total: Option<String>,
    },

    /// Compute profit at a current market price
    Profit {
        /// Seed average price and quantity from this stored holding
        #[arg(long, conflicts_with_all = ["average", "quantity"])]
        symbol: Option<String>,
        /// Average cost basis per unit
        #[arg(long)]
        average: Option<String>,
        /// Units held
        #[arg(long)]
        quantity: Option<String>,
        /// Current market price per unit
        #[arg(long)]
        current: String,
    },

    /// Add a holding to the store
    Add {
        /// Ticker symbol
        symbol: String,
        /// Human-readable name
        #[arg(long, default_value = "")]
        name: String,
        /// Average cost basis per unit
        #[arg(long)]
        average: String,
        /// Units held
        #[arg(long)]
        quantity: String,
    },

    /// List stored holdings
    List,

    /// Update a stored holding's figures
    Update {
        /// Ticker symbol
        symbol: String,
        /// Average cost basis per unit
        #[arg(long)]
        average: String,
        /// Units held
        #[arg(long)]
        quantity: String,
    },

    /// Remove a holding from the store
    Remove {
        /// Ticker symbol
        symbol: String,
    },

    /// Interactive edit session over the three linked fields
    Edit {
        /// Seed the fields from this stored holding
        #[arg(long)]
        symbol: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config))?;

    // Initialize logging
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.settings.log_level);
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Calc {
            average,
            quantity,
            total,
        } => run_calc(average, quantity, total),
        Command::Profit {
            symbol,
            average,
            quantity,
            current,
        } => run_profit(&config.storage.holdings_path, symbol, average, quantity, &current),
        Command::Add {
            symbol,
            name,
            average,
            quantity,
        } => run_add(&config.storage.holdings_path, symbol, name, &average, &quantity),
        Command::List => run_list(&config.storage.holdings_path),
        Command::Update {
            symbol,
            average,
            quantity,
        } => run_update(&config.storage.holdings_path, symbol, &average, &quantity),
        Command::Remove { symbol } => run_remove(&config.storage.holdings_path, &symbol),
        Command::Edit { symbol } => run_edit(&config.storage.holdings_path, symbol),
    }
}

/// Parse a CLI amount, failing loudly where the engine would stay quiet
fn parse_amount(name: &str, text: &str) -> Result<Decimal> {
    numeric::parse(text)
        .ok_or_else(|| anyhow!("{name} must be a non-negative number, got '{text}'"))
}

fn run_calc(
    average: Option<String>,
    quantity: Option<String>,
    total: Option<String>,
) -> Result<()> {
    let average = average.map(|t| parse_amount("--average", &t)).transpose()?;
    let quantity = quantity.map(|t| parse_amount("--quantity", &t)).transpose()?;
    let total = total.map(|t| parse_amount("--total", &t)).transpose()?;

    let (average, quantity, total) = match (average, quantity, total) {
        (Some(avg), Some(qty), None) => {
            let total = StockCalculator::total_price(avg, qty)
                .ok_or_else(|| anyhow!("average price and quantity must both be positive"))?;
            (avg, qty, total)
        }
        (Some(avg), None, Some(total)) => {
            let qty = StockCalculator::quantity(avg, total)
                .ok_or_else(|| anyhow!("average price and total price must both be positive"))?;
            (avg, qty, total)
        }
        (None, Some(qty), Some(total)) => {
            let avg = StockCalculator::average_price(total, qty)
                .ok_or_else(|| anyhow!("total price and quantity must both be positive"))?;
            (avg, qty, total)
        }
        _ => bail!("provide exactly two of --average, --quantity and --total"),
    };

    println!("average price: {}", numeric::format(average));
    println!("quantity:      {}", numeric::format(quantity));
    println!("total price:   {}", numeric::format(total));
    Ok(())
}

fn run_profit(
    holdings_path: &str,
    symbol: Option<String>,
    average: Option<String>,
    quantity: Option<String>,
    current: &str,
) -> Result<()> {
    let (average, quantity) = match symbol {
        Some(symbol) => {
            let store = JsonFileStore::open(holdings_path)?;
            let holding = store
                .get(&symbol)
                .ok_or_else(|| anyhow!("unknown holding: {symbol}"))?;
            (holding.average_price, holding.quantity)
        }
        None => {
            let average = average
                .ok_or_else(|| anyhow!("provide --symbol or both --average and --quantity"))?;
            let quantity = quantity
                .ok_or_else(|| anyhow!("provide --symbol or both --average and --quantity"))?;
            (
                parse_amount("--average", &average)?,
                parse_amount("--quantity", &quantity)?,
            )
        }
    };
    let current = parse_amount("--current", current)?;

    let result = compute_profit(average, quantity, current)?;
    println!("profit amount: {}", numeric::format(result.amount));
    println!("profit:        {}%", numeric::format(result.percentage));
    Ok(())
}

fn run_add(
    holdings_path: &str,
    symbol: String,
    name: String,
    average: &str,
    quantity: &str,
) -> Result<()> {
    let average = parse_amount("--average", average)?;
    let quantity = parse_amount("--quantity", quantity)?;

    let mut store = JsonFileStore::open(holdings_path)?;
    store.add(Holding::new(symbol.clone(), name, average, quantity))?;
    info!(%symbol, "holding added");
    println!("added {symbol}");
    Ok(())
}

fn run_list(holdings_path: &str) -> Result<()> {
    let store = JsonFileStore::open(holdings_path)?;
    let holdings = store.list();
    if holdings.is_empty() {
        println!("no holdings yet");
        return Ok(());
    }
    for holding in holdings {
        println!(
            "{:<8} {:<24} avg {:>14}  qty {:>12}  total {:>16}",
            holding.symbol,
            holding.name,
            numeric::format(holding.average_price),
            numeric::format(holding.quantity),
            numeric::format(holding.total_cost()),
        );
    }
    Ok(())
}

fn run_update(holdings_path: &str, symbol: String, average: &str, quantity: &str) -> Result<()> {
    let average = parse_amount("--average", average)?;
    let quantity = parse_amount("--quantity", quantity)?;

    let mut store = JsonFileStore::open(holdings_path)?;
    let mut holding = store
        .get(&symbol)
        .ok_or_else(|| anyhow!("unknown holding: {symbol}"))?;
    holding.average_price = average;
    holding.quantity = quantity;
    holding.updated_at = Utc::now();
    store.update(holding)?;
    println!("updated {symbol}");
    Ok(())
}

fn run_remove(holdings_path: &str, symbol: &str) -> Result<()> {
    let mut store = JsonFileStore::open(holdings_path)?;
    store.remove(symbol)?;
    println!("removed {symbol}");
    Ok(())
}

/// Read `avg|qty|total <text>` lines from stdin, feed them through the
/// derivation engine, and print the triple after each edit
fn run_edit(holdings_path: &str, symbol: Option<String>) -> Result<()> {
    let mut engine = DerivationEngine::new();

    if let Some(symbol) = symbol {
        let store = JsonFileStore::open(holdings_path)?;
        let holding = store
            .get(&symbol)
            .ok_or_else(|| anyhow!("unknown holding: {symbol}"))?;
        engine.seed(holding.average_price, holding.quantity);
        println!("editing {symbol}");
    }

    println!("fields: avg, qty, total; e.g. 'avg 10000', 'qty' clears; 'quit' exits");
    print_triple(&engine);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }

        let (field, text) = match line.split_once(char::is_whitespace) {
            Some((field, text)) => (field, text.trim()),
            None => (line, ""),
        };
        let field = match field {
            "avg" | "average" => FieldId::AveragePrice,
            "qty" | "quantity" => FieldId::Quantity,
            "total" => FieldId::TotalPrice,
            other => {
                println!("unknown field '{other}'");
                continue;
            }
        };

        if let Some(update) = engine.apply(&ChangeEvent::new(field, text)) {
            if update.is_clear() {
                println!("{} cleared", update.field);
            } else {
                println!("{} -> {}", update.field, update.text);
            }
        }
        print_triple(&engine);
    }
    Ok(())
}

fn print_triple(engine: &DerivationEngine) {
    let text = |id: FieldId| {
        let text = engine.field(id).text();
        if text.is_empty() {
            "-".to_string()
        } else {
            text.to_string()
        }
    };
    println!(
        "  avg {}  qty {}  total {}",
        text(FieldId::AveragePrice),
        text(FieldId::Quantity),
        text(FieldId::TotalPrice),
    );
}
