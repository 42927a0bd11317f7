use checkout::application::service::CheckoutService;
use checkout::domain::checkout::CheckoutValidator;
use checkout::domain::coupon::CouponBook;
use checkout::domain::ports::InventoryStoreBox;
use checkout::error::Error;
use checkout::infrastructure::in_memory::InMemoryInventoryStore;
use checkout::interfaces::csv::order_reader::OrderReader;
use checkout::interfaces::csv::outcome_writer::OutcomeWriter;
use checkout::interfaces::csv::stock::{read_stock, write_stock};
use checkout::interfaces::json::catalog::{read_coupons, read_prices};
use checkout::telemetry;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (order,items,coupon,balance)
    orders: PathBuf,

    /// Stock CSV file (sku,available)
    #[arg(long)]
    stock: PathBuf,

    /// Unit prices JSON file ({"SKU": cents})
    #[arg(long)]
    prices: PathBuf,

    /// Extra coupon codes JSON file ({"CODE": percent_off})
    #[arg(long)]
    coupons: Option<PathBuf>,

    /// Where to write the remaining stock after all orders ran
    #[arg(long)]
    stock_out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose, cli.log_json);

    let inventory = read_stock(File::open(&cli.stock).into_diagnostic()?).into_diagnostic()?;
    let prices = read_prices(File::open(&cli.prices).into_diagnostic()?).into_diagnostic()?;
    let coupons = match &cli.coupons {
        Some(path) => {
            read_coupons(File::open(path).into_diagnostic()?, CouponBook::default())
                .into_diagnostic()?
        }
        None => CouponBook::default(),
    };
    info!(skus = inventory.len(), prices = prices.len(), "catalog loaded");

    let store: InventoryStoreBox = Box::new(InMemoryInventoryStore::with_stock(inventory));
    let service = CheckoutService::new(store, prices, CheckoutValidator::new(coupons));

    let stdout = io::stdout();
    let mut outcomes = OutcomeWriter::new(stdout.lock());

    let reader = OrderReader::new(File::open(&cli.orders).into_diagnostic()?);
    for order_result in reader.orders() {
        let order = match order_result {
            Ok(order) => order,
            Err(e) => {
                warn!("skipping malformed order: {e}");
                continue;
            }
        };

        match service.place_order(&order).await {
            Ok(receipt) => outcomes.charged(order.id, &receipt).into_diagnostic()?,
            Err(Error::Checkout(refusal)) => {
                outcomes.refused(order.id, &refusal).into_diagnostic()?
            }
            Err(e) => error!(order = order.id, "error processing order: {e}"),
        }
    }
    outcomes.flush().into_diagnostic()?;

    if let Some(path) = &cli.stock_out {
        let remaining = service.inventory().await.into_diagnostic()?;
        write_stock(File::create(path).into_diagnostic()?, &remaining).into_diagnostic()?;
        info!(path = %path.display(), "remaining stock written");
    }

    Ok(())
}

