use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{info, warn};

use zonix::ZonixError;
use zonix::config::fetch_config;
use zonix::format::{format_datetime, format_inr};
use zonix::receipt::mock::generate_mock_receipts;
use zonix::receipt::{ReceiptCalculation, ReceiptSummary, calculate_receipt};
use zonix::settings::SettingsStore;

const USAGE: &str = "usage: zonix [calc <quantity> <price_per_unit> <profit_loss>]";

fn main() -> Result<(), ZonixError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => show_history(),
        [cmd, quantity, price, pnl] if cmd == "calc" => {
            let quantity = quantity
                .parse::<u32>()
                .map_err(|e| ZonixError::Usage(format!("invalid quantity {quantity:?}: {e}")))?;
            let price = parse_decimal("price_per_unit", price)?;
            let pnl = parse_decimal("profit_loss", pnl)?;

            let calc = calculate_receipt(quantity, price, pnl)?;
            print_calculation(&calc);
            Ok(())
        }
        _ => Err(ZonixError::Usage(USAGE.to_string())),
    }
}

fn show_history() -> Result<(), ZonixError> {
    let app_config = fetch_config()?;
    let settings = SettingsStore::init(&app_config.settings_path)?;
    info!(
        user = %settings.get().profile.display_name,
        "loaded settings"
    );

    if !app_config.receipts.use_mock_data {
        warn!("mock data disabled and no receipt backend is configured");
        return Ok(());
    }

    let receipts = generate_mock_receipts(
        app_config.receipts.mock_receipt_count,
        &app_config.receipts.owner(),
    )?;

    for r in &receipts {
        println!(
            "{}  {}  {:<4} {:<5} {:>4} x {:>12}  payable {:>10}  {}",
            r.receipt_id,
            format_datetime(r.timestamp),
            r.tpe.as_str(),
            r.token_symbol,
            r.quantity,
            format_inr(r.price_per_unit),
            format_inr(r.calculation.final_payable),
            r.status.as_str(),
        );
    }

    let summary = ReceiptSummary::from_receipts(&receipts);
    println!();
    println!(
        "{} receipts ({} completed, {} pending, {} failed), {} rebated",
        summary.count(),
        summary.completed,
        summary.pending,
        summary.failed,
        summary.rebates_applied,
    );
    println!("total trade value  {}", format_inr(summary.total_trade_value));
    println!("total fees         {}", format_inr(summary.total_trade_fees));
    println!("total commission   {}", format_inr(summary.total_commission));
    println!("total GST          {}", format_inr(summary.total_gst));
    println!("total payable      {}", format_inr(summary.total_payable));

    Ok(())
}

fn print_calculation(calc: &ReceiptCalculation) {
    println!("trade value   {}", format_inr(calc.trade_value));
    println!("trade fee     {}", format_inr(calc.trade_fee));
    println!("commission    {}", format_inr(calc.commission));
    println!("GST           {}", format_inr(calc.gst));
    println!("final payable {}", format_inr(calc.final_payable));
    if calc.rebate_applied {
        println!("loss rebate applied to trade fee");
    }
}

fn parse_decimal(name: &str, raw: &str) -> Result<Decimal, ZonixError> {
    Decimal::from_str(raw).map_err(|e| ZonixError::Usage(format!("invalid {name} {raw:?}: {e}")))
}
