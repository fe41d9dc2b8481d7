//! Creates a seller against a fresh in-memory store and prints it.
//!
//! ```text
//! seller-cli --name Acme --product digital --payout 10000
//! ```

use std::process::ExitCode;

use api::config::Config;
use application::{CreateSeller, SellerService, ShowSeller};
use clap::Parser;
use seller_store::InMemorySellerRepository;

#[derive(Parser)]
#[command(name = "seller-cli")]
#[command(about = "Create a seller and print it as JSON.")]
struct CommandLine {
    /// Seller name
    #[arg(long)]
    name: String,
    /// Sold product type: digital, gambling or financial
    #[arg(long)]
    product: String,
    /// Payout in pence
    #[arg(long)]
    payout: i64,
    /// Seller description
    #[arg(long, default_value = "test description")]
    description: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config {
        log_level: "warn".to_string(),
        ..Config::from_env()
    };
    api::init_tracing(&config);

    let args = CommandLine::parse();
    let service = SellerService::new(InMemorySellerRepository::new());

    let cmd = CreateSeller::new(
        args.name,
        args.description,
        true,
        args.product,
        args.payout,
        "GBP",
    );
    let seller_id = match service.create_seller(cmd).await {
        Ok(id) => id,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let dto = match service.show_seller(ShowSeller::new(seller_id.to_string())).await {
        Ok(Some(dto)) => dto,
        Ok(None) => {
            eprintln!("error: seller {seller_id} vanished after creation");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&dto) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
