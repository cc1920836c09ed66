use anyhow::{Context, Result};
use hydric_gateway::display::{format_usd, PoolSummary};
use hydric_gateway::{
    value_portfolio, ChainId, GatewayConfig, HydricGateway, OrderField, PortfolioEntry,
    SearchPoolsInput, SortDirection, Timeframe, Tokens,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Load .env for local dev (if present)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hydric_gateway={}", config.logging.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if dotenv_loaded {
        tracing::info!("Loaded .env");
    }

    if let Err(e) = run(&config) {
        println!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &GatewayConfig) -> Result<()> {
    tracing::info!("Using gateway at {}", config.api.base_url);
    let gateway = HydricGateway::new(config).context("failed to create gateway client")?;

    find_eth_pools(&gateway)?;
    print_separator();
    find_best_yield_eth_usdc_on_base(&gateway)?;
    print_separator();
    paginate_through_pools(&gateway)?;
    print_separator();
    calculate_portfolio_value(&gateway)?;
    print_separator();
    list_token_baskets(&gateway)?;
    Ok(())
}

fn print_separator() {
    println!("\n{}\n", "=".repeat(50));
}

fn find_eth_pools(gateway: &HydricGateway) -> Result<()> {
    println!("=== Finding all ETH pools on Ethereum ===\n");

    let input = SearchPoolsInput::new(vec![Tokens::eth()])
        .min_tvl_usd(1_000_000.0)
        .limit(5);
    let result = gateway.search_pools(&input)?;

    println!("Found {} pools:\n", result.pools.len());
    for pool in &result.pools {
        let summary = PoolSummary::from_pool(pool);
        println!("  {} | {}", summary.protocol, summary.pair);
        println!("    TVL: {}", summary.tvl_usd);
        println!("    24h Yield: {}", summary.yield_24h);
        println!("    Address: {}\n", summary.address);
    }
    Ok(())
}

fn find_best_yield_eth_usdc_on_base(gateway: &HydricGateway) -> Result<()> {
    println!("=== Best ETH-USDC pools on Base by 24h yield ===\n");

    let input = SearchPoolsInput::new(vec![Tokens::weth_base()])
        .tokens_b(vec![Tokens::usdc_base()])
        .min_tvl_usd(50_000.0)
        .limit(5)
        .order_by(OrderField::Yield, SortDirection::Desc)
        .timeframe(Timeframe::Day);
    let result = gateway.search_pools(&input)?;

    println!("Found {} ETH-USDC pools:\n", result.pools.len());
    for pool in &result.pools {
        let summary = PoolSummary::from_pool(pool);
        println!("  {} ({})", summary.protocol, summary.pool_type);
        println!("    TVL: {}", summary.tvl_usd);
        println!("    24h Yield: {}", summary.yield_24h);
        println!("    7d Yield: {}", summary.yield_7d);
        println!("    Fee: {}\n", summary.fee_tier);
    }
    Ok(())
}

fn paginate_through_pools(gateway: &HydricGateway) -> Result<()> {
    println!("=== Paginating through all ETH pools ===\n");

    let input = SearchPoolsInput::new(vec![Tokens::eth()]).limit(10);
    let pages = gateway.search_pool_pages(&input, 3)?;

    let mut total = 0;
    for (i, page) in pages.iter().enumerate() {
        println!("Page {}: {} pools", i + 1, page.pools.len());
        total += page.pools.len();
    }
    println!("\nTotal pools fetched: {}", total);
    Ok(())
}

fn calculate_portfolio_value(gateway: &HydricGateway) -> Result<()> {
    println!("=== Calculating Portfolio Value ===\n");

    let portfolio = [
        PortfolioEntry::new(Tokens::eth(), "ETH", 2.0),
        PortfolioEntry::new(Tokens::usdc_eth(), "USDC", 1000.0),
    ];
    let valuation = value_portfolio(gateway, &portfolio)?;

    for line in &valuation.lines {
        let chain = ChainId::name(line.entry.token.chain_id).unwrap_or("unknown chain");
        println!(
            "  {} {} on {}: {} (@ {})",
            line.entry.amount,
            line.entry.symbol,
            chain,
            format_usd(line.value_usd),
            format_usd(line.price_usd)
        );
    }
    println!("\n  Total Portfolio Value: {}", format_usd(valuation.total_usd));
    Ok(())
}

fn list_token_baskets(gateway: &HydricGateway) -> Result<()> {
    println!("=== Token baskets on Ethereum and Base ===\n");

    let list = gateway
        .baskets()
        .list(&[ChainId::ETHEREUM, ChainId::BASE])?;

    for basket in &list.baskets {
        println!("  {} ({})", basket.name, basket.id);
        println!("    Tokens: {}", basket.addresses.len());
    }
    Ok(())
}
