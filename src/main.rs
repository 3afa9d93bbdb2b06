use std::process;

use clap::{Args, Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use hrobot::config;
use hrobot::{Client, Config, Product, ProductSearchRequest, Server};

#[derive(Parser)]
#[command(
    name = "hrobot",
    author,
    version,
    about = "Hetzner Robot command-line tool",
    long_about = r#"hrobot — inspect your Hetzner dedicated servers and the server market from the terminal.

Credentials are read from ROBOT_USERNAME and ROBOT_PASSWORD (webservice user, not the Robot login). Use `--env-file` to load them from a file. ROBOT_BASE_URL overrides the webservice address.

Examples:
  hrobot servers list
  hrobot servers show 321
  hrobot market list --min-memory-size 64 --max-price 60
"#,
    after_help = "Use `hrobot <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and ensure API connectivity
    #[command(long_about = "Check that ROBOT_USERNAME and ROBOT_PASSWORD are set and that the webservice accepts them by listing servers.")]
    CheckConfig,
    /// Servers on the account
    Servers {
        #[command(subcommand)]
        sub: ServerCommands,
    },
    /// Server market offers
    Market {
        #[command(subcommand)]
        sub: MarketCommands,
    },
}

#[derive(Subcommand)]
enum ServerCommands {
    /// List all servers
    List,
    /// Show a single server
    Show { server_number: u32 },
}

#[derive(Subcommand)]
enum MarketCommands {
    /// List server market products, optionally filtered
    List(MarketFilter),
    /// Show a single server market product
    Show { product_id: u32 },
}

#[derive(Args)]
struct MarketFilter {
    /// CPU model name
    #[arg(long)]
    cpu: Option<String>,
    #[arg(long)]
    min_cpu_benchmark: Option<u32>,
    #[arg(long)]
    max_cpu_benchmark: Option<u32>,
    /// Minimum memory size in GB
    #[arg(long)]
    min_memory_size: Option<u32>,
    #[arg(long)]
    max_memory_size: Option<u32>,
    /// Minimum drive size in GB
    #[arg(long)]
    min_hdd_size: Option<u32>,
    #[arg(long)]
    max_hdd_size: Option<u32>,
    #[arg(long)]
    min_hdd_count: Option<u32>,
    #[arg(long)]
    max_hdd_count: Option<u32>,
    /// Full text search
    #[arg(long)]
    search: Option<String>,
    /// Minimum monthly price
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
}

impl From<MarketFilter> for ProductSearchRequest {
    fn from(f: MarketFilter) -> Self {
        ProductSearchRequest {
            cpu: f.cpu,
            min_cpu_benchmark: f.min_cpu_benchmark,
            max_cpu_benchmark: f.max_cpu_benchmark,
            min_memory_size: f.min_memory_size,
            max_memory_size: f.max_memory_size,
            min_hdd_size: f.min_hdd_size,
            max_hdd_size: f.max_hdd_size,
            min_hdd_count: f.min_hdd_count,
            max_hdd_count: f.max_hdd_count,
            search: f.search,
            min_price: f.min_price,
            max_price: f.max_price,
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn print_servers(servers: &[Server]) {
    if servers.is_empty() {
        println!("(empty list)");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["Number", "Name", "IP", "Product", "DC", "Status", "Paid until", "Cancelled"]);
    for s in servers {
        table.add_row(vec![
            s.server_number.to_string(),
            s.server_name.clone(),
            s.server_ip.clone(),
            s.product.clone(),
            s.dc.clone(),
            s.status.clone(),
            s.paid_until.clone(),
            yes_no(s.cancelled).to_string(),
        ]);
    }
    println!("\n{table}\n");
}

fn print_server(s: &Server) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["server_number".to_string(), s.server_number.to_string()]);
    table.add_row(vec!["server_name".to_string(), s.server_name.clone()]);
    table.add_row(vec!["server_ip".to_string(), s.server_ip.clone()]);
    table.add_row(vec!["product".to_string(), s.product.clone()]);
    table.add_row(vec!["dc".to_string(), s.dc.clone()]);
    table.add_row(vec!["traffic".to_string(), s.traffic.clone()]);
    table.add_row(vec!["flatrate".to_string(), yes_no(s.flatrate).to_string()]);
    table.add_row(vec!["status".to_string(), s.status.clone()]);
    table.add_row(vec!["throttled".to_string(), yes_no(s.throttled).to_string()]);
    table.add_row(vec!["cancelled".to_string(), yes_no(s.cancelled).to_string()]);
    table.add_row(vec!["paid_until".to_string(), s.paid_until.clone()]);
    println!("\n{table}\n");
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("(empty list)");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "CPU", "Bench", "RAM (GB)", "Drives", "DC", "Price", "Price incl. VAT"]);
    for p in products {
        table.add_row(vec![
            p.id.to_string(),
            p.cpu.clone(),
            p.cpu_benchmark.to_string(),
            p.memory_size.to_string(),
            p.hdd_text.clone(),
            p.datacenter.clone(),
            p.price.clone(),
            p.price_vat.clone(),
        ]);
    }
    println!("\n{table}\n");
}

fn print_product(p: &Product) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["id".to_string(), p.id.to_string()]);
    table.add_row(vec!["name".to_string(), p.name.clone()]);
    table.add_row(vec!["description".to_string(), p.description.join("\n")]);
    table.add_row(vec!["cpu".to_string(), p.cpu.clone()]);
    table.add_row(vec!["cpu_benchmark".to_string(), p.cpu_benchmark.to_string()]);
    table.add_row(vec!["memory_size".to_string(), format!("{} GB", p.memory_size)]);
    table.add_row(vec!["drives".to_string(), format!("{} x {} GB ({})", p.hdd_count, p.hdd_size, p.hdd_text)]);
    table.add_row(vec!["datacenter".to_string(), p.datacenter.clone()]);
    table.add_row(vec!["network_speed".to_string(), p.network_speed.clone()]);
    table.add_row(vec!["traffic".to_string(), p.traffic.clone()]);
    table.add_row(vec!["dist".to_string(), p.dist.join(", ")]);
    table.add_row(vec!["price".to_string(), format!("{} (incl. VAT {})", p.price, p.price_vat)]);
    table.add_row(vec!["price_setup".to_string(), format!("{} (incl. VAT {})", p.price_setup, p.price_setup_vat)]);
    table.add_row(vec!["fixed_price".to_string(), yes_no(p.fixed_price).to_string()]);
    table.add_row(vec!["next_reduce_date".to_string(), p.next_reduce_date.clone()]);
    println!("\n{table}\n");
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!(%err, "{}", context);
    eprintln!("{}: {}", yansi::Paint::new(context).red(), err);
    process::exit(1);
}

fn build_client(env_file: Option<&str>) -> Client {
    config::load_env_file(env_file);
    let cfg = Config::from_env().unwrap_or_else(|e| fail("Invalid configuration", e));
    Client::new(cfg).unwrap_or_else(|e| fail("Failed to create HTTP client", e))
}

/// Cancel in-flight requests on Ctrl-C.
fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            child.cancel();
        }
    });
    token
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let client = build_client(cli.env_file.as_deref());
    let cancel = cancel_on_ctrl_c();

    match cli.command {
        Commands::CheckConfig => match client.server().list_servers(&cancel).await {
            Ok((servers, _)) => {
                println!(
                    "{} ({} servers visible at {})",
                    yansi::Paint::new("Configuration looks valid").green(),
                    servers.len(),
                    client.base_url()
                );
            }
            Err(e) => fail("Configuration appears invalid", e),
        },
        Commands::Servers { sub } => match sub {
            ServerCommands::List => {
                let (servers, _) = client
                    .server()
                    .list_servers(&cancel)
                    .await
                    .unwrap_or_else(|e| fail("Failed to list servers", e));
                print_servers(&servers);
            }
            ServerCommands::Show { server_number } => {
                let (server, _) = client
                    .server()
                    .get_server(server_number, &cancel)
                    .await
                    .unwrap_or_else(|e| fail("Failed to load server", e));
                print_server(&server);
            }
        },
        Commands::Market { sub } => match sub {
            MarketCommands::List(filter) => {
                let filter = ProductSearchRequest::from(filter);
                let filter = if filter.is_empty() { None } else { Some(&filter) };
                let (products, _) = client
                    .order()
                    .list_server_market_products(filter, &cancel)
                    .await
                    .unwrap_or_else(|e| fail("Failed to list market products", e));
                print_products(&products);
                println!(
                    "{}",
                    yansi::Paint::new(format!("{} products", products.len())).dim()
                );
            }
            MarketCommands::Show { product_id } => {
                let (product, _) = client
                    .order()
                    .get_server_market_product(product_id, &cancel)
                    .await
                    .unwrap_or_else(|e| fail("Failed to load market product", e));
                print_product(&product);
            }
        },
    }
}
