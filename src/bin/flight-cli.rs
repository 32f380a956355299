use clap::{Parser, Subcommand};
use flight_mock::generator::{SearchRequest, SearchResult};

#[derive(Parser)]
#[command(name = "flight-cli")]
#[command(about = "Query a running flight mock service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the service answers
    Ping,
    /// Show service health and cache size
    Health,
    /// Run a flight search and summarize the results
    Search {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Return date (YYYY-MM-DD); omit for one-way
        #[arg(long)]
        return_date: Option<String>,
        #[arg(long, default_value_t = 1)]
        adults: u32,
        #[arg(long, default_value_t = 0)]
        children: u32,
        #[arg(long, default_value_t = 0)]
        infants: u32,
        /// Print at most this many results
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Ping => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            println!("{} {}", res.status(), res.text().await?);
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_json(res).await?;
        }
        Commands::Search {
            origin,
            destination,
            date,
            return_date,
            adults,
            children,
            infants,
            limit,
        } => {
            let request = SearchRequest {
                origin: Some(origin),
                destination: Some(destination),
                departure_date: Some(date),
                return_date,
                no_of_adult: Some(adults.into()),
                no_of_children: Some(children.into()),
                no_of_infant: Some(infants.into()),
            };
            let res = client
                .post(format!("{}/getFlight", cli.url))
                .json(&request)
                .send()
                .await?;

            if !res.status().is_success() {
                print_json(res).await?;
                return Ok(());
            }

            let results: Vec<SearchResult> = res.json().await?;
            for result in results.iter().take(limit) {
                println!("{}", summarize(result));
            }
            println!("{} results ({} shown)", results.len(), results.len().min(limit));
        }
    }

    Ok(())
}

fn summarize(result: &SearchResult) -> String {
    let legs: Vec<String> = result
        .onward_flights
        .iter()
        .chain(result.return_flights.iter())
        .map(|leg| {
            format!(
                "{} {}→{} {} ({})",
                leg.flight_number,
                leg.origin_code.as_deref().unwrap_or("?"),
                leg.destination_code.as_deref().unwrap_or("?"),
                leg.departure_time.format("%Y-%m-%d %H:%M"),
                leg.duration
            )
        })
        .collect();

    format!(
        "{:<4} {} | {} {}",
        result.onward_flights.first().map(|l| l.marketing_carrier_code.as_str()).unwrap_or("?"),
        legs.join(" / "),
        result.total_price,
        result.currency
    )
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }

    let json: serde_json::Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
