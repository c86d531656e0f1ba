use anyhow::bail;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use traineeapp_client::config::Config;
use traineeapp_client::http_client::ReqwestTraineeClient;
use traineeapp_client::{Customer, NewTraining, TraineeApi};

use trainer_console::stats;
use trainer_console::views::{calendar, customers, trainings};

#[derive(Parser)]
#[command(name = "trainer-console")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin console for a personal-training business")]
struct Cli {
    /// API base URL (default: $TRAINEE_API_BASE_URL, falling back to the demo server)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List customers
    Customers {
        /// Keep rows with any field containing this text
        #[arg(short, long)]
        filter: Option<String>,
        /// Sort by column (id, firstname, lastname, email, streetaddress, postcode, city, phone)
        #[arg(short, long)]
        sort: Option<String>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List trainings
    Trainings {
        /// Keep rows with any column containing this text
        #[arg(short, long)]
        filter: Option<String>,
        /// Sort by column (date, duration, activity, customer)
        #[arg(short, long)]
        sort: Option<String>,
        /// Only this customer's trainings
        #[arg(long)]
        customer: Option<u64>,
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Month view of scheduled sessions
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Total minutes per activity as a bar chart
    Stats {
        /// Print the totals as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// Create, update, or delete a customer
    Customer {
        #[command(subcommand)]
        action: CustomerCmd,
    },

    /// Add or delete a training
    Training {
        #[command(subcommand)]
        action: TrainingCmd,
    },

    /// Reset the demo database to its seeded state
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CustomerCmd {
    /// Create a customer
    Add {
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
        #[arg(long, default_value = "")]
        streetaddress: String,
        #[arg(long, default_value = "")]
        postcode: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Update fields of an existing customer; omitted flags keep their value
    Update {
        id: u64,
        #[arg(long)]
        firstname: Option<String>,
        #[arg(long)]
        lastname: Option<String>,
        #[arg(long)]
        streetaddress: Option<String>,
        #[arg(long)]
        postcode: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a customer
    Delete {
        id: u64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TrainingCmd {
    /// Add a training session for a customer
    Add {
        /// Session date, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS
        #[arg(long)]
        date: String,
        /// Duration in minutes
        #[arg(long)]
        duration: i64,
        #[arg(long)]
        activity: String,
        /// Owning customer id
        #[arg(long)]
        customer_id: u64,
    },
    /// Delete a training
    Delete {
        id: u64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `TRAINEE_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("TRAINEE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let base_url = match cli.api_url {
        Some(url) => url,
        None => Config::from_env()?.base_url,
    };
    tracing::debug!(%base_url, "trainer-console: using API");
    let client = ReqwestTraineeClient::new(&base_url);

    match cli.command {
        Commands::Customers { filter, sort, json } => {
            let mut list = client.get_customers().await?;
            if let Some(query) = filter {
                list = customers::filter(&list, &query);
            }
            if let Some(column) = sort {
                customers::sort_by_column(&mut list, &column)?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                print!("{}", customers::render(&list));
            }
        }

        Commands::Trainings {
            filter,
            sort,
            customer,
            json,
        } => {
            let records = match customer {
                Some(id) => client.get_customer_trainings(id).await?,
                None => client.get_trainings().await?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }
            let mut rows = trainings::rows(&records);
            if let Some(query) = filter {
                rows = trainings::filter(&rows, &query);
            }
            if let Some(column) = sort {
                trainings::sort_by_column(&mut rows, &column)?;
            }
            print!("{}", trainings::render(&rows));
        }

        Commands::Calendar { month } => {
            let (year, month) = match month {
                Some(m) => calendar::parse_month(&m)?,
                None => {
                    let today = chrono::Local::now().date_naive();
                    (today.year(), today.month())
                }
            };
            let records = client.get_trainings().await?;
            let sessions = calendar::sessions_for_month(&records, year, month);
            print!("{}", calendar::render_month(year, month, &sessions)?);
        }

        Commands::Stats { json } => {
            let records = client.get_trainings().await?;
            let mut totals = stats::aggregate(&records);
            // aggregation order is unspecified; sort for stable output
            totals.sort_by(|a, b| a.activity.cmp(&b.activity));
            if json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else {
                print!("{}", stats::render_chart(&totals));
            }
        }

        Commands::Customer { action } => match action {
            CustomerCmd::Add {
                firstname,
                lastname,
                streetaddress,
                postcode,
                city,
                email,
                phone,
            } => {
                let created = client
                    .create_customer(&Customer {
                        firstname,
                        lastname,
                        streetaddress,
                        postcode,
                        city,
                        email,
                        phone,
                        links: Vec::new(),
                    })
                    .await?;
                println!("created customer {}", created.full_name());
            }
            CustomerCmd::Update {
                id,
                firstname,
                lastname,
                streetaddress,
                postcode,
                city,
                email,
                phone,
            } => {
                let mut current = client.get_customer(id).await?;
                if let Some(v) = firstname {
                    current.firstname = v;
                }
                if let Some(v) = lastname {
                    current.lastname = v;
                }
                if let Some(v) = streetaddress {
                    current.streetaddress = v;
                }
                if let Some(v) = postcode {
                    current.postcode = v;
                }
                if let Some(v) = city {
                    current.city = v;
                }
                if let Some(v) = email {
                    current.email = v;
                }
                if let Some(v) = phone {
                    current.phone = v;
                }
                let updated = client.update_customer(id, &current).await?;
                println!("updated customer {}", updated.full_name());
            }
            CustomerCmd::Delete { id, yes } => {
                if !yes {
                    bail!("deleting customer {} also removes their trainings; pass --yes to confirm", id);
                }
                client.delete_customer(id).await?;
                println!("deleted customer {}", id);
            }
        },

        Commands::Training { action } => match action {
            TrainingCmd::Add {
                date,
                duration,
                activity,
                customer_id,
            } => {
                let created = client
                    .create_training(&NewTraining {
                        date,
                        duration,
                        activity,
                        customer: client.customer_uri(customer_id),
                    })
                    .await?;
                println!(
                    "added {} ({} min) on {}",
                    created.activity,
                    created.duration,
                    trainings::format_date(&created.date)
                );
            }
            TrainingCmd::Delete { id, yes } => {
                if !yes {
                    bail!("pass --yes to confirm deleting training {}", id);
                }
                client.delete_training(id).await?;
                println!("deleted training {}", id);
            }
        },

        Commands::Reset { yes } => {
            if !yes {
                bail!("this resets the remote demo database; pass --yes to confirm");
            }
            client.reset_database().await?;
            println!("database reset");
        }
    }

    Ok(())
}
