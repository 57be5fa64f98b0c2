use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_config::{load as load_config, AppConfig};
use roster_database::{MemberFilter, MemberPayload, MemberRepository};
use roster_gateway::{create_router, GatewayState};
use roster_members::MemberService;
use roster_runtime::{telemetry, BackendServices};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster member API (serves HTTP by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print every stored member
    DumpMembers,
    /// Insert a handful of sample members
    SeedMembers,
    /// Delete all members
    ClearMembers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing().context("failed to initialise tracing")?;
    let config = load_config().context("failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::DumpMembers => dump_members(config).await,
        Commands::SeedMembers => seed_members(config).await,
        Commands::ClearMembers => clear_members(config).await,
    }
}

async fn initialise(config: &AppConfig) -> anyhow::Result<BackendServices> {
    BackendServices::initialise(config)
        .await
        .context("failed to initialise backend services")
}

async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    info!("starting Roster server");

    let services = initialise(&config).await?;
    let app = create_router(GatewayState::new(services.db_pool.clone()));

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(roster_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    services.db_pool.close().await;
    info!("server shut down");
    Ok(())
}

async fn dump_members(config: AppConfig) -> anyhow::Result<()> {
    let services = initialise(&config).await?;
    let repository = MemberRepository::new(services.db_pool.clone());

    let members = repository
        .list(&MemberFilter::default())
        .await
        .context("failed to fetch members")?;

    println!("=== MEMBERS ===");
    if members.is_empty() {
        println!("No members found in database");
        return Ok(());
    }

    println!("Found {} members:", members.len());
    println!(
        "{:<5} {:<20} {:<30} {:<15} {:<40}",
        "ID", "First Name", "Email", "Phone", "Address"
    );
    println!("{}", "-".repeat(110));

    for member in members {
        println!(
            "{:<5} {:<20} {:<30} {:<15} {:<40}",
            member.id, member.first_name, member.email, member.phone, member.address
        );
    }

    Ok(())
}

fn sample_members() -> Vec<MemberPayload> {
    vec![
        MemberPayload::new("Ada", "ada@example.com", "555-0100", "1 Infinite Loop"),
        MemberPayload::new("Grace", "grace@example.com", "555-0101", "2 Main St"),
        MemberPayload::new("Alan", "alan@example.com", "555-0102", "3 Bletchley Park"),
    ]
}

async fn seed_members(config: AppConfig) -> anyhow::Result<()> {
    let services = initialise(&config).await?;
    let service = MemberService::from_pool(services.db_pool.clone());

    println!("Database seeded with sample members:");
    for payload in sample_members() {
        let member = service
            .create(payload)
            .await
            .context("failed to insert sample member")?;
        println!("- {} ({}) as id {}", member.first_name, member.email, member.id);
    }

    let total = MemberRepository::new(services.db_pool.clone())
        .count()
        .await
        .context("failed to count members")?;
    println!("{total} members stored; run 'dump-members' to see them");

    Ok(())
}

async fn clear_members(config: AppConfig) -> anyhow::Result<()> {
    let services = initialise(&config).await?;
    let repository = MemberRepository::new(services.db_pool.clone());

    let deleted = repository
        .clear()
        .await
        .context("failed to delete members")?;

    println!("Database cleared: {deleted} members deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["roster-server"]).unwrap();
        assert_eq!(cli.command, None);

        let cli = Cli::try_parse_from(["roster-server", "seed-members"]).unwrap();
        assert_eq!(cli.command, Some(Commands::SeedMembers));
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(Cli::try_parse_from(["roster-server", "drop-tables"]).is_err());
    }

    #[tokio::test]
    async fn sample_members_pass_validation() {
        let service = MemberService::new_for_testing();
        for payload in sample_members() {
            service.create(payload).await.unwrap();
        }

        let stored = service.list(&MemberFilter::default()).await.unwrap();
        assert_eq!(stored.len(), 3);
    }
}
