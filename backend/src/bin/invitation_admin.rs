//! Administrative invitation management against the configured database.
//!
//! ```text
//! invitation-admin create --guest-names "Ada & Charles" --plural
//! invitation-admin list
//! invitation-admin delete 6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f
//! ```
//!
//! Invitations are printed as JSON, one object per line.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultClock;
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, fmt};

use wedding_backend::domain::ports::{InvitationsCommand, InvitationsQuery};
use wedding_backend::domain::{Invitation, InvitationService, InvitationToken, NewInvitation};
use wedding_backend::outbound::persistence::{DbPool, DieselInvitationRepository, PoolConfig};

const DATABASE_URL_VARS: [&str; 2] = ["WEDDING_DATABASE_URL", "DATABASE_URL"];

/// `invitation-admin` arguments.
#[derive(Debug, Parser)]
#[command(
    name = "invitation-admin",
    about = "Create, list and delete wedding invitations",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `WEDDING_DATABASE_URL`, then
    /// `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url", global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: AdminCommand,
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// Create an invitation with a fresh token.
    Create {
        /// Names as printed on the invitation.
        #[arg(long = "guest-names", value_name = "names")]
        guest_names: String,
        /// The invitation addresses more than one person.
        #[arg(long)]
        plural: bool,
    },
    /// List invitations, newest first.
    List,
    /// Delete an invitation by token.
    Delete {
        /// Invitation token.
        #[arg(value_parser = parse_token)]
        token: InvitationToken,
    },
}

fn parse_token(raw: &str) -> Result<InvitationToken, String> {
    raw.parse()
        .map_err(|error| format!("invalid invitation token {raw:?}: {error}"))
}

fn resolve_database_url(explicit: Option<String>) -> Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(eyre!("--database-url must not be empty when provided"));
        }
        return Ok(value);
    }

    DATABASE_URL_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            eyre!("database URL missing: set --database-url, WEDDING_DATABASE_URL or DATABASE_URL")
        })
}

fn print_invitation(invitation: &Invitation) -> Result<()> {
    let line = serde_json::to_string(invitation).wrap_err("serialise invitation")?;
    println!("{line}");
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {error}");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let database_url = resolve_database_url(args.database_url)?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .wrap_err("create database pool")?;
    let service = InvitationService::new(
        Arc::new(DieselInvitationRepository::new(pool)),
        Arc::new(DefaultClock),
    );

    match args.command {
        AdminCommand::Create {
            guest_names,
            plural,
        } => {
            let request = NewInvitation::new(guest_names, plural)?;
            let invitation = service.create_invitation(request).await?;
            print_invitation(&invitation)?;
        }
        AdminCommand::List => {
            for invitation in service.list_invitations().await? {
                print_invitation(&invitation)?;
            }
        }
        AdminCommand::Delete { token } => {
            service.delete_invitation(token).await?;
            eprintln!("deleted invitation {token}");
        }
    }
    Ok(())
}
