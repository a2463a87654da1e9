use anyhow::Result;
use campaign::{CampaignId, ClaimController, ClaimGate, ClaimOutcome, RejectReason, UserProfile};
use clap::{Parser, Subcommand};
use dashboard::page::{Layout, ProfilePage};
use dashboard::source::store_from_file;
use dashboard::{Config, ConsoleNotifier};
use evm::EvmSubmitter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(about = "Profile page and donation claims for the crowdfunding contract", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the profile page with the active campaign
    Profile {
        /// JSON file holding the active campaign record
        #[arg(short, long)]
        campaign: Option<PathBuf>,
        /// Narrow layout (Crowdfunding card only)
        #[arg(long)]
        compact: bool,
    },
    /// Submit a claim transaction for a campaign
    Claim {
        /// Identifier of the campaign to claim from
        #[arg(short = 'i', long)]
        campaign_id: String,
        /// JSON file holding the campaign record, used for eligibility
        #[arg(short, long)]
        campaign: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    dashboard::logging::init_logging("info")?;

    let cli = Cli::parse();
    let config = Config::from_env()?;
    debug!("Configuration loaded: origin={}", config.origin);

    match cli.command {
        Commands::Profile { campaign, compact } => {
            let store = store_from_file(campaign.as_deref())?;
            let profile = config
                .profile
                .clone()
                .unwrap_or_else(|| UserProfile::new(""));
            let layout = if compact { Layout::Compact } else { Layout::Wide };
            let page = ProfilePage::build(
                store.current().as_ref(),
                &profile,
                &config.origin,
                layout,
                config.claim_enabled,
            );
            print!("{}", page);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Claim {
            campaign_id,
            campaign,
        } => {
            let store = store_from_file(campaign.as_deref())?;
            let enabled = match store.current() {
                Some(selected) => ClaimGate::evaluate(config.claim_enabled, Some(&selected)),
                None => {
                    warn!("No campaign record given; eligibility not checked");
                    config.claim_enabled
                }
            };

            let (contract, rpc_url, private_key) = config.claim_settings()?;
            let submitter = EvmSubmitter::connect(rpc_url, private_key, &config.abi_path)?;
            let controller = ClaimController::new(
                contract,
                Arc::new(submitter),
                Arc::new(ConsoleNotifier::stdout()),
                enabled,
            );

            match controller.claim(&CampaignId::new(campaign_id)).await {
                ClaimOutcome::Submitted(handle) => {
                    println!("{}", handle.hash);
                    Ok(ExitCode::SUCCESS)
                }
                ClaimOutcome::Failed(_) => Ok(ExitCode::FAILURE),
                ClaimOutcome::Rejected(RejectReason::Disabled) => {
                    eprintln!("Claim Donation is disabled (set CLAIM_ENABLED=true; the campaign needs donations)");
                    Ok(ExitCode::FAILURE)
                }
                ClaimOutcome::Rejected(RejectReason::InFlight) => Ok(ExitCode::FAILURE),
            }
        }
    }
}
