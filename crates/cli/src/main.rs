use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finpulse_core::backend::client::{critique_or_fallback, AdvisorBackend, HttpBackendClient};
use finpulse_core::backend::error::{BackendError, FailureClass};
use finpulse_core::config::Settings;
use finpulse_core::domain::company::CompanyProfile;
use finpulse_core::domain::metrics::{FinancialSnapshot, Modifiers};
use finpulse_core::report::StrategyReport;
use finpulse_core::sim;

mod output;

#[derive(Debug, Parser)]
#[command(name = "finpulse_cli")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ping the backend root endpoint.
    Health,

    /// Register a company and print its id.
    CreateCompany {
        #[arg(long)]
        name: String,

        #[arg(long)]
        industry: String,

        #[arg(long)]
        business_type: String,
    },

    /// Upload a P&L statement (CSV/XLS/XLSX) and print the computed
    /// metrics plus the AI assessment.
    Analyze {
        #[arg(long)]
        company_id: i64,

        #[arg(long)]
        file: std::path::PathBuf,
    },

    /// Project a what-if scenario, ask the AI CFO for a critique, and
    /// optionally export the strategy PDF.
    Simulate {
        #[arg(long)]
        revenue: f64,

        #[arg(long)]
        expenses: f64,

        /// Authoritative baseline profit; defaults to revenue - expenses.
        #[arg(long)]
        net_profit: Option<f64>,

        /// Fractional revenue modifier, e.g. 0.10 for +10%.
        #[arg(long, default_value_t = 0.0)]
        revenue_growth: f64,

        /// Fractional expense modifier, e.g. -0.05 for -5%.
        #[arg(long, default_value_t = 0.0)]
        expense_change: f64,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "General")]
        industry: String,

        #[arg(long, default_value = "SME")]
        business_type: String,

        /// Directory to write the strategy PDF into.
        #[arg(long)]
        export: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let backend = HttpBackendClient::from_settings(&settings)?;

    match args.command {
        Command::Health => {
            let body = backend.health().await.map_err(report_failure)?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Command::CreateCompany {
            name,
            industry,
            business_type,
        } => {
            let profile = CompanyProfile {
                name,
                industry,
                business_type,
            };
            let company = backend
                .create_company(&profile)
                .await
                .map_err(report_failure)?;
            tracing::info!(company_id = company.id, "company registered");
            println!("Registered {} with id {}", company.profile.name, company.id);
        }

        Command::Analyze { company_id, file } => {
            let filename = file
                .file_name()
                .and_then(|n| n.to_str())
                .context("upload path has no usable filename")?
                .to_string();
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;

            let outcome = backend
                .upload_financials(company_id, &filename, bytes)
                .await
                .map_err(report_failure)?;
            output::print_analysis(&outcome);
        }

        Command::Simulate {
            revenue,
            expenses,
            net_profit,
            revenue_growth,
            expense_change,
            name,
            industry,
            business_type,
            export,
        } => {
            let baseline = match net_profit {
                Some(net_profit) => FinancialSnapshot {
                    revenue,
                    expenses,
                    net_profit,
                },
                None => FinancialSnapshot::derived(revenue, expenses),
            };
            let modifiers = Modifiers {
                revenue_growth,
                expense_change,
            }
            .clamped();
            let profile = CompanyProfile {
                name,
                industry,
                business_type,
            };

            let projection = sim::project(&baseline, &modifiers);
            output::print_projection(&projection);

            let critique = critique_or_fallback(&backend, &baseline, &modifiers, &profile).await;
            println!();
            println!("AI CFO feedback:");
            println!("{critique}");

            if let Some(dir) = export {
                let report =
                    StrategyReport::assemble(&profile.name, &projection, &critique, &modifiers)?;
                let bytes = report.to_pdf_bytes()?;
                let path = dir.join(report.suggested_filename());
                tokio::fs::write(&path, bytes)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!();
                println!("Strategy PDF written to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Logs a class-specific hint before handing the error to anyhow, so the
/// operator can tell connectivity problems from backend rejections.
fn report_failure(err: BackendError) -> anyhow::Error {
    match err.class() {
        FailureClass::Network => {
            tracing::error!(error = %err, "no response from the backend; check connectivity and FINPULSE_API_URL");
        }
        FailureClass::Server => {
            tracing::error!(
                status = err.status(),
                body = err.server_message(),
                "backend rejected the request"
            );
        }
        FailureClass::Client => {
            tracing::error!(error = %err, "request was invalid before reaching the backend");
        }
    }
    let err = anyhow::Error::new(err);
    sentry_anyhow::capture_anyhow(&err);
    err
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
