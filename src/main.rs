//! zenplan - personalized yoga and meditation plans

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::Mutex;
use tracing::{info, warn};

use zenplan::ai::GeminiClient;
use zenplan::config::{DEFAULT_DB_PATH, DEFAULT_USER_ID};
use zenplan::profile::{ActivityLevel, EatingHabits, Gender, Goal, parse_measurement};
use zenplan::recommend::PlanStore;
use zenplan::{Config, Database, HealthProfile, Orchestrator, SavedPlan, tips};

#[derive(Parser)]
#[command(name = "zenplan")]
#[command(author, version, about = "Kế hoạch yoga và thiền cá nhân hóa")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "ZENPLAN_DB", default_value = DEFAULT_DB_PATH)]
    db: String,

    /// User whose profile and plan are used
    #[arg(long, global = true, env = "ZENPLAN_USER", default_value = DEFAULT_USER_ID)]
    user: String,

    /// Gemini API key; AI generation is disabled without it
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, global = true, env = "GEMINI_MODEL")]
    gemini_model: Option<String>,

    /// Seconds to wait for the AI before falling back to rules
    #[arg(long, global = true, env = "ZENPLAN_AI_TIMEOUT_SECS", default_value = "30")]
    ai_timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the health profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show the saved plan, generating one if needed
    Plan {
        /// Skip AI generation and use the rule-based plan
        #[arg(long)]
        no_ai: bool,
    },

    /// Delete the saved plan and generate a new one
    Regenerate {
        #[arg(long)]
        no_ai: bool,
    },

    /// Clear the saved plan; a fresh one is generated right away
    Delete {
        #[arg(long)]
        no_ai: bool,
    },

    /// Personalized tips
    Tips {
        #[arg(long)]
        no_ai: bool,
    },

    /// Random wellness tip
    Tip,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Update profile fields (unset flags keep their saved value)
    Set {
        /// Weight in kg
        #[arg(short, long, value_parser = parse_measurement)]
        weight: Option<f64>,

        /// Height in cm
        #[arg(short = 'H', long, value_parser = parse_measurement)]
        height: Option<f64>,

        #[arg(short, long)]
        age: Option<u32>,

        /// male | female | other
        #[arg(short, long)]
        gender: Option<Gender>,

        /// healthy | normal | unhealthy
        #[arg(short, long)]
        eating: Option<EatingHabits>,

        /// sedentary | light | moderate | active
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// weight_loss | muscle_gain | flexibility | relaxation
        #[arg(long)]
        goal: Option<Goal>,
    },

    /// Print the saved profile
    Show,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            db_path: self.db.clone(),
            user_id: self.user.clone(),
            gemini: None,
            ai_timeout: Duration::from_secs(self.ai_timeout_secs),
        }
        .with_gemini(self.gemini_api_key.clone(), self.gemini_model.clone())
    }
}

fn build_orchestrator(config: &Config, store: Arc<dyn PlanStore>) -> Orchestrator {
    let orchestrator = Orchestrator::new(store).with_ai_timeout(config.ai_timeout);

    match config.gemini.clone().map(GeminiClient::new) {
        Some(Ok(client)) => {
            info!(model = client.model(), "AI generation enabled");
            orchestrator.with_generator(Arc::new(client))
        }
        Some(Err(e)) => {
            warn!(error = %e, "Gemini client unavailable, using rule-based plans");
            orchestrator
        }
        None => orchestrator,
    }
}

async fn load_profile(db: &Mutex<Database>, user: &str) -> Result<HealthProfile> {
    db.lock()
        .await
        .get_profile(user)?
        .context("Chưa có hồ sơ sức khỏe. Hãy chạy `zenplan profile set` trước.")
}

fn print_plan(saved: &SavedPlan) {
    let source = if saved.recommendation.is_ai_generated() { "AI" } else { "quy tắc" };
    println!(
        "Kế hoạch tạo lúc {} (nguồn: {})",
        saved.created_at.format("%Y-%m-%d %H:%M"),
        source
    );
    println!("{:-<60}", "");
    print!("{}", saved.recommendation.format());
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.config();
    let user = config.user_id.as_str();

    let db = Arc::new(Mutex::new(Database::open(&config.db_path)?));
    let orchestrator = build_orchestrator(&config, db.clone());

    match cli.command {
        Some(Commands::Profile {
            action: ProfileAction::Set { weight, height, age, gender, eating, activity, goal },
        }) => {
            let db = db.lock().await;
            let mut profile = db.get_profile(user)?.unwrap_or_default();
            profile.merge(&HealthProfile {
                weight,
                height,
                age,
                gender,
                eating_habits: eating,
                activity_level: activity,
                goal,
            });
            db.save_profile(user, &profile)?;
            println!("Đã lưu hồ sơ:\n{}", profile);
            println!("\nKế hoạch đã lưu không đổi. Dùng `zenplan regenerate` để tạo lại.");
        }

        Some(Commands::Profile { action: ProfileAction::Show }) => {
            let profile = load_profile(&db, user).await?;
            println!("{}", profile);
        }

        Some(Commands::Plan { no_ai }) => {
            let profile = load_profile(&db, user).await?;
            let saved = orchestrator.get_or_create(user, &profile, !no_ai).await?;
            print_plan(&saved);
        }

        None => {
            let profile = load_profile(&db, user).await?;
            let saved = orchestrator.get_or_create(user, &profile, true).await?;
            print_plan(&saved);
        }

        Some(Commands::Regenerate { no_ai }) => {
            let profile = load_profile(&db, user).await?;
            let saved = orchestrator.regenerate(user, &profile, !no_ai).await?;
            print_plan(&saved);
        }

        Some(Commands::Delete { no_ai }) => {
            let profile = load_profile(&db, user).await?;
            let saved = orchestrator.regenerate(user, &profile, !no_ai).await?;
            println!("Đã xóa kế hoạch cũ của {}, kế hoạch mới:\n", user);
            print_plan(&saved);
        }

        Some(Commands::Tips { no_ai }) => {
            let profile = load_profile(&db, user).await?;
            for tip in orchestrator.tips(&profile, !no_ai).await {
                println!("• {}", tip);
            }
        }

        Some(Commands::Tip) => {
            println!("{}", tips::format_tip(tips::get_random_tip()));
        }
    }

    Ok(())
}
