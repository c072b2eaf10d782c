use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use replysmith::analytics;
use replysmith::banner::{BannerInfo, print_banner, print_session_summary};
use replysmith::commands::{CommandRegistry, CommandResult, SessionInfo, StateChange};
use replysmith::config::{Config, ConfigKey};
use replysmith::consts::{DEFAULT_LOG_FILTER, LOG_ENV, default_db_path, plural};
use replysmith::demo::demo_submissions;
use replysmith::engine::ResponseEngine;
use replysmith::events::{Event, EventBus};
use replysmith::picker::{RandomPicker, SeededPicker, TemplatePicker};
use replysmith::report::{BusinessTypesReport, RejectionReport, ResponseReport};
use replysmith::session::{Draft, FieldOverrides, assemble, read_form};
use replysmith::spinner::pace;
use replysmith::submission::{BusinessType, ReviewSubmission, display_label};
use replysmith::templates::TemplateSet;

#[derive(Parser)]
#[command(name = "replysmith", version, about = "Kind, canned replies to customer reviews.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database holding the saved business profile (use :memory: for none)
    #[arg(short, long)]
    db: Option<String>,

    /// Seed the template picker so replies are reproducible
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file of custom templates: {"1": [...], ..., "5": [...]}
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Pause before each interactive reply, in milliseconds
    #[arg(long, default_value_t = 1200)]
    delay_ms: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Reply to a single review
    Generate {
        #[command(flatten)]
        fields: SubmissionArgs,

        /// Print a JSON report instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check a submission without replying
    Validate {
        #[command(flatten)]
        fields: SubmissionArgs,

        /// Print a JSON report instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List known business types and their labels
    Types {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Reply to the built-in demo reviews
    Demo {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read or change the saved business profile
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show every profile value
    Show,
    /// Print one value (business-name, business-type)
    Get { key: String },
    /// Save a value
    Set { key: String, value: String },
    /// Forget a value
    Unset { key: String },
}

#[derive(Args)]
struct SubmissionArgs {
    /// Business name (defaults to the saved profile)
    #[arg(short, long)]
    name: Option<String>,

    /// Business type, e.g. restaurant or auto-repair (defaults to the saved profile)
    #[arg(short = 'k', long = "type")]
    business_type: Option<String>,

    /// Star rating, 1 to 5
    #[arg(short, long, allow_negative_numbers = true)]
    rating: Option<i64>,

    /// Text of the customer review
    #[arg(long)]
    review: Option<String>,

    /// JSON form with businessName, businessType, reviewText, rating; flags override it
    #[arg(short, long)]
    form: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let db_path = cli
        .db
        .clone()
        .or_else(|| default_db_path().map(|p| p.to_string_lossy().into_owned()))
        .unwrap_or_else(|| ":memory:".to_string());

    if let Some(Command::Config { action }) = &cli.command {
        return handle_config(&db_path, action);
    }
    if let Some(Command::Types { json }) = &cli.command {
        return print_types(*json);
    }

    let config = Config::open(&db_path)?;

    let (templates, templates_label) = match &cli.templates {
        Some(path) => (TemplateSet::load(path)?, path.display().to_string()),
        None => (TemplateSet::builtin(), "built-in".to_string()),
    };
    let (picker, picker_label): (Box<dyn TemplatePicker>, String) = match cli.seed {
        Some(seed) => (Box::new(SeededPicker::new(seed)), format!("seeded ({seed})")),
        None => (Box::new(RandomPicker), "random".to_string()),
    };
    let engine = ResponseEngine::new(templates, picker);

    let bus = EventBus::default();
    let observer = analytics::spawn(bus.subscribe());

    let outcome = match &cli.command {
        Some(Command::Generate { fields, json }) => {
            let submission = build_submission(fields, &config)?;
            reply_once(&engine, &bus, &submission, *json)
        }
        Some(Command::Validate { fields, json }) => {
            let submission = build_submission(fields, &config)?;
            validate_once(&bus, &submission, *json)
        }
        Some(Command::Demo { json }) => reply_to_demos(&engine, &bus, *json),
        Some(Command::Types { .. }) | Some(Command::Config { .. }) => Ok(()),
        None => {
            let draft = Draft::new(
                config.get(ConfigKey::BusinessName)?,
                config.get(ConfigKey::BusinessType)?,
            );
            print_banner(&BannerInfo {
                business: or_dash(&draft.business_name),
                business_type: or_dash(&draft.business_type),
                templates: &templates_label,
                picker: &picker_label,
                profile: &db_path,
            });
            let delay = Duration::from_millis(cli.delay_ms);
            repl(&engine, &bus, &config, &db_path, draft, delay).await
        }
    };

    // Closing the bus lets the observer finish and hand back its tally.
    drop(bus);
    let stats = observer.await.context("analytics task failed")?;
    if cli.command.is_none() {
        print_session_summary(&stats);
    }
    outcome
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "—" } else { value }
}

fn build_submission(args: &SubmissionArgs, config: &Config) -> Result<ReviewSubmission> {
    let form = args.form.as_deref().map(read_form).transpose()?;
    let overrides = FieldOverrides {
        business_name: args.name.clone(),
        business_type: args.business_type.clone(),
        review_text: args.review.clone(),
        rating: args.rating,
    };
    assemble(form, overrides, config)
}

fn reply_once(
    engine: &ResponseEngine,
    bus: &EventBus,
    submission: &ReviewSubmission,
    json: bool,
) -> Result<()> {
    if let Err(errors) = submission.check() {
        bus.emit(Event::rejected(&errors));
        if json {
            println!("{}", serde_json::to_string_pretty(&RejectionReport::from(&errors))?);
        } else {
            for error in errors.errors() {
                eprintln!("  ✗ {error}");
            }
        }
        bail!("submission rejected ({})", plural(errors.len() as u64, "error"));
    }

    let reply = engine.generate(submission);
    bus.emit(Event::generated(submission, &reply));
    if json {
        let report = ResponseReport::new(submission, &reply);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{reply}");
    }
    Ok(())
}

fn validate_once(bus: &EventBus, submission: &ReviewSubmission, json: bool) -> Result<()> {
    match submission.check() {
        Ok(()) => {
            if json {
                println!("{}", serde_json::json!({ "success": true, "errors": [] }));
            } else {
                println!("✓ submission is valid");
            }
            Ok(())
        }
        Err(errors) => {
            bus.emit(Event::rejected(&errors));
            if json {
                println!("{}", serde_json::to_string_pretty(&RejectionReport::from(&errors))?);
            } else {
                for error in errors.errors() {
                    println!("  ✗ {:<12} {error}", error.field());
                }
            }
            bail!("submission rejected ({})", plural(errors.len() as u64, "error"))
        }
    }
}

fn reply_to_demos(engine: &ResponseEngine, bus: &EventBus, json: bool) -> Result<()> {
    let mut reports = Vec::new();
    for demo in demo_submissions() {
        bus.emit(Event::DemoLoaded {
            business_name: demo.business_name.clone(),
        });
        let reply = engine.generate(&demo);
        bus.emit(Event::generated(&demo, &reply));
        if json {
            reports.push(ResponseReport::new(&demo, &reply));
        } else {
            println!(
                "— {} ({}, {}★)\n  \"{}\"\n=> {reply}\n",
                demo.name(),
                display_label(&demo.business_type),
                demo.rating.unwrap_or_default(),
                demo.review(),
            );
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_types(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&BusinessTypesReport::new())?);
    } else {
        for kind in BusinessType::ALL {
            println!("{:<13} {}", kind.key(), kind.label());
        }
    }
    Ok(())
}

fn handle_config(db_path: &str, action: &ConfigAction) -> Result<()> {
    let config = Config::open(db_path)?;
    match action {
        ConfigAction::Show => {
            for key in ConfigKey::ALL {
                let value = config.get(key)?.unwrap_or_else(|| "—".to_string());
                println!("{key:<14} {value}");
            }
        }
        ConfigAction::Get { key } => match config.get(key.parse()?)? {
            Some(value) => println!("{value}"),
            None => bail!("{key} is not set"),
        },
        ConfigAction::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            if value.trim().is_empty() {
                bail!("refusing to save an empty {key}");
            }
            config.set(key, value)?;
            println!("✓ {key} saved");
        }
        ConfigAction::Unset { key } => {
            let key: ConfigKey = key.parse()?;
            config.remove(key)?;
            println!("✓ {key} cleared");
        }
    }
    Ok(())
}

async fn repl(
    engine: &ResponseEngine,
    bus: &EventBus,
    config: &Config,
    db_path: &str,
    mut draft: Draft,
    delay: Duration,
) -> Result<()> {
    let registry = CommandRegistry::new();

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nreplysmith> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let info = SessionInfo {
            draft: &draft,
            db_path,
        };
        let result = registry.dispatch(input, &info).await;
        let submission = match result {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::StateChanged(change) => {
                apply_change(&mut draft, change, config, bus);
                continue;
            }
            CommandResult::Regenerate => match draft.resubmission() {
                Some(submission) => submission,
                None => continue,
            },
            CommandResult::NotACommand => {
                draft.last_review = Some(input.to_string());
                draft.submission(input)
            }
        };

        // Ctrl+C while the reply is pacing cancels the reply, not the REPL
        tokio::select! {
            _ = respond(engine, bus, &submission, delay) => {}
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
            }
        }
    }

    Ok(())
}

async fn respond(
    engine: &ResponseEngine,
    bus: &EventBus,
    submission: &ReviewSubmission,
    delay: Duration,
) {
    if let Err(errors) = submission.check() {
        bus.emit(Event::rejected(&errors));
        for error in errors.errors() {
            eprintln!("  ✗ {error}");
        }
        eprintln!("  fix the draft with /name, /type or /rating, then /regenerate");
        return;
    }

    pace(delay, "writing reply").await;
    let reply = engine.generate(submission);
    bus.emit(Event::generated(submission, &reply));
    println!("\n=> {reply}");
}

fn apply_change(draft: &mut Draft, change: StateChange, config: &Config, bus: &EventBus) {
    match &change {
        StateChange::BusinessName(name) => {
            save_profile(config, ConfigKey::BusinessName, name);
            println!("  ✓ business name: {name}");
        }
        StateChange::BusinessType(kind) => {
            save_profile(config, ConfigKey::BusinessType, kind);
            println!("  ✓ business type: {kind} ({})", display_label(kind));
        }
        StateChange::Rating(rating) => println!("  ✓ rating: {rating}"),
        StateChange::LoadDemo(demo) => {
            bus.emit(Event::DemoLoaded {
                business_name: demo.business_name.clone(),
            });
            println!("  ✓ loaded demo for {}, /regenerate to reply", demo.name());
        }
    }
    draft.apply(&change);
}

fn save_profile(config: &Config, key: ConfigKey, value: &str) {
    if let Err(e) = config.set(key, value) {
        tracing::warn!(%key, error = %e, "failed to save profile");
        eprintln!("  ✗ could not save {key} to profile: {e}");
    }
}
