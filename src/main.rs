mod api;
mod server;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persona_playback::config::PlaybackConfig;
use persona_playback::library::{ContentLibrary, LibraryFilter, NewContentItem};
use persona_playback::persona::{
    all_personas, browse_personas, clear_selected_persona, discovery_personas, featured_personas, find_persona,
    load_selected_persona, resolve_persona, save_selected_persona, search_personas,
    SelectedPersona,
};
use persona_playback::response::assemble_response;
use persona_playback::samples::Platform;
use persona_playback::scoring::analyze_content;
use persona_playback::store::LocalStore;
use persona_playback::transform::{transform_tagged, Style};
use persona_playback::{
    format_score, score_bar, truncate_preview, ContentKind, PlaybackEngine, PreviewSession,
    VariationAxis,
};

#[derive(Parser)]
#[command(name = "persona-playback", about = "Preview how audience personas respond to content")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    no_delay: bool,
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List or search personas
    Personas(PersonasArgs),
    /// Store or clear the selected persona
    Select(SelectArgs),
    /// Run the full preview: reaction, insights and variations
    Preview(PreviewArgs),
    /// Restyle content with one template
    Transform(TransformArgs),
    /// Generate content variations along one axis
    Variations(VariationsArgs),
    /// Canned first-person persona response
    Respond(RespondArgs),
    /// Headline analysis metrics for a piece of content
    Analyze(TextArgs),
    /// Print a sample piece of content for a platform
    Sample(SampleArgs),
    /// Manage the content library
    #[command(subcommand)]
    Library(LibraryCommand),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct PersonasArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long, conflicts_with_all = ["all", "browse"])]
    discover: bool,
    #[arg(long, conflicts_with = "all")]
    browse: bool,
    #[arg(long)]
    all: bool,
}

#[derive(Args, Debug, Clone)]
struct SelectArgs {
    persona_id: Option<String>,
    #[arg(long, conflicts_with = "persona_id")]
    clear: bool,
}

#[derive(Args, Debug, Clone, Default)]
struct TextArgs {
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct PreviewArgs {
    #[command(flatten)]
    input: TextArgs,
    #[arg(long)]
    persona: Option<String>,
    #[arg(long, default_value = "blog")]
    platform: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long, default_value = "tone")]
    axis: String,
}

#[derive(Args, Debug, Clone)]
struct TransformArgs {
    #[command(flatten)]
    input: TextArgs,
    #[arg(long)]
    style: String,
}

#[derive(Args, Debug, Clone)]
struct VariationsArgs {
    #[command(flatten)]
    input: TextArgs,
    #[arg(long)]
    persona: Option<String>,
    #[arg(long, default_value = "tone")]
    axis: String,
}

#[derive(Args, Debug, Clone)]
struct RespondArgs {
    #[command(flatten)]
    input: TextArgs,
    #[arg(long)]
    persona: Option<String>,
    #[arg(long, default_value = "text")]
    kind: String,
}

#[derive(Args, Debug, Clone)]
struct SampleArgs {
    #[arg(long, default_value = "blog")]
    platform: String,
}

#[derive(Subcommand, Debug, Clone)]
enum LibraryCommand {
    List(LibraryListArgs),
    Add(LibraryAddArgs),
    Remove(LibraryRemoveArgs),
}

#[derive(Args, Debug, Clone)]
struct LibraryListArgs {
    #[arg(long)]
    kind: Option<String>,
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct LibraryAddArgs {
    #[command(flatten)]
    input: TextArgs,
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "text")]
    kind: String,
    #[arg(long)]
    persona: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct LibraryRemoveArgs {
    item_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (mut config, config_path) = PlaybackConfig::load(cli.config)?;
    if cli.no_delay {
        config.latency.enabled = false;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    tracing::debug!(config_path = ?config_path, "loaded configuration");

    let command = cli
        .command
        .unwrap_or(Command::Personas(PersonasArgs {
            search: None,
            discover: false,
            browse: false,
            all: false,
        }));

    match command {
        Command::Personas(args) => run_personas(args),
        Command::Select(args) => run_select(args, &config).await,
        Command::Preview(args) => run_preview(args, &config).await,
        Command::Transform(args) => run_transform(args),
        Command::Variations(args) => run_variations(args, &config).await,
        Command::Respond(args) => run_respond(args, &config).await,
        Command::Analyze(args) => run_analyze(args, &config).await,
        Command::Sample(args) => run_sample(args, &config),
        Command::Library(command) => run_library(command, &config).await,
        Command::Serve(args) => server::serve(args, config).await,
    }
}

fn run_personas(args: PersonasArgs) -> Result<(), String> {
    let personas = if args.all {
        all_personas()
    } else if args.discover {
        discovery_personas()
    } else if args.browse {
        browse_personas()
    } else {
        featured_personas()
    };
    let personas = match args.search.as_deref() {
        Some(query) => search_personas(&personas, query),
        None => personas,
    };

    if personas.is_empty() {
        println!("No personas match.");
        return Ok(());
    }
    for persona in personas {
        println!(
            "{:<5} {} ({}, engagement {})",
            persona.id,
            persona.name,
            persona.tone,
            format_score(persona.engagement)
        );
        println!("      {}", truncate_preview(&persona.description, 60));
        println!("      interests: {}", persona.interests.join(", "));
    }
    Ok(())
}

async fn run_select(args: SelectArgs, config: &PlaybackConfig) -> Result<(), String> {
    let store = open_store(config).await;
    if args.clear {
        let removed = clear_selected_persona(&store).await?;
        println!("{}", if removed { "Selection cleared." } else { "No persona was selected." });
        return Ok(());
    }

    match args.persona_id {
        Some(id) => {
            let persona = find_persona(&id).ok_or_else(|| format!("unknown persona: {}", id))?;
            save_selected_persona(&store, &SelectedPersona::from_persona(&persona)).await?;
            println!("Selected {} ({})", persona.name, persona.id);
        }
        None => match load_selected_persona(&store).await {
            Some(selected) => println!("Selected {} ({})", selected.name, selected.id),
            None => println!("No persona selected."),
        },
    }
    Ok(())
}

async fn run_preview(args: PreviewArgs, config: &PlaybackConfig) -> Result<(), String> {
    let platform = Platform::from_str(&args.platform)
        .ok_or_else(|| format!("invalid platform: {}", args.platform))?;
    let axis = parse_axis(&args.axis)?;
    let text = read_text(args.input.text)?;
    let store = open_store(config).await;
    let persona = resolve_persona(&store, args.persona.as_deref())
        .await
        .map_err(|err| err.to_string())?;

    let engine = PlaybackEngine::from_config(config);
    let mut source = engine.source();
    let mut session = PreviewSession::new();
    session.select_persona(persona);
    session
        .submit_content(&text, platform, args.title)
        .map_err(|err| err.to_string())?;

    simulate_latency(config.latency.delay(config.latency.analyze_ms), "analyzing content").await;
    simulate_latency(config.latency.delay(config.latency.reaction_ms), "waiting for persona").await;
    let reaction = session
        .simulate(&engine, &mut source)
        .map_err(|err| err.to_string())?
        .clone();

    if let Some(persona) = session.persona() {
        println!("Persona: {} ({})", persona.name, persona.tone);
    }
    if let Some(title) = session.draft().and_then(|draft| draft.title.as_deref()) {
        println!("Title: {}", title);
    }
    println!("Reaction: {}", reaction.band().label());
    println!("\nFeedback: {}", reaction.feedback);
    println!("Emotional response: {}", reaction.emotional_response);
    println!("Suggestion: {}", reaction.suggestion);

    simulate_latency(config.latency.delay(config.latency.insights_ms), "loading insights").await;
    println!("\nInsights:");
    print_metric("sentiment", reaction.sentiment);
    print_metric("engagement", reaction.engagement);
    print_metric("sharing", reaction.sharing);
    print_metric("conversion", reaction.conversion);

    simulate_latency(config.latency.delay(config.latency.variations_ms), "generating variations").await;
    let variations = session
        .generate_variations(axis, &engine, &mut source)
        .map_err(|err| err.to_string())?;
    println!("\nVariations ({}):", axis.label());
    for variant in variations {
        print_variant(variant);
    }
    Ok(())
}

fn run_transform(args: TransformArgs) -> Result<(), String> {
    let text = read_text(args.input.text)?;
    if Style::from_str(&args.style).is_none() {
        tracing::warn!(style = %args.style, "unknown style, returning content unchanged");
    }
    println!("{}", transform_tagged(&text, &args.style));
    Ok(())
}

async fn run_variations(args: VariationsArgs, config: &PlaybackConfig) -> Result<(), String> {
    let axis = parse_axis(&args.axis)?;
    let text = read_text(args.input.text)?;
    let store = open_store(config).await;
    let persona = resolve_persona(&store, args.persona.as_deref())
        .await
        .map_err(|err| err.to_string())?;

    let engine = PlaybackEngine::from_config(config);
    let mut source = engine.source();
    let mut session = PreviewSession::new();
    session.select_persona(persona);
    session
        .submit_content(&text, Platform::Blog, None)
        .map_err(|err| err.to_string())?;

    simulate_latency(config.latency.delay(config.latency.variations_ms), "generating variations").await;
    let variations = session
        .generate_variations(axis, &engine, &mut source)
        .map_err(|err| err.to_string())?;
    println!("{} variations created ({}):", variations.len(), axis.label());
    for variant in variations {
        print_variant(variant);
    }
    Ok(())
}

async fn run_respond(args: RespondArgs, config: &PlaybackConfig) -> Result<(), String> {
    let kind = ContentKind::from_str(&args.kind)
        .ok_or_else(|| format!("invalid content kind: {}", args.kind))?;
    let text = read_text(args.input.text)?;
    let store = open_store(config).await;
    let persona = resolve_persona(&store, args.persona.as_deref())
        .await
        .map_err(|err| err.to_string())?;

    simulate_latency(config.latency.delay(config.latency.response_ms), "waiting for persona").await;
    println!("{}", assemble_response(&persona.name, kind, &text));
    Ok(())
}

async fn run_analyze(args: TextArgs, config: &PlaybackConfig) -> Result<(), String> {
    let text = read_text(args.text)?;
    let engine = PlaybackEngine::from_config(config);
    let mut source = engine.source();

    simulate_latency(config.latency.delay(config.latency.analyze_ms), "analyzing content").await;
    let analysis = analyze_content(&mut source);
    println!("Content: {}", truncate_preview(&text, 60));
    print_metric("sentiment", analysis.sentiment);
    print_metric("engagement", analysis.engagement);
    print_metric("sharing", analysis.sharing);
    print_metric("conversion", analysis.conversion);
    Ok(())
}

fn run_sample(args: SampleArgs, config: &PlaybackConfig) -> Result<(), String> {
    let platform = Platform::from_str(&args.platform)
        .ok_or_else(|| format!("invalid platform: {}", args.platform))?;
    let engine = PlaybackEngine::from_config(config);
    let sample = platform.sample(&mut engine.source());
    if let Some(title) = sample.title {
        println!("Title: {}\n", title);
    }
    println!("{}", sample.content);
    Ok(())
}

async fn run_library(command: LibraryCommand, config: &PlaybackConfig) -> Result<(), String> {
    let store = open_store(config).await;
    let library = ContentLibrary::new(&store);

    match command {
        LibraryCommand::List(args) => {
            let kind = match args.kind.as_deref() {
                Some("all") | None => None,
                Some(value) => Some(
                    ContentKind::from_str(value)
                        .ok_or_else(|| format!("invalid content kind: {}", value))?,
                ),
            };
            let filter = LibraryFilter {
                kind,
                query: args.search,
            };
            let items = library.search(&filter).await;
            if items.is_empty() {
                println!("Library is empty.");
            }
            for item in items {
                println!(
                    "{}  [{}] {} (for {}, {})",
                    item.id,
                    item.kind.label(),
                    item.title,
                    item.persona_name,
                    item.created_at.format("%Y-%m-%d %H:%M")
                );
                println!("    {}", item.preview);
            }
        }
        LibraryCommand::Add(args) => {
            let kind = ContentKind::from_str(&args.kind)
                .ok_or_else(|| format!("invalid content kind: {}", args.kind))?;
            let text = read_text(args.input.text)?;
            let persona = resolve_persona(&store, args.persona.as_deref())
                .await
                .map_err(|err| err.to_string())?;
            let item = NewContentItem {
                title: args.title,
                kind,
                content: text,
            }
            .into_item(&persona, Utc::now())
            .map_err(|err| err.to_string())?;
            let saved = library.add(item).await?;
            println!("Saved {} ({})", saved.title, saved.id);
        }
        LibraryCommand::Remove(args) => {
            if library.delete(&args.item_id).await? {
                println!("Removed {}", args.item_id);
            } else {
                return Err(format!("library item not found: {}", args.item_id));
            }
        }
    }
    Ok(())
}

fn print_metric(label: &str, value: u8) {
    println!("  {:<11} {} {}", label, score_bar(value, 20), format_score(value));
}

fn print_variant(variant: &persona_playback::ContentVariant) {
    println!("\n[{}] {}", variant.id, variant.title);
    println!(
        "  engagement {} | conversion {} | shareability {}",
        format_score(variant.metrics.engagement),
        format_score(variant.metrics.conversion),
        format_score(variant.metrics.shareability)
    );
    for line in variant.content.lines() {
        println!("  {}", line);
    }
}

fn parse_axis(value: &str) -> Result<VariationAxis, String> {
    VariationAxis::from_str(value).ok_or_else(|| format!("invalid variation axis: {}", value))
}

async fn open_store(config: &PlaybackConfig) -> LocalStore {
    LocalStore::load(config.storage.state_path.clone()).await
}

async fn simulate_latency(delay: Duration, stage: &str) {
    if delay.is_zero() {
        return;
    }
    tracing::info!(stage, delay_ms = delay.as_millis() as u64, "simulating latency");
    tokio::time::sleep(delay).await;
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing content: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
