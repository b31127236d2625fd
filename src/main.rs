use clap::Parser;
use mbti_scorer::cli::handlers::*;
use mbti_scorer::cli::Cli;
use mbti_scorer::cli::Commands;
use mbti_scorer::config::AppConfig;
use mbti_scorer::personality::TraitScorer;
use mbti_scorer::Result;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    mbti_scorer::logging::apply_backtrace(&config);

    // Initialize logging
    if cli.verbose {
        mbti_scorer::logging::init_logging_with_level("debug")?;
    } else {
        mbti_scorer::logging::init_logging_with_config(Some(&config))?;
    }
    info!("Configuration loaded successfully");

    let lexicon = config.lexicon()?;
    let scorer = TraitScorer::new(&lexicon, config.tie_break());

    // Execute the requested command
    match cli.command {
        Commands::Dimension { index } => handle_dimension_command(index, cli.json)?,
        Commands::Answer { dimension, text } => {
            handle_answer_command(&scorer, dimension, &text, cli.json)?;
        }
        Commands::Session { partial, input } => {
            handle_session_command(&scorer, &input, partial, cli.json)?;
        }
        Commands::Describe { label } => handle_describe_command(&label, cli.json)?,
        Commands::Config => handle_config_command(&config, cli.json)?,
    }

    Ok(())
}
