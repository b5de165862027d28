use anyhow::Context;
use research_hub::{
    cli::{
        Cli, Commands,
        init::{self, InitConfig, InitResult},
        output::{Output, completion_message},
    },
    research::session,
    utils::{Credentials, ResearchConfig},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(config: &ResearchConfig, verbose: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    // Logs go to stderr so `--json` output on stdout stays parseable
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Commands::Init { path, force } = cli.command {
        return match init::run(InitConfig { path, force }, &output) {
            InitResult::Success | InitResult::AlreadyExists => Ok(()),
            InitResult::Error(e) => Err(anyhow::anyhow!(e)),
        };
    }

    let config = ResearchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Run {
            goal,
            json,
            credentials,
        } => {
            let credentials = Credentials::from(credentials).or(Credentials::from_env(&config));
            let outcome = session::run(&goal, &credentials, &config).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                output.banner();
                output.plan(&outcome.plan);
                output.findings(&outcome.findings);
                output.report(&outcome.report);
                output.newline();
                output.success(&completion_message(&outcome.findings));
            }
        }

        Commands::Plan {
            goal,
            json,
            credentials,
        } => {
            let credentials = Credentials::from(credentials).or(Credentials::from_env(&config));
            let plan = session::plan(&goal, &credentials, &config).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output.plan(&plan);
                output.newline();
            }
        }

        Commands::Config { validate } => {
            output.header("Configuration");
            output.kv("File", &cli.config.display().to_string());
            output.kv("Model", &config.llm.planner_model);
            output.kv("LLM endpoint", &config.llm.base_url);
            output.kv("Search endpoint", &config.search.endpoint);
            output.kv("Papers endpoint", &config.papers.endpoint);
            output.kv(
                "Store",
                &format!("{:?} ({})", config.store.backend, config.store.collection),
            );
            output.kv(
                "Max tasks",
                &config
                    .orchestrator
                    .max_tasks
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "unbounded".to_string()),
            );
            output.kv(
                "On task error",
                &format!("{:?}", config.orchestrator.on_task_error),
            );

            let credentials = Credentials::from_env(&config);
            output.header("Credentials");
            output.kv("Resolved", &format!("{:?}", credentials));

            if validate {
                match credentials.validate(&config) {
                    Ok(()) => output.success("Configuration and credentials are valid"),
                    Err(e) => {
                        output.error(&e.to_string());
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Init { .. } => unreachable!("handled before configuration is loaded"),
    }

    Ok(())
}
