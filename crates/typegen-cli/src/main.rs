//! Typegen CLI.
//!
//! Reads a PocketBase collection schema and writes TypeScript declarations.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use typegen_compiler::config::DEFAULT_OUT_FILE;
use typegen_compiler::{CompilerError, GeneratorConfig, RemoteAuth, SchemaSourceConfig, TypeGenerator};

mod ui;

#[derive(Parser, Debug)]
#[command(name = "typegen", version)]
#[command(about = "Generate TypeScript declarations from a PocketBase collection schema")]
struct Cli {
    /// Path to the backend's SQLite database file
    #[arg(short, long, conflicts_with = "json")]
    db: Option<PathBuf>,

    /// Path to a JSON export of the collections
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// URL of a running backend
    #[arg(short, long, env = "PB_TYPEGEN_URL")]
    url: Option<String>,

    /// Superuser email, used with --url
    #[arg(short, long, env = "PB_TYPEGEN_EMAIL")]
    email: Option<String>,

    /// Superuser password, used with --url
    #[arg(short, long, env = "PB_TYPEGEN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Superuser token, used with --url instead of email/password
    #[arg(short, long, env = "PB_TYPEGEN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Read PB_TYPEGEN_* settings from a dotenv file (default: .env)
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = ".env")]
    env: Option<PathBuf>,

    /// Output file for the type declarations
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    out: PathBuf,

    /// Also write the field constraints side-table to this file
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Skip the SDK imports and client types (TypedPocketBase, expand helpers)
    #[arg(long)]
    no_sdk: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Fills connection settings that are still unset from the `--env` file.
    ///
    /// Flags and the process environment win over the file.
    fn load_env_file(&mut self) -> Result<(), CompilerError> {
        let Some(path) = &self.env else {
            return Ok(());
        };

        let entries = dotenvy::from_path_iter(path).map_err(|e| CompilerError::io(path, e.to_string()))?;
        for entry in entries {
            let (key, value) = entry.map_err(|e| CompilerError::io(path, e.to_string()))?;
            let slot = match key.as_str() {
                "PB_TYPEGEN_URL" => &mut self.url,
                "PB_TYPEGEN_EMAIL" => &mut self.email,
                "PB_TYPEGEN_PASSWORD" => &mut self.password,
                "PB_TYPEGEN_TOKEN" => &mut self.token,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        tracing::debug!(path = %path.display(), "loaded environment file");
        Ok(())
    }

    /// Picks the schema source. A local file wins over a URL, which may come
    /// from the environment.
    fn source(&self) -> Result<SchemaSourceConfig, CompilerError> {
        if let Some(db) = &self.db {
            return Ok(SchemaSourceConfig::Database(db.clone()));
        }
        if let Some(json) = &self.json {
            return Ok(SchemaSourceConfig::Json(json.clone()));
        }

        let Some(url) = &self.url else {
            return Err(CompilerError::MissingSchemaSource);
        };

        let auth = match (&self.token, &self.email, &self.password) {
            (Some(token), _, _) => RemoteAuth::Token(token.clone()),
            (None, Some(email), Some(password)) => RemoteAuth::Password {
                email: email.clone(),
                password: password.clone(),
            },
            _ => {
                return Err(CompilerError::Authentication {
                    url: url.clone(),
                    message: "pass --token, or both --email and --password".to_string(),
                })
            }
        };

        Ok(SchemaSourceConfig::Remote {
            url: url.clone(),
            auth,
        })
    }

    fn config(&self) -> Result<GeneratorConfig, CompilerError> {
        Ok(GeneratorConfig {
            source: self.source()?,
            out: self.out.clone(),
            metadata_out: self.metadata.clone(),
            sdk: !self.no_sdk,
        })
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.load_env_file()?;
    let config = cli.config()?;
    let start = Instant::now();

    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    let message = match &config.source {
        SchemaSourceConfig::Remote { url, .. } => format!("Fetching schema from {}...", url),
        SchemaSourceConfig::Database(path) | SchemaSourceConfig::Json(path) => {
            format!("Reading schema from {}...", path.display())
        }
    };
    let spinner = ui::spinner(&message);

    let generator = TypeGenerator::new(config);
    let summary = match generator.run() {
        Ok(summary) => summary,
        Err(e) => {
            spinner.finish_and_clear();
            ui::error("Generation failed.");
            return Err(e.into());
        }
    };
    spinner.finish_and_clear();

    ui::success(&format!("Generated {}", generator.config().out.display()));
    if let Some(metadata) = &generator.config().metadata_out {
        ui::success(&format!("Generated {}", metadata.display()));
    }
    ui::dim(&ui::summary_line(summary.collections, summary.relations));

    // Each warning was already logged as it was found.
    if !summary.warnings.is_empty() {
        ui::warn(&format!("{} field(s) typed as unknown", summary.warnings.len()));
    }

    ui::timing("Done", start.elapsed().as_millis());
    Ok(())
}
