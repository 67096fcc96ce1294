//! Sutra CLI — batch runner and query shell for graph databases
//!
//! Connection settings come from the environment (or a `.env` file):
//! SUTRA_URI, SUTRA_USERNAME, SUTRA_PASSWORD, and optionally the
//! SUTRA_LLM_* settings for the `ask` command.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sutra::http::{AppState, HttpServer};
use sutra::{batch, AgentRuntime, Config, CypherTool, GraphClient, Outcome, RemoteClient, StatementBatch};

#[derive(Parser)]
#[command(name = "sutra", version, about = "Sutra graph batch runner and query CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a file of `;`-separated Cypher statements
    Run {
        /// Path to the statement file
        file: PathBuf,
    },
    /// Execute a single Cypher query
    Query {
        /// The Cypher query string
        cypher: String,
    },
    /// Answer a natural-language question about the graph
    Ask {
        /// The question
        question: String,
    },
    /// Ping the graph store
    Ping,
    /// Serve the HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Start an interactive REPL
    Shell,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Set SUTRA_URI, SUTRA_USERNAME and SUTRA_PASSWORD (a .env file works).");
            std::process::exit(1);
        }
    };
    let client = Arc::new(RemoteClient::new(&config));

    let result = match cli.command {
        Commands::Run { file } => run_batch(&client, &file).await,
        Commands::Query { cypher } => run_query(&client, &cypher, &cli.format).await,
        Commands::Ask { question } => run_ask(&client, &config, &question).await,
        Commands::Ping => run_ping(client.as_ref()).await,
        Commands::Serve { port } => run_serve(&client, &config, port).await,
        Commands::Shell => run_shell(&client, &cli.format).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Run a statement file: verify connectivity, execute every statement in
/// order, print a per-statement trace and a final summary. Partial failure
/// is reported in the summary, not in the exit code.
async fn run_batch(
    client: &Arc<RemoteClient>,
    file: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !client.verify().await {
        return Err("cannot reach the graph store; check SUTRA_URI and credentials".into());
    }

    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {}", file.display(), e))?;
    let statements = StatementBatch::parse(&text);

    println!(
        "Executing {} statement(s) from {}",
        statements.len(),
        file.display()
    );

    let outcomes = batch::execute(&statements, client.as_ref()).await;

    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            Outcome::Success { statement, rows } => {
                println!("\n[{}/{}] OK: {}", i + 1, outcomes.len(), statement);
                for row in rows {
                    println!("  {}", serde_json::to_string(row)?);
                }
            }
            Outcome::Failure { statement, error } => {
                println!("\n[{}/{}] FAILED: {}", i + 1, outcomes.len(), statement);
                println!("  {}", error);
            }
        }
    }

    let summary = batch::summarize(&outcomes);
    println!(
        "\nTotal: {}  Succeeded: {}  Failed: {}",
        summary.total, summary.succeeded, summary.failed
    );

    Ok(())
}

async fn run_query(
    client: &Arc<RemoteClient>,
    cypher: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = client.run(cypher).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Csv => {
            if !result.columns.is_empty() {
                println!("{}", result.columns.join(","));
                for row in &result.records {
                    let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                    println!("{}", cells.join(","));
                }
            }
        }
        OutputFormat::Table => {
            if result.columns.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&result.columns);

            for row in &result.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", result.records.len());
        }
    }

    Ok(())
}

async fn run_ask(
    client: &Arc<RemoteClient>,
    config: &Config,
    question: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let agent = build_agent(client, config)?
        .ok_or("natural-language querying needs SUTRA_LLM_MODEL (and provider settings)")?;

    let answer = agent.answer(question).await?;
    println!("{}", answer);
    Ok(())
}

async fn run_ping(client: &RemoteClient) -> Result<(), Box<dyn std::error::Error>> {
    let result = client.ping().await?;
    println!("{}", result);
    Ok(())
}

async fn run_serve(
    client: &Arc<RemoteClient>,
    config: &Config,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState {
        client: Arc::clone(client) as Arc<dyn GraphClient>,
        agent: build_agent(client, config)?.map(Arc::new),
    };
    HttpServer::new(state, port).start().await
}

fn build_agent(
    client: &Arc<RemoteClient>,
    config: &Config,
) -> Result<Option<AgentRuntime>, Box<dyn std::error::Error>> {
    let Some(llm) = config.llm.as_ref() else {
        return Ok(None);
    };

    let mut agent = AgentRuntime::new(llm)?;
    agent.register_tool(Arc::new(CypherTool::new(
        Arc::clone(client) as Arc<dyn GraphClient>
    )));
    Ok(Some(agent))
}

async fn run_shell(
    client: &Arc<RemoteClient>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Sutra Interactive Shell");
    println!("Type Cypher statements, or :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("sutra> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :ping     — Ping the graph store");
                println!("  :quit     — Exit shell");
                println!("  <cypher>  — Execute a Cypher statement");
            }
            ":ping" => {
                if let Err(e) = run_ping(client.as_ref()).await {
                    eprintln!("Error: {}", e);
                }
            }
            cypher => {
                if let Err(e) = run_query(client, cypher, format).await {
                    eprintln!("Error: {}", e);
                }
            }
        }
    }

    println!("Bye!");
    Ok(())
}

fn format_table_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Object(map) => {
            // If it looks like a node/edge, show a compact representation
            if let Some(id) = map.get("id") {
                if let Some(labels) = map.get("labels") {
                    return format!("({}:{})", id, labels);
                }
                if let Some(t) = map.get("type") {
                    return format!("[{}:{}]", id, t);
                }
            }
            serde_json::to_string(v).unwrap_or_default()
        }
        serde_json::Value::Array(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => {
            let json = serde_json::to_string(v).unwrap_or_default();
            format!("\"{}\"", json.replace('"', "\"\""))
        }
    }
}
