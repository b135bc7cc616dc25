use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "review-cli", about = "Drawing review API CLI")]
struct Cli {
    #[arg(long, env = "REVIEW_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Project(ProjectCommand),
    Drawing(DrawingCommand),
    Annotation(AnnotationCommand),
    Workflow(WorkflowCommand),
    User(UserCommand),
    /// Upload a drawing file; prints the stored URLs.
    Upload {
        path: PathBuf,
    },
}

// =============================================================================
// WIRE ENUMS
// =============================================================================

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AnnotationKind {
    Comment,
    Highlight,
    Measurement,
    Stamp,
    Arrow,
    Rectangle,
}

impl AnnotationKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Highlight => "highlight",
            Self::Measurement => "measurement",
            Self::Stamp => "stamp",
            Self::Arrow => "arrow",
            Self::Rectangle => "rectangle",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Draft,
    InReview,
    Approved,
    Rejected,
    NeedsRevision,
}

impl Status {
    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::NeedsRevision => "needs_revision",
        }
    }
}

// =============================================================================
// SUBCOMMANDS
// =============================================================================

#[derive(Args, Debug)]
struct ProjectCommand {
    #[command(subcommand)]
    command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProjectSubcommand {
    List,
    Read { project_id: String },
}

#[derive(Args, Debug)]
struct DrawingCommand {
    #[command(subcommand)]
    command: DrawingSubcommand,
}

#[derive(Subcommand, Debug)]
enum DrawingSubcommand {
    List {
        #[arg(long)]
        project_id: Option<String>,
    },
    Read {
        drawing_id: String,
    },
    Versions {
        drawing_id: String,
    },
    AddVersion {
        drawing_id: String,
        #[arg(long)]
        file_url: String,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        created_by: Option<String>,
    },
}

#[derive(Args, Debug)]
struct AnnotationCommand {
    #[command(subcommand)]
    command: AnnotationSubcommand,
}

#[derive(Subcommand, Debug)]
enum AnnotationSubcommand {
    List {
        drawing_id: String,
        #[arg(long)]
        version_id: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    Create(AnnotationCreateArgs),
    Resolve {
        annotation_id: String,
    },
    Unresolve {
        annotation_id: String,
    },
    Delete {
        annotation_id: String,
    },
    Reply {
        annotation_id: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        author_id: Option<String>,
    },
}

#[derive(Args, Debug)]
struct AnnotationCreateArgs {
    #[arg(long)]
    drawing_id: String,
    #[arg(long)]
    version_id: String,
    #[arg(long = "type", value_enum, default_value = "comment")]
    kind: AnnotationKind,
    #[arg(long)]
    content: String,
    #[arg(long)]
    x: f64,
    #[arg(long)]
    y: f64,
    #[arg(long)]
    width: f64,
    #[arg(long)]
    height: f64,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    author_id: Option<String>,
}

#[derive(Args, Debug)]
struct WorkflowCommand {
    #[command(subcommand)]
    command: WorkflowSubcommand,
}

#[derive(Subcommand, Debug)]
enum WorkflowSubcommand {
    List {
        #[arg(long)]
        drawing_id: Option<String>,
    },
    SetStatus {
        workflow_id: String,
        #[arg(value_enum)]
        status: Status,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List,
    Me,
}

// =============================================================================
// DISPATCH
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Project(project) => run_project(&ctx, project).await,
        Command::Drawing(drawing) => run_drawing(&ctx, drawing).await,
        Command::Annotation(annotation) => run_annotation(&ctx, annotation).await,
        Command::Workflow(workflow) => run_workflow(&ctx, workflow).await,
        Command::User(user) => run_user(&ctx, user).await,
        Command::Upload { path } => run_upload(&ctx, &path).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(endpoint(&cli.base_url, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_project(cli: &CliContext, project: ProjectCommand) -> Result<(), CliError> {
    let json = match project.command {
        ProjectSubcommand::List => get(cli, "/api/projects", &[]).await?,
        ProjectSubcommand::Read { project_id } => get(cli, &format!("/api/projects/{project_id}"), &[]).await?,
    };
    print_json(&json)
}

async fn run_drawing(cli: &CliContext, drawing: DrawingCommand) -> Result<(), CliError> {
    let json = match drawing.command {
        DrawingSubcommand::List { project_id } => {
            get(cli, "/api/drawings", &query_pairs(&[("project_id", project_id)])).await?
        }
        DrawingSubcommand::Read { drawing_id } => get(cli, &format!("/api/drawings/{drawing_id}"), &[]).await?,
        DrawingSubcommand::Versions { drawing_id } => {
            get(cli, &format!("/api/drawings/{drawing_id}/versions"), &[]).await?
        }
        DrawingSubcommand::AddVersion { drawing_id, file_url, summary, created_by } => {
            let mut body = Map::new();
            body.insert("file_url".to_owned(), Value::String(file_url));
            if let Some(summary) = summary {
                body.insert("changes_summary".to_owned(), Value::String(summary));
            }
            if let Some(created_by) = created_by {
                body.insert("created_by_id".to_owned(), Value::String(created_by));
            }
            let path = format!("/api/drawings/{drawing_id}/versions");
            api_request(cli, reqwest::Method::POST, &path, &[], Some(Value::Object(body))).await?
        }
    };
    print_json(&json)
}

async fn run_annotation(cli: &CliContext, annotation: AnnotationCommand) -> Result<(), CliError> {
    let json = match annotation.command {
        AnnotationSubcommand::List { drawing_id, version_id, page } => {
            let query = query_pairs(&[("version_id", version_id), ("page", page.map(|p| p.to_string()))]);
            get(cli, &format!("/api/drawings/{drawing_id}/annotations"), &query).await?
        }
        AnnotationSubcommand::Create(args) => {
            api_request(cli, reqwest::Method::POST, "/api/annotations", &[], Some(annotation_body(&args))).await?
        }
        AnnotationSubcommand::Resolve { annotation_id } => {
            let path = format!("/api/annotations/{annotation_id}/resolve");
            api_request(cli, reqwest::Method::PUT, &path, &[], None).await?
        }
        AnnotationSubcommand::Unresolve { annotation_id } => {
            let path = format!("/api/annotations/{annotation_id}/unresolve");
            api_request(cli, reqwest::Method::PUT, &path, &[], None).await?
        }
        AnnotationSubcommand::Delete { annotation_id } => {
            let path = format!("/api/annotations/{annotation_id}");
            api_request(cli, reqwest::Method::DELETE, &path, &[], None).await?
        }
        AnnotationSubcommand::Reply { annotation_id, content, author_id } => {
            let path = format!("/api/annotations/{annotation_id}/replies");
            let query = query_pairs(&[("content", Some(content)), ("author_id", author_id)]);
            api_request(cli, reqwest::Method::POST, &path, &query, None).await?
        }
    };
    print_json(&json)
}

async fn run_workflow(cli: &CliContext, workflow: WorkflowCommand) -> Result<(), CliError> {
    let json = match workflow.command {
        WorkflowSubcommand::List { drawing_id } => {
            get(cli, "/api/workflows", &query_pairs(&[("drawing_id", drawing_id)])).await?
        }
        WorkflowSubcommand::SetStatus { workflow_id, status } => {
            let path = format!("/api/workflows/{workflow_id}/status");
            let query = query_pairs(&[("status", Some(status.as_str().to_owned()))]);
            api_request(cli, reqwest::Method::PUT, &path, &query, None).await?
        }
    };
    print_json(&json)
}

async fn run_user(cli: &CliContext, user: UserCommand) -> Result<(), CliError> {
    let json = match user.command {
        UserSubcommand::List => get(cli, "/api/users", &[]).await?,
        UserSubcommand::Me => get(cli, "/api/users/me", &[]).await?,
    };
    print_json(&json)
}

async fn run_upload(cli: &CliContext, path: &Path) -> Result<(), CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());

    let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
    let response = reqwest::Client::new()
        .post(endpoint(&cli.base_url, "/api/upload"))
        .multipart(form)
        .send()
        .await?;
    let json = read_response(response).await?;
    print_json(&json)
}

// =============================================================================
// HTTP HELPERS
// =============================================================================

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Keep only the query parameters that were actually given.
fn query_pairs(pairs: &[(&'static str, Option<String>)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| value.clone().map(|value| (*key, value)))
        .collect()
}

fn annotation_body(args: &AnnotationCreateArgs) -> Value {
    let mut body = json!({
        "drawing_id": args.drawing_id,
        "version_id": args.version_id,
        "type": args.kind.as_str(),
        "content": args.content,
        "position": {
            "x": args.x,
            "y": args.y,
            "width": args.width,
            "height": args.height,
            "page": args.page,
        },
    });
    if let (Some(author_id), Some(map)) = (&args.author_id, body.as_object_mut()) {
        map.insert("author_id".to_owned(), Value::String(author_id.clone()));
    }
    body
}

async fn get(cli: &CliContext, path: &str, query: &[(&'static str, String)]) -> Result<Value, CliError> {
    api_request(cli, reqwest::Method::GET, path, query, None).await
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<Value>,
) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let request = client.request(method, endpoint(&cli.base_url, path)).query(query);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    read_response(response).await
}

async fn read_response(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        let message = value
            .get("detail")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), str::to_owned);
        return Err(CliError::ServerError { status: status.as_u16(), message });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
