use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use shotcode::{Project, ShotCode, ShotSheet, ShotStatus, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "shotcode", version)]
struct Cli {
    /// Log mutations and resolution steps to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every shot of a project with its shotcode.
    List(ListArgs),
    /// Compute the next automatic shot number.
    Next(NextArgs),
    /// Format a scene and shot number as a shotcode.
    Format(FormatArgs),
    /// Lock the shot currently shown under a shotcode.
    Lock(CodeArgs),
    /// Unlock the shot currently shown under a shotcode.
    Unlock(CodeArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Only show shots with these statuses (repeatable).
    #[arg(long = "status")]
    statuses: Vec<ShotStatus>,

    /// Print the resolved sheet as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct NextArgs {
    /// Resolved number of the preceding shot (0 for the first shot).
    #[arg(long, default_value_t = 0)]
    previous: u32,

    /// Locked shot numbers in the scene (comma-separated or repeated).
    #[arg(long, value_delimiter = ',')]
    locked: Vec<u32>,
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// Scene number.
    #[arg(long)]
    scene: u32,

    /// Shot number.
    #[arg(long)]
    shot: u32,
}

#[derive(Parser, Debug)]
struct CodeArgs {
    /// Project JSON, rewritten in place.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Shotcode as currently displayed, e.g. `03-020`.
    #[arg(long)]
    code: ShotCode,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Next(args) => cmd_next(args),
        Command::Format(args) => cmd_format(args),
        Command::Lock(args) => cmd_lock(args),
        Command::Unlock(args) => cmd_unlock(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<Project> {
    Project::load(path).with_context(|| format!("load project '{}'", path.display()))
}

fn save(project: &Project, path: &Path) -> anyhow::Result<()> {
    project
        .save(path)
        .with_context(|| format!("write project '{}'", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let project = load(&args.in_path)?;
    let filter = StatusFilter::only(args.statuses)?;
    let sheet = project.sheet(&filter).context("resolve shot sheet")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
    } else {
        print!("{}", render_sheet(&sheet));
    }
    Ok(())
}

fn cmd_next(args: NextArgs) -> anyhow::Result<()> {
    let number = shotcode::next_shot_auto_number(args.previous, &args.locked)
        .with_context(|| format!("next shot number after {}", args.previous))?;
    println!("{number}");
    Ok(())
}

fn cmd_format(args: FormatArgs) -> anyhow::Result<()> {
    println!("{}", shotcode::shot_code(args.scene, args.shot));
    Ok(())
}

fn cmd_lock(args: CodeArgs) -> anyhow::Result<()> {
    let mut project = load(&args.in_path)?;
    let shot = project.find_by_code(args.code)?;
    let code = project.lock_shot_code(&shot)?;
    save(&project, &args.in_path)?;
    println!("{code}");
    Ok(())
}

fn cmd_unlock(args: CodeArgs) -> anyhow::Result<()> {
    let mut project = load(&args.in_path)?;
    let shot = project.find_by_code(args.code)?;
    project
        .edit_shot_code(&shot, "")
        .with_context(|| format!("unlock {}", args.code))?;
    let code = project.shot_code(&shot)?;
    save(&project, &args.in_path)?;
    println!("{code}");
    Ok(())
}

fn render_sheet(sheet: &ShotSheet) -> String {
    let mut out = format!("{}\n", sheet.project);
    for scene in &sheet.scenes {
        let lock = if scene.locked { " (locked)" } else { "" };
        out.push_str(&format!("\n#{}{lock} {}\n", scene.number, scene.description));
        for row in &scene.rows {
            let lock = if row.locked { '*' } else { ' ' };
            out.push_str(&format!(
                "  {}{lock} {:<8} {:<16} {}",
                row.code,
                row.status,
                row.location.as_deref().unwrap_or("-"),
                row.description,
            ));
            if !row.notes.is_empty() {
                out.push_str(&format!("  [{}]", row.notes));
            }
            out.push('\n');
        }
    }
    out
}
