use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::thread;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use codemark_config::{Config, HighlightConfig};
use codemark_engine::{
    HighlightOptions, LanguageId, LineRanges, Node, Page, WordMarker, highlight, io, render,
};
use relative_path::RelativePathBuf;

#[derive(Parser)]
#[command(name = "codemark")]
#[command(about = "Render Markdown with syntax, line and word highlighted code blocks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render Markdown files to HTML pages
    Render {
        /// Files to render; defaults to the config's `content_glob`
        files: Vec<PathBuf>,
        /// Output directory; defaults to the config's `output_dir`
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Highlight one snippet read from a file or stdin
    Highlight {
        /// Source file; stdin when omitted
        file: Option<PathBuf>,
        /// Language name or alias
        #[arg(short, long)]
        lang: Option<String>,
        /// Lines to highlight, e.g. `1,3-5`
        #[arg(long, default_value = "")]
        lines: String,
        /// Word highlight marker
        #[arg(short, long)]
        marker: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
    /// Indented node outline
    Tree,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = Config::load()
        .with_context(|| format!("loading {}", Config::config_path().display()))?;

    match cli.command {
        Command::Render { files, out } => run_render(config.as_ref(), files, out),
        Command::Highlight {
            file,
            lang,
            lines,
            marker,
            format,
        } => {
            let source = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut source = String::new();
                    std::io::stdin().read_to_string(&mut source)?;
                    source
                }
            };
            let options = highlight_options(config.as_ref().map(|c| &c.highlight))?;
            let language = lang.as_deref().map_or(options.default_language, LanguageId::resolve);
            let marker = match marker {
                Some(marker) => WordMarker::new(marker)?,
                None => options.word_marker,
            };
            print!(
                "{}",
                highlight_snippet(&source, language, &lines, &marker, format)?
            );
            Ok(())
        }
    }
}

fn highlight_options(config: Option<&HighlightConfig>) -> Result<HighlightOptions> {
    let Some(config) = config else {
        return Ok(HighlightOptions::default());
    };
    Ok(HighlightOptions {
        default_language: LanguageId::resolve(&config.default_language),
        word_marker: WordMarker::new(config.word_marker.as_str())
            .context("invalid word_marker in config")?,
    })
}

fn highlight_snippet(
    source: &str,
    language: LanguageId,
    lines: &str,
    marker: &WordMarker,
    format: Format,
) -> Result<String> {
    let root = highlight(source, language, &LineRanges::parse(lines), marker);
    let node = Node::Root(root);
    Ok(match format {
        Format::Html => render::to_html(&node),
        Format::Json => serde_json::to_string_pretty(&node)? + "\n",
        Format::Tree => node.outline(),
    })
}

/// A Markdown file to render and its path below the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Job {
    source: PathBuf,
    relative: RelativePathBuf,
}

fn run_render(config: Option<&Config>, files: Vec<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let out_dir = match (out, config) {
        (Some(out), _) => out,
        (None, Some(config)) => config.output_dir.clone(),
        (None, None) => bail!(
            "no --out given and no config file at {}",
            Config::config_path().display()
        ),
    };

    let jobs = if files.is_empty() {
        let Some(config) = config else {
            bail!(
                "no files given and no config file at {}",
                Config::config_path().display()
            );
        };
        let base = glob_base(&config.content_glob);
        config
            .content_files()?
            .into_iter()
            .map(|source| job_for(source, Some(base.as_path())))
            .collect::<Result<Vec<_>>>()?
    } else {
        files
            .into_iter()
            .map(|source| job_for(source, None))
            .collect::<Result<Vec<_>>>()?
    };

    let options = highlight_options(config.map(|c| &c.highlight))?;
    let rendered = render_all(&jobs, &out_dir, &options);

    let mut failed = 0;
    for (job, result) in jobs.iter().zip(rendered) {
        match result {
            Ok(path) => log::info!("{} -> {}", job.source.display(), path.display()),
            Err(e) => {
                failed += 1;
                log::error!("{}: {e:#}", job.source.display());
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} files failed to render", jobs.len());
    }
    log::info!("rendered {} files into {}", jobs.len(), out_dir.display());
    Ok(())
}

/// The path of `source` below `base`, or just its file name.
fn job_for(source: PathBuf, base: Option<&Path>) -> Result<Job> {
    let relative = base
        .and_then(|base| source.strip_prefix(base).ok())
        .map(Path::to_path_buf)
        .or_else(|| source.file_name().map(PathBuf::from))
        .with_context(|| format!("{} has no file name", source.display()))?;
    let relative = RelativePathBuf::from_path(&relative)
        .with_context(|| format!("{} is not a relative path", relative.display()))?;
    Ok(Job { source, relative })
}

/// The directory part of a glob before its first wildcard.
fn glob_base(pattern: &str) -> PathBuf {
    Path::new(pattern)
        .components()
        .take_while(|component| match component {
            Component::Normal(part) => !part.to_string_lossy().contains(['*', '?', '[']),
            _ => true,
        })
        .collect()
}

/// Render every job, spreading them across scoped worker threads.
fn render_all(jobs: &[Job], out_dir: &Path, options: &HighlightOptions) -> Vec<Result<PathBuf>> {
    let workers = thread::available_parallelism().map_or(1, |n| n.get());
    let chunk_size = jobs.len().div_ceil(workers).max(1);

    render_chunks(jobs, chunk_size, |job| render_one(job, out_dir, options))
}

/// Run `render` over `jobs` on one scoped thread per chunk. Results line up
/// with `jobs`; every job in a chunk whose worker panicked gets an error.
fn render_chunks<F>(jobs: &[Job], chunk_size: usize, render: F) -> Vec<Result<PathBuf>>
where
    F: Fn(&Job) -> Result<PathBuf> + Sync,
{
    let render = &render;
    thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .chunks(chunk_size)
            .map(|chunk| {
                let handle = scope.spawn(move || chunk.iter().map(render).collect::<Vec<_>>());
                (chunk, handle)
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|(chunk, handle)| match handle.join() {
                Ok(results) => results,
                Err(_) => chunk
                    .iter()
                    .map(|job| {
                        Err(anyhow::anyhow!(
                            "render worker panicked on {}",
                            job.source.display()
                        ))
                    })
                    .collect(),
            })
            .collect()
    })
}

fn render_one(job: &Job, out_dir: &Path, options: &HighlightOptions) -> Result<PathBuf> {
    let source = std::fs::read_to_string(&job.source)
        .with_context(|| format!("reading {}", job.source.display()))?;
    let page = Page::new(&job.relative);
    let html = page.render(&source, options);
    io::write_file(page.output_path(), out_dir, &html)?;
    Ok(page.output_path().to_path(out_dir))
}
