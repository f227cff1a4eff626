//! Poststudio entrypoint: compose a draft into styled post text.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::{Config, RatioPreset, load_from};
use core_enrich::{ComposeOptions, Template, compose, file_stem, sentence_case};
use core_text::StyleKind;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "poststudio", version, about = "Compose styled social post text")]
struct Args {
    /// Draft file to read (UTF-8 text). Reads stdin when omitted.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `poststudio.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Text style: bold, italic, boldItalic, monospace, serifBold, underline, strike.
    #[arg(long)]
    pub style: Option<StyleKind>,
    /// Post template: blank, quote, tip, announcement.
    #[arg(long)]
    pub template: Option<Template>,
    /// Whitespace-separated hashtags.
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub prefix: Option<String>,
    #[arg(long)]
    pub suffix: Option<String>,
    /// Skip punctuation enrichment.
    #[arg(long = "no-enrich")]
    pub no_enrich: bool,
    /// Capitalize the start of the draft and each word after `. `.
    #[arg(long = "sentence-case")]
    pub sentence_case: bool,
    /// Print unstyled text.
    #[arg(long)]
    pub plain: bool,
    /// Aspect ratio key used in the export file stem (e.g. `4:5`, `1:1`).
    #[arg(long)]
    pub ratio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rendered {
    text: String,
    stem: String,
}

/// Merge config defaults with CLI overrides.
fn compose_options(args: &Args, config: &Config) -> ComposeOptions {
    let mut opts = config.compose_options();
    if let Some(style) = args.style {
        opts.style = style;
    }
    if let Some(template) = args.template {
        opts.template = template;
    }
    if let Some(tags) = &args.tags {
        opts.hashtags = tags.clone();
    }
    if let Some(prefix) = &args.prefix {
        opts.prefix = prefix.clone();
    }
    if let Some(suffix) = &args.suffix {
        opts.suffix = suffix.clone();
    }
    if args.no_enrich {
        opts.auto_enrich = false;
    }
    opts
}

fn render(args: &Args, draft: &str, config: &Config) -> Rendered {
    let opts = compose_options(args, config);
    let composed = if args.sentence_case {
        compose(&sentence_case(draft), &opts)
    } else {
        compose(draft, &opts)
    };
    let ratio = match &args.ratio {
        Some(key) => RatioPreset::find(key),
        None => config.visual().ratio,
    };
    let text = if args.plain {
        composed.as_str().to_string()
    } else {
        composed.styled()
    };
    // Slug from the plain text; styled letters would all collapse to dashes.
    let stem = file_stem(composed.as_str(), ratio.key);
    info!(
        target: "runtime",
        style = %opts.style,
        template = %opts.template,
        chars = text.chars().count(),
        ratio = ratio.key,
        "post_rendered"
    );
    Rendered { text, stem }
}

fn read_draft(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("reading draft {}", p.display()))?;
            tracing::debug!(target: "io", file = %p.display(), size_bytes = content.len(), "draft_read_ok");
            Ok(content)
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("reading draft from stdin")?;
            Ok(content)
        }
    }
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let file_appender = tracing_appender::rolling::never(log_dir, "poststudio.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; drop guard so writer shuts down.
        Err(_err) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: Args) -> Result<()> {
    let config = load_from(args.config.clone())?;
    info!(
        target: "runtime.startup",
        config_override = args.config.is_some(),
        config_loaded = config.raw.is_some(),
        "bootstrap_complete"
    );
    let draft = read_draft(args.path.as_deref())?;
    let rendered = render(&args, &draft, &config);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.text)?;
    eprintln!("stem: {}", rendered.stem);
    Ok(())
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!(target: "runtime", error = %e, "run_failed");
        return Err(e);
    }
    info!(target: "runtime", "shutdown");
    Ok(())
}
