//! Lessondeck - a learning-content site toolkit.
//!
//! This binary provides the CLI over the lessondeck library crates:
//! rendering lesson markdown, building the static site, searching the
//! catalog, running quizzes, and tracking learner progress.

mod cli;
mod pages;

use clap::Parser as ClapParser;
use cli::{Cli, Command};
use lessondeck_config::Config;
use lessondeck_core::{grade, Catalog, LessondeckError, Quiz, Result};
use lessondeck_progress::ProgressStore;
use lessondeck_render::render_markdown;
use log::{debug, error, info, warn, LevelFilter};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Lessondeck v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    match &cli.command {
        Command::Render { file, output, page } => {
            run_render(&config, file, output.as_deref(), *page)
        }
        Command::Build { output } => run_build(&config, output.as_deref()),
        Command::List => run_list(&config),
        Command::Search { query } => run_search(&config, query),
        Command::Complete { module, lesson } => run_complete(&config, *module, *lesson),
        Command::CompleteLab { title } => run_complete_lab(&config, title),
        Command::Quiz { module, answers } => run_quiz(&config, *module, answers.as_deref()),
        Command::Progress => run_progress(&config),
        Command::Paths => {
            run_paths(&config);
            Ok(())
        }
    }
}

/// Load configuration with an optional override (file path or inline TOML).
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_default();

    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            // It's a file path
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            // Try parsing as inline TOML
            match toml::from_str::<Config>(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    Ok(config)
}

/// The active catalog: a configured catalog file, or the built-in one.
fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.site.catalog_file {
        Some(path) => lessondeck_content::load_catalog_from(path),
        None => Ok(lessondeck_content::builtin_catalog().clone()),
    }
}

/// Open the progress store at its configured or platform-default path.
/// This is the load-once point; every mutation persists on its own.
fn open_store(config: &Config) -> ProgressStore {
    let path = config
        .store
        .progress_file
        .clone()
        .or_else(ProgressStore::default_path)
        .unwrap_or_else(|| {
            warn!("No platform data directory; keeping progress in the working directory");
            PathBuf::from("lessondeck-progress.toml")
        });
    ProgressStore::load(path)
}

/// Render one markdown file to stdout or a file.
fn run_render(config: &Config, file: &Path, output: Option<&Path>, page: bool) -> Result<()> {
    info!("Rendering {}", file.display());
    let source = std::fs::read_to_string(file)
        .map_err(|_| LessondeckError::Content(file.display().to_string()))?;

    let html = render_markdown(&source);
    let out = if page {
        let title = file.file_stem().and_then(|s| s.to_str()).unwrap_or("Lesson");
        pages::page(title, config.site.theme, &html)
    } else {
        html
    };

    match output {
        Some(path) => {
            std::fs::write(path, out)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", out),
    }
    Ok(())
}

/// Build the static site: one page per sourced lesson and template,
/// plus the index and stylesheet. A missing source becomes a visible
/// failure page naming the resource; the build keeps going.
fn run_build(config: &Config, output: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(config)?;
    let out_dir = output.unwrap_or_else(|| config.site.output_dir.as_path());
    std::fs::create_dir_all(out_dir)?;

    let content_dir = &config.site.content_dir;
    let theme = config.site.theme;
    let mut written = 0usize;
    let mut missing = 0usize;

    for module in &catalog.modules {
        for (index, lesson) in module.lessons.iter().enumerate() {
            let Some(source_path) = lesson.source() else {
                continue;
            };
            let body = match std::fs::read_to_string(content_dir.join(source_path)) {
                Ok(source) => render_markdown(&source),
                Err(e) => {
                    warn!("Missing lesson source {}: {}", source_path.display(), e);
                    missing += 1;
                    pages::failure_fragment(&source_path.display().to_string())
                }
            };
            let target = out_dir.join(pages::lesson_page_name(module.id, index));
            std::fs::write(&target, pages::page(lesson.title(), theme, &body))?;
            written += 1;
        }
    }

    for template in &catalog.templates {
        let body = match std::fs::read_to_string(content_dir.join(&template.file)) {
            Ok(source) => render_markdown(&source),
            Err(e) => {
                warn!("Missing template source {}: {}", template.file.display(), e);
                missing += 1;
                pages::failure_fragment(&template.file.display().to_string())
            }
        };
        let target = out_dir.join(pages::template_page_name(&template.file));
        std::fs::write(&target, pages::page(&template.title, theme, &body))?;
        written += 1;
    }

    std::fs::write(
        out_dir.join("index.html"),
        pages::index_page(&catalog, theme),
    )?;
    std::fs::write(out_dir.join("styles.css"), pages::STYLESHEET)?;
    written += 1;

    info!(
        "Built {} pages into {} ({} sources missing)",
        written,
        out_dir.display(),
        missing
    );
    println!("Built {} pages into {}", written, out_dir.display());
    Ok(())
}

/// List modules and lessons with completion markers.
fn run_list(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let store = open_store(config);

    for module in &catalog.modules {
        println!(
            "{:02}  {} ({} lessons, {})",
            module.id,
            module.title,
            module.lesson_count(),
            module.duration
        );
        for (index, lesson) in module.lessons.iter().enumerate() {
            let mark = if store.is_lesson_complete(module.id, index) {
                "x"
            } else {
                " "
            };
            println!("    [{}] {}. {}", mark, index + 1, lesson.title());
        }
    }
    Ok(())
}

/// Search the catalog and print hits per section.
fn run_search(config: &Config, query: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    let hits = catalog.search(query);

    if hits.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    for module in &hits.modules {
        println!("module    {:02}  {}", module.id, module.title);
    }
    for template in &hits.templates {
        println!("template  {}", template.title);
    }
    for lab in &hits.labs {
        println!("lab       {} ({})", lab.title, lab.difficulty);
    }
    Ok(())
}

/// Mark a lesson complete. Lesson numbers are 1-based as shown by list.
fn run_complete(config: &Config, module: u32, lesson: usize) -> Result<()> {
    let catalog = load_catalog(config)?;
    let index = lesson
        .checked_sub(1)
        .ok_or_else(|| LessondeckError::Catalog("Lesson numbers start at 1".to_string()))?;
    let entry = catalog.lesson(module, index).ok_or_else(|| {
        LessondeckError::Catalog(format!("No lesson {} in module {}", lesson, module))
    })?;

    let mut store = open_store(config);
    store.complete_lesson(module, index)?;
    println!("Completed: {}", entry.title());
    Ok(())
}

/// Mark a lab complete by exact title.
fn run_complete_lab(config: &Config, title: &str) -> Result<()> {
    let catalog = load_catalog(config)?;
    if !catalog.labs.iter().any(|lab| lab.title == title) {
        return Err(LessondeckError::Catalog(format!(
            "No lab titled '{}'",
            title
        )));
    }

    let mut store = open_store(config);
    store.complete_lab(title)?;
    println!("Completed lab: {}", title);
    Ok(())
}

/// Run a module quiz, grade it, and record the score.
fn run_quiz(config: &Config, module: u32, answers: Option<&[usize]>) -> Result<()> {
    let catalog = load_catalog(config)?;
    catalog
        .module(module)
        .ok_or_else(|| LessondeckError::Catalog(format!("No module {}", module)))?;

    let bank_path = config.site.content_dir.join("quizzes.toml");
    let bank = if bank_path.exists() {
        lessondeck_content::load_bank_from(&bank_path)?
    } else {
        Vec::new()
    };
    let quiz = lessondeck_content::resolve_quiz(&bank, module)
        .ok_or_else(|| LessondeckError::Catalog(format!("No quiz for module {}", module)))?;

    let picks: Vec<usize> = match answers {
        Some(picks) => picks
            .iter()
            .map(|p| p.checked_sub(1).unwrap_or(usize::MAX))
            .collect(),
        None => prompt_answers(quiz)?,
    };

    let score = grade(quiz, &picks);
    println!(
        "{}: {}/{} ({}%)",
        quiz.title, score.correct, score.total, score.percent
    );
    for (i, question) in quiz.questions.iter().enumerate() {
        if picks.get(i) != Some(&question.answer) {
            println!("  Q{}: {}", i + 1, question.explanation);
        }
    }

    let mut store = open_store(config);
    store.record_quiz(module, score)?;
    Ok(())
}

/// Prompt for one pick per question on stdin. Unparseable input counts
/// as a wrong answer rather than aborting the quiz.
fn prompt_answers(quiz: &Quiz) -> Result<Vec<usize>> {
    let stdin = std::io::stdin();
    let mut picks = Vec::with_capacity(quiz.questions.len());

    for (i, question) in quiz.questions.iter().enumerate() {
        println!("\n{}. {}", i + 1, question.prompt);
        for (j, option) in question.options.iter().enumerate() {
            println!("   {}) {}", j + 1, option);
        }
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        stdin.read_line(&mut line)?;
        let pick = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|p| p.checked_sub(1))
            .unwrap_or(usize::MAX);
        picks.push(pick);
    }
    Ok(picks)
}

/// Print the three-section progress summary and any quiz scores.
fn run_progress(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let store = open_store(config);
    let summary = store.summary(&catalog);

    println!(
        "Modules  {}/{} ({}%)",
        summary.modules.completed,
        summary.modules.total,
        summary.modules.percent()
    );
    println!(
        "Lessons  {}/{} ({}%)",
        summary.lessons.completed,
        summary.lessons.total,
        summary.lessons.percent()
    );
    println!(
        "Labs     {}/{} ({}%)",
        summary.labs.completed,
        summary.labs.total,
        summary.labs.percent()
    );

    for (module_id, score) in &store.progress().quizzes {
        println!(
            "Quiz {}   {}/{} ({}%)",
            module_id, score.correct, score.total, score.percent
        );
    }
    Ok(())
}

/// Show resolved paths, config first.
fn run_paths(config: &Config) {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    let progress_path = config
        .store
        .progress_file
        .clone()
        .or_else(ProgressStore::default_path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  progress              {}", progress_path);
    println!("  content               {}", config.site.content_dir.display());
    println!("  output                {}", config.site.output_dir.display());
}
