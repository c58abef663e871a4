//! versionctl - CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use semver::Version;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use versionctl::changelog::{ChangelogUpdate, update_changelog};
use versionctl::commit::{FileChange, generate, staged_changes};
use versionctl::config::{self, configured_language};
use versionctl::git::{
    SystemGit, check_git_installed, commits_since_last_tag, discover_workdir, last_commit,
    open_workdir,
};
use versionctl::i18n::{Language, LanguageSource, Message, resolve_language};
use versionctl::prompt::{
    CommitAction, DialoguerPrompt, Prompter, choose_commit_action, choose_level, confirm,
};
use versionctl::release::{
    PublishStep, StepEvent, commit, publish, read_current_version, update_index_file,
    update_package_json,
};
use versionctl::version::{BumpLevel, analyze, bump_version};

/// Files listed before collapsing into "and N more".
const SHOWN_CHANGED_FILES: usize = 5;
const SHOWN_STAGED_FILES: usize = 10;

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Suggest and apply semantic version bumps from git history.
#[derive(Parser, Debug)]
#[command(name = "versionctl")]
#[command(about = "Suggest semver bumps, update CHANGELOG.md and generate commit messages")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Show the suggested version without changing anything
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a commit message from staged changes and commit
    Commit,

    /// Show or change the interface language
    Config {
        /// Language code to use (en, pt, es, fr)
        #[arg(long, value_name = "CODE")]
        lang: Option<String>,

        /// Forget the configured language and detect it from the system
        #[arg(long, conflicts_with = "lang")]
        clear: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (language, source) = resolve_language(configured_language());
    debug!(%language, ?source, "Resolved interface language");

    let result = match cli.command {
        None => run_bump(language, cli.dry_run),
        Some(Commands::Commit) => run_commit(language, source),
        Some(Commands::Config { lang, clear }) => run_config(language, source, lang, clear),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✗ {} {:#}", language.t(Message::Error), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins; otherwise -v flags pick the level for this crate
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,versionctl=info".to_string(),
            _ => "warn,versionctl=debug".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_banner(title: &str) {
    println!();
    println!("{}", RULE);
    println!("          {}", title);
    println!("{}", RULE);
    println!();
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read current directory")
}

/// Analyse the last commit, bump the version, update files and publish.
fn run_bump(language: Language, dry_run: bool) -> Result<ExitCode> {
    check_git_installed().context("git is required")?;
    print_banner(language.t(Message::VersionControl));

    let workdir = match open_workdir(&current_dir()?) {
        Ok(workdir) => workdir,
        Err(e) => {
            debug!("{}", e);
            println!("⚠ {}", language.t(Message::NoCommitFound));
            return Ok(ExitCode::SUCCESS);
        }
    };
    let git = SystemGit::new(&workdir);

    let current = read_current_version(&workdir).context("Failed to read current version")?;
    println!("{} {}", language.t(Message::CurrentVersion), current);
    println!();

    println!("{}", language.t(Message::AnalyzingCommit));
    let last = last_commit(&git);
    if last.message.is_empty() {
        println!("⚠ {}", language.t(Message::NoCommitFound));
        return Ok(ExitCode::SUCCESS);
    }
    let analysis = analyze(&last.message, &last.changed_files, &last.added_files);

    println!();
    println!("{}", language.t(Message::CommitMessage));
    println!("  \"{}\"", analysis.commit_message.trim());
    println!();
    println!(
        "{} {}",
        language.t(Message::FilesModified),
        analysis.files_changed.len()
    );
    for file in analysis.files_changed.iter().take(SHOWN_CHANGED_FILES) {
        println!("  - {}", file);
    }
    if analysis.files_changed.len() > SHOWN_CHANGED_FILES {
        println!(
            "  ... {} {} {}",
            language.t(Message::AndMore),
            analysis.files_changed.len() - SHOWN_CHANGED_FILES,
            language.t(Message::AndMoreFiles)
        );
    }
    println!();

    println!("{}", language.t(Message::ChangeAnalysis));
    for reason in &analysis.reasons {
        println!("  {}", reason.describe(language));
    }
    println!();

    let suggested = bump_version(&current, analysis.bump_level);
    println!(
        "{} {} {}",
        language.t(Message::SuggestedType),
        level_marker(analysis.bump_level),
        analysis.bump_level.as_str().to_uppercase()
    );
    println!("{} {} → {}", language.t(Message::NewVersion), current, suggested);
    println!();

    if dry_run {
        println!("{}", language.t(Message::DryRun));
        return Ok(ExitCode::SUCCESS);
    }

    let prompter = DialoguerPrompt;
    if !confirm(&prompter, language, language.t(Message::UpdateVersion))? {
        println!();
        println!("{}", language.t(Message::VersionNotChanged));
        return Ok(ExitCode::SUCCESS);
    }

    println!();
    print_level_menu(language, &current);
    let level = choose_level(&prompter, language, analysis.bump_level)?;
    let new_version = bump_version(&current, level);

    println!();
    println!("{}", language.t(Message::UpdatingFiles));
    println!();
    update_files(&git, &workdir, &new_version, language)?;

    println!();
    println!("✓ {} {}!", language.t(Message::VersionUpdatedTo), new_version);
    println!();

    Ok(publish_release(&workdir, &new_version, language))
}

fn level_marker(level: BumpLevel) -> &'static str {
    match level {
        BumpLevel::Major => "🔴",
        BumpLevel::Minor => "🟡",
        BumpLevel::Patch => "🟢",
    }
}

fn print_level_menu(language: Language, current: &Version) {
    println!("{}", language.t(Message::ConfirmVersionType));
    for (level, description) in [
        (BumpLevel::Major, Message::MajorDesc),
        (BumpLevel::Minor, Message::MinorDesc),
        (BumpLevel::Patch, Message::PatchDesc),
    ] {
        println!(
            "  {} - {} ({}) - {}",
            level.choice(),
            level.as_str().to_uppercase(),
            bump_version(current, level),
            language.t(description)
        );
    }
    println!();
}

/// Rewrite package.json, the index file and CHANGELOG.md.
fn update_files(git: &SystemGit, workdir: &Path, version: &Version, language: Language) -> Result<()> {
    update_package_json(workdir, version).context("Failed to update package.json")?;
    println!("✓ {}", language.t(Message::PackageJsonUpdated));

    if let Some(path) = update_index_file(workdir, version).context("Failed to update index file")? {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        println!("✓ {} {}", name, language.t(Message::Updated));
    }

    let commits = commits_since_last_tag(git);
    match update_changelog(workdir, version, &commits, language)
        .context("Failed to update CHANGELOG.md")?
    {
        ChangelogUpdate::NotFound => println!("⚠ {}", language.t(Message::ChangelogNotFound)),
        ChangelogUpdate::NoNewCommits => println!("⚠ {}", language.t(Message::NoNewCommits)),
        ChangelogUpdate::AlreadyPresent => println!(
            "⚠ {} {}",
            language.t(Message::ChangelogAlreadyHasVersion),
            version
        ),
        ChangelogUpdate::Updated { commits } => println!(
            "✓ {} {} {}",
            language.t(Message::ChangelogUpdated),
            commits,
            language.t(Message::Commits)
        ),
    }

    Ok(())
}

/// Run the publish sequence; on failure print the manual steps.
fn publish_release(workdir: &Path, version: &Version, language: Language) -> ExitCode {
    println!("{}", language.t(Message::ExecutingGitCommands));
    println!();

    let result = publish(workdir, version, |event| match event {
        StepEvent::Started(step) => println!("→ {}", step.command_line(version)),
        StepEvent::Finished(step) => println!("✓ {}", language.t(step.done_message())),
    });

    match result {
        Ok(()) => {
            println!();
            println!("✓ {} ({})", language.t(Message::VersionPublished), version);
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!();
            println!("✗ {} {}", language.t(Message::ErrorExecutingGit), e);
            println!();
            println!("{}", language.t(Message::ExecuteManually));
            for (i, step) in PublishStep::ALL.iter().enumerate() {
                println!("  {}. {}", i + 1, step.command_line(version));
            }
            println!();
            ExitCode::FAILURE
        }
    }
}

fn print_language_info(language: Language, source: LanguageSource) {
    let origin = match source {
        LanguageSource::Configured => Message::ConfiguredManually,
        LanguageSource::Detected => Message::DetectedFromSystem,
    };
    println!(
        "ℹ {} {} ({})",
        language.t(Message::CurrentLanguageIs),
        language.code().to_uppercase(),
        language.t(origin)
    );
    println!(
        "  {} versionctl config --lang <code>",
        language.t(Message::ToChangeLanguage)
    );
    println!();
}

/// Suggest a commit message for the staged changes and commit.
fn run_commit(language: Language, source: LanguageSource) -> Result<ExitCode> {
    check_git_installed().context("git is required")?;
    print_banner(language.t(Message::SmartCommit));
    print_language_info(language, source);

    let workdir = match discover_workdir(&current_dir()?) {
        Ok(workdir) => workdir,
        Err(e) => {
            debug!("{}", e);
            println!("⚠ {}", language.t(Message::NoCommitFound));
            return Ok(ExitCode::SUCCESS);
        }
    };
    let git = SystemGit::new(&workdir);
    let changes = staged_changes(&git);

    if changes.is_empty() {
        println!("ℹ {}", language.t(Message::NoStagedFiles));
        println!();
        println!("{}", language.t(Message::HowToUse));
        println!("  1. {}", language.t(Message::MakeChanges));
        println!("  2. {} git add <files>", language.t(Message::StageFiles));
        println!("  3. {} versionctl commit", language.t(Message::RunCommand));
        println!();
        return Ok(ExitCode::SUCCESS);
    }

    print_staged(&changes, language);

    println!("{}", language.t(Message::AnalyzingChanges));
    let suggestion = generate(&changes);

    println!();
    println!("{}", language.t(Message::GeneratedMessage));
    println!("{}", suggestion.full_message);
    println!();
    println!("{}", language.t(Message::Details));
    println!("  {} {}", language.t(Message::Type), suggestion.kind);
    if let Some(scope) = &suggestion.scope {
        println!("  {} {}", language.t(Message::Scope), scope);
    }
    println!("  {} {}", language.t(Message::Description), suggestion.description);
    println!();

    let prompter = DialoguerPrompt;
    let message = match choose_commit_action(&prompter, language)? {
        CommitAction::Commit => suggestion.full_message,
        CommitAction::Edit => {
            println!();
            let edited = prompter.ask(language.t(Message::EnterCommitMessage), None)?;
            if edited.trim().is_empty() {
                println!();
                println!("{}", language.t(Message::EmptyMessage));
                return Ok(ExitCode::FAILURE);
            }
            edited.trim().to_string()
        }
        CommitAction::Cancel => {
            println!();
            println!("{}", language.t(Message::CommitCancelled));
            return Ok(ExitCode::SUCCESS);
        }
    };

    println!();
    println!("{}", language.t(Message::Committing));
    match commit(&workdir, &message) {
        Ok(()) => {
            println!();
            println!("✓ {}", language.t(Message::CommitSuccess));
            println!();
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!("{}", e);
            println!();
            println!("✗ {}: {}", language.t(Message::CommitFailed), e);
            println!();
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_staged(changes: &[FileChange], language: Language) {
    println!("{} {}", language.t(Message::StagedFiles), changes.len());
    for change in changes.iter().take(SHOWN_STAGED_FILES) {
        println!(
            "  {} {} (+{}/-{})",
            change.status.icon(),
            change.path,
            change.additions,
            change.deletions
        );
    }
    if changes.len() > SHOWN_STAGED_FILES {
        println!(
            "  ... {} {} {}",
            language.t(Message::AndMore),
            changes.len() - SHOWN_STAGED_FILES,
            language.t(Message::AndMoreFiles)
        );
    }
    println!();
}

/// Show, set or clear the configured interface language.
fn run_config(
    language: Language,
    source: LanguageSource,
    lang: Option<String>,
    clear: bool,
) -> Result<ExitCode> {
    if clear {
        config::clear_language().context("Failed to update config file")?;
        let detected = Language::detect();
        println!("✓ {}", detected.t(Message::LanguageCleared));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(code) = lang else {
        print_language_info(language, source);
        println!("{}", language.t(Message::AvailableLanguages));
        return Ok(ExitCode::SUCCESS);
    };

    match code.parse::<Language>() {
        Ok(chosen) => {
            config::set_language(chosen).context("Failed to update config file")?;
            println!("✓ {} {}", chosen.t(Message::LanguageSet), chosen.code().to_uppercase());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!("{}", e);
            println!("✗ {}", language.t(Message::InvalidLanguage));
            Ok(ExitCode::FAILURE)
        }
    }
}
