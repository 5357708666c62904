use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pocketfm::core::config::{ExplorerConfig, GalleryConfig, DEFAULT_PHOTO_DIR};
use pocketfm::core::telemetry::logging::init_logging;
use pocketfm::models::file_entry::{FileEntry, FileKind};
use pocketfm::models::media::OpenRequest;
use pocketfm::models::notice::Notice;
use pocketfm::pages::explorer::ExplorerPage;
use pocketfm::pages::gallery::GalleryPage;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use time::macros::format_description;
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(name = "pocketfm", version, about = "Browse, preview and manage files")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the images of the photo directory as a grid
    Gallery {
        #[arg(long, default_value = DEFAULT_PHOTO_DIR)]
        dir: PathBuf,
        #[arg(long, default_value_t = 2)]
        columns: usize,
        #[arg(long)]
        json: bool,
    },
    /// List a directory, directories first
    Ls {
        path: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Do not show the `..` entry
        #[arg(long)]
        no_parent: bool,
    },
    /// Show which viewer a file opens in (text files are printed)
    Open { path: PathBuf },
    /// Rename a file or directory in place
    Rename { path: PathBuf, new_name: String },
    /// Permanently delete a file or directory tree
    Rm { path: PathBuf },
    /// Create `<path>.zip` next to the file or directory
    Zip { path: PathBuf },
    /// Extract an archive into a sibling directory named after it
    Unzip { path: PathBuf },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    });

    match cli.command {
        Command::Gallery { dir, columns, json } => {
            let mut page = GalleryPage::new(GalleryConfig::new(dir).with_columns(columns));
            page.load().context("failed to scan photo directory")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page.items)?);
            } else {
                for row in page.rows() {
                    let cells: Vec<String> = row.iter().map(gallery_cell).collect();
                    println!("{}", cells.join("  "));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Ls {
            path,
            json,
            no_parent,
        } => {
            let config = match path {
                Some(p) => ExplorerConfig::new(p),
                None => ExplorerConfig::default(),
            }
            .with_parent_entry(!no_parent);
            let page = ExplorerPage::new(&config).context("failed to list directory")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page.entries)?);
            } else {
                println!("{}", page.cwd.display());
                for entry in &page.entries {
                    println!("{}", listing_line(entry));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Open { path } => {
            let page = page_for(&path)?;
            match page.open(&path) {
                Ok(OpenRequest::Text { contents, .. }) => {
                    print!("{contents}");
                    Ok(ExitCode::SUCCESS)
                }
                Ok(request @ OpenRequest::Unsupported { .. }) => {
                    let notice = request.notice().unwrap_or_else(|| Notice::info("Unsupported"));
                    Ok(report(&notice))
                }
                Ok(request) => {
                    println!("{}: {}", request.kind().label(), request.path().display());
                    Ok(ExitCode::SUCCESS)
                }
                Err(notice) => Ok(report(&notice)),
            }
        }
        Command::Rename { path, new_name } => {
            let mut page = page_for(&path)?;
            match page.rename(&path, &new_name) {
                Some(notice) => Ok(report(&notice)),
                None => Ok(ExitCode::SUCCESS),
            }
        }
        Command::Rm { path } => {
            let mut page = page_for(&path)?;
            Ok(report(&page.delete(&path)))
        }
        Command::Zip { path } => {
            let mut page = page_for(&path)?;
            Ok(report(&page.zip(&path)))
        }
        Command::Unzip { path } => {
            let mut page = page_for(&path)?;
            Ok(report(&page.unzip(&path)))
        }
    }
}

/// Browser rooted at the directory that contains `path`.
fn page_for(path: &Path) -> Result<ExplorerPage> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    ExplorerPage::new(&ExplorerConfig::new(dir))
        .with_context(|| format!("cannot browse {}", dir.display()))
}

fn report(notice: &Notice) -> ExitCode {
    if notice.is_error() {
        eprintln!("{notice}");
        ExitCode::FAILURE
    } else {
        println!("{notice}");
        ExitCode::SUCCESS
    }
}

fn listing_line(entry: &FileEntry) -> String {
    let marker = match entry.kind {
        FileKind::Parent | FileKind::Dir => "d",
        FileKind::File => "-",
        FileKind::Other => "?",
    };
    let size = if entry.is_dir() {
        String::new()
    } else {
        entry.size.to_string()
    };
    format!(
        "{marker} {size:>10} {modified:>16}  {name}",
        modified = format_modified(entry.modified),
        name = entry.name
    )
}

fn format_modified(secs: u64) -> String {
    if secs == 0 {
        return String::new();
    }
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    i64::try_from(secs)
        .ok()
        .and_then(|s| OffsetDateTime::from_unix_timestamp(s).ok())
        .and_then(|t| t.format(format).ok())
        .unwrap_or_default()
}

fn gallery_cell(item: &pocketfm::models::gallery::GalleryItem) -> String {
    match item.dimensions {
        Some((w, h)) => format!("{} ({w}x{h})", item.name),
        None => item.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn gallery_defaults_to_camera_roll() {
        let cli = Cli::try_parse_from(["pocketfm", "gallery"]).unwrap();
        match cli.command {
            Command::Gallery { dir, columns, json } => {
                assert_eq!(dir, PathBuf::from(DEFAULT_PHOTO_DIR));
                assert_eq!(columns, 2);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ls_flags_and_global_verbosity() {
        let cli =
            Cli::try_parse_from(["pocketfm", "ls", "/tmp", "--json", "--no-parent", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Ls {
                path,
                json,
                no_parent,
            } => {
                assert_eq!(path, Some(PathBuf::from("/tmp")));
                assert!(json);
                assert!(no_parent);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rename_takes_path_and_new_name() {
        let cli = Cli::try_parse_from(["pocketfm", "rename", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Command::Rename { path, new_name } => {
                assert_eq!(path, PathBuf::from("a.txt"));
                assert_eq!(new_name, "b.txt");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn file_operations_require_a_path() {
        for sub in ["open", "rm", "zip", "unzip"] {
            assert!(Cli::try_parse_from(["pocketfm", sub]).is_err(), "{sub}");
        }
        assert!(Cli::try_parse_from(["pocketfm", "rename", "a.txt"]).is_err());
    }
}
