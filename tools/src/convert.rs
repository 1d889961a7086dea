use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tracing::{error, info, warn};

/// H.264 without audio, moov atom up front so browsers can start playback
/// before the download finishes.
pub const ENCODE_ARGS: [&str; 9] = [
    "-c:v", "libx264", "-preset", "fast", "-crf", "23", "-an", "-movflags", "+faststart",
];

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("ffmpeg exited with {status} for {name}: {stderr}")]
    Ffmpeg {
        name: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not inspect {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What to do with one named video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Convert { name: String, source: PathBuf, target: PathBuf },
    MissingSource { name: String, source: PathBuf },
    AlreadyConverted { name: String, target: PathBuf },
}

async fn exists(path: &Path) -> Result<bool, ConvertError> {
    tokio::fs::try_exists(path).await.map_err(|source| ConvertError::Inspect {
        path: path.to_path_buf(),
        source,
    })
}

/// Decides per name whether `<name>.webm` still needs converting to
/// `<name>.mp4` inside `dir`.
pub async fn plan(dir: &Path, names: &[&str]) -> Vec<Result<Task, ConvertError>> {
    let mut tasks = Vec::with_capacity(names.len());
    for name in names {
        let source = dir.join(format!("{}.webm", name));
        let target = dir.join(format!("{}.mp4", name));
        let name = name.to_string();
        let task = match exists(&source).await {
            Ok(false) => Ok(Task::MissingSource { name, source }),
            Ok(true) => match exists(&target).await {
                Ok(true) => Ok(Task::AlreadyConverted { name, target }),
                Ok(false) => Ok(Task::Convert { name, source, target }),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        tasks.push(task);
    }
    tasks
}

pub fn ffmpeg_args(source: &Path, target: &Path) -> Vec<String> {
    let mut args = vec!["-i".to_string(), source.display().to_string()];
    args.extend(ENCODE_ARGS.iter().map(|a| a.to_string()));
    args.push("-y".to_string());
    args.push(target.display().to_string());
    args
}

pub async fn transcode(ffmpeg: &Path, name: &str, source: &Path, target: &Path) -> Result<(), ConvertError> {
    let output = Command::new(ffmpeg)
        .args(ffmpeg_args(source, target))
        .output()
        .await
        .map_err(|source| ConvertError::Spawn {
            program: ffmpeg.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        // ffmpeg's useful line is the last one
        let last = stderr.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
        return Err(ConvertError::Ffmpeg {
            name: name.to_string(),
            status: output.status,
            stderr: last.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub converted: Vec<String>,
    pub skipped: Vec<String>,
    pub missing: Vec<String>,
    pub failed: Vec<String>,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion summary:")?;
        for (label, names) in [
            ("converted", &self.converted),
            ("already up to date", &self.skipped),
            ("missing source", &self.missing),
            ("failed", &self.failed),
        ] {
            if names.is_empty() {
                writeln!(f, "  {:<20} 0", label)?;
            } else {
                writeln!(f, "  {:<20} {} ({})", label, names.len(), names.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Runs every task in order. A failing asset is logged and counted; the
/// rest still run.
pub async fn run(ffmpeg: &Path, dir: &Path, names: &[&str]) -> Summary {
    let mut summary = Summary::default();
    for (index, task) in plan(dir, names).await.into_iter().enumerate() {
        let task = match task {
            Ok(task) => task,
            Err(e) => {
                error!("{}", e);
                summary.failed.push(names[index].to_string());
                continue;
            }
        };
        match task {
            Task::MissingSource { name, source } => {
                warn!("source not found, skipping: {}", source.display());
                summary.missing.push(name);
            }
            Task::AlreadyConverted { name, target } => {
                info!("{} already exists, skipping", target.display());
                summary.skipped.push(name);
            }
            Task::Convert { name, source, target } => {
                info!("converting {} -> {}", source.display(), target.display());
                match transcode(ffmpeg, &name, &source, &target).await {
                    Ok(()) => {
                        info!("converted {}", name);
                        summary.converted.push(name);
                    }
                    Err(e) => {
                        error!("{}", e);
                        summary.failed.push(name);
                    }
                }
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        dir: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("convert-videos-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            Self { dir }
        }

        fn touch(&self, file: &str) {
            std::fs::write(self.dir.join(file), b"").unwrap();
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    #[tokio::test]
    async fn plans_each_state() {
        let fx = Fixture::new();
        fx.touch("hero-tablet.webm");
        fx.touch("hero-desktop.webm");
        fx.touch("hero-desktop.mp4");

        let tasks: Vec<Task> = plan(&fx.dir, &["hero-mobile", "hero-tablet", "hero-desktop"])
            .await
            .into_iter()
            .map(|t| t.unwrap())
            .collect();

        assert_eq!(
            tasks,
            vec![
                Task::MissingSource {
                    name: "hero-mobile".into(),
                    source: fx.dir.join("hero-mobile.webm"),
                },
                Task::Convert {
                    name: "hero-tablet".into(),
                    source: fx.dir.join("hero-tablet.webm"),
                    target: fx.dir.join("hero-tablet.mp4"),
                },
                Task::AlreadyConverted {
                    name: "hero-desktop".into(),
                    target: fx.dir.join("hero-desktop.mp4"),
                },
            ]
        );
    }

    #[test]
    fn builds_ffmpeg_command_line() {
        let args = ffmpeg_args(Path::new("in.webm"), Path::new("out.mp4"));
        assert_eq!(args.first().map(String::as_str), Some("-i"));
        assert_eq!(args[1], "in.webm");
        assert_eq!(args.last().map(String::as_str), Some("out.mp4"));
        assert_eq!(args[args.len() - 2], "-y");
        let joined = args.join(" ");
        assert!(joined.contains("-c:v libx264 -preset fast -crf 23 -an -movflags +faststart"));
    }

    #[tokio::test]
    async fn failing_encoder_is_counted_and_others_continue() {
        let fx = Fixture::new();
        fx.touch("a.webm");
        fx.touch("b.webm");
        fx.touch("c.mp4");

        let missing = fx.dir.join("no-such-ffmpeg");
        let summary = run(&missing, &fx.dir, &["a", "b", "c"]).await;

        assert_eq!(summary.failed, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(summary.missing, vec!["c".to_string()]);
        assert!(summary.has_failures());
    }

    #[tokio::test]
    async fn nothing_to_do_is_not_a_failure() {
        let fx = Fixture::new();
        fx.touch("hero-mobile.webm");
        fx.touch("hero-mobile.mp4");

        let summary = run(Path::new("ffmpeg"), &fx.dir, &["hero-mobile", "hero-tablet"]).await;
        assert_eq!(summary.skipped, vec!["hero-mobile".to_string()]);
        assert_eq!(summary.missing, vec!["hero-tablet".to_string()]);
        assert!(summary.converted.is_empty());
        assert!(!summary.has_failures());
    }

    #[tokio::test]
    async fn missing_directory_reports_every_source_missing() {
        let dir = std::env::temp_dir().join(format!("convert-videos-absent-{}", uuid::Uuid::new_v4()));
        let summary = run(Path::new("ffmpeg"), &dir, &["hero-mobile", "hero-tablet", "hero-desktop"]).await;

        assert_eq!(summary.missing, vec!["hero-mobile", "hero-tablet", "hero-desktop"]);
        assert!(summary.converted.is_empty());
        assert!(summary.failed.is_empty());
        assert!(!summary.has_failures());
    }

    #[test]
    fn summary_lists_names() {
        let summary = Summary {
            converted: vec!["hero-mobile".into()],
            failed: vec!["hero-desktop".into()],
            ..Default::default()
        };
        let text = summary.to_string();
        assert!(text.contains("converted            1 (hero-mobile)"));
        assert!(text.contains("failed               1 (hero-desktop)"));
        assert!(text.contains("missing source       0"));
    }
}
