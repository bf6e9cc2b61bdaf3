use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "backup-scaffold")]
#[command(about = "Create empty JSON placeholders for every table of the manual backup")]
#[command(version)]
pub struct Cli {
    /// YAML config file
    #[arg(short, long, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Backup directory [default: ./backup], overrides the config file and BACKUP_SCAFFOLD_DIR
    #[arg(short = 'd', long)]
    pub backup_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.backup_dir {
            config.backup.dir = Some(dir.to_string_lossy().into_owned());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn no_arguments_keeps_config() {
        let cli = Cli::try_parse_from(["backup-scaffold"]).expect("parse");
        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert!(cli.backup_dir.is_none());
        assert!(config.backup.dir.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "backup-scaffold",
            "-d",
            "/tmp/backup",
            "--log-level",
            "debug",
        ])
        .expect("parse");
        let mut config = Config::default();
        config.backup.dir = Some("/from/file".into());
        cli.apply_to(&mut config);

        assert_eq!(config.backup.backup_dir(), Path::new("/tmp/backup"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn flag_replaces_blank_env_dir_before_validation() {
        let cli = Cli::try_parse_from(["backup-scaffold", "--backup-dir", "/tmp/backup"])
            .expect("parse");
        let mut config = Config::default();
        config.apply_env_overrides(|_| Some(" ".to_string()));
        assert!(config.validate().is_err());

        cli.apply_to(&mut config);
        config.validate().expect("flag wins over blank env value");
        assert_eq!(config.backup.backup_dir(), Path::new("/tmp/backup"));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["backup-scaffold", "extra"]).is_err());
    }
}
