use std::path::PathBuf;

use clap::Parser;
use skillnow_config::SkillNowConfig;

/// Command-line parser for the `skillnow` binary.
#[derive(Debug, Parser)]
#[command(name = "skillnow", version, about = "SkillNow - CSV-backed skills matching API")]
pub struct Cli {
    /// Address to listen on (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the CSV tables (overrides storage.data_dir)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overlay any flags given on the command line onto loaded config.
    pub fn apply(&self, config: &mut SkillNowConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir.clone_from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    use super::Cli;
    use skillnow_config::SkillNowConfig;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["skillnow", "--port", "8080", "--data-dir", "/srv/skillnow"]);
        let mut config = SkillNowConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/skillnow"));
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["skillnow"]);
        let mut config = SkillNowConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert!(!cli.quiet && !cli.verbose);
    }
}
