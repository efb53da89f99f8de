//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build an admin panel from `JOBBOARD_*` configuration.
//! - Print the table of each admin section (or only the one requested).

use clap::{Parser, ValueEnum};
use jobboard_core::{init_logging, AdminPanel, PanelConfig, Section};
use log::info;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "jobboard", bin_name = "jobboard", version, about = "Print the jobboard admin tables", long_about = None)]
struct Cli {
    /// Section to print; both when omitted.
    #[arg(value_enum)]
    section: Option<SectionArg>,
}

/// Admin section by name or side-menu key.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SectionArg {
    #[value(alias = "1")]
    Companies,
    #[value(alias = "2")]
    Jobs,
}

impl From<SectionArg> for Section {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Companies => Section::Companies,
            SectionArg::Jobs => Section::Jobs,
        }
    }
}

impl Cli {
    fn sections(&self) -> Vec<Section> {
        match self.section {
            Some(section) => vec![section.into()],
            None => vec![Section::Companies, Section::Jobs],
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match PanelConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("jobboard: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("jobboard: {err}");
            return ExitCode::FAILURE;
        }
    }

    let sections = cli.sections();
    let panel = AdminPanel::from_config(&config);
    info!(
        "event=cli_render module=cli status=ok sections={}",
        sections.len()
    );
    for section in sections {
        println!("== {} ==", section.label());
        print!("{}", panel.render_section(section));
        println!();
    }
    println!("jobboard_core version={}", jobboard_core::core_version());

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use jobboard_core::Section;

    #[test]
    fn no_argument_prints_every_section() {
        let cli = Cli::try_parse_from(["jobboard"]).unwrap();
        assert_eq!(cli.sections(), vec![Section::Companies, Section::Jobs]);
    }

    #[test]
    fn section_accepts_name_and_menu_key() {
        let by_name = Cli::try_parse_from(["jobboard", "jobs"]).unwrap();
        assert_eq!(by_name.sections(), vec![Section::Jobs]);

        let by_key = Cli::try_parse_from(["jobboard", "1"]).unwrap();
        assert_eq!(by_key.sections(), vec![Section::Companies]);
    }

    #[test]
    fn unknown_section_is_rejected_by_parser() {
        let err = Cli::try_parse_from(["jobboard", "3"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
