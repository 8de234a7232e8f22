use std::process::ExitCode;

use clap::{command, Arg, ArgAction, Command};
use env_logger::Env;
use log::error;
use placement_core::{run_script, ScriptReport};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = create_command().get_matches();

    let report = match run_script() {
        Err(err) => {
            error!("Demonstration script failed. Inner error: {err}");
            return ExitCode::FAILURE;
        }
        Ok(report) => report,
    };

    print!("{report}");

    if matches.get_flag("json") && print_json_log(&report).is_err() {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn create_command() -> Command {
    command!().arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("also print the move outcomes as a JSON array"),
    )
}

fn print_json_log(report: &ScriptReport) -> Result<(), ()> {
    match serde_json::to_string_pretty(&report.moves) {
        Err(err) => {
            error!("Failed to serialize move outcomes. Inner error: {err}");
            Err(())
        }
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::create_command;

    #[test]
    fn json_flag_is_off_by_default() {
        let matches = create_command().get_matches_from(["placement"]);
        assert!(!matches.get_flag("json"));
    }

    #[test]
    fn json_flag_parses() {
        let matches = create_command().get_matches_from(["placement", "--json"]);
        assert!(matches.get_flag("json"));
    }

    #[test]
    fn move_outcomes_serialize_as_tagged_records() {
        let report = placement_core::run_script().unwrap();
        let value = serde_json::to_value(&report.moves).unwrap();
        assert_eq!("moved", value[0]["outcome"]);
        assert_eq!("Rook", value[0]["kind"]);
        assert_eq!(5, value[0]["to"]["col"]);
        assert_eq!("rejected", value[3]["outcome"]);
        assert_eq!(6, value[3]["attempted"]["row"]);
    }
}
