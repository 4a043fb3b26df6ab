use std::path::PathBuf;

use desk_core::Msg;

pub const HELP: &str = "\
Commands:
  stage <path>...   add local files to the upload queue
  unstage <index>   remove a queued file
  upload            upload every queued file
  toggle <id>       select or deselect an uploaded file
  toggle-all        select all / deselect all
  clear             forget all uploaded files
  json              generate the report and show it
  pdf               download the report as PDF
  show | files      print the current state
  help              this text
  quit              exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Stage(Vec<PathBuf>),
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Nothing,
}

/// Parses one input line. Errors are usage messages for the user.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Nothing);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb {
        "stage" | "add" => {
            if args.is_empty() {
                return Err("usage: stage <path>...".to_string());
            }
            Command::Stage(args.iter().map(PathBuf::from).collect())
        }
        "unstage" | "rm" => {
            let index = single_number(&args, "usage: unstage <index>")?;
            Command::Dispatch(Msg::FileUnstaged { index })
        }
        "upload" => Command::Dispatch(Msg::UploadClicked),
        "toggle" => {
            let file_id = single_number(&args, "usage: toggle <id>")?;
            Command::Dispatch(Msg::FileToggled { file_id })
        }
        "toggle-all" | "all" => Command::Dispatch(Msg::ToggleAllClicked),
        "clear" => Command::Dispatch(Msg::ClearFilesClicked),
        "json" => Command::Dispatch(Msg::GenerateJsonClicked),
        "pdf" => Command::Dispatch(Msg::GeneratePdfClicked),
        "show" | "files" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(command)
}

fn single_number<T: std::str::FromStr>(args: &[&str], usage: &str) -> Result<T, String> {
    match args {
        [value] => value.parse().map_err(|_| usage.to_string()),
        _ => Err(usage.to_string()),
    }
}
