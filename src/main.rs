use std::{io, path::PathBuf, process::ExitCode};

use log::error;
use pacul::{
    config::{Config, HISTORY_ENV},
    planner::parser::StatementParser,
    repl::{Control, run_line},
    storage::table::Table,
};
use rustyline::{DefaultEditor, error::ReadlineError};

fn read_multiline_command(rl: &mut DefaultEditor) -> rustyline::Result<String> {
    let mut input = String::new();
    let mut prompt = "db > ";

    loop {
        let line = rl.readline(prompt)?;
        let trimmed_line = line.trim_end();

        // Trailing backslash continues the statement on the next line
        if let Some(continued) = trimmed_line.strip_suffix('\\') {
            input.push_str(continued);
            input.push(' ');
            prompt = "   > ";
        } else {
            input.push_str(trimmed_line);
            break;
        }
    }

    Ok(input)
}

fn run(config: &Config, table: &mut Table) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl = DefaultEditor::new()?;
    if let Some(history) = &config.history_file {
        // A missing history file is normal on first run
        let _ = rl.load_history(history);
    }

    let parser = StatementParser::new();
    let mut stdout = io::stdout();

    loop {
        match read_multiline_command(&mut rl) {
            Ok(input) => {
                let command = input.trim();
                if command.is_empty() {
                    continue;
                }
                rl.add_history_entry(command)?;
                if run_line(command, table, &parser, &mut stdout)? == Control::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(history) = &config.history_file {
        rl.save_history(history)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let default_history = std::env::var_os(HISTORY_ENV).map(PathBuf::from);
    let config = match Config::from_args(std::env::args().skip(1), default_history) {
        Ok(config) => config,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut table = match Table::open(&config.db_path) {
        Ok(table) => table,
        Err(err) => {
            println!("Unable to open file {}: {}", config.db_path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let session = run(&config, &mut table);
    if let Err(err) = &session {
        println!("Error: {}", err);
    }

    // Flush whatever is flushable, even after a fatal error
    if let Err(err) = table.close() {
        error!("Error closing db file: {}", err);
        println!("Error closing db file.");
        return ExitCode::FAILURE;
    }

    match session {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
