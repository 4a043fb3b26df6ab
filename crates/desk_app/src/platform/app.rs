use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use desk_core::{update, AppState, Msg};
use desk_engine::{DirectorySaver, Engine, EngineSettings, ReqwestBackend};
use desk_logging::{desk_info, desk_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::cli::Cli;
use super::effects::{event_to_msg, EffectRunner};
use super::ui::commands::{parse_command, Command, HELP};
use super::{config, files, logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose, &cli.log_file);

    let desk_config = config::load_config(&cli.config);
    let settings = config::resolve_settings(&desk_config, &cli);
    desk_info!(
        "Starting report_desk against {} (output {:?})",
        settings.base_url,
        settings.output_dir
    );

    // One thread: input handling, state updates and network tasks all share it.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(event_loop(settings, cli.files))
}

async fn event_loop(settings: EngineSettings, initial_files: Vec<PathBuf>) -> anyhow::Result<()> {
    let saver = DirectorySaver::new(settings.output_dir.clone());
    let backend = ReqwestBackend::new(settings).context("failed to build HTTP client")?;
    let (engine, mut events) = Engine::new(Arc::new(backend), Arc::new(saver));
    let mut desk = Desk::new(EffectRunner::new(engine));

    println!("{HELP}\n");
    if !initial_files.is_empty() {
        desk.stage(&initial_files);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Show) => desk.show(),
                    Ok(Command::Stage(paths)) => desk.stage(&paths),
                    Ok(Command::Dispatch(msg)) => desk.dispatch(msg),
                    Ok(Command::Nothing) => {}
                    Err(usage) => println!("{usage}"),
                }
            }
            Some(event) = events.recv() => desk.dispatch(event_to_msg(event)),
        }
    }

    if desk.state.upload().is_busy() || desk.state.reports().is_busy() {
        desk_warn!("Exiting with a request still in flight");
    }
    Ok(())
}

/// Owns the workflow state; every change goes through `update`.
struct Desk {
    state: AppState,
    runner: EffectRunner,
}

impl Desk {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn stage(&mut self, paths: &[PathBuf]) {
        let (staged, problems) = files::staged_files(paths);
        for problem in problems {
            println!("skipped {problem}");
        }
        self.dispatch(Msg::FilesStaged(staged));
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        if self.state.consume_dirty() {
            self.show();
        }
    }

    fn show(&self) {
        println!("{}", ui::render::render(&self.state.view()));
    }
}
