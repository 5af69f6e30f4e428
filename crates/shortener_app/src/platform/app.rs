use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use shortener_core::{AppState, Msg, Store};
use shortener_engine::{
    ArboardClipboard, Clipboard, NoClipboard, ReqwestShortenClient, RunReport, Workflow,
};
use shortener_logging::{shortener_info, shortener_warn};
use tokio::runtime::Runtime;

use super::config::load_config;
use super::ui::commands::{self, Command};
use super::ui::constants::{COPIED_HINT, HELP_TEXT, HOLDING_CLIPBOARD_TEXT, PROMPT};
use super::{effects, logging, ui};
use crate::cli::Args;

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let loaded = load_config(&args.config)?;
    let mut config = loaded.config;
    config.apply_overrides(&args);

    logging::initialize(config.log_destination);
    if loaded.from_file {
        shortener_info!("Loaded config from {:?}", args.config);
    } else {
        shortener_info!("No config at {:?}, using defaults", args.config);
    }

    let page = config.page_address()?;
    let settings = config.client_settings();
    shortener_info!(
        "Page {} endpoint {} method {:?} mode {:?}",
        page,
        settings.endpoint,
        settings.method,
        settings.response_mode
    );
    let client = ReqwestShortenClient::new(settings).context("building HTTP client")?;
    let system_clipboard = match ArboardClipboard::new() {
        Ok(clipboard) => Some(Arc::new(clipboard)),
        Err(err) => {
            shortener_warn!("Clipboard disabled: {}", err);
            eprintln!("{err}; results will not be copied");
            None
        }
    };
    let clipboard: Arc<dyn Clipboard> = match &system_clipboard {
        Some(clipboard) => clipboard.clone(),
        None => Arc::new(NoClipboard::new("no system clipboard")),
    };
    let workflow = Workflow::new(Arc::new(client), clipboard);

    let mut store = Store::new(AppState::new(page));
    subscribe_renderer(&mut store);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    if !args.urls.is_empty() {
        let mut last_copied = None;
        for url in &args.urls {
            store.dispatch(Msg::InputChanged(url.clone()));
            let report = runtime.block_on(workflow.submit(&mut store));
            last_copied = report.copied.last().cloned().or(last_copied);
            report_clipboard_failures(&report);
        }
        if let (Some(clipboard), Some(text)) = (&system_clipboard, last_copied) {
            hold_clipboard(clipboard, &text);
        }
        return Ok(());
    }

    run_prompt(&runtime, &workflow, &mut store)
}

/// Prints what changed after every state update.
fn subscribe_renderer(store: &mut Store) {
    let mut previous = store.view();
    store.subscribe(move |view| {
        for line in ui::render::render_changes(&previous, view) {
            println!("{line}");
        }
        previous = view.clone();
    });
}

fn run_prompt(runtime: &Runtime, workflow: &Workflow, store: &mut Store) -> anyhow::Result<()> {
    println!("{HELP_TEXT}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;

        match commands::parse(&line) {
            Command::Text(text) => {
                store.dispatch(Msg::InputChanged(text));
                run(runtime, workflow, store, Msg::EnterPressed);
            }
            Command::Submit => {
                run(runtime, workflow, store, Msg::SubmitClicked);
            }
            Command::Copy => {
                let report = run(runtime, workflow, store, Msg::CopyClicked);
                if !report.copied.is_empty() {
                    println!("{COPIED_HINT}");
                }
            }
            Command::Open => {
                run(runtime, workflow, store, Msg::OpenClicked);
            }
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => break,
            Command::Unknown(name) => println!("unknown command :{name} (try :help)"),
        }
    }

    shortener_info!("Session ended");
    Ok(())
}

fn run(runtime: &Runtime, workflow: &Workflow, store: &mut Store, msg: Msg) -> RunReport {
    let mut report = runtime.block_on(workflow.dispatch(store, msg));
    report_clipboard_failures(&report);
    effects::run_unhandled(std::mem::take(&mut report.unhandled));
    report
}

fn report_clipboard_failures(report: &RunReport) {
    for err in &report.clipboard_failures {
        eprintln!("could not copy: {err}");
    }
}

/// The process serves the selection on X11/Wayland; keep it until another
/// application takes over, so the copy survives exit.
fn hold_clipboard(clipboard: &ArboardClipboard, text: &str) {
    if cfg!(target_os = "linux") {
        println!("{HOLDING_CLIPBOARD_TEXT}");
    }
    if let Err(err) = clipboard.set_text_and_hold(text) {
        shortener_warn!("Holding clipboard failed: {}", err);
        eprintln!("could not copy: {err}");
    }
}
