use std::process::Command;

use shortener_core::Effect;
use shortener_logging::{redact_query, shortener_debug, shortener_info, shortener_warn};

/// Runs the effects the workflow hands back to the front-end.
pub fn run_unhandled(effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::OpenUrl { url } => {
                shortener_info!("OpenUrl url_len={}", url.len());
                if let Err(err) = open_in_browser(&url) {
                    let message = open_failure_message(&url, &err);
                    shortener_warn!("{}", message);
                    eprintln!("{message}");
                }
            }
            other => shortener_debug!("Ignoring effect already run by workflow: {:?}", other),
        }
    }
}

fn open_failure_message(url: &str, err: &std::io::Error) -> String {
    format!("could not open {}: {}", redact_query(url), err)
}

fn open_in_browser(url: &str) -> std::io::Result<()> {
    opener_command(url).spawn().map(|_child| ())
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_message_hides_query() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "xdg-open missing");
        let message = open_failure_message("https://reduced.to/abc?token=secret", &err);

        assert_eq!(
            message,
            "could not open https://reduced.to/abc: xdg-open missing"
        );
    }
}
