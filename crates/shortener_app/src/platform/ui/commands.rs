/// One line of terminal input, mapped onto the page's trigger points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text typed into the input box followed by Enter.
    Text(String),
    Submit,
    Copy,
    Open,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(name) = trimmed.strip_prefix(':') else {
        return Command::Text(trimmed.to_string());
    };
    match name.to_ascii_lowercase().as_str() {
        "submit" | "s" => Command::Submit,
        "copy" | "c" => Command::Copy,
        "open" | "o" => Command::Open,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_input() {
        assert_eq!(parse("  example.com \n"), Command::Text("example.com".into()));
        assert_eq!(parse(""), Command::Text(String::new()));
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse(":COPY"), Command::Copy);
        assert_eq!(parse(":o"), Command::Open);
        assert_eq!(parse(":q"), Command::Quit);
        assert_eq!(parse(":frobnicate"), Command::Unknown("frobnicate".into()));
    }
}
