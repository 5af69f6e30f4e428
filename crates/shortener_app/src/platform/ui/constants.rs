pub const PROMPT: &str = "url> ";
pub const LOADER_TEXT: &str = "Shortening...";
pub const COPIED_HINT: &str = "Copied!";
pub const RESULT_ACTIONS_HINT: &str = "(:copy, :open)";
pub const HOLDING_CLIPBOARD_TEXT: &str =
    "Keeping the link on the clipboard until something else is copied (Ctrl-C to quit).";

pub const HELP_TEXT: &str = "\
Type a URL and press Enter to shorten it.
  :submit   shorten the current input again
  :copy     copy the last short link
  :open     open the last short link in the browser
  :help     show this help
  :quit     exit";
