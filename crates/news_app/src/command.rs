use news_core::{FilterChange, Msg};

pub const HELP: &str = "\
Commands:
  search <text>      search by free text (empty clears the query)
  section <name|all> filter by category
  summaries on|off   include article summaries
  next | prev        move between pages
  page <n>           jump to page n
  star <n|id>        toggle bookmark on result n or content id
  bookmarks          list bookmarked ids
  refresh            reload the current page
  retry              retry the last failed load
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    /// Card number (1-based) or content id.
    Star(String),
    Retry,
    ListBookmarks,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "search" | "s" => Command::Dispatch(Msg::FiltersChanged(FilterChange::query(rest))),
        "section" => {
            let section = if rest.eq_ignore_ascii_case("all") {
                ""
            } else {
                rest
            };
            Command::Dispatch(Msg::FiltersChanged(FilterChange::section(section)))
        }
        "summaries" => match rest.to_ascii_lowercase().as_str() {
            "on" => Command::Dispatch(Msg::FiltersChanged(FilterChange::include_summaries(true))),
            "off" => Command::Dispatch(Msg::FiltersChanged(FilterChange::include_summaries(false))),
            _ => Command::Unknown(line.to_string()),
        },
        "next" | "n" => Command::Dispatch(Msg::NextPage),
        "prev" | "previous" | "p" => Command::Dispatch(Msg::PreviousPage),
        "page" => match rest.parse::<u32>() {
            Ok(n) => Command::Dispatch(Msg::GoToPage(n)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "star" if !rest.is_empty() => Command::Star(rest.to_string()),
        "refresh" | "r" => Command::Dispatch(Msg::RefreshRequested),
        "retry" => Command::Retry,
        "bookmarks" => Command::ListBookmarks,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_map_to_filter_changes() {
        assert_eq!(
            parse_command("search  climate change "),
            Command::Dispatch(Msg::FiltersChanged(FilterChange::query("climate change")))
        );
        assert_eq!(
            parse_command("search"),
            Command::Dispatch(Msg::FiltersChanged(FilterChange::query("")))
        );
        assert_eq!(
            parse_command("section ALL"),
            Command::Dispatch(Msg::FiltersChanged(FilterChange::section("")))
        );
        assert_eq!(
            parse_command("summaries on"),
            Command::Dispatch(Msg::FiltersChanged(FilterChange::include_summaries(true)))
        );
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(parse_command("next"), Command::Dispatch(Msg::NextPage));
        assert_eq!(parse_command("P"), Command::Dispatch(Msg::PreviousPage));
        assert_eq!(parse_command("page 4"), Command::Dispatch(Msg::GoToPage(4)));
        assert_eq!(
            parse_command("page four"),
            Command::Unknown("page four".to_string())
        );
    }

    #[test]
    fn other_commands() {
        assert_eq!(parse_command("star 2"), Command::Star("2".to_string()));
        assert_eq!(parse_command("star"), Command::Unknown("star".to_string()));
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(
            parse_command("refresh"),
            Command::Dispatch(Msg::RefreshRequested)
        );
    }
}
