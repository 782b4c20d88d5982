/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check(String),
    Clear,
    Stats,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            ":clear" => Command::Clear,
            ":stats" => Command::Stats,
            ":help" | ":h" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            _ => Command::Check(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a website URL and press Enter to check it (https:// is assumed).
  :clear   clear the results
  :stats   show session statistics
  :help    show this message
  :quit    wait for running checks, then exit
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse(":clear"), Command::Clear);
        assert_eq!(Command::parse("  :STATS "), Command::Stats);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":h"), Command::Help);
        assert_eq!(
            Command::parse(" example.com "),
            Command::Check(" example.com ".to_string())
        );
        assert_eq!(Command::parse(""), Command::Check(String::new()));
    }
}
