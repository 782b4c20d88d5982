use tokio::io::BufReader;

use sitecheck::app::HELP;
use sitecheck::{App, CheckerConfig, CheckerResult, ConsoleDisplay, HttpChecker};

#[tokio::main]
async fn main() -> CheckerResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("hyper", log::LevelFilter::Error)
        .filter_module("reqwest", log::LevelFilter::Error)
        .parse_default_env()
        .init();

    let config = CheckerConfig::default();
    let checker = HttpChecker::new(&config)?;

    println!("Website Connectivity Checker");
    println!("Check the status and response time of any website\n");
    print!("{}", HELP);

    let mut app = App::new(ConsoleDisplay::new(), Box::new(checker), config);
    app.run(BufReader::new(tokio::io::stdin())).await;

    Ok(())
}
