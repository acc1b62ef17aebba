//! METAR fetcher.
//!
//! Fetches the most recent METAR for each configured station and prints one compact,
//! color coded line per station. The intention is to use this in a spare terminal,
//! an i3status type interface, or other non graphical method.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use metar_fetcher::{fetch, render, CmdLineArgs, DisplayConfig, Metar, MetarConfig, MetarFetcherErr};

// How long to wait between fetches when running long lived.
const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

// Clear the whole screen, used once when entering the long lived loop.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
// Reposition the cursor to the top left so each frame overdraws the last.
const CURSOR_HOME: &str = "\x1b[0;0H";

fn main() {
    if let Err(ref e) = run() {
        println!("error: {}", e);

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), MetarFetcherErr> {
    let app = CmdLineArgs::new_app(
        "metarf",
        "Fetch METARs from aviationweather.gov and display them.",
    );
    let (args, _matches) = CmdLineArgs::matches(app)?;

    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let mut config = MetarConfig::load(args.config())?;
    if !args.stations().is_empty() {
        config.metars.stations = args.stations().to_vec();
    }

    // Resolve the station query and URL once, they never change for the process lifetime.
    let station_query = config.station_query()?;
    let url = fetch::format_metar_url(&station_query);
    let client = fetch::build_client()?;

    if config.display.longlived {
        run_continuous(&client, &url, &config.display)
    } else {
        run_once(&client, &url, &config.display)
    }
}

// One fetch and render cycle, any failure is fatal.
fn run_once(client: &Client, url: &str, display: &DisplayConfig) -> Result<(), MetarFetcherErr> {
    let response = fetch::fetch_metars(client, url)?;

    draw(&response.data.metars, display)
}

// Refresh on an interval until the process is killed. A failed cycle is logged and
// retried after the normal sleep, it must never take the process down.
fn run_continuous(
    client: &Client,
    url: &str,
    display: &DisplayConfig,
) -> Result<(), MetarFetcherErr> {
    print!("{}", CLEAR_SCREEN);
    io::stdout().flush()?;

    loop {
        match fetch::fetch_metars(client, url) {
            Ok(response) => {
                print!("{}", CURSOR_HOME);
                draw(&response.data.metars, display)?;
            }
            Err(err) => log::error!("unable to fetch METAR data: {}", err),
        }

        thread::sleep(REFRESH_INTERVAL);
    }
}

fn draw(metars: &[Metar], display: &DisplayConfig) -> Result<(), MetarFetcherErr> {
    let rendered = render::render_batch(metars, display)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes())?;
    handle.flush()?;

    Ok(())
}
