use std::process::exit;

use clap::Parser;
use pad::Pad;

mod config;
mod pad;
mod palette;
mod surface;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The viewer host to connect to, falling back to the configured default.
    #[clap(value_parser)]
    host: Option<String>,
    /// The port to connect to.
    #[clap(short, long, default_value_t = libscrawl::server::DEFAULT_PORT)]
    port: u16,
    /// Start fullscreen.
    #[clap(long)]
    fullscreen: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_line_number(true)
        .format_timestamp(None)
        .init();
    let args = Args::parse();
    let config = config::Config::load();
    let host = args
        .host
        .or_else(|| config.default_host().map(str::to_string))
        .unwrap_or_else(|| "localhost".to_string());

    // Initialize SDL3
    let sdl = sdl3::init().unwrap_or_else(|e| {
        log::error!("Failed to initialize SDL3: {}", e);
        exit(1);
    });
    let video = sdl.video().unwrap_or_else(|e| {
        log::error!("Failed to initialize SDL3 video subsystem: {}", e);
        exit(1);
    });

    println!("Connecting to {}:{}...", host, args.port);
    let conn = match libscrawl::client::connect(&host, args.port).await {
        Ok(conn) => {
            println!("Successfully connected to viewer!");
            Some(conn)
        }
        Err(e) => {
            log::warn!("Failed to connect: {} (press F5 to retry)", e);
            None
        }
    };

    let mut pad = match Pad::new(sdl, video, config, host, args.port, args.fullscreen, conn) {
        Ok(pad) => pad,
        Err(e) => {
            log::error!("Failed to create window: {}", e);
            exit(1);
        }
    };
    if let Err(e) = pad.main().await {
        log::error!("Client error: {}", e);
        exit(1);
    }
}
