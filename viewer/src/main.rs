use std::process::exit;
use std::time::Duration;

use anyhow::{anyhow, Result};
use libscrawl::{
    event::Rgba,
    render::{Renderer, Surface},
    server::{EventServer, SessionEvent, SessionFeed, DEFAULT_PORT},
};
use sdl3::{
    event::{Event, WindowEvent},
    render::BlendMode,
};
use surface::SdlSurface;

mod surface;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;
const BACKGROUND: Rgba = Rgba::BLACK;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_line_number(true)
        .format_timestamp(None)
        .init();

    let server = match EventServer::bind(DEFAULT_PORT).await {
        Ok(server) => server,
        Err(e) => {
            log::error!("Failed to bind port {}: {}", DEFAULT_PORT, e);
            exit(1);
        }
    };
    match server.local_addr() {
        Ok(addr) => println!("Viewer listening on {}", addr),
        Err(_) => println!("Viewer listening on port {}", DEFAULT_PORT),
    }
    let feed = server.spawn();

    if let Err(e) = run(feed).await {
        log::error!("Viewer error: {}", e);
        exit(1);
    }
}

async fn run(mut feed: SessionFeed) -> Result<()> {
    // Initialize SDL3
    let sdl = sdl3::init().map_err(|e| anyhow!(e))?;
    let video = sdl.video().map_err(|e| anyhow!(e))?;
    let mut window = video.window("Scrawl Viewer", WINDOW_WIDTH, WINDOW_HEIGHT);
    window.position_centered();
    let window = window.build().map_err(|e| anyhow!(e))?;
    let mut canvas = window.into_canvas();
    let (width, height) = canvas.output_size().map_err(|e| anyhow!(e))?;

    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_target(
        texture_creator.default_pixel_format(),
        width,
        height,
    )?;
    let _ = texture.set_blend_mode(BlendMode::None);
    canvas
        .with_texture_canvas(&mut texture, |tc| {
            SdlSurface::new(tc, BACKGROUND).clear();
        })
        .map_err(|e| anyhow!(e))?;

    let mut renderer = Renderer::new(width, height, BACKGROUND);
    let mut event_pump = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut pending = Vec::new();
    'running: loop {
        // Drain whatever arrived since the last tick, then paint it in order.
        pending.clear();
        while let Some(event) = feed.try_next() {
            pending.push(event);
        }
        if !pending.is_empty() {
            canvas
                .with_texture_canvas(&mut texture, |tc| {
                    let mut surface = SdlSurface::new(tc, BACKGROUND);
                    for session_event in &pending {
                        match session_event {
                            SessionEvent::Connected(_) => renderer.reset_stroke(),
                            SessionEvent::Disconnected(_) => {}
                            SessionEvent::Event(event) => renderer.apply(&mut surface, event),
                        }
                    }
                })
                .map_err(|e| anyhow!(e))?;
        }

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    log::trace!("Received quit event, exiting...");
                    break 'running;
                }
                Event::Window { win_event, .. } => {
                    if win_event == WindowEvent::CloseRequested {
                        break 'running;
                    }
                }
                _ => {}
            }
        }

        canvas.set_draw_color(surface::sdl_color(BACKGROUND));
        canvas.clear();
        canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
        canvas.present();

        // Sleep for a short duration to avoid busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await; // ~60 FPS
    }
    Ok(())
}
