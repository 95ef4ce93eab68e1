use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use libscrawl::{
    client::ServerStream,
    coords,
    event::{Event as DrawEvent, Rgba, ShapeKind},
    render::{ERASER_RADIUS, PEN_DOT_RADIUS},
};
use sdl3::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    mouse::MouseButton,
    render::{BlendMode, Canvas, Texture},
    video,
};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::{palette, surface};

const MAX_FPS: u32 = 60;
const FRAME_TIME: u64 = 1_000_000_000 / MAX_FPS as u64; // in nanoseconds

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tool {
    Pen,
    Eraser,
    Line,
    Rectangle,
    Circle,
}

impl Tool {
    fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Pen | Tool::Eraser => None,
        }
    }
}

/// The drawing pad window: a local echo canvas plus the event stream
/// to the viewer. Everything painted here is also sent as events, so
/// the viewer ends up with the same image.
pub struct Pad {
    sdl: sdl3::Sdl,
    canvas: Canvas<video::Window>,
    width: u32,
    height: u32,
    host: String,
    port: u16,
    conn: Option<ServerStream>,
    config: Config,
    tool: Tool,
    color: Rgba,
    palette_index: usize,
    pressed: bool,
    /// Last echoed pen point, anchoring the next echo segment.
    stroke_last: Option<(i32, i32)>,
    /// First corner of the shape being dragged out, if any.
    shape_start: Option<(i32, i32)>,
    cursor: (i32, i32),
}

impl Pad {
    pub fn new(
        sdl: sdl3::Sdl,
        video: sdl3::VideoSubsystem,
        config: Config,
        host: String,
        port: u16,
        fullscreen: bool,
        conn: Option<ServerStream>,
    ) -> Result<Self> {
        let mut window = video.window(
            &format!("Scrawl: {}:{}", host, port),
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
        );
        window.position_centered();
        if fullscreen {
            window.fullscreen();
        }
        let window = window.build().map_err(|e| anyhow!(e))?;
        let mut canvas = window.into_canvas();
        let (width, height) = canvas.output_size().map_err(|e| anyhow!(e))?;
        surface::clear(&mut canvas);
        canvas.present();
        let color = config.pen_color().unwrap_or(Rgba::WHITE);
        Ok(Pad {
            sdl,
            canvas,
            width,
            height,
            host,
            port,
            conn,
            config,
            tool: Tool::Pen,
            color,
            palette_index: palette::position(color).unwrap_or(0),
            pressed: false,
            stroke_last: None,
            shape_start: None,
            cursor: (0, 0),
        })
    }

    pub async fn main(&mut self) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();
        let mut canvas_texture = texture_creator.create_texture_target(
            texture_creator.default_pixel_format(),
            self.width,
            self.height,
        )?;
        // Ensure the echo canvas does not blend with the window beneath it.
        let _ = canvas_texture.set_blend_mode(BlendMode::None);
        self.clear_canvas(&mut canvas_texture)?;
        self.update_title();

        let mut event_pump = self.sdl.event_pump().map_err(|e| anyhow!(e))?;
        let mut last_frame_time = Instant::now();
        'running: loop {
            for event in event_pump.poll_iter() {
                if !self.handle_window_event(&mut canvas_texture, event).await? {
                    break 'running;
                }
            }
            self.render(&canvas_texture)?;

            // Sleep to maintain frame rate
            let elapsed_time = last_frame_time.elapsed().as_nanos() as u64;
            if elapsed_time < FRAME_TIME {
                tokio::time::sleep(Duration::from_nanos(FRAME_TIME - elapsed_time)).await;
            } else {
                log::trace!(
                    "Frame time exceeded: {} ns (max: {} ns)",
                    elapsed_time,
                    FRAME_TIME
                );
            }
            last_frame_time = Instant::now();
        }
        self.config.remember(self.host.clone(), self.color);
        Ok(())
    }

    /// Repaints the window: the echo canvas, then any dashed shape preview on top.
    fn render(&mut self, texture: &Texture) -> Result<()> {
        surface::clear(&mut self.canvas);
        self.canvas.copy(texture, None, None).map_err(|e| anyhow!(e))?;
        if let (Some(start), Some(kind)) = (self.shape_start, self.tool.shape_kind()) {
            surface::dashed_shape(&mut self.canvas, kind, start, self.cursor, self.color);
        }
        self.canvas.present();
        Ok(())
    }

    async fn handle_window_event(
        &mut self,
        texture: &mut Texture<'_>,
        event: Event,
    ) -> Result<bool> {
        log::trace!("SDL event: {:?}", event);
        match event {
            Event::Quit { .. } => {
                log::trace!("Received quit event, exiting...");
                return Ok(false);
            }
            Event::Window { win_event, .. } => {
                if win_event == WindowEvent::CloseRequested {
                    return Ok(false);
                }
            }
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => return self.handle_key(texture, keycode).await,
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => self.pointer_down(texture, (x as i32, y as i32)).await?,
            Event::MouseMotion { x, y, .. } => {
                self.pointer_moved(texture, (x as i32, y as i32)).await?
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => self.pointer_up(texture, (x as i32, y as i32)).await?,
            _ => {}
        }
        Ok(true)
    }

    async fn handle_key(&mut self, texture: &mut Texture<'_>, keycode: Keycode) -> Result<bool> {
        match keycode {
            Keycode::Escape => return Ok(false),
            Keycode::P => self.select_tool(Tool::Pen),
            Keycode::E => self.select_tool(Tool::Eraser),
            Keycode::L => self.select_tool(Tool::Line),
            Keycode::R => self.select_tool(Tool::Rectangle),
            Keycode::C => self.select_tool(Tool::Circle),
            Keycode::Tab => self.next_color(),
            Keycode::X => self.erase_all(texture).await?,
            Keycode::F5 => self.reconnect().await,
            _ => {}
        }
        Ok(true)
    }

    async fn pointer_down(&mut self, texture: &mut Texture<'_>, point: (i32, i32)) -> Result<()> {
        self.pressed = true;
        self.cursor = point;
        match self.tool {
            Tool::Pen => {
                self.stroke_last = Some(point);
                let color = self.color;
                self.paint(texture, |canvas| {
                    surface::fill_disc(canvas, point, PEN_DOT_RADIUS, color)
                })?;
                let event = self.pen_event(point, true);
                self.send(&event).await;
            }
            Tool::Eraser => {
                self.paint(texture, |canvas| {
                    surface::fill_disc(canvas, point, ERASER_RADIUS, surface::BACKGROUND)
                })?;
                let event = self.erase_event(point);
                self.send(&event).await;
            }
            Tool::Line | Tool::Rectangle | Tool::Circle => self.shape_start = Some(point),
        }
        Ok(())
    }

    async fn pointer_moved(&mut self, texture: &mut Texture<'_>, point: (i32, i32)) -> Result<()> {
        self.cursor = point;
        if !self.pressed {
            return Ok(());
        }
        match self.tool {
            Tool::Pen => {
                let from = self.stroke_last.replace(point);
                let color = self.color;
                if let Some(from) = from {
                    self.paint(texture, |canvas| {
                        surface::thick_segment(canvas, from, point, color)
                    })?;
                }
                let event = self.pen_event(point, false);
                self.send(&event).await;
            }
            Tool::Eraser => {
                self.paint(texture, |canvas| {
                    surface::fill_disc(canvas, point, ERASER_RADIUS, surface::BACKGROUND)
                })?;
                let event = self.erase_event(point);
                self.send(&event).await;
            }
            // Shape previews are drawn per frame in render().
            Tool::Line | Tool::Rectangle | Tool::Circle => {}
        }
        Ok(())
    }

    async fn pointer_up(&mut self, texture: &mut Texture<'_>, point: (i32, i32)) -> Result<()> {
        if !self.pressed {
            return Ok(());
        }
        self.pressed = false;
        self.cursor = point;
        match self.tool {
            Tool::Pen => self.stroke_last = None,
            Tool::Eraser => {}
            Tool::Line | Tool::Rectangle | Tool::Circle => {
                if let Some(start) = self.shape_start.take() {
                    self.commit_shape(texture, start, point).await?;
                }
            }
        }
        Ok(())
    }

    /// Commits the dragged-out shape: solid on the echo canvas, one event on the wire.
    async fn commit_shape(
        &mut self,
        texture: &mut Texture<'_>,
        start: (i32, i32),
        end: (i32, i32),
    ) -> Result<()> {
        let Some(kind) = self.tool.shape_kind() else {
            return Ok(());
        };
        let color = self.color;
        self.paint(texture, |canvas| {
            surface::solid_shape(canvas, kind, start, end, color)
        })?;
        let event = DrawEvent::Shape {
            shape: kind,
            start: self.normalized(start),
            end: self.normalized(end),
            color,
        };
        self.send(&event).await;
        Ok(())
    }

    async fn erase_all(&mut self, texture: &mut Texture<'_>) -> Result<()> {
        let confirmed = Confirm::new()
            .with_prompt("Do you want to erase the whole canvas?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            return Ok(());
        }
        self.clear_canvas(texture)?;
        self.send(&DrawEvent::EraseAll).await;
        Ok(())
    }

    fn select_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        self.tool = tool;
        // Switching tools cancels any in-progress stroke or shape.
        self.stroke_last = None;
        self.shape_start = None;
        log::info!("Tool: {:?}", tool);
        self.update_title();
    }

    fn next_color(&mut self) {
        let (index, name, color) = palette::next(self.palette_index);
        self.palette_index = index;
        self.color = color;
        log::info!("Pen color: {}", name);
    }

    async fn reconnect(&mut self) {
        if self.conn.is_some() {
            log::info!("Already connected to {}:{}", self.host, self.port);
            return;
        }
        match libscrawl::client::connect(&self.host, self.port).await {
            Ok(conn) => {
                self.conn = Some(conn);
                println!("Successfully connected to viewer!");
            }
            Err(err) => {
                log::warn!("Failed to connect to {}:{}: {}", self.host, self.port, err)
            }
        }
        self.update_title();
    }

    /// Sends one event to the viewer, dropping the connection on failure.\
    /// Drawing keeps working locally while disconnected.
    async fn send(&mut self, event: &DrawEvent) {
        let Some(conn) = self.conn.as_mut() else {
            log::trace!("Not connected, dropping {:?}", event);
            return;
        };
        if let Err(err) = conn.send(event).await {
            log::warn!("Failed to send event: {} (press F5 to reconnect)", err);
            self.conn = None;
            self.update_title();
        }
    }

    fn paint<F>(&mut self, texture: &mut Texture, painter: F) -> Result<()>
    where
        F: FnOnce(&mut Canvas<video::Window>),
    {
        self.canvas
            .with_texture_canvas(texture, painter)
            .map_err(|e| anyhow!(e))
    }

    fn clear_canvas(&mut self, texture: &mut Texture) -> Result<()> {
        self.paint(texture, surface::clear)
    }

    fn pen_event(&self, point: (i32, i32), new_line: bool) -> DrawEvent {
        let (x, y) = self.normalized(point);
        DrawEvent::Draw {
            x,
            y,
            new_line,
            color: self.color,
        }
    }

    fn erase_event(&self, point: (i32, i32)) -> DrawEvent {
        let (x, y) = self.normalized(point);
        DrawEvent::Erase { x, y }
    }

    /// SDL windows have a top-left origin; flip before normalizing.
    fn normalized(&self, point: (i32, i32)) -> (f32, f32) {
        coords::normalize(
            point.0 as f32,
            self.height as f32 - point.1 as f32,
            self.width,
            self.height,
        )
    }

    fn update_title(&mut self) {
        let status = if self.conn.is_some() {
            "connected"
        } else {
            "disconnected, F5 to reconnect"
        };
        let title = format!(
            "Scrawl: {}:{} ({}) - {:?}",
            self.host, self.port, status, self.tool
        );
        let _ = self.canvas.window_mut().set_title(&title);
    }
}
