//! Winit application handler for Chromeless
//!
//! Creates the undecorated window on resume, installs the native frame
//! hooks when the platform has them and otherwise routes pointer input to
//! the portable drag and resize handlers.

use crate::platform;
use crate::utils::config::Config;
use crate::utils::error::{ChromelessError, IntoChromelessError, Result};
use crate::window::drag::DragHandler;
use crate::window::events::{self, EventHandler};
use crate::window::resize::ResizeHandler;
use crate::window::surface::BackgroundSurface;
use crate::window::{Key, WindowEvent};
use log::{debug, info, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent as WinitWindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window as WinitWindow, WindowAttributes, WindowId, WindowLevel},
};

/// Application state driven by the winit event loop
pub struct ChromelessApp {
    config: Config,

    /// The single top-level window, once resumed
    window: Option<Arc<WinitWindow>>,

    /// Whether the native frame hooks are installed
    native_frame: bool,

    /// Background buffer, only without the native frame
    surface: Option<BackgroundSurface>,

    event_handler: EventHandler,
    drag_handler: DragHandler,
    resize_handler: ResizeHandler,

    /// First fatal error, returned from [`run`]
    error: Option<ChromelessError>,
}

impl ChromelessApp {
    pub fn new(config: Config) -> Self {
        let resize_handler = ResizeHandler::new(config.frame.portable_border());
        Self {
            config,
            window: None,
            native_frame: false,
            surface: None,
            event_handler: EventHandler::new(),
            drag_handler: DragHandler::new(),
            resize_handler,
            error: None,
        }
    }

    /// Attributes of the chrome-less window
    pub fn window_attributes(&self) -> WindowAttributes {
        let window = &self.config.window;
        let level = if window.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        WinitWindow::default_attributes()
            .with_title(window.title.clone())
            .with_decorations(false)
            .with_resizable(true)
            .with_inner_size(LogicalSize::new(window.width as f64, window.height as f64))
            .with_window_level(level)
    }

    pub fn has_native_frame(&self) -> bool {
        self.native_frame
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop
                .create_window(self.window_attributes())
                .window_err("Failed to create window")?,
        );

        info!(
            "Created window {:?} ({}x{})",
            window.id(),
            self.config.window.width,
            self.config.window.height
        );

        self.native_frame = match platform::install(&window, &self.config.frame) {
            Ok(installed) => installed,
            Err(e) => {
                warn!("Native frame hooks unavailable, using portable handling: {}", e);
                false
            }
        };

        if !self.native_frame {
            self.surface = match BackgroundSurface::new(event_loop, window.clone()) {
                Ok(surface) => Some(surface),
                Err(e) => {
                    warn!("Window background unavailable: {}", e);
                    None
                }
            };
        }

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn handle_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            self.error = Some(crate::internal_error!("event before window creation"));
            event_loop.exit();
            return;
        };

        match event {
            WindowEvent::CloseRequested | WindowEvent::KeyPressed(Key::Escape) => {
                info!("Closing window");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!("Resized to {}x{}", size.width, size.height);
                window.request_redraw();
            }

            WindowEvent::Moved(position) => debug!("Moved to ({}, {})", position.x, position.y),

            WindowEvent::Focused(focused) => debug!("Focus changed: {}", focused),

            WindowEvent::CursorMoved(position) if !self.native_frame => {
                let icon = self.resize_handler.handle_cursor_moved(
                    position,
                    events::inner_size(window),
                    window.is_maximized(),
                );
                window.set_cursor(icon);
            }

            WindowEvent::CursorLeft if !self.native_frame => {
                self.resize_handler.handle_cursor_left()
            }

            WindowEvent::MouseDown { position, button } if !self.native_frame => {
                let region = self.resize_handler.press_region(
                    position,
                    events::inner_size(window),
                    window.is_maximized(),
                );
                if !self.resize_handler.handle_press(button, region, window) {
                    self.drag_handler.handle_press(button, region, window);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(surface) = self.surface.as_mut() {
                    if let Err(e) = surface.fill(events::inner_size(window)) {
                        warn!("Failed to draw window background: {}", e);
                        self.surface = None;
                    }
                }
            }

            _ => {}
        }
    }
}

impl ApplicationHandler for ChromelessApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        if let Some(event) = self.event_handler.handle_event(&event) {
            self.handle_event(event_loop, event);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        debug!("Event loop exiting after {} portable drags", self.drag_handler.drags_started());
        self.surface = None;
        self.window = None;
    }
}

/// Create the window and run the event loop until it closes
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ChromelessApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
