//! Integration test utilities for Chromeless
//!
//! - A mockall double of the native frame host
//! - Config file fixtures in a temporary directory

use anyhow::Result;
use chromeless::{FrameHost, Point, Rect, Size};
use std::path::PathBuf;
use tempfile::TempDir;

mockall::mock! {
    pub Host {}

    impl FrameHost for Host {
        fn is_maximized(&self) -> bool;
        fn client_size(&self) -> Size;
        fn screen_to_client(&self, point: Point) -> Point;
        fn border_thickness(&self) -> i32;
        fn default_calc_size(&mut self, rect: &mut Rect);
        fn release_capture(&mut self);
        fn send_caption_button_down(&mut self);
    }
}

/// A restored window whose client area starts at `origin` on screen
pub fn restored_host(origin: Point, size: Size, border: i32) -> MockHost {
    let mut host = MockHost::new();
    host.expect_is_maximized().return_const(false);
    host.expect_client_size().return_const(size);
    host.expect_border_thickness().return_const(border);
    host.expect_screen_to_client()
        .returning(move |p| Point::new(p.x - origin.x, p.y - origin.y));
    host
}

/// Test fixture holding config files in a temporary directory
pub struct ConfigFixture {
    pub temp_dir: TempDir,
}

impl ConfigFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write `contents` to `name` inside the fixture directory
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
