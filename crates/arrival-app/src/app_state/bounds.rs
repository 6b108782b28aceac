//! Webview placement inside the window.

use winit::window::Window;

/// A rect covering `width` x `height` logical pixels from the origin.
pub fn full_rect(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

/// The page fills the whole client area.
pub fn window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    full_rect(size.width, size.height)
}
