use crate::graphics::{CpuRenderer, Renderer2d};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// In-memory RGBA surface for headless rendering.
///
/// The offscreen counterpart to `PixelsRenderer2d`: `render` hands the same
/// `Renderer2d` to drawing code, so frames produced in tests go through the
/// exact code path the window uses and can be digested afterwards.
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Resizes the buffer in place. Newly exposed pixels are transparent
    /// black.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.buf.clear();
        self.buf.resize(size.rgba_len(), 0u8);
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    pub fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Draws one frame through a `CpuRenderer` over this buffer.
    pub fn render<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let size = self.size;
        let mut cpu = CpuRenderer::new(&mut self.buf, size);
        cpu.begin_frame(size);
        f(&mut cpu)
    }
}
