use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{TextureValueError, WindowCanvas};
use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

use c8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use c8_core::is_well_formed;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error(transparent)]
    Window(#[from] WindowBuildError),
    #[error(transparent)]
    Canvas(#[from] IntegerOrSdlError),
    #[error(transparent)]
    Texture(#[from] TextureValueError),
}

impl From<String> for DisplayError {
    fn from(message: String) -> Self {
        DisplayError::Sdl(message)
    }
}

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Frames arrive as 2048 bytes of 1/0, one per pixel, in rows from the top left.
/// The display only gets a call to `render` when the interpreter publishes a frame.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a new display window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "c8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()?;
        let canvas = window.into_canvas().build()?;

        Ok(Display { canvas })
    }

    /// Formats a frame as RGB24 rows, `pitch` bytes apart.
    ///
    /// Each pixel is triplicated into its RGB values and scaled from 1/0 to 255/0.
    fn frame_to_rgb(frame: &[u8], buffer: &mut [u8], pitch: usize) {
        for (row, pixels) in buffer
            .chunks_mut(pitch)
            .zip(frame.chunks(DISPLAY_WIDTH))
        {
            for (rgb, &pixel) in row.chunks_mut(BYTES_PER_PIXEL).zip(pixels) {
                rgb.fill(pixel * 255);
            }
        }
    }

    /// Formats a frame as an SDL2 RGB24 texture and presents it.
    ///
    /// Anything that isn't a well formed frame is skipped.
    pub fn render(&mut self, frame: &[u8]) -> Result<(), DisplayError> {
        if !is_well_formed(frame) {
            log::warn!("ignoring malformed {} byte frame", frame.len());
            return Ok(());
        }

        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            DISPLAY_WIDTH as u32,
            DISPLAY_HEIGHT as u32,
        )?;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            Display::frame_to_rgb(frame, buffer, pitch);
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
