//! Terminal implementations of the host collaborator traits

use crate::host::{Event, InputSource, Renderer, SpriteHandle};
use crate::utils::{Color, ColorOutput};
use anyhow::Result;
use std::io::Write;

/// Glyph stand-ins for the sprite images of the windowed build
const SPRITE_ASSETS: &[(&str, char, Color)] = &[
    ("charmander-square", '█', Color::Red),
    ("bulbasaur-square", '▒', Color::Yellow),
];

/// Renders the grid as colored glyphs on an ANSI terminal.
///
/// Each frame is composed into an off-screen character buffer and flushed
/// on `present`, so partially drawn frames are never visible.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    height: usize,
    sprites: Vec<(char, Color)>,
    buffer: Vec<Option<SpriteHandle>>,
    first_frame: bool,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout(width: usize, height: usize) -> Self {
        Self::new(std::io::stdout(), width, height)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            width,
            height,
            sprites: Vec::new(),
            buffer: vec![None; width * height],
            first_frame: true,
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn load_sprite(&mut self, id: &str) -> Result<SpriteHandle> {
        let (_, glyph, color) = SPRITE_ASSETS
            .iter()
            .find(|(asset, _, _)| *asset == id)
            .ok_or_else(|| anyhow::anyhow!("No sprite asset named '{id}'"))?;
        self.sprites.push((*glyph, *color));
        Ok(SpriteHandle(self.sprites.len() - 1))
    }

    fn clear(&mut self, _color: Color) {
        self.buffer.fill(None);
    }

    fn draw_sprite(&mut self, sprite: SpriteHandle, col: usize, row: usize) {
        if row < self.height && col < self.width {
            self.buffer[row * self.width + col] = Some(sprite);
        }
    }

    fn present(&mut self) -> Result<()> {
        let mut frame = String::with_capacity(self.buffer.len() + self.height + 16);
        // Clear the screen once, then rewind the cursor between frames
        frame.push_str(if self.first_frame { "\x1b[2J\x1b[H" } else { "\x1b[H" });
        self.first_frame = false;

        for row in 0..self.height {
            for col in 0..self.width {
                match self.buffer[row * self.width + col] {
                    Some(SpriteHandle(idx)) => {
                        let (glyph, color) = self.sprites[idx];
                        frame.push_str(&ColorOutput::colored(&glyph.to_string(), color));
                    }
                    None => frame.push('·'),
                }
            }
            frame.push('\n');
        }

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Fires the start trigger after a fixed number of frames.
///
/// The windowed original started on the first mouse click; the terminal
/// host has no pointer, so the trigger is timed instead. Free-form mouse
/// painting stays out entirely.
pub struct AutoStartInput {
    start_frame: u32,
    frame: u32,
}

impl AutoStartInput {
    pub fn new(start_frame: u32) -> Self {
        Self {
            start_frame,
            frame: 0,
        }
    }
}

impl InputSource for AutoStartInput {
    fn poll_events(&mut self) -> Vec<Event> {
        self.frame += 1;
        if self.frame == self.start_frame {
            vec![Event::ToggleStart]
        } else {
            Vec::new()
        }
    }
}
