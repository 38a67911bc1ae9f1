//! Draw primitives for a host renderer
//!
//! The wave emits one [`DrawCommand`] per visible thing and leaves sprites,
//! colours and batching to whoever implements [`RenderSink`].

use glam::Vec2;

use crate::sim::{AlienVariant, BoltOwner};

/// One visible entity, positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Alien {
        pos: Vec2,
        size: Vec2,
        variant: AlienVariant,
    },
    Ship {
        pos: Vec2,
        size: Vec2,
    },
    /// Horizontal line across the whole field
    DefenseLine {
        y: f32,
        width: f32,
    },
    Bolt {
        pos: Vec2,
        size: Vec2,
        owner: BoltOwner,
    },
}

/// Accepts draw requests in paint order
pub trait RenderSink {
    fn draw(&mut self, command: DrawCommand);
}

impl RenderSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
