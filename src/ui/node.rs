//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! Leaves may carry a `HitTarget`; drawing records where each target landed
//! so mouse events can be routed to the control under the pointer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Interactive regions of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Slider,
    Button,
}

/// Areas of the interactive leaves from the last drawn frame.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    entries: Vec<(HitTarget, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn insert(&mut self, target: HitTarget, area: Rect) {
        self.entries.push((target, area));
    }

    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, r)| *r)
    }

    /// Topmost target containing the cell at `(column, row)`.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.entries
            .iter()
            .rev()
            .find(|(_, r)| r.contains(pos))
            .map(|(t, _)| *t)
    }
}

/// Node tree used to compose the UI each frame.
pub enum Node<'a> {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node<'a>>,
    },
    Leaf {
        panel: Box<dyn Panel + 'a>,
        target: Option<HitTarget>,
    },
}

impl Node<'_> {
    /// Draw the node into the given area, recording interactive leaves.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect, hits: &mut HitMap) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk, hits);
                }
            }
            Node::Leaf { panel, target } => {
                if let Some(t) = target {
                    hits.insert(*t, area);
                }
                panel.draw(f, area);
            }
        }
    }
}

/// Helper: create a group node.
pub fn group<'a>(
    direction: Direction,
    constraints: Vec<Constraint>,
    children: Vec<Node<'a>>,
) -> Node<'a> {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf<'a>(panel: impl Panel + 'a) -> Node<'a> {
    Node::Leaf {
        panel: Box::new(panel),
        target: None,
    }
}

/// Helper: create a leaf that receives mouse input.
pub fn interactive<'a>(target: HitTarget, panel: impl Panel + 'a) -> Node<'a> {
    Node::Leaf {
        panel: Box::new(panel),
        target: Some(target),
    }
}
