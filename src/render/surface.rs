/// Minimal 2D painting contract
///
/// Coordinates are CSS pixels; implementations map them onto physical pixels
/// using the device pixel ratio passed to `resize`.
pub trait Surface {
    /// Resize the backing store to `width x height` CSS pixels. Previous
    /// contents are discarded.
    fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64);

    /// Paint a filled rectangle in `color` at global `alpha` (0..=1)
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, alpha: f64);

    fn fill_square(&mut self, x: f64, y: f64, size: f64, color: &str, alpha: f64) {
        self.fill_rect(x, y, size, size, color, alpha);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize {
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
        alpha: f64,
    },
}

/// Headless surface that records every call
///
/// Used to run the background without a browser and to assert on what a
/// frame painted.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Fill commands only, in paint order
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }
}

impl Surface for DrawList {
    fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.commands.push(DrawCommand::Resize {
            width,
            height,
            device_pixel_ratio,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, alpha: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_square_records_a_square_rect() {
        let mut list = DrawList::new();
        list.resize(10.0, 10.0, 2.0);
        list.fill_square(1.0, 2.0, 1.5, "#000", 0.5);

        assert_eq!(list.len(), 2);
        assert_eq!(list.fills().count(), 1);
        assert_eq!(
            list.commands()[1],
            DrawCommand::FillRect {
                x: 1.0,
                y: 2.0,
                width: 1.5,
                height: 1.5,
                color: "#000".to_string(),
                alpha: 0.5,
            }
        );
    }
}
