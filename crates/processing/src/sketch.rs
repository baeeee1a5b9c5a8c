use crate::applet::Applet;

/// A sketch: `setup` once, `draw` every frame, plus optional input callbacks.
///
/// Every callback receives the [`Applet`] that holds the drawing API and the
/// per-frame globals (`mouse_x`, `key`, `frame_count`, ...). All callbacks
/// default to doing nothing.
///
/// ```rust,ignore
/// struct Bounce { x: f32 }
///
/// impl Sketch for Bounce {
///     fn setup(&mut self, p: &mut Applet) {
///         p.size(200, 200);
///     }
///
///     fn draw(&mut self, p: &mut Applet) {
///         p.background(51);
///         p.circle(self.x, 100.0, 20.0);
///         self.x = (self.x + 1.0) % 200.0;
///     }
/// }
/// ```
pub trait Sketch {
    /// Runs once before the window opens; `size`, `frame_rate` and `title`
    /// called here shape the window. Drawing done here stays on the canvas
    /// for every frame.
    fn setup(&mut self, p: &mut Applet) {
        let _ = p;
    }

    /// Runs once per frame while looping, or once per `redraw`.
    fn draw(&mut self, p: &mut Applet) {
        let _ = p;
    }

    fn mouse_pressed(&mut self, p: &mut Applet) {
        let _ = p;
    }

    fn mouse_released(&mut self, p: &mut Applet) {
        let _ = p;
    }

    /// The pointer moved with no button held.
    fn mouse_moved(&mut self, p: &mut Applet) {
        let _ = p;
    }

    /// The pointer moved with a button held.
    fn mouse_dragged(&mut self, p: &mut Applet) {
        let _ = p;
    }

    fn key_pressed(&mut self, p: &mut Applet) {
        let _ = p;
    }

    fn key_released(&mut self, p: &mut Applet) {
        let _ = p;
    }

    /// A key press produced a character (`p.key()` is `Some`).
    fn key_typed(&mut self, p: &mut Applet) {
        let _ = p;
    }

    /// Runs once after the window closed.
    fn leave(&mut self, p: &mut Applet) {
        let _ = p;
    }
}
