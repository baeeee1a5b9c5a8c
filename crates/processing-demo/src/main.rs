use log::warn;
use processing::prelude::*;

const BALLS: usize = 24;
const RADIUS: f32 = 8.0;

// ── Ball ──────────────────────────────────────────────────────────────────

struct Ball {
    position: PVector,
    velocity: PVector,
    hue: i32,
}

impl Ball {
    fn spawn(p: &mut Applet, hue: i32) -> Self {
        let position = PVector::new_2d(
            p.random_range(RADIUS, p.width() as f32 - RADIUS),
            p.random_range(RADIUS, p.height() as f32 - RADIUS),
        );
        let mut velocity = p.random_2d();
        velocity.mult(p.random_range(1.0, 3.0));
        Self { position, velocity, hue }
    }

    /// Pulls toward `target`, moves, and bounces off the canvas edges.
    fn step(&mut self, target: &PVector, width: f32, height: f32) -> Result<(), VectorError> {
        let mut pull = PVector::difference(target, &self.position)?;
        pull.set_mag(0.05);
        self.velocity.add(&pull)?.limit(4.0);
        self.position.add(&self.velocity)?;

        let (x, y) = (self.position.x(), self.position.y());
        if !(RADIUS..=width - RADIUS).contains(&x) {
            self.velocity.set_xy(-self.velocity.x(), self.velocity.y())?;
        }
        if !(RADIUS..=height - RADIUS).contains(&y) {
            self.velocity.set_xy(self.velocity.x(), -self.velocity.y())?;
        }
        self.position.set_xy(
            constrain(x, RADIUS, width - RADIUS),
            constrain(y, RADIUS, height - RADIUS),
        )?;
        Ok(())
    }
}

// ── Swarm ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Swarm {
    balls: Vec<Ball>,
    attract: bool,
    trails: bool,
}

impl Sketch for Swarm {
    fn setup(&mut self, p: &mut Applet) {
        p.size(480, 360);
        p.frame_rate(60.0);
        p.color_mode(ColorMode::Hsb);
        p.ellipse_mode(DrawMode::Radius);

        self.balls = (0..BALLS)
            .map(|i| Ball::spawn(p, (i * 255 / BALLS) as i32))
            .collect();
        println(format!(
            "swarm of {BALLS} balls; click to attract, t toggles trails, space pauses, arrows change speed"
        ));
    }

    fn draw(&mut self, p: &mut Applet) {
        if self.trails {
            p.no_stroke();
            p.fill((0, 0, 0, 40));
            p.rect(0.0, 0.0, p.width() as f32, p.height() as f32);
        } else {
            p.background(0);
        }

        let (w, h) = (p.width() as f32, p.height() as f32);
        let target = if self.attract {
            PVector::new_2d(p.mouse_x(), p.mouse_y())
        } else {
            PVector::new_2d(w / 2.0, h / 2.0)
        };

        p.stroke(255);
        p.stroke_weight(1.5);
        for ball in &mut self.balls {
            if let Err(e) = ball.step(&target, w, h) {
                warn!("ball update failed: {e}");
                continue;
            }
            p.fill((ball.hue, 200, 255));
            p.ellipse(ball.position.x(), ball.position.y(), RADIUS, RADIUS);
        }

        // Spinner marking the current target.
        p.push_matrix();
        p.translate(target.x(), target.y());
        p.rotate(radians(p.frame_count() as f32 * 3.0));
        p.no_fill();
        p.stroke((0, 0, 255));
        p.arc(0.0, 0.0, 24.0, 24.0, 0.0, PI + HALF_PI);
        p.pop_matrix();

        if p.frame_count() % 300 == 0 {
            p.title(format!("Swarm ({} frames)", p.frame_count()));
        }
    }

    fn mouse_pressed(&mut self, _p: &mut Applet) {
        self.attract = true;
    }

    fn mouse_released(&mut self, _p: &mut Applet) {
        self.attract = false;
    }

    fn key_typed(&mut self, p: &mut Applet) {
        match p.key() {
            Some('t') => self.trails = !self.trails,
            Some(' ') if p.is_looping() => p.no_loop(),
            Some(' ') => p.loop_(),
            Some('s') => p.redraw(),
            _ => {}
        }
    }

    fn key_pressed(&mut self, p: &mut Applet) {
        let code = p.key_code();
        if code == Key::Escape {
            p.exit();
        } else if code.is_coded() {
            let fps = p.target_frame_rate();
            match code {
                Key::ArrowUp => p.frame_rate(fps + 10.0),
                Key::ArrowDown => p.frame_rate(fps - 10.0),
                _ => {}
            }
        }
    }

    fn leave(&mut self, p: &mut Applet) {
        println(format!("ran for {} frames", p.frame_count()));
    }
}

fn main() -> anyhow::Result<()> {
    Processing::new()
        .title("Swarm")
        .logging(LoggingConfig::default())
        .run(Swarm::default())?;
    Ok(())
}
