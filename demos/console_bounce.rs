use polyphys::{Polygon, RgbColor, RigidBody, Scene, Vector2, BodyHandle};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use std::thread::sleep;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType, size},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const SIMULATION_DURATION: f64 = 15.0; // seconds
const NUM_BALLS: usize = 5;
const GRAVITY: f64 = -9.81;
const BALL_CHARS: [char; 5] = ['●', '○', '◆', '◇', '■'];

fn to_terminal_color(color: RgbColor) -> Color {
    let [r, g, b] = color.to_rgb8();
    Color::Rgb { r, g, b }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = stdout();
    stdout.execute(Hide)?;

    let (width, height) = size()?;
    let (w, h) = (width as f64, height as f64);

    let mut scene = Scene::new();

    // Floor and walls never move
    let floor = scene.add_body(RigidBody::new_static(
        Polygon::rectangle(Vector2::new(w / 2.0, -1.0), w * 2.0, 2.0)?,
        RgbColor::WHITE,
    ));
    let left = scene.add_body(RigidBody::new_static(
        Polygon::rectangle(Vector2::new(-1.0, h), 2.0, h * 4.0)?,
        RgbColor::WHITE,
    ));
    let right = scene.add_body(RigidBody::new_static(
        Polygon::rectangle(Vector2::new(w + 1.0, h), 2.0, h * 4.0)?,
        RgbColor::WHITE,
    ));

    let colors = [RgbColor::RED, RgbColor::GREEN, RgbColor::BLUE, RgbColor::WHITE, RgbColor::new(1.0, 1.0, 0.0)];
    let mut balls: Vec<(BodyHandle, char)> = Vec::new();

    for i in 0..NUM_BALLS {
        let x = (i as f64 + 1.0) * w / (NUM_BALLS as f64 + 1.0);
        let y = h - 3.0 - i as f64 * 2.0;
        let shape = Polygon::regular(Vector2::new(x, y), 1.0, 8)?;
        let mut ball = RigidBody::new(shape, 1.0, colors[i % colors.len()])?;
        ball.set_velocity(Vector2::new(if i % 2 == 0 { 6.0 } else { -6.0 }, 0.0));

        let handle = scene.add_body(ball);
        for wall in [floor, left, right] {
            scene.create_physics_collision(0.8, handle, wall)?;
        }
        scene.create_drag(0.05, handle)?;
        balls.push((handle, BALL_CHARS[i % BALL_CHARS.len()]));
    }

    for (i, &(a, _)) in balls.iter().enumerate() {
        for &(b, _) in &balls[i + 1..] {
            scene.create_physics_collision(0.9, a, b)?;
        }
    }

    // Uniform downward pull on every movable body
    scene.add_force_creator(Vec::new(), |ctx| {
        let handles = ctx.bodies.handles().to_vec();
        for handle in handles {
            if let Some(body) = ctx.bodies.get_mut(handle) {
                if !body.is_infinite_mass() {
                    let weight = Vector2::new(0.0, GRAVITY * body.get_mass());
                    body.add_force(weight);
                }
            }
        }
    })?;

    let start_time = Instant::now();
    let mut last_update_time = Instant::now();

    while start_time.elapsed().as_secs_f64() < SIMULATION_DURATION {
        let frame_start = Instant::now();
        let dt = last_update_time.elapsed().as_secs_f64();
        last_update_time = Instant::now();

        scene.tick(dt);

        stdout.queue(Clear(ClearType::All))?;
        for &(handle, character) in &balls {
            let Ok(ball) = scene.body(handle) else { continue };
            let centroid = ball.get_centroid();

            // Terminal rows grow downward
            let screen_x = centroid.x.round();
            let screen_y = (h - 1.0 - centroid.y).round();
            if (0.0..w).contains(&screen_x) && (0.0..h).contains(&screen_y) {
                stdout
                    .queue(MoveTo(screen_x as u16, screen_y as u16))?
                    .queue(SetForegroundColor(to_terminal_color(ball.get_color())))?
                    .queue(Print(character))?
                    .queue(ResetColor)?;
            }
        }
        stdout.flush()?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
    }

    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, height.saturating_sub(1)))?;

    Ok(())
}
