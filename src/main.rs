//! Black Hole Accretion Disk
//!
//! Headless frame driver: advances the particle field against the wall clock,
//! assembles each frame and hands it to a sink that tracks what would be
//! drawn. A windowed backend plugs in by implementing `GeometrySink`.

use blackhole_physics::ConfigError;
use blackhole_renderer::{CameraRig, Frame, GeometrySink, Scene};
use blackhole_simulation::{FrameClock, ParticleField, SimulationParams};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 900;
const FRAME_COUNT: u32 = 600;
const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_667);
const STATS_INTERVAL: u32 = 60;

/// Yaw applied per frame, standing in for held arrow keys
const ORBIT_STEP: f64 = 0.002;

/// Sink that records frame statistics instead of drawing
struct StatsSink {
    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
    frame_counter: u32,
}

impl StatsSink {
    fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
            frame_counter: 0,
        }
    }
}

impl GeometrySink for StatsSink {
    fn submit(&mut self, frame: &Frame<'_>) {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }
        self.frame_counter += 1;

        if self.frame_counter % STATS_INTERVAL == 0 {
            let avg_frame_time =
                self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
            let ring_vertices: usize = frame.rings.iter().map(|r| r.vertices.len()).sum();
            log::info!(
                "frame {}: {:.2} ms avg, {} sprites, {} trail vertices, {} ring vertices, eye {:?}",
                self.frame_counter,
                avg_frame_time,
                frame.sprites.len(),
                frame.trail_vertices.len(),
                ring_vertices,
                frame.camera.position
            );
        }
    }
}

fn run() -> Result<(), ConfigError> {
    let params = SimulationParams::default();
    let mut field = ParticleField::new(&params)?;
    let mut camera = CameraRig::new(WIDTH, HEIGHT)?;
    let mut scene = Scene::new(field.black_hole())?;
    let mut sink = StatsSink::new();
    let mut clock = FrameClock::new();

    let mut recycled = 0;
    for _ in 0..FRAME_COUNT {
        let frame_start = Instant::now();

        // Input happens between ticks
        camera.state.rotate(ORBIT_STEP, 0.0);

        let tick = clock.tick();
        recycled += field.advance(tick).recycled;
        scene.render(&camera, &field, &mut sink)?;

        if let Some(remaining) = TARGET_FRAME_TIME.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!(
        "Finished {} frames, {} particles recycled",
        field.frame(),
        recycled
    );
    Ok(())
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting black hole accretion disk simulation...");

    if let Err(err) = run() {
        log::error!("Invalid configuration: {err}");
        std::process::exit(1);
    }
}
