//! Catch the Droplets
//!
//! One catcher on the bottom edge, droplets falling from the top. Each frame:
//! 1. Input: held keys move the catcher, an active pointer re-centres it
//! 2. Logic: clamp the catcher, move/cull/catch droplets, run the spawn timer
//! 3. Draw: background, catcher, droplets (back to front)

use macroquad::prelude::vec2;
use crate::audio::{Audio, SoundId};
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::render::{Renderer, TextureId};
use super::{Catcher, Droplet, DropletEvent, EventQueue, FitViewport};

/// Uniform random float in `[low, high]`
pub type RangeRng = fn(f32, f32) -> f32;

/// Tunables copied out of the config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropletRules {
    pub catcher_speed: f32,
    pub fall_speed: f32,
    pub spawn_interval: f32,
    pub droplet_width: f32,
    pub droplet_height: f32,
}

impl DropletRules {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            catcher_speed: config.catcher.speed,
            fall_speed: config.droplets.fall_speed,
            spawn_interval: config.droplets.spawn_interval,
            droplet_width: config.droplets.size.width,
            droplet_height: config.droplets.size.height,
        }
    }
}

/// Running totals, for the log line on exit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropletStats {
    pub spawned: u32,
    pub caught: u32,
    pub missed: u32,
}

pub struct DropletGame {
    viewport: FitViewport,
    rules: DropletRules,
    catcher: Catcher,
    /// Live droplets in spawn order
    droplets: Vec<Droplet>,
    /// Seconds since the last spawn
    spawn_timer: f32,
    next_id: u64,
    events: EventQueue<DropletEvent>,
    stats: DropletStats,
    rng: RangeRng,
}

impl DropletGame {
    pub fn new(config: &GameConfig) -> Self {
        let viewport = FitViewport::new(config.world.width, config.world.height);
        let size = config.catcher.size;
        Self {
            catcher: Catcher::centred(viewport.world_width(), size.width, size.height),
            viewport,
            rules: DropletRules::from_config(config),
            droplets: Vec::new(),
            spawn_timer: 0.0,
            next_id: 0,
            events: EventQueue::new(),
            stats: DropletStats::default(),
            rng: macroquad::rand::gen_range::<f32>,
        }
    }

    pub fn stats(&self) -> DropletStats {
        self.stats
    }

    /// Run input and logic for one frame, then play sounds for what happened
    pub fn frame(&mut self, input: &FrameInput, delta: f32, audio: &mut impl Audio) {
        self.apply_input(input, delta);
        self.update(delta);
        self.dispatch_events(audio);
    }

    /// Input phase
    pub fn apply_input(&mut self, input: &FrameInput, delta: f32) {
        let step = self.rules.catcher_speed * delta;
        if input.right {
            self.catcher.translate_x(step);
        } else if input.left {
            self.catcher.translate_x(-step);
        }

        // Pointer goes last so it wins over keys
        if let Some(screen) = input.pointer {
            let world = self.viewport.unproject(screen);
            self.catcher.set_center_x(world.x);
        }
    }

    /// Logic phase
    pub fn update(&mut self, delta: f32) {
        self.catcher.clamp_to(self.viewport.world_width());
        let catcher = self.catcher.rect();

        // Reverse so removal doesn't shift the droplets still to visit
        for i in (0..self.droplets.len()).rev() {
            let drop = &mut self.droplets[i];
            drop.y -= self.rules.fall_speed * delta;

            if drop.is_below_world() {
                let drop = self.droplets.remove(i);
                self.stats.missed += 1;
                self.events.send(DropletEvent::Missed { id: drop.id });
            } else if drop.rect().overlaps(&catcher) {
                let drop = self.droplets.remove(i);
                self.stats.caught += 1;
                self.events.send(DropletEvent::Caught {
                    id: drop.id,
                    position: vec2(drop.x, drop.y),
                });
            }
        }

        self.spawn_timer += delta;
        if self.spawn_timer >= self.rules.spawn_interval {
            self.spawn_timer = 0.0;
            self.spawn_droplet();
        }
    }

    /// Add one droplet at a random x along the top edge. Returns its id.
    pub fn spawn_droplet(&mut self) -> u64 {
        let width = self.rules.droplet_width;
        let max_x = (self.viewport.world_width() - width).max(0.0);
        let x = (self.rng)(0.0, max_x).clamp(0.0, max_x);

        let id = self.next_id;
        self.next_id += 1;
        self.droplets.push(Droplet {
            id,
            x,
            y: self.viewport.world_height(),
            width,
            height: self.rules.droplet_height,
        });
        self.stats.spawned += 1;
        self.events.send(DropletEvent::Spawned { id, x });
        id
    }

    /// Hand this frame's events to audio and the log
    pub fn dispatch_events(&mut self, audio: &mut impl Audio) {
        for event in self.events.drain() {
            match event {
                DropletEvent::Caught { id, position } => {
                    log::debug!("caught droplet {} at ({:.2}, {:.2})", id, position.x, position.y);
                    audio.play_one_shot(SoundId::Drop);
                }
                DropletEvent::Missed { id } => log::debug!("missed droplet {}", id),
                DropletEvent::Spawned { id, x } => log::trace!("spawned droplet {} at x={:.2}", id, x),
            }
        }
    }

    /// Draw phase
    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.begin(&self.viewport);
        renderer.draw(TextureId::Background, self.viewport.world_rect());
        renderer.draw(TextureId::Catcher, self.catcher.rect());
        for drop in &self.droplets {
            renderer.draw(TextureId::Droplet, drop.rect());
        }
        renderer.end();
    }

    /// Window resized. Non-positive sizes (minimized window) are ignored.
    pub fn resize(&mut self, width: i32, height: i32) {
        if self.viewport.update(width, height) {
            log::debug!("viewport fitted to {}x{} px", width, height);
        } else {
            log::debug!("ignoring resize to {}x{}", width, height);
        }
    }
}
