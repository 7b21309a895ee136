//! Falling-coin simulation behind the page background.
//!
//! Pure state: the web frontend owns the drawing surface and calls
//! [`CoinField::step`] once per animation frame, drawing each coin before the
//! step. Nothing here touches platform APIs, so the whole pool is testable on
//! the host.

use crate::constants::{
    COIN_DENSITY_DIVISOR, COIN_MIN_SIZE, COIN_MIN_SPEED, COIN_SIZE_SPAN, COIN_SPAWN_HEADROOM,
    COIN_SPEED_SPAN, COIN_SPIN_SPAN,
};
use glam::Vec2;
use rand::prelude::*;

/// One falling coin sprite. Speed, size and spin are fixed at spawn; position
/// and rotation mutate every frame.
#[derive(Clone, Debug)]
pub struct Coin {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub rotation: f32,
    pub spin: f32,
}

/// Recycling pool of coins falling through a `width` x `height` surface.
///
/// The pool is seeded once; coins that leave the bottom edge are recycled to
/// the top rather than destroyed, so the population is constant for the
/// lifetime of the field. `resize` moves the recycling bounds but never
/// changes the population.
pub struct CoinField {
    coins: Vec<Coin>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl CoinField {
    /// Seed `seed_count(width)` coins scattered above the visible area.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let coins = (0..Self::seed_count(width))
            .map(|_| spawn_coin(&mut rng, width, height))
            .collect();
        Self {
            coins,
            width,
            height,
            rng,
        }
    }

    /// Coin density scales with viewport width, one coin per 50px.
    pub fn seed_count(width: f32) -> usize {
        (width / COIN_DENSITY_DIVISOR).floor().max(0.0) as usize
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Update the recycling bounds after a viewport resize. The pool itself is
    /// left alone: coins keep falling and recycle against the new edges.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every coin by one frame: fall by `speed`, turn by `spin`, and
    /// recycle to a fresh column above the top edge once fully below the
    /// bottom edge.
    pub fn step(&mut self) {
        for coin in &mut self.coins {
            coin.pos.y += coin.speed;
            coin.rotation += coin.spin;
            if coin.pos.y > self.height + coin.size {
                coin.pos.y = -coin.size;
                coin.pos.x = self.rng.gen::<f32>() * self.width;
            }
        }
    }
}

fn spawn_coin(rng: &mut StdRng, width: f32, height: f32) -> Coin {
    Coin {
        pos: Vec2::new(
            rng.gen::<f32>() * width,
            -(rng.gen::<f32>() * height) - COIN_SPAWN_HEADROOM,
        ),
        speed: COIN_MIN_SPEED + rng.gen::<f32>() * COIN_SPEED_SPAN,
        size: COIN_MIN_SIZE + rng.gen::<f32>() * COIN_SIZE_SPAN,
        rotation: rng.gen::<f32>() * std::f32::consts::TAU,
        spin: (rng.gen::<f32>() - 0.5) * COIN_SPIN_SPAN,
    }
}
