use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct Shot;

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_secs(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}
