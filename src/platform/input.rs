//! Input decoding
//!
//! The host hands over a batch of raw events once per frame. Key-downs are
//! looked up in [`KeyBindings`]; unbound keys are dropped.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::sim::Action;

/// Host key identifier (SDL-style key codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const SPACE: KeyCode = KeyCode(32);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const RIGHT: KeyCode = KeyCode(0x4000_004f);
    pub const LEFT: KeyCode = KeyCode(0x4000_0050);
    pub const DOWN: KeyCode = KeyCode(0x4000_0051);
    pub const UP: KeyCode = KeyCode(0x4000_0052);
}

/// One raw event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
}

/// Key code to action map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(HashMap<KeyCode, Action>);

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self(HashMap::new());
        bindings.bind(KeyCode::LEFT, Action::RotateLeft);
        bindings.bind(KeyCode::RIGHT, Action::RotateRight);
        bindings.bind(KeyCode::UP, Action::Thrust);
        bindings.bind(KeyCode::SPACE, Action::Shoot);
        bindings
    }
}

impl KeyBindings {
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.0.insert(key, action);
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.0.remove(&key)
    }

    pub fn lookup(&self, key: KeyCode) -> Option<Action> {
        self.0.get(&key).copied()
    }
}

/// Decoded input for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Actions in the order their keys arrived
    pub actions: Vec<Action>,
    /// A quit signal was seen
    pub quit: bool,
}

/// Turn a batch of raw events into ship actions
pub fn decode<I>(events: I, bindings: &KeyBindings) -> FrameInput
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut input = FrameInput::default();
    for event in events {
        match event {
            InputEvent::Quit => input.quit = true,
            InputEvent::KeyDown(key) => {
                if let Some(action) = bindings.lookup(key) {
                    input.actions.push(action);
                }
            }
        }
    }
    input
}

/// Anything that can be polled for pending events once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame batches, then reports quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
