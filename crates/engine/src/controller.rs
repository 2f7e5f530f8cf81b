//! Game controller - the session state machine.
//!
//! Owns at most one [`MineField`] plus the modal menu state, turns input
//! events into field mutations or menu transitions, and keeps the game clock
//! paused for as long as any menu is on screen.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{MineField, Outcome, SimpleRng};
use crate::input::command_for;
use crate::term::{FrameBuffer, Scene, SweeperView, Viewport};
use crate::types::{Command, InputEvent, Key, Menu};

/// Coarse controller state, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No field has been created yet.
    NoGame,
    /// A field exists and no menu is open.
    Playing,
    Menu(Menu),
}

/// Whether the control loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything that lives for the whole process, minus rendering.
#[derive(Debug, Default)]
pub struct GameSession {
    field: Option<MineField>,
    menu: Option<Menu>,
    /// When the currently open menu was first seen open.
    menu_opened_at: Option<Instant>,
    last_key: Option<Key>,
}

impl GameSession {
    pub fn field(&self) -> Option<&MineField> {
        self.field.as_ref()
    }

    pub fn menu(&self) -> Option<Menu> {
        self.menu
    }

    pub fn menu_opened_at(&self) -> Option<Instant> {
        self.menu_opened_at
    }

    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    pub fn state(&self) -> GameState {
        match (self.menu, &self.field) {
            (Some(menu), _) => GameState::Menu(menu),
            (None, Some(_)) => GameState::Playing,
            (None, None) => GameState::NoGame,
        }
    }

    /// Game clock at `now` (zero without a field).
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.field
            .as_ref()
            .map(|f| f.elapsed(now))
            .unwrap_or(Duration::ZERO)
    }

    pub fn scene(&self, now: Instant) -> Scene<'_> {
        Scene {
            field: self.field.as_ref(),
            menu: self.menu,
            elapsed: self.elapsed(now),
            last_key: self.last_key,
        }
    }
}

pub struct GameController {
    session: GameSession,
    rng: SimpleRng,
    view: SweeperView,
    fb: FrameBuffer,
}

impl GameController {
    /// `seed` drives the layout of every board this controller creates.
    pub fn new(seed: u32) -> Self {
        Self {
            session: GameSession::default(),
            rng: SimpleRng::new(seed),
            view: SweeperView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn with_view(mut self, view: SweeperView) -> Self {
        self.view = view;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn field(&self) -> Option<&MineField> {
        self.session.field.as_ref()
    }

    pub fn menu(&self) -> Option<Menu> {
        self.session.menu
    }

    /// Replace the current field with `field` and close any menu.
    pub fn start_game(&mut self, field: MineField) {
        info!(
            width = field.width(),
            height = field.height(),
            mines = field.mine_count(),
            "new game"
        );
        self.session.field = Some(field);
        self.session.menu = None;
        self.session.menu_opened_at = None;
    }

    /// Handle one event from the loop, then settle menus and the clock.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> Flow {
        let flow = match event {
            InputEvent::Key(key) => self.handle_key(key, now),
            InputEvent::Tick | InputEvent::Resize(..) => Flow::Continue,
        };
        if flow == Flow::Continue {
            self.refresh(now);
        }
        flow
    }

    fn handle_key(&mut self, key: Key, now: Instant) -> Flow {
        self.session.last_key = Some(key);
        match command_for(key) {
            Some(cmd) => self.apply(cmd, now),
            None => Flow::Continue,
        }
    }

    /// Apply a single command in the current state.
    pub fn apply(&mut self, cmd: Command, now: Instant) -> Flow {
        debug!(command = cmd.as_str(), state = ?self.state(), "apply");
        match cmd {
            Command::Quit => return Flow::Quit,
            Command::Help => self.session.menu = Some(Menu::Help),
            Command::Close => self.session.menu = None,
            Command::NewGame => self.new_game(),
            cmd if cmd.is_field_action() => self.field_action(cmd, now),
            _ => {}
        }
        Flow::Continue
    }

    fn new_game(&mut self) {
        let replace = match (&self.session.field, self.session.menu) {
            (None, _) => true,
            (Some(_), Some(Menu::ConfirmNewGame)) => true,
            (Some(field), _) => field.is_ended(),
        };

        if replace {
            let seed = self.rng.next_seed();
            debug!(seed, "creating field");
            self.start_game(MineField::standard(seed));
        } else {
            self.session.menu = Some(Menu::ConfirmNewGame);
        }
    }

    fn field_action(&mut self, cmd: Command, now: Instant) {
        if self.session.menu.is_some() {
            return;
        }
        let Some(field) = self.session.field.as_mut() else {
            return;
        };

        // Chord hints only last until the next thing the player does.
        field.clear_highlights();

        let cursor = field.cursor();
        match cmd {
            Command::Move(dir) => field.step(dir),
            Command::Reveal => field.reveal_or_clear(cursor, now),
            Command::Flag => field.toggle_flag(cursor),
            _ => {}
        }
    }

    /// Enter Won/Lost on a fresh outcome and account menu time as pause.
    pub fn refresh(&mut self, now: Instant) {
        if self.session.menu.is_none() {
            if let Some(field) = self.session.field.as_mut() {
                if !field.is_ended() {
                    if let Some(outcome) = field.outcome() {
                        field.commit_end(now);
                        let elapsed = field.elapsed(now);
                        info!(?outcome, elapsed_ms = elapsed.as_millis() as u64, "game over");
                        self.session.menu = Some(match outcome {
                            Outcome::Won => Menu::Won,
                            Outcome::Lost => Menu::Lost,
                        });
                    }
                }
            }
        }

        match (self.session.menu, self.session.menu_opened_at) {
            (Some(menu), None) => {
                debug!(menu = menu.as_str(), "menu opened");
                self.session.menu_opened_at = Some(now);
            }
            (None, Some(opened_at)) => {
                let paused = now.saturating_duration_since(opened_at);
                debug!(paused_ms = paused.as_millis() as u64, "menu closed");
                if let Some(field) = self.session.field.as_mut() {
                    field.add_pause(paused);
                }
                self.session.menu_opened_at = None;
            }
            _ => {}
        }
    }

    /// Rebuild the frame for `viewport`.
    pub fn render(&mut self, viewport: Viewport, now: Instant) -> &mut FrameBuffer {
        let scene = self.session.scene(now);
        self.view.render_into(&scene, viewport, &mut self.fb);
        &mut self.fb
    }
}
