use macroquad::prelude::*;
use tracing::warn;

use crate::application::Simulation;
use crate::config::Settings;

/// Interval change per Up/Down press, in milliseconds
pub const INTERVAL_STEP_MS: i64 = 10;

/// What the host loop should do after input is processed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Actions the keyboard can trigger, independent of macroquad's key state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    Step,
    Reseed,
    Faster,
    Slower,
}

const BINDINGS: [(KeyCode, Action); 6] = [
    (KeyCode::Escape, Action::Quit),
    (KeyCode::Space, Action::TogglePause),
    (KeyCode::N, Action::Step),
    (KeyCode::R, Action::Reseed),
    (KeyCode::Up, Action::Faster),
    (KeyCode::Down, Action::Slower),
];

/// Apply a single action to the simulation
pub fn apply_action(sim: &mut Simulation, settings: &Settings, action: Action) -> InputOutcome {
    match action {
        Action::Quit => return InputOutcome::Quit,
        Action::TogglePause => sim.toggle_running(),
        Action::Step => sim.step(),
        Action::Reseed => match settings.reseed_grid() {
            Ok(grid) => sim.replace_grid(grid),
            Err(err) => warn!(%err, "could not reseed grid"),
        },
        Action::Faster => sim.adjust_interval(-INTERVAL_STEP_MS),
        Action::Slower => sim.adjust_interval(INTERVAL_STEP_MS),
    }
    InputOutcome::Continue
}

/// Process keys pressed this frame
pub fn process_keyboard_input(sim: &mut Simulation, settings: &Settings) -> InputOutcome {
    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .fold(InputOutcome::Continue, |outcome, &(_, action)| {
            match (outcome, apply_action(sim, settings, action)) {
                (InputOutcome::Quit, _) | (_, InputOutcome::Quit) => InputOutcome::Quit,
                _ => InputOutcome::Continue,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Grid;
    use std::time::Duration;

    fn sim() -> Simulation {
        Simulation::new(Grid::with_probability(4, 4, 0.0).unwrap(), Duration::from_millis(100))
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        assert_eq!(apply_action(&mut sim(), &settings, Action::Quit), InputOutcome::Quit);
    }

    #[test]
    fn test_pause_and_step() {
        let settings = Settings::default();
        let mut sim = sim();

        apply_action(&mut sim, &settings, Action::TogglePause);
        assert!(!sim.is_running());

        apply_action(&mut sim, &settings, Action::Step);
        assert_eq!(sim.grid().generation(), 1);
    }

    #[test]
    fn test_speed() {
        let settings = Settings::default();
        let mut sim = sim();

        apply_action(&mut sim, &settings, Action::Faster);
        assert_eq!(sim.interval(), Duration::from_millis(90));
        apply_action(&mut sim, &settings, Action::Slower);
        apply_action(&mut sim, &settings, Action::Slower);
        assert_eq!(sim.interval(), Duration::from_millis(110));
    }

    #[test]
    fn test_reseed_uses_settings_dimensions() {
        let settings = Settings { width: 9, height: 6, ..Settings::default() };
        let mut sim = sim();
        apply_action(&mut sim, &settings, Action::Reseed);
        assert_eq!(sim.grid().dimensions(), (9, 6));
    }

    #[test]
    fn test_bindings_are_unique() {
        let mut keys: Vec<_> = BINDINGS.iter().map(|(key, _)| *key as u32).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), BINDINGS.len());
    }
}
