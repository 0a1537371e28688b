//! Host input events
//!
//! The host translates its own events into [`InputEvent`]s between frames.

use glam::Vec2;

use super::state::SimState;
use crate::error::SimError;

/// An input event delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Drawing area changed size; repopulates
    Resize { width: u32, height: u32 },
    /// Pointer placed at a position
    PointerSet(Vec2),
    /// Pointer left the drawing area
    PointerCleared,
    /// Key pressed, identified by `KeyboardEvent.code`
    Key(String),
}

impl SimState {
    /// Apply one input event
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<(), SimError> {
        match event {
            InputEvent::Resize { width, height } => self.resize(*width, *height),
            InputEvent::PointerSet(at) => {
                log::debug!("Pointer at ({:.0}, {:.0})", at.x, at.y);
                self.set_pointer(*at);
                Ok(())
            }
            InputEvent::PointerCleared => {
                self.clear_pointer();
                Ok(())
            }
            InputEvent::Key(code) if *code == self.settings.reset_key => {
                log::debug!("Reset key pressed");
                self.initialize()
            }
            InputEvent::Key(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Viewport;

    fn running_state(settings: Settings) -> SimState {
        let viewport = Viewport::new(1000, 800).unwrap();
        let mut state = SimState::new(settings, viewport, 11).unwrap();
        state.initialize().unwrap();
        state
    }

    #[test]
    fn test_reset_key_repopulates() {
        let mut state = running_state(Settings::default());
        let before = state.particles.clone();

        state.handle_input(&InputEvent::Key("Space".to_string())).unwrap();
        assert_eq!(state.generation, 2);
        assert_ne!(state.particles, before);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = running_state(Settings::default());
        let before = state.particles.clone();

        state.handle_input(&InputEvent::Key("KeyA".to_string())).unwrap();
        assert_eq!(state.generation, 1);
        assert_eq!(state.particles, before);
    }

    #[test]
    fn test_resize_repopulates_but_keeps_pointer_radius() {
        let mut state = running_state(Settings::default());
        let radius = state.pointer.radius;

        state
            .handle_input(&InputEvent::Resize {
                width: 500,
                height: 400,
            })
            .unwrap();
        assert_eq!((state.viewport.width, state.viewport.height), (500, 400));
        assert_eq!(state.generation, 2);
        assert_eq!(state.pointer.radius, radius);
        for p in &state.particles {
            assert!(p.pos.x <= 500.0 - p.radius);
            assert!(p.pos.y <= 400.0 - p.radius);
        }
    }

    #[test]
    fn test_resize_can_rescale_pointer() {
        let mut state = running_state(Settings {
            pointer_follows_resize: true,
            ..Default::default()
        });

        state
            .handle_input(&InputEvent::Resize {
                width: 500,
                height: 400,
            })
            .unwrap();
        assert!((state.pointer.radius - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_resize_rejected() {
        let mut state = running_state(Settings::default());
        let err = state
            .handle_input(&InputEvent::Resize {
                width: 0,
                height: 400,
            })
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidViewport { width: 0, .. }));
        assert_eq!(state.viewport.width, 1000);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_pointer_set_and_clear() {
        let mut state = running_state(Settings::default());
        assert_eq!(state.pointer.position, None);

        state
            .handle_input(&InputEvent::PointerSet(Vec2::new(0.0, 0.0)))
            .unwrap();
        assert_eq!(state.pointer.position, Some(Vec2::ZERO));

        state.handle_input(&InputEvent::PointerCleared).unwrap();
        assert_eq!(state.pointer.position, None);
    }
}
