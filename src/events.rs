use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

/// Pixels the camera moves per key press
pub const PAN_STEP: isize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Advance one generation. Only meaningful while paused
    Step,

    /// Scatter a fresh random population
    Reseed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    CameraEvent(CameraEvent),

    /// Stop or resume the tick loop
    TogglePause,

    /// Exit the application
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    Move { dx: isize, dy: isize },
    Reset,
    Resize { cols: u16, rows: u16 },
}

/// Converts a crossterm event into a life event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => convert_key(code, modifiers),
        CrossTermEvent::Resize(cols, rows) => Some(Event::AppEvent(AppEvent::CameraEvent(
            CameraEvent::Resize { cols, rows },
        ))),
        _ => None,
    }
}

fn convert_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    let camera = |event| Some(Event::AppEvent(AppEvent::CameraEvent(event)));

    match (code, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            Some(Event::AppEvent(AppEvent::Exit))
        }

        (KeyCode::Char(' '), _) => Some(Event::AppEvent(AppEvent::TogglePause)),
        (KeyCode::Char('n'), _) => Some(Event::EngineEvent(EngineEvent::Step)),
        (KeyCode::Char('r'), _) => Some(Event::EngineEvent(EngineEvent::Reseed)),

        // movements
        (KeyCode::Char('h') | KeyCode::Left, _) => camera(CameraEvent::Move {
            dx: -PAN_STEP,
            dy: 0,
        }),
        (KeyCode::Char('j') | KeyCode::Down, _) => camera(CameraEvent::Move {
            dx: 0,
            dy: PAN_STEP,
        }),
        (KeyCode::Char('k') | KeyCode::Up, _) => camera(CameraEvent::Move {
            dx: 0,
            dy: -PAN_STEP,
        }),
        (KeyCode::Char('l') | KeyCode::Right, _) => camera(CameraEvent::Move {
            dx: PAN_STEP,
            dy: 0,
        }),
        (KeyCode::Char('0'), _) => camera(CameraEvent::Reset),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::Event as CrossTermEvent;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyModifiers;

    use super::AppEvent;
    use super::CameraEvent;
    use super::EngineEvent;
    use super::Event;
    use super::PAN_STEP;
    use super::convert_event;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrossTermEvent {
        CrossTermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn exit_keys() {
        let exit = Some(Event::AppEvent(AppEvent::Exit));

        assert_eq!(convert_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), exit);
        assert_eq!(
            convert_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            exit
        );

        // plain `c` does nothing
        assert_eq!(convert_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn engine_keys() {
        assert_eq!(
            convert_event(key(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Event::EngineEvent(EngineEvent::Step))
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(Event::EngineEvent(EngineEvent::Reseed))
        );
        assert_eq!(
            convert_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Event::AppEvent(AppEvent::TogglePause))
        );
    }

    #[test]
    fn camera_keys() {
        assert_eq!(
            convert_event(key(KeyCode::Left, KeyModifiers::NONE)),
            convert_event(key(KeyCode::Char('h'), KeyModifiers::NONE)),
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Event::AppEvent(AppEvent::CameraEvent(CameraEvent::Move {
                dx: 0,
                dy: PAN_STEP
            })))
        );
        assert_eq!(
            convert_event(CrossTermEvent::Resize(80, 24)),
            Some(Event::AppEvent(AppEvent::CameraEvent(CameraEvent::Resize {
                cols: 80,
                rows: 24
            })))
        );
    }

    #[test]
    fn ignores_key_release() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(convert_event(CrossTermEvent::Key(release)), None);
    }
}
