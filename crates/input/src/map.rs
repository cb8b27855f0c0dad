//! Mapping from crossterm input events to engine events.

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

use gridfx_types::{Event, EventPayload, KeySym};

/// Convert a raw terminal event into an engine event.
///
/// Key releases and auto-repeats are dropped; mouse motion and scrolling are
/// dropped (only press/release matter to the dispatcher).
pub fn to_engine_event(raw: &TermEvent) -> Option<Event> {
    match raw {
        TermEvent::Key(key) => map_key(key),
        TermEvent::Mouse(mouse) => map_mouse(mouse),
        TermEvent::Resize(w, h) => Some(Event::resize(*w, *h)),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // Ctrl-C surfaces as Esc so listeners see a single quit key.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::key(KeySym::Esc, None));
    }
    let (sym, ch) = match key.code {
        KeyCode::Char(c) => (KeySym::Char, Some(c)),
        KeyCode::Up => (KeySym::Up, None),
        KeyCode::Down => (KeySym::Down, None),
        KeyCode::Left => (KeySym::Left, None),
        KeyCode::Right => (KeySym::Right, None),
        KeyCode::Enter => (KeySym::Enter, None),
        KeyCode::Esc => (KeySym::Esc, None),
        KeyCode::Backspace => (KeySym::Backspace, None),
        KeyCode::Tab => (KeySym::Tab, None),
        _ => (KeySym::Other, None),
    };
    Some(Event::key(sym, ch))
}

fn map_mouse(mouse: &MouseEvent) -> Option<Event> {
    let (button, pressed) = match mouse.kind {
        MouseEventKind::Down(b) => (button_index(b), true),
        MouseEventKind::Up(b) => (button_index(b), false),
        _ => return None,
    };
    // crossterm is 0-based; the engine surface is 1-based.
    Some(Event::mouse(
        mouse.column + 1,
        mouse.row + 1,
        button,
        pressed,
    ))
}

fn button_index(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Middle => 1,
        MouseButton::Right => 2,
    }
}

/// True when the event asks to quit (`q` or Esc).
pub fn is_quit(event: &Event) -> bool {
    matches!(
        event.payload,
        EventPayload::Key {
            sym: KeySym::Esc,
            ..
        } | EventPayload::Key {
            sym: KeySym::Char,
            ch: Some('q')
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_maps_to_key_event() {
        let raw = TermEvent::Key(KeyEvent::from(KeyCode::Char('x')));
        let ev = to_engine_event(&raw).unwrap();
        assert_eq!(
            ev.payload,
            EventPayload::Key {
                sym: KeySym::Char,
                ch: Some('x')
            }
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut key = KeyEvent::from(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        assert_eq!(to_engine_event(&TermEvent::Key(key)), None);
    }

    #[test]
    fn test_ctrl_c_maps_to_esc() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ev = to_engine_event(&TermEvent::Key(key)).unwrap();
        assert!(is_quit(&ev));
    }

    #[test]
    fn test_resize_maps_through() {
        let ev = to_engine_event(&TermEvent::Resize(80, 24)).unwrap();
        assert_eq!(
            ev.payload,
            EventPayload::Resize {
                width: 80,
                height: 24
            }
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&Event::key(KeySym::Char, Some('q'))));
        assert!(is_quit(&Event::key(KeySym::Esc, None)));
        assert!(!is_quit(&Event::key(KeySym::Char, Some('x'))));
        assert!(!is_quit(&Event::resize(1, 1)));
    }
}
