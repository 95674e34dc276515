use crate::client::{ChatClient, PendingRequest};
use crate::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop has to do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Send(PendingRequest),
    Quit,
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App, client: &mut ChatClient) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => {
            let pending = match app.selected_suggestion.take() {
                Some(index) => client.select_suggestion(index),
                None => client.begin_send(),
            };
            pending.map_or(KeyAction::None, KeyAction::Send)
        }
        KeyCode::Tab => {
            app.next_suggestion(client.suggestions().len());
            KeyAction::None
        }
        KeyCode::BackTab => {
            app.previous_suggestion(client.suggestions().len());
            KeyAction::None
        }
        KeyCode::PageUp => {
            client.log_mut().scroll_up();
            KeyAction::None
        }
        KeyCode::PageDown => {
            client.log_mut().scroll_down();
            KeyAction::None
        }
        KeyCode::Backspace => {
            app.clear_suggestion();
            client.pop_input();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => return KeyAction::Quit,
                    't' => {
                        client.toggle_latest_thinking();
                    }
                    'u' => client.log_mut().scroll_up(),
                    'd' => client.log_mut().scroll_down(),
                    _ => {}
                }
            } else {
                app.clear_suggestion();
                client.push_input(c);
            }
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ChatResponse, Sender};

    fn setup() -> (App, ChatClient) {
        let config = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let client = ChatClient::new(&config).unwrap();
        let app = App::new(ChatClient::new(&config).unwrap().into_shared());
        (app, client)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_then_enter_sends() {
        let (mut app, mut client) = setup();
        for c in "Hi".chars() {
            assert_eq!(handle_chat_input(press(KeyCode::Char(c)), &mut app, &mut client), KeyAction::None);
        }
        assert_eq!(client.input(), "Hi");

        match handle_chat_input(press(KeyCode::Enter), &mut app, &mut client) {
            KeyAction::Send(pending) => assert_eq!(pending.question, "Hi"),
            other => panic!("expected send, got {:?}", other),
        }
        assert_eq!(client.log().entries()[0].sender(), Sender::User);
    }

    #[test]
    fn enter_on_blank_input_does_nothing() {
        let (mut app, mut client) = setup();
        handle_chat_input(press(KeyCode::Char(' ')), &mut app, &mut client);
        assert_eq!(handle_chat_input(press(KeyCode::Enter), &mut app, &mut client), KeyAction::None);
        assert!(client.log().is_empty());
    }

    #[test]
    fn tab_then_enter_sends_highlighted_suggestion() {
        let (mut app, mut client) = setup();
        client.apply_suggestions(Ok(vec!["a?".to_string(), "b?".to_string()]));

        handle_chat_input(press(KeyCode::Tab), &mut app, &mut client);
        handle_chat_input(press(KeyCode::Tab), &mut app, &mut client);
        assert_eq!(app.selected_suggestion, Some(1));

        match handle_chat_input(press(KeyCode::Enter), &mut app, &mut client) {
            KeyAction::Send(pending) => assert_eq!(pending.question, "b?"),
            other => panic!("expected send, got {:?}", other),
        }
        assert_eq!(app.selected_suggestion, None);
    }

    #[test]
    fn suggestion_highlight_wraps_both_ways() {
        let (mut app, mut client) = setup();
        client.apply_suggestions(Ok(vec!["a".into(), "b".into(), "c".into()]));

        handle_chat_input(press(KeyCode::BackTab), &mut app, &mut client);
        assert_eq!(app.selected_suggestion, Some(2));
        handle_chat_input(press(KeyCode::Tab), &mut app, &mut client);
        assert_eq!(app.selected_suggestion, Some(0));

        handle_chat_input(press(KeyCode::Char('x')), &mut app, &mut client);
        assert_eq!(app.selected_suggestion, None);
    }

    #[test]
    fn ctrl_t_toggles_thinking() {
        let (mut app, mut client) = setup();
        client.set_input("q");
        let pending = client.begin_send().unwrap();
        client.complete(
            pending.id,
            Ok(ChatResponse {
                answer: "a".to_string(),
                thinking: Some("why".to_string()),
            }),
        );

        handle_chat_input(ctrl('t'), &mut app, &mut client);
        assert!(client.log().entries()[1].thinking().unwrap().is_expanded());
        handle_chat_input(ctrl('t'), &mut app, &mut client);
        assert!(!client.log().entries()[1].thinking().unwrap().is_expanded());
    }

    #[test]
    fn quit_keys() {
        let (mut app, mut client) = setup();
        assert_eq!(handle_chat_input(press(KeyCode::Esc), &mut app, &mut client), KeyAction::Quit);
        assert_eq!(handle_chat_input(ctrl('c'), &mut app, &mut client), KeyAction::Quit);
    }

    #[test]
    fn page_keys_scroll_the_log() {
        let (mut app, mut client) = setup();
        handle_chat_input(press(KeyCode::PageUp), &mut app, &mut client);
        handle_chat_input(press(KeyCode::PageUp), &mut app, &mut client);
        handle_chat_input(press(KeyCode::PageDown), &mut app, &mut client);
        assert_eq!(client.log().scroll_back(), 1);
    }
}
