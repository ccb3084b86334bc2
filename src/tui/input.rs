//! Keyboard and paste input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, VIDEO_URL_FIELD};
use super::task::{start_download, start_preview};

pub fn handle_input(app: &mut App, key: KeyEvent) {
    // Global quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if app.can_submit() {
                start_download(app);
            }
        }
        KeyCode::Esc => {
            if app.video_url().is_empty() {
                app.should_quit = true;
            } else {
                // Clear the pane along with the field; the loaded latch stays.
                app.form.reset();
                app.preview = None;
                app.preview_error = None;
                app.status.clear();
            }
        }
        KeyCode::Char(c) => {
            let mut value = app.video_url().to_string();
            value.push(c);
            app.form.handle_change(VIDEO_URL_FIELD, value);
            start_preview(app);
        }
        KeyCode::Backspace => {
            let mut value = app.video_url().to_string();
            value.pop();
            app.form.handle_change(VIDEO_URL_FIELD, value);
            start_preview(app);
        }
        _ => {}
    }
}

pub fn handle_paste(app: &mut App, text: &str) {
    // Append pasted text to the URL field, stripping newlines: a trailing
    // line break from the clipboard must not end up inside the URL.
    let mut value = app.video_url().to_string();
    value.push_str(&text.replace(['\n', '\r'], ""));
    app.form.handle_change(VIDEO_URL_FIELD, value);
    start_preview(app);
}

#[cfg(test)]
mod tests {
    use super::super::app::test_app;
    use super::*;
    use crate::preview::PreviewInfo;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn in_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Runtime::new().unwrap()
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();
        handle_input(
            &mut app,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
        assert!(app.should_quit);
    }

    #[test]
    fn esc_quits_when_field_empty() {
        let mut app = test_app();
        handle_input(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn esc_resets_field_when_nonempty() {
        let mut app = test_app();
        app.form.handle_change(VIDEO_URL_FIELD, "some text");
        handle_input(&mut app, key(KeyCode::Esc));
        assert!(!app.should_quit);
        assert!(app.video_url().is_empty());
        assert!(app.form.is_pristine());
    }

    #[test]
    fn esc_clears_stale_preview_state() {
        let mut app = test_app();
        app.form
            .handle_change(VIDEO_URL_FIELD, "https://youtube.com/watch?v=abc");
        app.preview = Some(PreviewInfo {
            title: "Some Video".to_string(),
            author: "Some Channel".to_string(),
        });
        app.preview_error = Some("stale".to_string());
        app.status = "Preview loaded".to_string();

        handle_input(&mut app, key(KeyCode::Esc));

        assert!(app.preview.is_none());
        assert!(app.preview_error.is_none());
        assert!(app.status.is_empty());
    }

    #[test]
    fn typing_edits_through_the_form_container() {
        let rt = in_runtime();
        let _guard = rt.enter();

        let mut app = test_app();
        handle_input(&mut app, key(KeyCode::Char('h')));
        handle_input(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.video_url(), "hi");
        assert!(!app.form.is_pristine());
    }

    #[test]
    fn backspace_removes_last_char() {
        let rt = in_runtime();
        let _guard = rt.enter();

        let mut app = test_app();
        app.form.handle_change(VIDEO_URL_FIELD, "abc");
        handle_input(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.video_url(), "ab");
    }

    #[test]
    fn enter_is_a_no_op_until_submit_is_allowed() {
        let mut app = test_app();
        handle_input(&mut app, key(KeyCode::Enter));
        assert!(!app.in_flight);

        app.form
            .handle_change(VIDEO_URL_FIELD, "https://youtube.com/watch?v=abc");
        // Preview not loaded yet.
        handle_input(&mut app, key(KeyCode::Enter));
        assert!(!app.in_flight);
    }

    #[test]
    fn enter_submits_when_allowed() {
        let rt = in_runtime();
        let _guard = rt.enter();

        let mut app = test_app();
        app.form
            .handle_change(VIDEO_URL_FIELD, "https://youtube.com/watch?v=abc");
        app.preview_loaded = true;

        handle_input(&mut app, key(KeyCode::Enter));
        assert!(app.in_flight);
    }

    #[test]
    fn paste_appends_to_field() {
        let rt = in_runtime();
        let _guard = rt.enter();

        let mut app = test_app();
        handle_paste(&mut app, "https://youtube.com/watch?v=abc");
        assert_eq!(app.video_url(), "https://youtube.com/watch?v=abc");
    }

    #[test]
    fn paste_strips_newlines() {
        let rt = in_runtime();
        let _guard = rt.enter();

        let mut app = test_app();
        handle_paste(&mut app, "one\ntwo\r\nthree");
        assert_eq!(app.video_url(), "onetwothree");
    }

    #[test]
    fn paste_with_trailing_newline_leaves_url_clean() {
        let rt = in_runtime();
        let _guard = rt.enter();

        let mut app = test_app();
        handle_paste(&mut app, "https://youtube.com/watch?v=abc\n");
        assert_eq!(app.video_url(), "https://youtube.com/watch?v=abc");
    }
}
