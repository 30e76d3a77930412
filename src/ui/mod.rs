pub mod detail;
pub mod list;
pub mod preview;
pub mod search;
pub mod settings;
pub mod utils;

use ratatui::prelude::*;

use crate::app::App;
use crate::state::OverlayKind;

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    list::render_list(f, app);

    match app.active_overlay() {
        Some(OverlayKind::Search) => search::render_search(f, app),
        Some(OverlayKind::Settings) => settings::render_settings(f, app),
        Some(OverlayKind::Detail) => detail::render_detail(f, app),
        None => {}
    }

    if let Some(ref error_msg) = app.error_message {
        utils::render_error_message(f, error_msg, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::create_test_app;
    use crate::state::FormField;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_render_list_shows_previews_and_button() {
        let app = create_test_app();
        let text = draw(&app);

        assert!(text.contains("The Silent Sea"));
        assert!(text.contains("Deep Water"));
        assert!(!text.contains("Sea of Stars"));
        assert!(text.contains("Show more (3)"));
    }

    #[test]
    fn test_render_empty_list() {
        let mut app = create_test_app();
        app.search.form.title = "zzz".to_string();
        app.handle_search_submit();

        let text = draw(&app);

        assert!(text.contains("No results found"));
        assert!(text.contains("Show more (0)"));
    }

    #[test]
    fn test_render_detail_overlay() {
        let mut app = create_test_app();
        app.handle_book_selection(Some("b1"));

        let text = draw(&app);

        assert!(text.contains("Details"));
        assert!(text.contains("Jane Doe (2001)"));
    }

    #[test]
    fn test_render_search_and_settings_overlays() {
        let mut app = create_test_app();
        app.open_overlay(OverlayKind::Search, Some(FormField::SearchTitle));
        let text = draw(&app);
        assert!(text.contains("All Genres"));
        assert!(text.contains("All Authors"));

        app.close_overlay(OverlayKind::Search);
        app.open_settings();
        let text = draw(&app);
        assert!(text.contains("Night"));
    }

    #[test]
    fn test_render_help_line_fits_narrow_terminal() {
        let app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(32, 24)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);
        let help = text.lines().last().unwrap();

        assert_eq!(help.trim(), "Enter details · q quit");
    }

    #[test]
    fn test_render_error_message() {
        let mut app = create_test_app();
        app.handle_book_selection(Some("b404"));
        assert!(draw(&app).contains("Book not found: b404"));
    }
}
