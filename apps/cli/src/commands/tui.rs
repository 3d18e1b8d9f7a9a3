use readalong_recording_client::{LoadError, Prepared};

use crate::{
    app::App,
    config::Settings,
    event::{AppEvent, EventHandler},
};

fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original(info);
    }));
}

pub async fn run(loaded: Result<Prepared, LoadError>, settings: Settings) {
    setup_panic_hook();
    let mut terminal = ratatui::init();
    let mut app = App::new(loaded, &settings);
    let mut events = EventHandler::new(settings.tick);

    loop {
        terminal.draw(|frame| crate::ui::draw(frame, &app)).ok();

        match events.next().await {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
}
