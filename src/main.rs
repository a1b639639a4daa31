use focus_quiz::QuizApp;
use focus_quiz::config::QuizConfig;
use focus_quiz::data::{read_questions_embedded, read_questions_from_path};
use focus_quiz::fullscreen::ViewportFullscreen;
use focus_quiz::session::QuizSession;
use focus_quiz::store::{FileBackend, ProgressStore};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = QuizConfig::from_env();
    let questions = match &config.questions_path {
        Some(path) => {
            info!("banco de preguntas: {}", path.display());
            read_questions_from_path(path)?
        }
        None => read_questions_embedded()?,
    };

    let store = ProgressStore::new(
        FileBackend::new(&config.progress_dir),
        config.storage_key.clone(),
    );
    let session = QuizSession::new(questions, store);

    // Si el quiz se dejó en pantalla completa, la ventana vuelve a abrirse así
    let fullscreen = session.state().fullscreen_active;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        "Focus Quiz",
        options,
        Box::new(move |cc| {
            let controller = ViewportFullscreen::new(cc.egui_ctx.clone(), fullscreen);
            Ok(Box::new(QuizApp::new(session, Box::new(controller))))
        }),
    )?;
    Ok(())
}
