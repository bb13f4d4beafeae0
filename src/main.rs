use prep_app::PrepApp;
use prep_app::catalog::Catalog;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let catalog = match Catalog::load_bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("failed to load bundled catalog: {}", e);
            Catalog::default()
        }
    };

    log::info!(
        "loaded {} subjects and {} of my decks",
        catalog.subjects.len(),
        catalog.my_decks.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Card Prep",
        options,
        Box::new(|_cc| Ok(Box::new(PrepApp::new(catalog)))),
    )
}
