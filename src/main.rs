use cozy_board::dashboard::{Breakpoint, ControllerOptions, DashboardController, DashboardStore};
use cozy_board::logging;
use cozy_board::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging, settings.log_file.clone());

    let store = DashboardStore::open(&settings.data_dir);
    let controller = DashboardController::init(store, ControllerOptions::from_settings(&settings));
    tracing::info!(
        dir = %settings.data_dir.display(),
        widgets = controller.widgets().len(),
        "dashboard opened"
    );

    let layouts = controller.layouts();
    for bp in Breakpoint::ALL {
        let items = layouts.get(bp);
        let rows = items.iter().map(|item| item.bottom()).max().unwrap_or(0);
        tracing::info!(
            breakpoint = bp.as_str(),
            columns = bp.columns(),
            items = items.len(),
            rows,
            "layout"
        );
    }
    Ok(())
}
