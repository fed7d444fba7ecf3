pub mod camera;
pub mod dataset;
pub mod scene;
pub mod session;
pub mod settings;
pub mod systems;

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::engine::scene::points::setup_point_assets;
use crate::engine::session::RenderSession;
use crate::engine::settings::PlumeSettings;
use crate::engine::systems::reload::{
    ReloadRequest, manual_reload_trigger, run_reload_pass, tick_reload_timer,
};

/// Timer-driven concentration point cloud rendering.
///
/// Inserts [`PlumeSettings`] (unless the app configured one beforehand) and a
/// [`RenderSession`], then runs the reload chain every frame: accumulate the
/// timer, collect manual triggers, and execute at most one render pass.
pub struct PlumePointCloudPlugin;

impl Plugin for PlumePointCloudPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<PlumeSettings>() {
            app.insert_resource(PlumeSettings::default());
        }
        let seed = app.world().resource::<PlumeSettings>().seed;

        app.insert_resource(RenderSession::new(seed))
            .add_event::<ReloadRequest>()
            .add_systems(Startup, (announce_startup, setup_point_assets))
            .add_systems(
                Update,
                (tick_reload_timer, manual_reload_trigger, run_reload_pass).chain(),
            )
            .add_systems(Last, announce_shutdown);
    }
}

fn announce_startup(settings: Res<PlumeSettings>) {
    info!(
        "Plume point cloud startup: {} files under {}",
        settings.file_count,
        settings.dataset_dir.display()
    );
}

fn announce_shutdown(mut exits: EventReader<AppExit>) {
    if exits.read().next().is_some() {
        info!("Plume point cloud shutdown");
    }
}
