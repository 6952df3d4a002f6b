//! UI plugin for the stats panels using egui.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use thrive_core::config::Viewport;
use thrive_core::session::{GameMode, PlacementOutcome, PlacementRejection, Side, SideStats};

use crate::components::BoardSession;
use crate::input::LastPlacement;

/// Distance of the stats panels from the top and left window edges.
pub const PANEL_MARGIN: f32 = 10.0;

/// Distance of the AI panel's left edge from the right window edge.
pub const AI_PANEL_INSET: f32 = 150.0;

/// Plugin for game UI using egui.
///
/// Provides:
/// - Player stats (top-left)
/// - AI stats (top-right)
/// - A placement hint while placing the player unit
pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, (ui_stats_panels, ui_placement_hint));
    }
}

/// Top-left corner of a side's stats panel.
#[must_use]
pub fn panel_anchor(side: Side, viewport: Viewport) -> (f32, f32) {
    match side {
        Side::Player => (PANEL_MARGIN, PANEL_MARGIN),
        Side::Ai => (viewport.width as f32 - AI_PANEL_INSET, PANEL_MARGIN),
    }
}

/// Title and value lines of a stats panel.
#[must_use]
pub fn stats_lines(side: Side, stats: SideStats) -> [String; 3] {
    [
        format!("{} Stats", side.label()),
        format!("Survival Points: {}", stats.survival_points),
        format!("Units: {}", stats.units),
    ]
}

/// Short text describing why a placement click was refused.
#[must_use]
pub const fn rejection_text(reason: PlacementRejection) -> &'static str {
    match reason {
        PlacementRejection::OutOfBounds => "That spot is off the board",
        PlacementRejection::NotAdjacent => "Too far from your spawn",
        PlacementRejection::Occupied => "That tile is taken",
    }
}

fn ui_stats_panels(mut contexts: EguiContexts, board: Res<BoardSession>) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    let viewport = board.session.config().viewport;
    for side in Side::ALL {
        let (x, y) = panel_anchor(side, viewport);
        let [title, points, units] = stats_lines(side, board.session.stats(side));

        egui::Area::new(egui::Id::new(("stats", side.label())))
            .fixed_pos(egui::pos2(x, y))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(title)
                        .size(16.0)
                        .color(egui::Color32::WHITE)
                        .strong(),
                );
                ui.label(egui::RichText::new(points).color(egui::Color32::WHITE));
                ui.label(egui::RichText::new(units).color(egui::Color32::WHITE));
            });
    }
}

fn ui_placement_hint(
    mut contexts: EguiContexts,
    board: Res<BoardSession>,
    last: Res<LastPlacement>,
) {
    if board.session.mode() != GameMode::PlacingUnit {
        return;
    }
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    let detail = match last.0 {
        Some(PlacementOutcome::Rejected { reason, .. }) => rejection_text(reason),
        _ => "Click a free tile next to your spawn",
    };

    egui::Area::new(egui::Id::new("placement_hint"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -PANEL_MARGIN))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(detail)
                    .color(egui::Color32::from_rgb(240, 220, 120))
                    .strong(),
            );
        });
}
