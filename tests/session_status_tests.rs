//! UI automation tests for the session status view
//!
//! The view is a pure render of the latest snapshot; these tests poke
//! different snapshots at it and inspect the accessibility tree.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use tutordeck::session::{Mode, SessionSnapshot};
use tutordeck::ui::components::SessionStatusView;
use tutordeck::ui::{ConnectionState, Theme};

/// Application state wrapper for testing
struct TestApp {
    snapshot: SessionSnapshot,
    connection: ConnectionState,
    theme: Theme,
}

fn snapshot(mode: Option<&str>, voice: Option<&str>, concept: Option<&str>) -> SessionSnapshot {
    SessionSnapshot {
        mode: mode.map(str::to_string),
        voice: voice.map(str::to_string),
        concept: concept.map(str::to_string),
    }
}

fn harness_for(snapshot: SessionSnapshot, connection: ConnectionState) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 1100.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    SessionStatusView::new(&app.snapshot, app.connection, &app.theme).show(ui);
                });
            },
            TestApp {
                snapshot,
                connection,
                theme: Theme::dark(),
            },
        )
}

/// Unknown mode strings render the select configuration
#[test]
fn test_unknown_mode_falls_back_to_select() {
    let mut harness = harness_for(
        snapshot(Some("warp_speed"), None, None),
        ConnectionState::Active,
    );
    harness.run();

    let _ = harness.get_by_label("📚 Choose Mode");
    let _ = harness.get_by_label(&format!("Guidance: {}", Mode::Select.guidance()));
    let _ = harness.get_by_label("Learning mode: Select");

    // No indicator pill is active while in select
    for name in ["Learn", "Quiz", "Teach Back"] {
        let _ = harness.get_by_label(&format!("Mode indicator {name}"));
        assert!(harness
            .query_by_label(&format!("Mode indicator {name} (active)"))
            .is_none());
    }
}

/// A missing mode behaves exactly like an unknown one
#[test]
fn test_absent_mode_renders_select() {
    let mut harness = harness_for(snapshot(None, None, None), ConnectionState::Active);
    harness.run();

    let _ = harness.get_by_label("📚 Choose Mode");
}

/// Voices without a known substring resolve to Matthew
#[test]
fn test_voice_defaults_to_matthew() {
    for voice in [None, Some("en-US-matthew"), Some("nova")] {
        let mut harness = harness_for(
            snapshot(Some("learn"), voice, Some("loops")),
            ConnectionState::Active,
        );
        harness.run();
        let _ = harness.get_by_label("Voice: Matthew");
    }
}

/// "alicia" anywhere in the string, any case, selects Alicia
#[test]
fn test_voice_substring_match_is_case_insensitive() {
    let mut harness = harness_for(
        snapshot(Some("learn"), Some("Warm ALICIA"), Some("loops")),
        ConnectionState::Active,
    );
    harness.run();

    let _ = harness.get_by_label("Voice: Alicia");
    assert!(harness.query_by_label("Voice: Matthew").is_none());
}

/// The concept block is omitted while no concept is set and rendered
/// verbatim once one is
#[test]
fn test_concept_block_omission_and_verbatim_rendering() {
    let mut harness = harness_for(
        snapshot(Some("learn"), None, Some("recursion")),
        ConnectionState::Active,
    );
    harness.run();
    let _ = harness.get_by_label("Current concept: recursion");

    harness.state_mut().snapshot = snapshot(Some("learn"), None, None);
    harness.run();
    assert!(harness.query_by_label("Current concept: recursion").is_none());

    // An empty string counts as "no concept yet"
    harness.state_mut().snapshot = snapshot(Some("learn"), None, Some(""));
    harness.run();
    assert!(harness.query_by_label("Current concept: ").is_none());
}

/// Switching learn -> quiz swaps the guidance copy and the active pill
#[test]
fn test_mode_switch_updates_guidance_and_indicator() {
    let mut harness = harness_for(
        snapshot(Some("learn"), Some("matthew"), Some("variables")),
        ConnectionState::Active,
    );
    harness.run();

    let _ = harness.get_by_label("📖 Learn Mode");
    let _ = harness.get_by_label(&format!("Guidance: {}", Mode::Learn.guidance()));
    let _ = harness.get_by_label("Mode indicator Learn (active)");

    harness.state_mut().snapshot = snapshot(Some("quiz"), Some("matthew"), Some("variables"));
    harness.run();

    let _ = harness.get_by_label("❓ Quiz Mode");
    let _ = harness.get_by_label(&format!("Guidance: {}", Mode::Quiz.guidance()));
    let _ = harness.get_by_label("Mode indicator Quiz (active)");
    assert!(harness
        .query_by_label(&format!("Guidance: {}", Mode::Learn.guidance()))
        .is_none());
    assert!(harness
        .query_by_label("Mode indicator Learn (active)")
        .is_none());
}

/// While connecting, a notice replaces the status card
#[test]
fn test_connecting_notice_replaces_status_card() {
    let mut harness = harness_for(snapshot(None, None, None), ConnectionState::Connecting);
    harness.run();

    let _ = harness.get_by_label("Connecting to the agent...");
    assert!(harness
        .query_by_label(&format!("Guidance: {}", Mode::Select.guidance()))
        .is_none());
}
