//! Chart Lifecycle Integration Tests

use crate::helpers::{Recorder, city_population};
use sheetchart::chart::{ChartLifecycleManager, ChartSpecBuilder, PaletteGenerator, PolicyTable, TargetId};
use sheetchart::data::{ChartError, build_series};
use sheetchart::settings::Settings;
use sheetchart::types::{AxisSelection, ChartKind};
use sheetchart::{ChartArtifact, ChartSession};

fn artifact(kind: ChartKind) -> ChartArtifact {
    let series = build_series(&city_population(), &AxisSelection::new("city", "pop")).unwrap();
    let mut builder =
        ChartSpecBuilder::with_generator(PolicyTable::default(), PaletteGenerator::seeded(1));
    builder.build(&series, kind, ("city", "pop")).unwrap()
}

#[test]
fn test_second_install_destroys_first_exactly_once() {
    let target = TargetId::new("canvas");
    let mut charts = ChartLifecycleManager::new(Recorder::default());
    charts.register_target(target.clone());

    let first = charts.install(&target, artifact(ChartKind::Bar)).unwrap();
    let second = charts.install(&target, artifact(ChartKind::Line)).unwrap();

    assert_ne!(first, second);
    assert_eq!(charts.active_id(&target), Some(second));
    assert_eq!(charts.bound_count(), 1);
    assert_eq!(
        charts.renderer().events,
        vec![
            "create canvas pop by city #1".to_string(),
            "destroy canvas #1".to_string(),
            "create canvas pop by city #2".to_string(),
        ]
    );
}

#[test]
fn test_targets_are_independent() {
    let left = TargetId::new("left");
    let right = TargetId::new("right");
    let mut charts = ChartLifecycleManager::new(Recorder::default());
    charts.register_target(left.clone());
    charts.register_target(right.clone());

    charts.install(&left, artifact(ChartKind::Bar)).unwrap();
    charts.install(&right, artifact(ChartKind::Pie)).unwrap();
    charts.install(&left, artifact(ChartKind::Radar)).unwrap();

    assert_eq!(charts.bound_count(), 2);
    assert_eq!(charts.active(&right).map(|a| a.kind), Some(ChartKind::Pie));
    assert_eq!(charts.active(&left).map(|a| a.kind), Some(ChartKind::Radar));
    assert_eq!(charts.renderer().destroys(), 1);
}

#[test]
fn test_unregistered_target_is_rejected() {
    let mut charts = ChartLifecycleManager::new(Recorder::default());
    let err = charts
        .install(&TargetId::new("nowhere"), artifact(ChartKind::Bar))
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidTarget(ref t) if t == "nowhere"));
    assert_eq!(charts.renderer().creates(), 0);
}

#[test]
fn test_release_then_release_again() {
    let target = TargetId::from("canvas");
    let mut charts = ChartLifecycleManager::new(Recorder::default());
    charts.register_target(target.clone());
    charts.install(&target, artifact(ChartKind::Bar)).unwrap();

    assert!(charts.release(&target).unwrap());
    assert!(!charts.release(&target).unwrap());
    assert!(charts.active(&target).is_none());
    assert_eq!(charts.renderer().destroys(), 1);
}

#[test]
fn test_repeated_generate_keeps_one_live_chart() {
    let mut session = ChartSession::with_palettes(
        Recorder::default(),
        "main",
        Settings::default(),
        PaletteGenerator::seeded(5),
    );
    session.load_dataset(city_population());
    session.set_x_axis("city");
    session.set_y_axis("pop");

    for kind in ChartKind::all() {
        session.set_kind(*kind);
        session.generate().unwrap();
    }

    let renderer = session.charts().renderer();
    assert_eq!(renderer.creates(), ChartKind::all().len());
    assert_eq!(renderer.destroys(), ChartKind::all().len() - 1);
    assert_eq!(session.charts().bound_count(), 1);

    assert!(session.teardown().unwrap());
    assert_eq!(session.charts().renderer().destroys(), ChartKind::all().len());
}
