//! Snapshot tests using the insta crate.
//!
//! Pins the exact JSON handed to the rendering collaborator. To update after
//! intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestDataBuilder;
use sheetchart::chart::{ChartArtifact, ChartSpecBuilder, PaletteGenerator, PolicyTable};
use sheetchart::data::build_series;
use sheetchart::types::{AxisSelection, ChartKind, RawValue};

fn build(kind: ChartKind) -> ChartArtifact {
    let dataset = TestDataBuilder::new(&["city", "pop"])
        .row(vec!["NY".into(), 10.0.into()])
        .row(vec!["LA".into(), 8.0.into()])
        .row(vec!["SF".into(), RawValue::Empty])
        .build();
    let series = build_series(&dataset, &AxisSelection::new("city", "pop")).unwrap();

    let mut builder =
        ChartSpecBuilder::with_generator(PolicyTable::default(), PaletteGenerator::seeded(0));
    builder.build(&series, kind, ("city", "pop")).unwrap()
}

// ============================================================================
// Chart Descriptor Snapshots
// ============================================================================

#[test]
fn snapshot_bar_descriptor() {
    let json = build(ChartKind::Bar).to_json_pretty().unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "kind": "bar",
      "title": "pop by city",
      "labels": [
        "LA",
        "NY",
        "SF"
      ],
      "datasets": [
        {
          "label": "pop",
          "data": [
            8.0,
            10.0,
            0.0
          ],
          "backgroundColor": "rgba(54, 162, 235, 0.6)",
          "borderColor": "rgba(54, 162, 235, 1)",
          "borderWidth": 1,
          "fill": true
        }
      ],
      "options": {
        "responsive": true,
        "scales": {
          "y": {
            "beginAtZero": true
          }
        },
        "plugins": {
          "title": {
            "display": true,
            "text": "pop by city"
          }
        }
      }
    }
    "#);
}

#[test]
fn snapshot_pie_descriptor() {
    let json = build(ChartKind::Pie).to_json_pretty().unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "kind": "pie",
      "title": "pop by city",
      "labels": [
        "LA",
        "NY",
        "SF"
      ],
      "datasets": [
        {
          "label": "pop",
          "data": [
            8.0,
            10.0,
            0.0
          ],
          "backgroundColor": [
            "rgba(54, 162, 235, 0.6)",
            "rgba(255, 99, 132, 0.6)",
            "rgba(255, 206, 86, 0.6)"
          ],
          "borderColor": [
            "rgba(54, 162, 235, 1)",
            "rgba(255, 99, 132, 1)",
            "rgba(255, 206, 86, 1)"
          ],
          "borderWidth": 1
        }
      ],
      "options": {
        "responsive": true,
        "plugins": {
          "title": {
            "display": true,
            "text": "pop by city"
          },
          "legend": {
            "position": "top"
          }
        }
      }
    }
    "#);
}

#[test]
fn test_polar_area_matches_pie_apart_from_colors() {
    // Colors are random here, so only the structure is compared
    let polar = build(ChartKind::PolarArea);
    let pie = build(ChartKind::Pie);

    assert_eq!(polar.labels, pie.labels);
    assert_eq!(polar.options, pie.options);

    let (polar_ds, pie_ds) = (polar.primary_dataset().unwrap(), pie.primary_dataset().unwrap());
    assert_eq!(polar_ds.data, pie_ds.data);
    assert_eq!(polar_ds.fill, None);
    assert_eq!(polar_ds.background_color.len(), 3);
    assert_eq!(polar_ds.border_color.len(), 3);
    assert!(!polar_ds.background_color.is_scalar());
}
