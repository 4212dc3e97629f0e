//! End-to-end tests for the draw_cell pipeline against a mock host

use lin_alg::f64::Vec3;

use cellaxes_cmd::{execute_command, CmdError, CommandContext, CommandRegistry};
use cellaxes_color::NamedColors;
use cellaxes_scene::{
    cgo, Label, PlacementProvider, SceneSink, SymmetryProvider, SymmetryRecord,
};

const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, //
];

/// Minimal host: one object with fixed symmetry and placement
struct MockHost {
    object: String,
    symmetry: Option<SymmetryRecord>,
    matrix: [f64; 16],
    streams: Vec<(String, Vec<f64>)>,
    labels: Vec<Label>,
}

impl MockHost {
    fn cubic(object: &str, edge: f64) -> Self {
        MockHost {
            object: object.to_string(),
            symmetry: Some(SymmetryRecord {
                cell_lengths: [edge, edge, edge],
                cell_angles: [90.0, 90.0, 90.0],
                space_group: "P 1".to_string(),
            }),
            matrix: IDENTITY,
            streams: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl SymmetryProvider for MockHost {
    fn symmetry(&self, object: &str) -> Option<SymmetryRecord> {
        (object == self.object).then(|| self.symmetry.clone()).flatten()
    }
}

impl PlacementProvider for MockHost {
    fn object_matrix(&self, object: &str) -> Option<[f64; 16]> {
        (object == self.object).then_some(self.matrix)
    }
}

impl SceneSink for MockHost {
    fn draw_primitives(&mut self, name: &str, stream: &[f64]) {
        self.streams.push((name.to_string(), stream.to_vec()));
    }

    fn place_label(&mut self, label: Label) {
        self.labels.push(label);
    }
}

fn run(host: &mut MockHost, input: &str) -> Result<(), CmdError> {
    let registry = CommandRegistry::with_builtins();
    let colors = NamedColors::new();
    let mut ctx = CommandContext::new(host, &colors).with_quiet(true);
    execute_command(&registry, &mut ctx, input)
}

#[test]
fn test_cubic_cell_end_to_end() {
    let mut host = MockHost::cubic("xtal", 10.0);
    run(&mut host, "draw_cell xtal").unwrap();

    // Three axis objects, named after the target
    let names: Vec<&str> = host.streams.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["xtal_a", "xtal_b", "xtal_c"]);

    // Each stream is one cylinder (14 floats) plus one cone (17 floats)
    for (_, stream) in &host.streams {
        assert_eq!(stream.len(), 31);
        assert_eq!(stream[0], cgo::CYLINDER_TAG);
        assert_eq!(stream[14], cgo::CONE_TAG);
    }

    // a axis: shaft (0,0,0) -> (9,0,0), cone -> tip (10,0,0)
    let a = &host.streams[0].1;
    assert!((a[1]).abs() < 1e-9 && (a[2]).abs() < 1e-9 && (a[3]).abs() < 1e-9);
    assert!((a[4] - 9.0).abs() < 1e-9);
    assert!((a[7] - 0.3).abs() < 1e-9); // shaft radius = 0.03 * 10
    assert!((a[18] - 10.0).abs() < 1e-9); // cone tip x
    assert!((a[21] - 0.5).abs() < 1e-9); // head base radius = 0.5 * 0.1 * 10

    // Labels a, b, c at the axis tips
    let texts: Vec<&str> = host.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
    assert!((host.labels[2].position - Vec3::new(0.0, 0.0, 10.0)).magnitude() < 1e-9);
}

#[test]
fn test_origin_override_shifts_bundle() {
    let mut host = MockHost::cubic("xtal", 10.0);
    run(&mut host, "draw_cell xtal, origin=[5, 5, 5]").unwrap();

    let a = &host.streams[0].1;
    // Shaft start moved to the override origin
    assert!((a[1] - 5.0).abs() < 1e-9);
    assert!((a[2] - 5.0).abs() < 1e-9);
    assert!((a[3] - 5.0).abs() < 1e-9);
    // Tip shifted by the same vector
    assert!((a[18] - 15.0).abs() < 1e-9);
}

#[test]
fn test_malformed_origin_rejected_before_drawing() {
    let mut host = MockHost::cubic("xtal", 10.0);
    let err = run(&mut host, "draw_cell xtal, origin=[5, 5]").unwrap_err();
    assert!(matches!(err, CmdError::InvalidArgument { .. }));
    assert!(host.streams.is_empty());
    assert!(host.labels.is_empty());
}

#[test]
fn test_invalid_lattice_is_atomic() {
    let mut host = MockHost::cubic("xtal", 10.0);
    host.symmetry = Some(SymmetryRecord {
        cell_lengths: [10.0, 10.0, 10.0],
        cell_angles: [90.0, 90.0, 0.0],
        space_group: "P 1".to_string(),
    });

    let err = run(&mut host, "draw_cell xtal").unwrap_err();
    assert!(matches!(err, CmdError::Cell(_)));
    // Nothing was emitted
    assert!(host.streams.is_empty());
    assert!(host.labels.is_empty());
}

#[test]
fn test_missing_symmetry_reported() {
    let mut host = MockHost::cubic("xtal", 10.0);
    host.symmetry = None;

    let err = run(&mut host, "draw_cell xtal").unwrap_err();
    assert!(matches!(err, CmdError::NoSymmetry(name) if name == "xtal"));
}

#[test]
fn test_unknown_object_reported() {
    let mut host = MockHost::cubic("xtal", 10.0);
    let err = run(&mut host, "draw_cell other").unwrap_err();
    // Symmetry lookup fails first for an unknown object
    assert!(matches!(err, CmdError::NoSymmetry(_)));
}

#[test]
fn test_placed_object_tracks_matrix() {
    let mut host = MockHost::cubic("xtal", 10.0);
    // Post-translation of (1, 2, 3)
    host.matrix = [
        1.0, 0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 2.0, //
        0.0, 0.0, 1.0, 3.0, //
        0.0, 0.0, 0.0, 1.0, //
    ];
    run(&mut host, "draw_cell xtal").unwrap();

    let a = &host.streams[0].1;
    assert!((a[1] - 1.0).abs() < 1e-9);
    assert!((a[2] - 2.0).abs() < 1e-9);
    assert!((a[3] - 3.0).abs() < 1e-9);
    assert!((a[18] - 11.0).abs() < 1e-9);
}

#[test]
fn test_cgo_arrow_two_color_legacy() {
    let mut host = MockHost::cubic("xtal", 10.0);
    run(
        &mut host,
        "cgo_arrow [0,0,0], [10,0,0], radius=0.5, color=blue red, name=my_arrow",
    )
    .unwrap();

    assert_eq!(host.streams.len(), 1);
    let (name, stream) = &host.streams[0];
    assert_eq!(name, "my_arrow");
    // Absolute radius honored via the proportional emitter
    assert!((stream[7] - 0.5).abs() < 1e-9);
    // Shaft fades blue -> red
    assert_eq!(stream[8..11], [0.0, 0.0, 1.0]);
    assert_eq!(stream[11..14], [1.0, 0.0, 0.0]);
}

#[test]
fn test_zero_length_arrow_rejected() {
    let mut host = MockHost::cubic("xtal", 10.0);
    let err = run(&mut host, "cgo_arrow [1,1,1], [1,1,1]").unwrap_err();
    assert!(matches!(err, CmdError::Arrow(_)));
    assert!(host.streams.is_empty());
}
