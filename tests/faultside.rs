use faultkd::{Error, FaultCollector, FaultSide, Point, FAULT_BOUNDARY};

/// A fault surface tilted along y: x = 0.1 * y, for y, z in [0, 10].
fn tilted_fault() -> FaultSide {
    let mut collector = FaultCollector::new(0).unwrap();
    for y in 0..=10 {
        for z in 0..=10 {
            collector.add_point(Point::new(0.1 * y as f64, y as f64, z as f64));
        }
    }
    collector.finish(4).expect("Valid fault")
}

/// A tetrahedron whose centroid along x is `cx` and whose bounding box spans
/// `[cy - h, cy + h]` and `[cz - h, cz + h]`.
fn tetrahedron(cx: f64, cy: f64, cz: f64, h: f64) -> [[f64; 3]; 4] {
    [
        [cx - h, cy - h, cz - h],
        [cx + h, cy - h, cz - h],
        [cx, cy + h, cz - h],
        [cx, cy, cz + h],
    ]
}

#[test]
fn test_elements_beyond_fault_range() {
    let fault = tilted_fault();
    assert_eq!(fault.extent().min, 0.0);
    assert_eq!(fault.extent().max, 1.0);

    assert!(fault.classify(&tetrahedron(-2.0, 5.0, 5.0, 0.5)), "Element below the fault range is left");
    assert!(!fault.classify(&tetrahedron(3.0, 5.0, 5.0, 0.5)), "Element above the fault range is right");
}

#[test]
fn test_elements_within_fault_range() {
    let fault = tilted_fault();
    // At y = 5 the fault sits at x = 0.5.
    assert!(fault.classify(&tetrahedron(0.25, 5.0, 5.0, 0.5)));
    assert!(!fault.classify(&tetrahedron(0.75, 5.0, 5.0, 0.5)));
    // At y = 9 the fault sits at x = 0.9.
    assert!(fault.classify(&tetrahedron(0.75, 9.0, 5.0, 0.4)));
}

#[test]
fn test_element_outside_lateral_footprint() {
    let fault = tilted_fault();
    // No fault point lies in y in [20, 21]; the element counts as right.
    assert!(!fault.classify(&tetrahedron(0.5, 20.5, 5.0, 0.5)));
}

#[test]
fn test_classify_all_matches_sequential() {
    let fault = tilted_fault();
    let mut elements = Vec::new();
    for i in 0..40 {
        let cx = -0.5 + i as f64 * 0.05;
        let cy = (i % 11) as f64;
        elements.push(tetrahedron(cx, cy, 3.0, 0.45));
    }

    let sequential: Vec<bool> = elements.iter().map(|e| fault.classify(e)).collect();
    assert_eq!(fault.classify_all(&elements), sequential);
}

fn two_tetrahedra() -> (Vec<[f64; 3]>, Vec<[usize; 4]>, Vec<[i32; 4]>) {
    let vertices = vec![
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
    ];
    let elements = vec![[0, 1, 2, 3], [0, 1, 2, 4]];
    // Face 0 of both elements is the shared face on the plane x = 0.
    let boundaries = vec![[FAULT_BOUNDARY, 0, 0, 0], [FAULT_BOUNDARY, 0, 0, 0]];
    (vertices, elements, boundaries)
}

#[test]
fn test_collect_from_mesh() {
    let (vertices, elements, boundaries) = two_tetrahedra();
    let mut collector = FaultCollector::new(0).unwrap();
    collector.add_mesh(&vertices, &elements, &boundaries).unwrap();

    // The shared face contributes its three vertices once.
    assert_eq!(collector.len(), 3);
    assert_eq!(collector.lateral_axis(), 1);
    assert_eq!(collector.extent().min, 0.0);
    assert_eq!(collector.extent().max, 0.0);
    assert_eq!(collector.lateral_extent().min, 0.0);
    assert_eq!(collector.lateral_extent().max, 1.0);
    assert_eq!(collector.border(), [0.0, 0.0]);

    let fault = collector.finish(4).unwrap();
    assert_eq!(fault.tree().len(), 3);
    assert_eq!(fault.classify_mesh(&vertices, &elements).unwrap(), vec![true, false]);
}

#[test]
fn test_mesh_errors() {
    let (vertices, _, boundaries) = two_tetrahedra();
    let mut collector = FaultCollector::new(0).unwrap();

    assert_eq!(
        collector.add_mesh(&vertices, &[[0, 1, 2, 3]], &boundaries),
        Err(Error::BoundaryMismatch { elements: 1, boundaries: 2 })
    );

    // Face 1 uses local vertices 0, 1 and 3.
    let bad = [[0, 1, 2, 9]];
    assert_eq!(
        collector.add_mesh(&vertices, &bad, &[[0, FAULT_BOUNDARY, 0, 0]]),
        Err(Error::VertexOutOfRange { element: 0, vertex: 9, count: 5 })
    );

    let fault = FaultCollector::new(0).unwrap().finish(4).unwrap();
    assert_eq!(
        fault.classify_mesh(&vertices, &bad),
        Err(Error::VertexOutOfRange { element: 0, vertex: 9, count: 5 })
    );
}

#[test]
fn test_invalid_direction() {
    assert_eq!(FaultCollector::new(3).unwrap_err(), Error::InvalidAxis(3));
}

#[test]
fn test_vertical_direction() {
    // A horizontal fault at z = 2 over x, y in [0, 4].
    let mut collector = FaultCollector::new(2).unwrap();
    assert_eq!(collector.lateral_axis(), 0);
    for x in 0..=4 {
        for y in 0..=4 {
            collector.add_point(Point::new(x as f64, y as f64, 2.0));
        }
    }
    let fault = collector.finish(2).unwrap();
    assert!(fault.tree().leaves().all(|leaf| leaf.count() <= 2));
    for k in 0..fault.tree().leaves().count() * 2 {
        if let Some(node) = fault.tree().node(k) {
            assert_ne!(node.split_axis(), Some(2));
        }
    }

    let below = [[1.0, 1.0, 0.0], [2.0, 1.0, 0.0], [1.0, 2.0, 0.0], [1.0, 1.0, 1.0]];
    let above = [[1.0, 1.0, 3.0], [2.0, 1.0, 3.0], [1.0, 2.0, 3.0], [1.0, 1.0, 4.0]];
    assert!(fault.classify(&below));
    assert!(!fault.classify(&above));
}
