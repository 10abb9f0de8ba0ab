use cuboidviz_core::cuboid::{input_roles, Corner, Cuboid};
use cuboidviz_core::geom::Vec2;
use cuboidviz_core::model::FaceCode;
use cuboidviz_core::Error;

// Front face (100,100)-(200,200), rear face shifted by (30, -20).
fn known_corner(corner: Corner) -> Vec2 {
    match corner {
        Corner::FrontTopLeft => Vec2::new(100.0, 100.0),
        Corner::FrontTopRight => Vec2::new(200.0, 100.0),
        Corner::FrontBottomLeft => Vec2::new(100.0, 200.0),
        Corner::FrontBottomRight => Vec2::new(200.0, 200.0),
        Corner::RearTopLeft => Vec2::new(130.0, 80.0),
        Corner::RearTopRight => Vec2::new(230.0, 80.0),
        Corner::RearBottomLeft => Vec2::new(130.0, 180.0),
        Corner::RearBottomRight => Vec2::new(230.0, 180.0),
    }
}

const ALL_CORNERS: [Corner; 8] = [
    Corner::FrontTopLeft,
    Corner::FrontTopRight,
    Corner::FrontBottomLeft,
    Corner::FrontBottomRight,
    Corner::RearTopLeft,
    Corner::RearTopRight,
    Corner::RearBottomLeft,
    Corner::RearBottomRight,
];

#[test]
fn every_code_recovers_the_hidden_corners() {
    for code in FaceCode::ALL {
        let roles = input_roles(code);
        let cuboid = Cuboid::reconstruct(code, roles.map(known_corner));
        for corner in ALL_CORNERS {
            assert_eq!(known_corner(corner), cuboid.corner(corner), "code {code:?}, {corner:?}");
        }
    }
}

#[test]
fn code_one_takes_front_left_face_and_rear_bottom_right() {
    assert_eq!(
        [
            Corner::FrontTopLeft,
            Corner::FrontBottomLeft,
            Corner::FrontBottomRight,
            Corner::RearBottomRight
        ],
        input_roles(FaceCode::One)
    );
}

#[test]
fn faces_use_fixed_winding() {
    let cuboid = Cuboid::from_flat(
        FaceCode::One,
        &[100.0, 100.0, 100.0, 200.0, 200.0, 200.0, 230.0, 180.0],
    )
    .unwrap();
    assert_eq!(
        [
            Vec2::new(130.0, 80.0),
            Vec2::new(230.0, 80.0),
            Vec2::new(230.0, 180.0),
            Vec2::new(130.0, 180.0)
        ],
        cuboid.rear()
    );
    assert_eq!(
        [
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 100.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(100.0, 200.0)
        ],
        cuboid.front()
    );
    let [first, second] = cuboid.front_diagonals();
    assert_eq!([Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0)], first);
    assert_eq!([Vec2::new(200.0, 100.0), Vec2::new(100.0, 200.0)], second);
}

#[test]
fn edges_stay_parallel() {
    let cuboid = Cuboid::from_flat(
        FaceCode::Three,
        &[13.0, 7.5, 11.0, 52.25, 40.0, 61.0, 97.5, 58.0],
    )
    .unwrap();
    let depth = cuboid.corner(Corner::RearTopLeft) - cuboid.corner(Corner::FrontTopLeft);
    for (front, rear) in [
        (Corner::FrontTopRight, Corner::RearTopRight),
        (Corner::FrontBottomLeft, Corner::RearBottomLeft),
        (Corner::FrontBottomRight, Corner::RearBottomRight),
    ] {
        let edge = cuboid.corner(rear) - cuboid.corner(front);
        assert!((edge.x - depth.x).abs() < 1e-9);
        assert!((edge.y - depth.y).abs() < 1e-9);
    }
}

#[test]
fn rejects_wrong_coordinate_count() {
    let err = Cuboid::from_flat(FaceCode::Two, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap_err();
    assert!(matches!(err, Error::PointCount(6)));
}

#[test]
fn reconstruction_is_bit_identical_across_calls() {
    let flat = [0.1, 0.7, 3.3, 9.1, 12.9, 9.4, 15.55, 4.2];
    for code in FaceCode::ALL {
        let a = Cuboid::from_flat(code, &flat).unwrap();
        let b = Cuboid::from_flat(code, &flat).unwrap();
        for corner in ALL_CORNERS {
            assert_eq!(a.corner(corner).x.to_bits(), b.corner(corner).x.to_bits());
            assert_eq!(a.corner(corner).y.to_bits(), b.corner(corner).y.to_bits());
        }
    }
}
