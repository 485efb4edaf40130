mod common;

use cvdsim::vector::*;

#[test]
fn test_vector_indexing_nonmut() {
    let v0 = Vector {
        x: 0.0,
        y: 1.0,
        z: 2.0,
    };
    assert!(v0.x == 0.0);
    assert!(v0.y == 1.0);
    assert!(v0.z == 2.0);

    assert!(v0[0] == 0.0);
    assert!(v0[1] == 1.0);
    assert!(v0[2] == 2.0);
}

#[test]
#[should_panic]
fn test_vector_indexing_nonmut_bounds() {
    let v0 = Vector {
        x: 0.0,
        y: 1.0,
        z: 2.0,
    };
    assert!(v0[3] == 3.0);
}

#[test]
fn test_vector_indexing_mut() {
    let mut v0 = Vector {
        x: 0.0,
        y: 1.0,
        z: 2.0,
    };

    v0[0] = 5.0;
    v0[1] = 6.0;
    v0[2] = 7.0;

    assert!(v0.x == 5.0);
    assert!(v0.y == 6.0);
    assert!(v0.z == 7.0);
}

#[test]
#[should_panic]
fn test_vector_indexing_mut_bounds() {
    let mut v0 = Vector {
        x: 0.0,
        y: 1.0,
        z: 2.0,
    };
    v0[3] = 3.0;
}

#[test]
fn test_vector_arithmetic() {
    let v0 = Vector::new(1.0, 2.0, 3.0);
    let v1 = Vector::new(4.0, 5.0, 6.0);

    assert_eq!(v0.add(&v1), Vector::new(5.0, 7.0, 9.0));
    assert_eq!(v1.subtract(&v0), Vector::new(3.0, 3.0, 3.0));
    assert_eq!(v0.scale(2.0), Vector::new(2.0, 4.0, 6.0));
    assert_eq!(v0.multiply(&v1), Vector::new(4.0, 10.0, 18.0));
    assert_eq!(v1.divide(&v0), Vector::new(4.0, 2.5, 2.0));
    assert_delta!(v0.dot_product(&v1), 32.0, common::DEFAULT_DELTA);
}

#[test]
fn test_vector_from_vec() {
    let v = Vector::from_vec(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);

    assert!(Vector::from_vec(&[1.0, 2.0]).is_err());
    assert!(Vector::from_vec(&[1.0, 2.0, 3.0, 4.0]).is_err());
}

#[test]
fn test_vector_display() {
    let v = Vector::new(1.0, 2.5, 3.0);
    assert_eq!(format!("{}", v), "(1,2.5,3)");
}
