use dynarray::{DynArray, DynArrayError};

fn sample() -> DynArray<i32> {
    let mut arr = DynArray::filled(5, 0i32);
    for i in 0..5 {
        arr.set(i, (i as i32 + 1) * 10).unwrap();
    }
    arr // [10, 20, 30, 40, 50]
}

#[test]
fn test_slice_inner_range() {
    let arr = sample();

    let s = arr.slice(1, 4).unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.capacity(), 3);
    assert_eq!(*s.get(0).unwrap(), 20);
    assert_eq!(*s.get(1).unwrap(), 30);
    assert_eq!(*s.get(2).unwrap(), 40);
}

#[test]
fn test_slice_elements_match_source_offsets() {
    let arr = sample();
    let s = arr.slice(2, 5).unwrap();

    for i in 0..s.len() {
        assert_eq!(s.get(i).unwrap(), arr.get(2 + i).unwrap());
    }
}

#[test]
fn test_slice_full_range_equals_source() {
    let arr = sample();

    let s = arr.slice(0, arr.len()).unwrap();

    assert_eq!(s, arr);
}

#[test]
fn test_slice_is_independently_owned() {
    let mut arr = sample();
    let s = arr.slice(0, 3).unwrap();

    arr.set(0, -1).unwrap();

    assert_eq!(*s.get(0).unwrap(), 10);
}

#[test]
fn test_slice_empty_range() {
    let arr = sample();

    let s = arr.slice(2, 2).unwrap();

    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
}

#[test]
fn test_slice_from_begin_to_end() {
    let arr = sample();

    let s = arr.slice_from(3).unwrap();

    assert_eq!(s.len(), 2);
    assert_eq!(*s.get(0).unwrap(), 40);
    assert_eq!(*s.get(1).unwrap(), 50);
}

#[test]
fn test_slice_from_zero_copies_everything() {
    let arr = sample();

    let s = arr.slice_from(0).unwrap();

    assert_eq!(s, arr);
}

#[test]
fn test_slice_from_length_is_empty() {
    let arr = sample();

    let s = arr.slice_from(arr.len()).unwrap();

    assert!(s.is_empty());
}

#[test]
fn test_slice_begin_out_of_range() {
    let arr = sample();

    assert_eq!(
        arr.slice(6, 6).unwrap_err(),
        DynArrayError::OutOfRange {
            index: 6,
            length: 5
        }
    );
}

#[test]
fn test_slice_end_out_of_range() {
    let arr = sample();

    assert_eq!(
        arr.slice(0, 6).unwrap_err(),
        DynArrayError::OutOfRange {
            index: 6,
            length: 5
        }
    );
}

#[test]
fn test_slice_from_out_of_range() {
    let arr = sample();

    assert_eq!(
        arr.slice_from(7).unwrap_err(),
        DynArrayError::OutOfRange {
            index: 7,
            length: 5
        }
    );
}

#[test]
fn test_slice_inverted_range_is_rejected() {
    let arr = sample();

    // begin > end is reported, not computed as an underflowed length.
    assert_eq!(
        arr.slice(3, 1).unwrap_err(),
        DynArrayError::InvalidRange { begin: 3, end: 1 }
    );
}

#[test]
fn test_slice_of_empty_array() {
    let arr: DynArray<i32> = DynArray::new();

    let s = arr.slice(0, 0).unwrap();
    assert!(s.is_empty());

    assert!(arr.slice(1, 1).is_err());
}

#[test]
fn test_slice_ignores_spare_capacity() {
    let mut arr = sample();
    arr.resize(3);

    assert!(arr.slice(0, 4).is_err());
    let s = arr.slice_from(0).unwrap();
    assert_eq!(s.len(), 3);
}
