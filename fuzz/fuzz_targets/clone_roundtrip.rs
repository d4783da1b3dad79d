#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use structclone::{Cbor, CloneError, Cloner, Json};

fuzz_target!(|data: Vec<u8>| {
    let binary = Cloner::new(Cbor);
    let text = Cloner::new(Json);

    // Byte sequences survive both strategies unchanged
    let copy: Vec<u8> = binary.duplicate(&data).unwrap();
    assert_eq!(copy, data);
    let copy: Vec<u8> = text.duplicate(&data).unwrap();
    assert_eq!(copy, data);

    // Lossy UTF-8 text round-trips as well
    let string = String::from_utf8_lossy(&data).into_owned();
    let copy: String = binary.duplicate(&string).unwrap();
    assert_eq!(copy, string);
    let copy: String = text.duplicate(&string).unwrap();
    assert_eq!(copy, string);

    // Maps keyed by window position
    let map: BTreeMap<u32, Vec<u8>> = data
        .chunks(7)
        .enumerate()
        .map(|(i, window)| (i as u32, window.to_vec()))
        .collect();
    let mut destination: BTreeMap<u32, Vec<u8>> = BTreeMap::new();
    binary.clone_into(Some(&map), Some(&mut destination)).unwrap();
    assert_eq!(destination, map);

    // A sequence never decodes as a scalar
    if !data.is_empty() {
        let err = binary.duplicate::<_, u64>(&data).unwrap_err();
        assert!(matches!(err, CloneError::Decode { .. }));
    }

    assert_eq!(binary.pool().stats().leased, 0);
});
