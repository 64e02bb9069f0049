#![no_main]
use dbits::{DynamicBitVector, NaiveBitVector};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u16, Vec<(u32, bool)>)| {
    let (raw_cap, ops) = data;
    let capacity = 1 + raw_cap as usize % 8192;
    let mut bv = match DynamicBitVector::new(capacity) {
        Ok(bv) => bv,
        Err(_) => return,
    };
    let mut oracle = NaiveBitVector::new();

    for (raw_pos, bit) in ops {
        if bv.is_full() {
            assert!(bv.insert(0, bit).is_err());
            break;
        }
        let pos = raw_pos as usize % (oracle.len() + 1);
        bv.insert(pos, bit).unwrap();
        oracle.insert(pos, bit);
    }

    assert_eq!(bv.size(), oracle.len());
    assert_eq!(bv.rank(), oracle.rank());
    for i in 0..oracle.len() {
        assert_eq!(bv.access(i).unwrap(), oracle.get(i), "bit {i} diverged");
    }
    assert_eq!(bv.recount(), (bv.size(), bv.rank()));
});
