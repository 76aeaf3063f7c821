//! Lazy initialization of the domain parameters.
//!
//! Kept in its own test binary so that no other test touches `sm2p256()`
//! before the threads below race for the first access.

use sm2::{Curve, CurveParams, sm2p256};
use std::{
    sync::{Arc, Barrier},
    thread,
};

const THREADS: usize = 16;

#[test]
fn concurrent_first_access_yields_one_instance() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let curve = sm2p256();
                assert!(curve.is_on_curve(curve.gx(), curve.gy()));
                curve as *const CurveParams as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let expected = sm2p256() as *const CurveParams as usize;
    assert!(addresses.iter().all(|&address| address == expected));
}
