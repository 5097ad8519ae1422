#![no_main]

use libfuzzer_sys::fuzz_target;
use potku_recoil_editor::{EditorOptions, ReplayScript};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(script) = ReplayScript::from_json(text) else {
        return;
    };
    let Ok(state) = script.run(EditorOptions::default()) else {
        return;
    };

    // Kurven-Invarianten nach beliebigen Intent-Folgen
    for sim in state.simulation.element_simulations() {
        for recoil in sim.recoil_elements() {
            let xs = recoil.curve.xs();
            assert!(xs.len() >= 2);
            assert!(xs.windows(2).all(|w| w[0] < w[1]));
        }
    }
});
