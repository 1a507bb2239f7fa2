//! Feeds arbitrary bytes to the registry parser; registries that validate
//! must also generate without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;

use canonic_engine::{rng_for, CanonEngine};
use canonic_spec::{DiatonicCatalog, Registry, StateOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(registry) = Registry::from_json(text) else {
        return;
    };
    let Ok(engine) = CanonEngine::new(registry, DiatonicCatalog::major()) else {
        return;
    };

    let Ok(state) = engine.generate_state(&StateOptions::default(), &mut rng_for(0, "state", ""))
    else {
        return;
    };
    let scale_length = 1 + data.len() % 32;
    let params = state.melody_params(scale_length);
    if let Ok(melody) = engine.melody(&params, &mut rng_for(0, "melody", "")) {
        assert!(melody.iter().all(|step| step.scale_index < scale_length));
    }
});
